mod list;
mod profile;
mod service;

pub use service::OwnerQueryService;
