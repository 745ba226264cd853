pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewOwner, Owner};
pub use repository::OwnerRepository;
pub use value_objects::{Email, OwnerId, OwnerName, PasswordHash, Role};
