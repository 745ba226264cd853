pub mod articles;
pub mod categories;
pub mod owners;
pub mod provision;
pub mod uploads;
