pub mod articles;
pub mod categories;
pub mod owners;
pub mod stats;
