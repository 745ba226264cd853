// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod categories;
pub mod forms;
pub mod news;
pub mod stats;
pub mod uploads;
pub mod users;
