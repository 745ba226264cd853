pub mod database;
pub mod repositories;
pub mod sanitizer;
pub mod security;
pub mod storage;
pub mod time;
pub mod util;
