// tests/support/mocks/mod.rs
//! Test doubles for every port and repository.
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod newsroom;
pub mod owner_repo;
pub mod security;
pub mod storage;
pub mod time;

pub use newsroom::InMemoryNewsroom;
pub use security::{DummyTokenManager, PlainPasswordHasher, TEST_OWNER_ID, TEST_TOKEN};
pub use storage::RecordingStorage;
pub use time::{FixedClock, fixed_now};
