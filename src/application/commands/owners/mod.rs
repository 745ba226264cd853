// src/application/commands/owners/mod.rs
mod change_password;
mod login;
mod password;
mod register;
mod service;

pub use change_password::ChangePasswordCommand;
pub use login::LoginCommand;
pub use password::MIN_PASSWORD_LENGTH;
pub use register::RegisterOwnerCommand;
pub use service::OwnerCommandService;
