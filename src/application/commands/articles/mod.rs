// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod input;
mod service;
mod update;

pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use input::ArticleInput;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
