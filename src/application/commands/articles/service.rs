// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::uploads::UploadService,
        ports::{sanitizer::HtmlSanitizer, time::Clock},
    },
    domain::article::{ArticleWriteRepository, services::ArticleSlugService},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) sanitizer: Arc<dyn HtmlSanitizer>,
    pub(super) uploads: Arc<UploadService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        slug_service: Arc<ArticleSlugService>,
        sanitizer: Arc<dyn HtmlSanitizer>,
        uploads: Arc<UploadService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            slug_service,
            sanitizer,
            uploads,
            clock,
        }
    }
}
