// src/application/ports/sanitizer.rs
pub trait HtmlSanitizer: Send + Sync {
    /// Removes every element and attribute outside the allow-list. Idempotent.
    fn sanitize(&self, html: &str) -> String;
}
