// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Deterministic, total transformation of free text into a URL segment.
    /// May return an empty string.
    fn slugify(&self, input: &str) -> String;
}
