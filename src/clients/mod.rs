use anyhow::Result;
use async_trait::async_trait;

pub mod gemini;
pub mod models;
pub mod supabase;

/// The external text-generation service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String>;

    /// Best-effort plain text of a binary document.
    async fn extract_text(&self, data: &[u8], mime_type: &str) -> Result<String>;
}
