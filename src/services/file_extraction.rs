use std::sync::Arc;

use tracing::info;

use crate::clients::TextGenerator;
use crate::error::GenerationError;

pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

const LOG_PREVIEW_CHARS: usize = 100;

#[derive(Clone)]
pub struct FileExtractionService {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl FileExtractionService {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }

    pub async fn extract_text(
        &self,
        file_name: &str,
        data: &[u8],
        mime_type: &str,
    ) -> Result<String, GenerationError> {
        if data.is_empty() {
            return Err(GenerationError::InvalidRequest("No file uploaded".to_string()));
        }

        let generator = self.generator.as_ref().ok_or_else(|| {
            GenerationError::Configuration("Gemini API key not configured".to_string())
        })?;

        info!(%file_name, %mime_type, size = data.len(), "file.processing");

        let text = generator
            .extract_text(data, mime_type)
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let preview: String = text.chars().take(LOG_PREVIEW_CHARS).collect();
        info!(%file_name, preview = %preview, "file.text_extracted");

        Ok(text)
    }
}
