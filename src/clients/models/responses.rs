use serde::{Deserialize, Serialize};

// Gemini generateContent response envelope
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

/// A reply part. Only `text` is read; `thoughtSignature`, `functionCall`
/// and other part kinds decode with `text: None`.
#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub message: String,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();

        if text.is_empty() { None } else { Some(text) }
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates.first()?.finish_reason.as_deref()
    }
}

// Error envelope of POST /generate-weekly-workouts
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationErrorBody {
    pub error: String,
    pub details: String,
    pub timestamp: String,
}

// Error envelope of POST /process-file
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractionErrorBody {
    pub error: String,
    pub details: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractedText {
    pub text: String,
}
