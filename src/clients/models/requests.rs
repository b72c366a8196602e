use serde::{Deserialize, Serialize};

use crate::clients::models::common::{ExerciseRef, FitnessLevel};

pub const MAX_DAYS: u32 = 14;

/// Body of `POST /generate-weekly-workouts`.
///
/// Aliases accept the field names the web client has always sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default, alias = "prompt")]
    pub prompt_text: String,
    #[serde(default, alias = "weatherPrompt")]
    pub weather_text: String,
    #[serde(default)]
    pub selected_exercises: Vec<ExerciseRef>,
    pub fitness_level: FitnessLevel,
    #[serde(default, alias = "prescribedExercises")]
    pub prescribed_exercises_text: String,
    #[serde(default, alias = "injuries")]
    pub injuries_text: String,
    pub number_of_days: u32,
}

impl GenerationRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.number_of_days == 0 || self.number_of_days > MAX_DAYS {
            return Err(format!(
                "numberOfDays must be between 1 and {}, got {}",
                MAX_DAYS, self.number_of_days
            ));
        }
        Ok(())
    }
}

// Gemini generateContent request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 8192,
        }
    }
}
