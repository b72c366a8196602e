pub mod ai_parser;
pub mod ai_prompt;
pub mod file_extraction;
pub mod json_repair;
pub mod plan_store;
pub mod presets;
pub mod workout_generation;
