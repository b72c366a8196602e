use std::env;

const DEFAULT_PORT: &str = "8080";
const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_EXTRACTION_MODEL: &str = "gemini-1.5-pro";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: String,
    pub gemini_api_key: Option<String>,
    pub gemini_api_url: String,
    pub gemini_model: String,
    pub gemini_extraction_model: String,
    pub supabase: Option<SupabaseConfig>,
}

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub service_key: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = non_empty("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
        port.parse::<u16>()
            .map_err(|e| anyhow::anyhow!("Invalid PORT '{}': {}", port, e))?;

        let supabase = match (non_empty("SUPABASE_URL"), non_empty("SUPABASE_SERVICE_KEY")) {
            (Some(url), Some(service_key)) => Some(SupabaseConfig { url, service_key }),
            (None, None) => None,
            _ => {
                return Err(anyhow::anyhow!(
                    "SUPABASE_URL and SUPABASE_SERVICE_KEY must be set together"
                ));
            }
        };

        Ok(Self {
            port,
            gemini_api_key: non_empty("GEMINI_API_KEY"),
            gemini_api_url: non_empty("GEMINI_API_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
            gemini_model: non_empty("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_extraction_model: non_empty("GEMINI_EXTRACTION_MODEL")
                .unwrap_or_else(|| DEFAULT_EXTRACTION_MODEL.to_string()),
            supabase,
        })
    }
}
