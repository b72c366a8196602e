use std::sync::Arc;

use crate::api::{AppState, build_router};
use crate::clients::TextGenerator;
use crate::clients::gemini::GeminiClient;
use crate::clients::supabase::SupabaseClient;
use crate::config::Config;
use crate::services::file_extraction::FileExtractionService;
use crate::services::plan_store::{InMemoryPlanStore, PlanStore};
use crate::services::workout_generation::WorkoutGenerationService;

mod api;
mod clients;
mod config;
mod error;
mod services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let generator = GeminiClient::from_config(&config)?
        .map(|client| Arc::new(client) as Arc<dyn TextGenerator>);
    if generator.is_none() {
        tracing::warn!("gemini.api_key_missing");
    }

    let store: Arc<dyn PlanStore> = match &config.supabase {
        Some(supabase) => Arc::new(SupabaseClient::new(supabase)?),
        None => {
            tracing::info!("store.in_memory");
            Arc::new(InMemoryPlanStore::default())
        }
    };

    let state = AppState {
        workout_generation_service: WorkoutGenerationService::new(generator.clone(), store),
        file_extraction_service: FileExtractionService::new(generator),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = %config.port, "server.listening");
    axum::serve(listener, app).await?;
    Ok(())
}
