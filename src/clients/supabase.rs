use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use uuid::Uuid;

use crate::clients::models::common::{GenerationSession, PlanRow};
use crate::config::SupabaseConfig;
use crate::services::plan_store::PlanStore;

const WORKOUTS_TABLE: &str = "/rest/v1/workouts";
const SESSIONS_TABLE: &str = "/rest/v1/generation_sessions";

/// PostgREST-backed store for the hosted database.
#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    service_key: String,
}

#[derive(Serialize)]
struct SessionCompletion {
    duration_ms: i64,
    success: bool,
}

impl SupabaseClient {
    pub fn new(config: &SupabaseConfig) -> Result<Self> {
        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            base_url: config.url.trim_end_matches('/').to_string(),
            service_key: config.service_key.clone(),
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", "return=minimal")
    }

    async fn check(response: Response, table: &str) -> Result<()> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            return Err(anyhow::anyhow!(
                "Supabase request to {} failed with status {}: {}",
                table,
                status,
                body
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl PlanStore for SupabaseClient {
    async fn create_session(&self, session: &GenerationSession) -> Result<()> {
        let url = format!("{}{}", self.base_url, SESSIONS_TABLE);
        let response = self
            .authorized(self.http.post(url))
            .json(session)
            .send()
            .await?;
        Self::check(response, SESSIONS_TABLE).await
    }

    async fn complete_session(&self, id: Uuid, duration_ms: i64, success: bool) -> Result<()> {
        let url = format!("{}{}", self.base_url, SESSIONS_TABLE);
        let id_filter = format!("eq.{}", id);
        let response = self
            .authorized(self.http.patch(url))
            .query(&[("id", id_filter.as_str())])
            .json(&SessionCompletion {
                duration_ms,
                success,
            })
            .send()
            .await?;
        Self::check(response, SESSIONS_TABLE).await
    }

    async fn save_plan(&self, rows: &[PlanRow]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let url = format!("{}{}", self.base_url, WORKOUTS_TABLE);
        tracing::debug!(row_count = rows.len(), "supabase.save_plan.request");

        let response = self
            .authorized(self.http.post(url))
            .json(rows)
            .send()
            .await?;
        Self::check(response, WORKOUTS_TABLE).await
    }
}
