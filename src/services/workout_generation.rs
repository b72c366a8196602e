use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::clients::TextGenerator;
use crate::clients::models::common::{GenerationSession, PlanRow, WeeklyPlan};
use crate::clients::models::requests::GenerationRequest;
use crate::error::GenerationError;
use crate::services::plan_store::PlanStore;
use crate::services::{ai_parser, ai_prompt};

/// Caller identity used when a request carries no user id.
pub const PLACEHOLDER_USER_ID: Uuid = Uuid::nil();

#[derive(Debug)]
pub struct GeneratedPlan {
    pub session_id: Uuid,
    pub plan: WeeklyPlan,
    pub saved: bool,
}

#[derive(Clone)]
pub struct WorkoutGenerationService {
    generator: Option<Arc<dyn TextGenerator>>,
    store: Arc<dyn PlanStore>,
}

impl WorkoutGenerationService {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, store: Arc<dyn PlanStore>) -> Self {
        Self { generator, store }
    }

    pub async fn generate(
        &self,
        request: GenerationRequest,
        user_id: Uuid,
    ) -> Result<GeneratedPlan, GenerationError> {
        request.validate().map_err(GenerationError::InvalidRequest)?;

        let generator = self
            .generator
            .as_ref()
            .ok_or_else(|| GenerationError::Configuration("Missing Gemini API key".to_string()))?;

        info!(
            number_of_days = request.number_of_days,
            fitness_level = %request.fitness_level,
            has_weather = !request.weather_text.trim().is_empty(),
            exercise_count = request.selected_exercises.len(),
            has_prescribed = !request.prescribed_exercises_text.trim().is_empty(),
            has_injuries = !request.injuries_text.trim().is_empty(),
            "workout.generation_requested"
        );

        let session =
            GenerationSession::start(user_id, request.number_of_days, request.fitness_level);
        if let Err(e) = self.store.create_session(&session).await {
            warn!(
                error = %GenerationError::Persistence(e.to_string()),
                session_id = %session.id,
                "generation_session.create_failed"
            );
        }

        let started = Instant::now();
        let outcome = self.generate_plan(generator.as_ref(), &request).await;
        let duration_ms = started.elapsed().as_millis() as i64;

        if let Err(e) = self
            .store
            .complete_session(session.id, duration_ms, outcome.is_ok())
            .await
        {
            warn!(
                error = %GenerationError::Persistence(e.to_string()),
                session_id = %session.id,
                "generation_session.update_failed"
            );
        }

        let plan = outcome?;
        info!(
            session_id = %session.id,
            day_count = plan.len(),
            duration_ms,
            "workout.generated"
        );

        let saved = self.persist_plan(&plan, user_id).await;

        Ok(GeneratedPlan {
            session_id: session.id,
            plan,
            saved,
        })
    }

    async fn generate_plan(
        &self,
        generator: &dyn TextGenerator,
        request: &GenerationRequest,
    ) -> Result<WeeklyPlan, GenerationError> {
        let prompt = ai_prompt::build_workout_generation_prompt(request);
        debug!(prompt = %prompt, "gemini.prompt");

        let response = generator
            .generate_text(&prompt)
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;
        debug!(response = %response, "gemini.response");

        ai_parser::parse_weekly_plan(&response, request.number_of_days)
    }

    /// Writes one row per day. Failures are logged and reported as `false`.
    async fn persist_plan(&self, plan: &WeeklyPlan, user_id: Uuid) -> bool {
        let rows: Vec<PlanRow> = plan
            .days()
            .into_iter()
            .map(|(day, day_plan)| PlanRow::from_day(day, day_plan, user_id))
            .collect();

        match self.store.save_plan(&rows).await {
            Ok(()) => {
                info!(row_count = rows.len(), %user_id, "workout.plan_saved");
                true
            }
            Err(e) => {
                warn!(
                    error = %GenerationError::Persistence(e.to_string()),
                    %user_id,
                    "workout.plan_save_failed"
                );
                false
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::clients::models::common::FitnessLevel;
    use crate::services::plan_store::InMemoryPlanStore;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub(crate) struct ScriptedGenerator {
        pub response: Result<String, String>,
        pub calls: AtomicUsize,
        pub prompts: Mutex<Vec<String>>,
        pub mime_types: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        pub(crate) fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                response: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
                mime_types: Mutex::new(Vec::new()),
            })
        }

        pub(crate) fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                response: Err(message.to_string()),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
                mime_types: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate_text(&self, prompt: &str) -> anyhow::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.response.clone().map_err(|e| anyhow::anyhow!(e))
        }

        async fn extract_text(&self, _data: &[u8], mime_type: &str) -> anyhow::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.mime_types.lock().unwrap().push(mime_type.to_string());
            self.response.clone().map_err(|e| anyhow::anyhow!(e))
        }
    }

    pub(crate) struct BrokenStore;

    #[async_trait]
    impl PlanStore for BrokenStore {
        async fn create_session(&self, _session: &GenerationSession) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("database unavailable"))
        }

        async fn complete_session(
            &self,
            _id: Uuid,
            _duration_ms: i64,
            _success: bool,
        ) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("database unavailable"))
        }

        async fn save_plan(&self, _rows: &[PlanRow]) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("database unavailable"))
        }
    }

    fn request(days: u32) -> GenerationRequest {
        GenerationRequest {
            prompt_text: String::new(),
            weather_text: "Sunny".to_string(),
            selected_exercises: Vec::new(),
            fitness_level: FitnessLevel::Beginner,
            prescribed_exercises_text: String::new(),
            injuries_text: "Sore shoulder".to_string(),
            number_of_days: days,
        }
    }

    const TWO_DAYS: &str = r#"```json
{"day1": {"description": "Legs", "warmup": "Bike", "workout": "Squats", "strength": "5x5"},
 "day2": {"description": "Push", "warmup": "Row", "workout": "Bench", "strength": "3x8", "notes": "Go light"}}
```"#;

    #[tokio::test]
    async fn test_generate_returns_plan_and_saves_rows() {
        let generator = ScriptedGenerator::replying(TWO_DAYS);
        let store = Arc::new(InMemoryPlanStore::default());
        let service = WorkoutGenerationService::new(Some(generator.clone()), store.clone());

        let user_id = Uuid::new_v4();
        let generated = service.generate(request(2), user_id).await.unwrap();

        assert!(generated.saved);
        assert_eq!(generated.plan.len(), 2);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);

        let prompt = generator.prompts.lock().unwrap()[0].clone();
        assert!(prompt.contains("Sore shoulder"));
        assert!(prompt.contains("Sunny"));

        let rows = store.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].day, "day1");
        assert_eq!(rows[0].workout, "Squats");
        assert_eq!(rows[1].notes.as_deref(), Some("Go light"));
        assert!(rows.iter().all(|row| row.user_id == user_id));
    }

    #[tokio::test]
    async fn test_session_is_created_then_completed_by_id() {
        let store = Arc::new(InMemoryPlanStore::default());
        let service =
            WorkoutGenerationService::new(Some(ScriptedGenerator::replying(TWO_DAYS)), store.clone());

        let generated = service.generate(request(2), PLACEHOLDER_USER_ID).await.unwrap();

        let sessions = store.sessions();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].id, generated.session_id);
        assert!(sessions[0].success);
        assert!(sessions[0].duration_ms.is_some());
        assert_eq!(sessions[0].user_id, PLACEHOLDER_USER_ID);
    }

    #[tokio::test]
    async fn test_concurrent_generations_track_their_own_sessions() {
        let store = Arc::new(InMemoryPlanStore::default());
        let ok = WorkoutGenerationService::new(Some(ScriptedGenerator::replying(TWO_DAYS)), store.clone());
        let bad = WorkoutGenerationService::new(
            Some(ScriptedGenerator::replying("{\"day1\": {}}")),
            store.clone(),
        );

        let (good, failed) = tokio::join!(
            ok.generate(request(2), PLACEHOLDER_USER_ID),
            bad.generate(request(2), PLACEHOLDER_USER_ID)
        );
        let good = good.unwrap();
        assert!(failed.is_err());

        let sessions = store.sessions();
        assert_eq!(sessions.len(), 2);
        for session in sessions {
            assert!(session.duration_ms.is_some());
            assert_eq!(session.success, session.id == good.session_id);
        }
    }

    #[tokio::test]
    async fn test_missing_day_fails_and_marks_session() {
        let store = Arc::new(InMemoryPlanStore::default());
        let service = WorkoutGenerationService::new(
            Some(ScriptedGenerator::replying(TWO_DAYS)),
            store.clone(),
        );

        let error = service.generate(request(3), PLACEHOLDER_USER_ID).await.unwrap_err();
        assert!(matches!(error, GenerationError::MissingDay { ref key } if key == "day3"));

        assert!(store.rows().is_empty());
        let sessions = store.sessions();
        assert!(!sessions[0].success);
        assert!(sessions[0].duration_ms.is_some());
    }

    #[tokio::test]
    async fn test_transport_failure_is_surfaced_without_retry() {
        let generator = ScriptedGenerator::failing("connection reset");
        let service = WorkoutGenerationService::new(
            Some(generator.clone()),
            Arc::new(InMemoryPlanStore::default()),
        );

        let error = service.generate(request(1), PLACEHOLDER_USER_ID).await.unwrap_err();
        assert!(matches!(error, GenerationError::Transport(ref m) if m == "connection reset"));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_credentials_make_no_call() {
        let store = Arc::new(InMemoryPlanStore::default());
        let service = WorkoutGenerationService::new(None, store.clone());

        let error = service.generate(request(1), PLACEHOLDER_USER_ID).await.unwrap_err();
        assert!(matches!(error, GenerationError::Configuration(_)));
        assert!(store.sessions().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_day_count_is_rejected_before_generation() {
        let generator = ScriptedGenerator::replying(TWO_DAYS);
        let service = WorkoutGenerationService::new(
            Some(generator.clone()),
            Arc::new(InMemoryPlanStore::default()),
        );

        let error = service.generate(request(0), PLACEHOLDER_USER_ID).await.unwrap_err();
        assert!(matches!(error, GenerationError::InvalidRequest(_)));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_persistence_failure_is_softened() {
        let service = WorkoutGenerationService::new(
            Some(ScriptedGenerator::replying(TWO_DAYS)),
            Arc::new(BrokenStore),
        );

        let generated = service.generate(request(2), PLACEHOLDER_USER_ID).await.unwrap();
        assert!(!generated.saved);
        assert_eq!(
            serde_json::to_value(&generated.plan).unwrap()["day2"]["notes"],
            json!("Go light")
        );
    }
}
