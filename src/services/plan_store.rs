use std::sync::{Mutex, MutexGuard};

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::clients::models::common::{GenerationSession, PlanRow};

/// Where generated plans and generation sessions are written.
#[async_trait]
pub trait PlanStore: Send + Sync {
    async fn create_session(&self, session: &GenerationSession) -> Result<()>;

    async fn complete_session(&self, id: Uuid, duration_ms: i64, success: bool) -> Result<()>;

    async fn save_plan(&self, rows: &[PlanRow]) -> Result<()>;
}

#[derive(Default)]
pub struct InMemoryPlanStore {
    sessions: Mutex<Vec<GenerationSession>>,
    rows: Mutex<Vec<PlanRow>>,
}

impl InMemoryPlanStore {
    pub fn sessions(&self) -> Vec<GenerationSession> {
        lock(&self.sessions).map(|s| s.clone()).unwrap_or_default()
    }

    pub fn rows(&self) -> Vec<PlanRow> {
        lock(&self.rows).map(|r| r.clone()).unwrap_or_default()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| anyhow::anyhow!("plan store lock poisoned"))
}

#[async_trait]
impl PlanStore for InMemoryPlanStore {
    async fn create_session(&self, session: &GenerationSession) -> Result<()> {
        let mut sessions = lock(&self.sessions)?;
        if sessions.iter().any(|existing| existing.id == session.id) {
            return Err(anyhow::anyhow!("generation session {} already exists", session.id));
        }
        sessions.push(session.clone());
        Ok(())
    }

    async fn complete_session(&self, id: Uuid, duration_ms: i64, success: bool) -> Result<()> {
        let mut sessions = lock(&self.sessions)?;
        let session = sessions
            .iter_mut()
            .find(|session| session.id == id)
            .ok_or_else(|| anyhow::anyhow!("generation session {} not found", id))?;
        session.duration_ms = Some(duration_ms);
        session.success = success;
        Ok(())
    }

    async fn save_plan(&self, rows: &[PlanRow]) -> Result<()> {
        lock(&self.rows)?.extend_from_slice(rows);
        Ok(())
    }
}
