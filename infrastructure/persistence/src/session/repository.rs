use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::session::errors::SessionError;
use business::domain::session::model::Session;
use business::domain::session::repository::SessionRepository;
use business::domain::session::state::{ViewEvent, ViewState};

pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

/// Live view sessions, held in process memory only.
///
/// A session untouched for longer than the idle TTL is treated as abandoned:
/// lookups no longer see it and the next `create` drops it from the map.
/// Sessions in `Loading` are kept so an in-flight submit can always settle.
pub struct SessionRepositoryInMemory {
    sessions: RwLock<HashMap<Uuid, Session>>,
    idle_ttl: TimeDelta,
}

impl SessionRepositoryInMemory {
    pub fn new() -> Self {
        Self::with_idle_ttl(DEFAULT_IDLE_TTL)
    }

    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_ttl: TimeDelta::from_std(idle_ttl).unwrap_or(TimeDelta::MAX),
        }
    }

    fn is_expired(&self, session: &Session, now: DateTime<Utc>) -> bool {
        !matches!(session.state, ViewState::Loading) && now - session.updated_at > self.idle_ttl
    }

    fn evict_expired(&self, sessions: &mut HashMap<Uuid, Session>) {
        let now = Utc::now();
        let before = sessions.len();
        sessions.retain(|_, session| !self.is_expired(session, now));

        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = sessions.len(), "Evicted idle sessions");
        }
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryInMemory {
    async fn create(&self, session: &Session) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.write().await;
        self.evict_expired(&mut sessions);
        if sessions.contains_key(&session.id) {
            return Err(RepositoryError::Duplicated);
        }
        sessions.insert(session.id, session.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Session, RepositoryError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .filter(|session| !self.is_expired(session, Utc::now()))
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn apply_event(&self, id: Uuid, event: ViewEvent) -> Result<Session, SessionError> {
        let mut sessions = self.sessions.write().await;
        let expired = match sessions.get(&id) {
            Some(session) => self.is_expired(session, Utc::now()),
            None => return Err(SessionError::NotFound),
        };
        if expired {
            sessions.remove(&id);
            return Err(SessionError::NotFound);
        }

        let session = sessions.get_mut(&id).ok_or(SessionError::NotFound)?;
        session.apply(event)?;
        Ok(session.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::session::state::{ViewState, ViewStateKind};
    use std::sync::Arc;

    #[tokio::test]
    async fn should_store_and_return_created_session() {
        let repository = SessionRepositoryInMemory::new();
        let session = Session::new();

        repository.create(&session).await.unwrap();
        let stored = repository.get_by_id(session.id).await.unwrap();

        assert_eq!(stored.id, session.id);
        assert_eq!(stored.state, ViewState::Idle);
    }

    #[tokio::test]
    async fn should_reject_duplicate_session_id() {
        let repository = SessionRepositoryInMemory::new();
        let session = Session::new();
        repository.create(&session).await.unwrap();

        let result = repository.create(&session).await;

        assert!(matches!(result.unwrap_err(), RepositoryError::Duplicated));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let repository = SessionRepositoryInMemory::new();

        let result = repository.get_by_id(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn should_persist_transition_result() {
        let repository = SessionRepositoryInMemory::new();
        let session = Session::new();
        repository.create(&session).await.unwrap();

        repository
            .apply_event(session.id, ViewEvent::Submit)
            .await
            .unwrap();
        let failed = repository
            .apply_event(session.id, ViewEvent::Failed)
            .await
            .unwrap();

        assert_eq!(failed.state.kind(), ViewStateKind::Error);
        let stored = repository.get_by_id(session.id).await.unwrap();
        assert_eq!(stored.state.kind(), ViewStateKind::Error);
    }

    #[tokio::test]
    async fn should_leave_stored_state_when_transition_rejected() {
        let repository = SessionRepositoryInMemory::new();
        let session = Session::new();
        repository.create(&session).await.unwrap();

        let result = repository.apply_event(session.id, ViewEvent::Reset).await;

        assert!(matches!(result.unwrap_err(), SessionError::InvalidTransition));
        let stored = repository.get_by_id(session.id).await.unwrap();
        assert_eq!(stored.state, ViewState::Idle);
    }

    #[tokio::test]
    async fn should_let_only_one_concurrent_submit_through() {
        let repository = Arc::new(SessionRepositoryInMemory::new());
        let session = Session::new();
        repository.create(&session).await.unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repository = repository.clone();
                let id = session.id;
                tokio::spawn(async move { repository.apply_event(id, ViewEvent::Submit).await })
            })
            .collect();

        let mut accepted = 0;
        let mut rejected = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => accepted += 1,
                Err(SessionError::SubmitWhileLoading) => rejected += 1,
                Err(other) => panic!("unexpected error: {}", other),
            }
        }

        assert_eq!(accepted, 1);
        assert_eq!(rejected, 7);
    }

    fn stale_session(state: ViewState, idle_for: TimeDelta) -> Session {
        let mut session = Session::new();
        session.state = state;
        session.updated_at = Utc::now() - idle_for;
        session
    }

    #[tokio::test]
    async fn should_evict_idle_session_on_next_create() {
        let repository = SessionRepositoryInMemory::with_idle_ttl(Duration::from_secs(60));
        let stale = stale_session(ViewState::Error("failed".to_string()), TimeDelta::minutes(5));
        repository.create(&stale).await.unwrap();

        let fresh = Session::new();
        repository.create(&fresh).await.unwrap();

        let sessions = repository.sessions.read().await;
        assert_eq!(sessions.len(), 1);
        assert!(sessions.contains_key(&fresh.id));
        assert!(!sessions.contains_key(&stale.id));
    }

    #[tokio::test]
    async fn should_not_return_expired_session() {
        let repository = SessionRepositoryInMemory::with_idle_ttl(Duration::from_secs(60));
        let stale = stale_session(ViewState::Idle, TimeDelta::minutes(5));
        repository.create(&stale).await.unwrap();

        let fetched = repository.get_by_id(stale.id).await;
        let submitted = repository.apply_event(stale.id, ViewEvent::Submit).await;

        assert!(matches!(fetched.unwrap_err(), RepositoryError::NotFound));
        assert!(matches!(submitted.unwrap_err(), SessionError::NotFound));
        assert!(repository.sessions.read().await.is_empty());
    }

    #[tokio::test]
    async fn should_keep_loading_session_past_idle_ttl() {
        let repository = SessionRepositoryInMemory::with_idle_ttl(Duration::from_secs(60));
        let loading = stale_session(ViewState::Loading, TimeDelta::minutes(5));
        repository.create(&loading).await.unwrap();
        repository.create(&Session::new()).await.unwrap();

        let settled = repository
            .apply_event(loading.id, ViewEvent::Failed)
            .await
            .unwrap();

        assert_eq!(settled.state.kind(), ViewStateKind::Error);
    }

    #[tokio::test]
    async fn should_release_many_settled_sessions_once_idle() {
        let repository = SessionRepositoryInMemory::with_idle_ttl(Duration::from_secs(60));
        for _ in 0..50 {
            let session = stale_session(ViewState::Results(Vec::new()), TimeDelta::hours(1));
            repository.create(&session).await.unwrap();
        }

        repository.create(&Session::new()).await.unwrap();

        assert_eq!(repository.sessions.read().await.len(), 1);
    }
}
