//! Session store
//!
//! One dashboard session per login, keyed by the bearer token handed out
//! at login. Sessions never see each other's selection and are evicted
//! once idle for longer than the store's timeout.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Deserialize;
use shared::{AgrometError, BulletinKind, Credentials, Session, StationCatalog};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AppResult;

/// Idle time after which a session is dropped
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Partial selection change; fields are applied region, station, view
#[derive(Debug, Default, Deserialize)]
pub struct SelectionUpdate {
    pub region: Option<String>,
    pub station: Option<String>,
    pub view: Option<BulletinKind>,
}

struct StoredSession {
    session: Session,
    last_seen: Instant,
}

impl StoredSession {
    fn is_expired(&self, idle_timeout: Duration) -> bool {
        self.last_seen.elapsed() >= idle_timeout
    }
}

/// In-memory session registry shared by all handlers
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, StoredSession>>>,
    idle_timeout: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_idle_timeout(DEFAULT_IDLE_TIMEOUT)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }

    /// Open a session for any non-empty username/password pair
    pub async fn login(
        &self,
        credentials: &Credentials,
        catalog: &StationCatalog,
    ) -> AppResult<Session> {
        let session = Session::open(credentials, catalog)?;

        let mut sessions = self.sessions.write().await;
        self.evict_idle(&mut sessions);
        sessions.insert(
            session.id,
            StoredSession {
                session: session.clone(),
                last_seen: Instant::now(),
            },
        );

        tracing::info!(
            session_id = %session.id,
            username = %session.username,
            "Session opened"
        );
        Ok(session)
    }

    /// Close a session; unknown ids are reported as unauthorized
    pub async fn logout(&self, session_id: Uuid) -> AppResult<Session> {
        let stored = self
            .sessions
            .write()
            .await
            .remove(&session_id)
            .ok_or(AgrometError::Unauthorized)?;

        tracing::info!(
            session_id = %stored.session.id,
            username = %stored.session.username,
            "Session closed"
        );
        Ok(stored.session)
    }

    /// Look a session up and mark it as active; idle sessions are dropped
    pub async fn get(&self, session_id: Uuid) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        let stored = sessions.get_mut(&session_id)?;

        if stored.is_expired(self.idle_timeout) {
            sessions.remove(&session_id);
            tracing::info!(session_id = %session_id, "Session expired");
            return None;
        }

        stored.last_seen = Instant::now();
        Some(stored.session.clone())
    }

    /// Number of sessions that have not expired
    pub async fn count(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        self.evict_idle(&mut sessions);
        sessions.len()
    }

    /// Apply a selection change; nothing is stored if any part is rejected
    pub async fn update_selection(
        &self,
        session_id: Uuid,
        catalog: &StationCatalog,
        update: SelectionUpdate,
    ) -> AppResult<Session> {
        let mut sessions = self.sessions.write().await;
        let current = sessions
            .get_mut(&session_id)
            .filter(|stored| !stored.is_expired(self.idle_timeout))
            .ok_or(AgrometError::Unauthorized)?;

        let mut updated = current.session.clone();
        if let Some(region) = &update.region {
            updated.select_region(catalog, region)?;
        }
        if let Some(station) = &update.station {
            updated.select_station(catalog, station)?;
        }
        if let Some(view) = update.view {
            updated.select_view(view);
        }

        current.session = updated.clone();
        current.last_seen = Instant::now();
        tracing::debug!(
            session_id = %session_id,
            region = %updated.selection.region,
            station = %updated.selection.station,
            view = %updated.selection.view,
            "Selection updated"
        );
        Ok(updated)
    }

    fn evict_idle(&self, sessions: &mut HashMap<Uuid, StoredSession>) {
        let before = sessions.len();
        sessions.retain(|_, stored| !stored.is_expired(self.idle_timeout));

        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!(evicted, "Evicted idle sessions");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn credentials() -> Credentials {
        Credentials::new("kouassi", "secret")
    }

    #[tokio::test]
    async fn test_login_and_logout() {
        let store = SessionStore::new();
        let catalog = StationCatalog::default();

        let session = store.login(&credentials(), &catalog).await.unwrap();
        assert_eq!(store.count().await, 1);
        assert_eq!(session.selection.region, "N'ZI");
        assert_eq!(session.selection.station, "Dimbokro");

        store.logout(session.id).await.unwrap();
        assert_eq!(store.count().await, 0);
        assert!(store.get(session.id).await.is_none());
    }

    #[tokio::test]
    async fn test_empty_credentials_open_nothing() {
        let store = SessionStore::new();
        let result = store
            .login(&Credentials::new("", ""), &StationCatalog::default())
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials(_))));
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let catalog = StationCatalog::default();
        let first = store.login(&credentials(), &catalog).await.unwrap();
        let second = store.login(&credentials(), &catalog).await.unwrap();

        let update = SelectionUpdate {
            region: Some("GOH".to_string()),
            station: Some("Oumé".to_string()),
            view: Some(BulletinKind::Advice),
        };
        store
            .update_selection(first.id, &catalog, update)
            .await
            .unwrap();

        let untouched = store.get(second.id).await.unwrap();
        assert_eq!(untouched.selection, second.selection);
        let changed = store.get(first.id).await.unwrap();
        assert_eq!(changed.selection.station, "Oumé");
        assert_eq!(changed.selection.view, BulletinKind::Advice);
    }

    #[tokio::test]
    async fn test_rejected_update_keeps_previous_selection() {
        let store = SessionStore::new();
        let catalog = StationCatalog::default();
        let session = store.login(&credentials(), &catalog).await.unwrap();

        // Gagnoa is in GOH, not in the selected N'ZI region
        let update = SelectionUpdate {
            station: Some("Gagnoa".to_string()),
            view: Some(BulletinKind::Advice),
            ..Default::default()
        };
        let result = store.update_selection(session.id, &catalog, update).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(store.get(session.id).await.unwrap().selection, session.selection);
    }

    #[tokio::test]
    async fn test_idle_sessions_are_evicted() {
        let store = SessionStore::with_idle_timeout(Duration::ZERO);
        let catalog = StationCatalog::default();
        let session = store.login(&credentials(), &catalog).await.unwrap();

        assert!(store.get(session.id).await.is_none());
        assert_eq!(store.count().await, 0);

        let result = store
            .update_selection(session.id, &catalog, SelectionUpdate::default())
            .await;
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn test_login_sweeps_idle_sessions() {
        let store = SessionStore::with_idle_timeout(Duration::ZERO);
        let catalog = StationCatalog::default();
        for _ in 0..3 {
            store.login(&credentials(), &catalog).await.unwrap();
        }

        // Each login evicts the previous ones before inserting
        assert_eq!(store.sessions.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_active_sessions_survive() {
        let store = SessionStore::with_idle_timeout(Duration::from_secs(3600));
        let catalog = StationCatalog::default();
        let session = store.login(&credentials(), &catalog).await.unwrap();

        assert!(store.get(session.id).await.is_some());
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_logout_unknown_session() {
        let store = SessionStore::new();
        let result = store.logout(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }
}
