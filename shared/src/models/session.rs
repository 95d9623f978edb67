//! Session gate and dashboard selection
//!
//! The dashboard has two states: logged out, or logged in with a current
//! region, station and menu entry. Any non-empty username/password pair is
//! accepted; there is no credential verification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::catalog::StationCatalog;
use crate::error::{AgrometError, AgrometResult};
use crate::models::BulletinKind;

/// Login form input
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Credentials {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[serde(skip_serializing)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Presence check on both fields
    pub fn check(&self) -> AgrometResult<()> {
        self.validate().map_err(|errors| {
            let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
            fields.sort_unstable();
            AgrometError::InvalidCredentials(format!("missing {}", fields.join(", ")))
        })
    }
}

/// Region, station and menu entry currently displayed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selection {
    pub region: String,
    pub station: String,
    pub view: BulletinKind,
}

/// A logged-in user's dashboard session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub selection: Selection,
}

impl Session {
    /// Open a session on the first region, its first station and the first menu entry
    pub fn open(credentials: &Credentials, catalog: &StationCatalog) -> AgrometResult<Self> {
        credentials.check()?;

        let region = catalog
            .regions()
            .first()
            .ok_or_else(|| AgrometError::NotFound("Region".to_string()))?;
        let station = region
            .stations
            .first()
            .ok_or_else(|| AgrometError::NotFound(format!("Station in region {}", region.name)))?;

        Ok(Self {
            id: Uuid::new_v4(),
            username: credentials.username.clone(),
            created_at: Utc::now(),
            selection: Selection {
                region: region.name.clone(),
                station: station.name.clone(),
                view: BulletinKind::default(),
            },
        })
    }

    /// Switch region; the station falls back to the region's first one
    pub fn select_region(&mut self, catalog: &StationCatalog, region: &str) -> AgrometResult<()> {
        let region = catalog.region(region)?;
        let station = region
            .stations
            .first()
            .ok_or_else(|| AgrometError::NotFound(format!("Station in region {}", region.name)))?;

        self.selection.region = region.name.clone();
        self.selection.station = station.name.clone();
        Ok(())
    }

    /// Switch station within the selected region
    pub fn select_station(&mut self, catalog: &StationCatalog, station: &str) -> AgrometResult<()> {
        let station = catalog.station(&self.selection.region, station)?;
        self.selection.station = station.name.clone();
        Ok(())
    }

    pub fn select_view(&mut self, view: BulletinKind) {
        self.selection.view = view;
    }
}

/// Login state of a dashboard client
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn(Session),
}

impl SessionState {
    /// Log in; on failure the state is left untouched
    pub fn login(
        &mut self,
        credentials: &Credentials,
        catalog: &StationCatalog,
    ) -> AgrometResult<Session> {
        let session = Session::open(credentials, catalog)?;
        *self = SessionState::LoggedIn(session.clone());
        Ok(session)
    }

    /// Log out, returning the closed session if there was one
    pub fn logout(&mut self) -> Option<Session> {
        match std::mem::take(self) {
            SessionState::LoggedIn(session) => Some(session),
            SessionState::LoggedOut => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionState::LoggedIn(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::LoggedIn(session) => Some(session),
            SessionState::LoggedOut => None,
        }
    }

    pub fn session_mut(&mut self) -> AgrometResult<&mut Session> {
        match self {
            SessionState::LoggedIn(session) => Ok(session),
            SessionState::LoggedOut => Err(AgrometError::Unauthorized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StationCatalog {
        StationCatalog::default()
    }

    #[test]
    fn test_initial_state_is_logged_out() {
        let state = SessionState::default();
        assert!(!state.is_logged_in());
        assert!(state.session().is_none());
    }

    #[test]
    fn test_login_with_empty_username_stays_logged_out() {
        let mut state = SessionState::default();
        let result = state.login(&Credentials::new("", "secret"), &catalog());
        assert!(matches!(result, Err(AgrometError::InvalidCredentials(_))));
        assert_eq!(state, SessionState::LoggedOut);
    }

    #[test]
    fn test_login_with_empty_password_stays_logged_out() {
        let mut state = SessionState::default();
        let result = state.login(&Credentials::new("awa", ""), &catalog());
        assert!(result.is_err());
        assert!(!state.is_logged_in());
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let err = Credentials::new("", "").check().unwrap_err();
        assert_eq!(
            err,
            AgrometError::InvalidCredentials("missing password, username".to_string())
        );
    }

    #[test]
    fn test_login_with_any_non_empty_pair_succeeds() {
        let mut state = SessionState::default();
        let session = state
            .login(&Credentials::new("awa", "x"), &catalog())
            .unwrap();

        assert_eq!(state.session(), Some(&session));
        assert_eq!(session.username, "awa");
        assert_eq!(session.selection.region, "N'ZI");
        assert_eq!(session.selection.station, "Dimbokro");
        assert_eq!(session.selection.view, BulletinKind::DailyWeather);
        assert!(state.is_logged_in());
    }

    #[test]
    fn test_logout_returns_to_logged_out() {
        let mut state = SessionState::default();
        state.login(&Credentials::new("awa", "x"), &catalog()).unwrap();

        let closed = state.logout();
        assert_eq!(closed.map(|s| s.username), Some("awa".to_string()));
        assert_eq!(state, SessionState::LoggedOut);
        assert!(state.logout().is_none());
    }

    #[test]
    fn test_selection_requires_login() {
        let mut state = SessionState::default();
        assert_eq!(state.session_mut().unwrap_err(), AgrometError::Unauthorized);
    }

    #[test]
    fn test_select_region_resets_station() {
        let catalog = catalog();
        let mut state = SessionState::default();
        state.login(&Credentials::new("awa", "x"), &catalog).unwrap();

        let session = state.session_mut().unwrap();
        session.select_region(&catalog, "GOH").unwrap();
        assert_eq!(session.selection.region, "GOH");
        assert_eq!(session.selection.station, "Gagnoa");
    }

    #[test]
    fn test_select_station_outside_region_fails() {
        let catalog = catalog();
        let mut state = SessionState::default();
        state.login(&Credentials::new("awa", "x"), &catalog).unwrap();

        let session = state.session_mut().unwrap();
        assert!(session.select_station(&catalog, "Gagnoa").is_err());
        assert_eq!(session.selection.station, "Dimbokro");

        session.select_station(&catalog, "Bocanda").unwrap();
        assert_eq!(session.selection.station, "Bocanda");
    }

    #[test]
    fn test_views_switch_freely() {
        let catalog = catalog();
        let mut state = SessionState::default();
        state.login(&Credentials::new("awa", "x"), &catalog).unwrap();

        let session = state.session_mut().unwrap();
        for view in BulletinKind::ALL.into_iter().rev() {
            session.select_view(view);
            assert_eq!(session.selection.view, view);
        }
    }
}
