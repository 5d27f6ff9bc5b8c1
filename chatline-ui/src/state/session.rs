//! Session State
//!
//! Who is signed in. Persisted to local storage so a reload keeps the user
//! logged in.

use leptos::*;
use serde::{Deserialize, Serialize};

const SESSION_KEY: &str = "chatline_session";

/// The signed-in user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
}

impl Session {
    fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Session shared through context
#[derive(Clone, Copy)]
pub struct SessionState {
    pub session: RwSignal<Option<Session>>,
}

impl SessionState {
    pub fn user_id(&self) -> Option<i64> {
        self.session.with(|s| s.as_ref().map(|s| s.user_id))
    }

    pub fn username(&self) -> Option<String> {
        self.session.with(|s| s.as_ref().map(|s| s.username.clone()))
    }

    /// Remember `session` and persist it
    pub fn sign_in(&self, session: Session) {
        store_session(Some(&session));
        self.session.set(Some(session));
    }

    pub fn sign_out(&self) {
        store_session(None);
        self.session.set(None);
    }
}

/// Provide session state to the component tree, restoring any stored session
pub fn provide_session_state() {
    let state = SessionState {
        session: create_rw_signal(load_session()),
    };

    provide_context(state);
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn load_session() -> Option<Session> {
    let raw = local_storage()?.get_item(SESSION_KEY).ok().flatten()?;
    Session::from_json(&raw)
}

fn store_session(session: Option<&Session>) {
    let Some(storage) = local_storage() else {
        return;
    };

    let result = match session.and_then(Session::to_json) {
        Some(raw) => storage.set_item(SESSION_KEY, &raw),
        None => storage.remove_item(SESSION_KEY),
    };

    if result.is_err() {
        logging::warn!("Could not persist session");
    }
}
