//! Module: session
//! Responsibility: session validity signal and route-admission decisions.
//! Does not own: token issuance or credential contents; the guard only
//! reads presence and the in-memory flag.
//! Boundary: synchronous, stateless gating evaluated on each navigation.


use crate::obs::GuardMetrics;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key under which the credential is persisted.
pub const CREDENTIAL_KEY: &str = "auth.credential";

///
/// SessionStore
///
/// Narrow key-value persistence seam. The engine never inspects stored
/// values beyond presence.
///

pub trait SessionStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
    fn clear(&mut self, key: &str);
}

///
/// MemoryStore
///
/// In-memory `SessionStore`; the default backing for tests and for hosts
/// without durable storage.
///

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn clear(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

///
/// SessionState
///
/// Validity combines the in-memory authenticated flag with persisted
/// credential presence; both must hold.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SessionState {
    authenticated: bool,
    has_credential: bool,
}

impl SessionState {
    /// Rehydrate once at startup, before any guarded route renders.
    ///
    /// A persisted credential restores the authenticated flag; there is no
    /// separate server-side re-validation in this layer.
    #[must_use]
    pub fn initialize(store: &dyn SessionStore) -> Self {
        let has_credential = store.load(CREDENTIAL_KEY).is_some();

        Self {
            authenticated: has_credential,
            has_credential,
        }
    }

    /// Record a successful sign-in and persist the credential.
    pub fn sign_in(&mut self, store: &mut dyn SessionStore, credential: &str) {
        store.save(CREDENTIAL_KEY, credential);
        self.authenticated = true;
        self.has_credential = true;
    }

    /// Drop the in-memory flag and the persisted credential.
    pub fn sign_out(&mut self, store: &mut dyn SessionStore) {
        store.clear(CREDENTIAL_KEY);
        self.authenticated = false;
        self.has_credential = false;
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.authenticated && self.has_credential
    }
}

///
/// GuardDecision
///
/// Outcome of a route-admission check. Redirects to the login entry point
/// preserve the originally requested location for post-login navigation.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GuardDecision {
    Admit,
    Redirect {
        to: String,
        preserve: Option<String>,
    },
}

///
/// RouteGate
///
/// - `Protected`: admits only valid sessions; otherwise redirect to login,
///   preserving the requested location.
/// - `PublicOnly`: admits only invalid sessions; otherwise redirect to the
///   default authenticated landing route.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RouteGate {
    Protected,
    PublicOnly,
}

///
/// RouteGuard
///
/// Route configuration for both gate variants plus a redirect counter;
/// every decision reads the session signal fresh.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RouteGuard {
    pub login_route: String,
    pub landing_route: String,

    #[serde(skip)]
    metrics: GuardMetrics,
}

impl RouteGuard {
    #[must_use]
    pub fn new(login_route: impl Into<String>, landing_route: impl Into<String>) -> Self {
        Self {
            login_route: login_route.into(),
            landing_route: landing_route.into(),
            metrics: GuardMetrics::new(),
        }
    }

    /// Decide admission for a navigation request.
    #[must_use]
    pub fn admit(
        &mut self,
        gate: RouteGate,
        session: &SessionState,
        requested: &str,
    ) -> GuardDecision {
        let decision = match gate {
            RouteGate::Protected => {
                if session.is_valid() {
                    GuardDecision::Admit
                } else {
                    GuardDecision::Redirect {
                        to: self.login_route.clone(),
                        preserve: Some(requested.to_string()),
                    }
                }
            }
            RouteGate::PublicOnly => {
                if session.is_valid() {
                    GuardDecision::Redirect {
                        to: self.landing_route.clone(),
                        preserve: None,
                    }
                } else {
                    GuardDecision::Admit
                }
            }
        };

        if matches!(decision, GuardDecision::Redirect { .. }) {
            self.metrics.record_redirect();
        }

        decision
    }

    #[must_use]
    pub const fn metrics(&self) -> &GuardMetrics {
        &self.metrics
    }
}
