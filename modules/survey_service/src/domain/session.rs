//! Per-session context store
//!
//! Replaces ad-hoc loosely-typed session keys with an explicit typed context
//! per session, held in-process and keyed by an opaque bearer token.
//! Sessions start anonymous (the OTP flow predates login); login binds the
//! user id. Every session carries an idle clock: an access past the idle
//! lifetime treats the session as gone, and `create` sweeps stale entries so
//! abandoned anonymous sessions do not accumulate.

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use rand::distr::Alphanumeric;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use uuid::Uuid;

const TOKEN_LEN: usize = 48;

/// A pending one-time code awaiting verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOtp {
    /// The numeric code as sent to the recipient
    pub code: String,
    /// Instant after which the code is no longer acceptable
    pub expires_at: DateTime<Utc>,
}

/// Typed per-session state carried between steps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    /// Set once the session has logged in
    pub user_id: Option<Uuid>,
    /// One-time code issued to this session, if any
    pub pending_otp: Option<PendingOtp>,
    /// Fork decided at the demographics step. Read (not cleared) by the
    /// land-use step; `None` until a fork branch has been taken.
    pub farming_selected: Option<bool>,
}

struct SessionEntry {
    context: SessionContext,
    last_seen: DateTime<Utc>,
}

/// In-process session storage keyed by bearer token
pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<String, SessionEntry>>,
}

impl SessionStore {
    /// `ttl` is the idle lifetime: a session untouched for longer is evicted
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Create a fresh anonymous session and return its token. Sessions past
    /// their idle lifetime are swept here.
    pub fn create(&self) -> String {
        let mut rng = rand::rngs::StdRng::from_os_rng();
        let token: String = (&mut rng)
            .sample_iter(Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();
        let now = Utc::now();
        let mut sessions = self.sessions.write();
        sessions.retain(|_, entry| now - entry.last_seen <= self.ttl);
        sessions.insert(
            token.clone(),
            SessionEntry {
                context: SessionContext::default(),
                last_seen: now,
            },
        );
        token
    }

    /// Look up the context for a token
    pub fn get(&self, token: &str) -> Option<SessionContext> {
        self.touch(token, |ctx| ctx.clone())
    }

    /// Mutate the context for a token. Returns `None` for an unknown or
    /// expired token.
    pub fn with_context<T>(
        &self,
        token: &str,
        f: impl FnOnce(&mut SessionContext) -> T,
    ) -> Option<T> {
        self.touch(token, f)
    }

    /// Drop a session entirely
    pub fn remove(&self, token: &str) {
        self.sessions.write().remove(token);
    }

    /// The logged-in user id for a token, if the session is authenticated
    pub fn authenticated_user(&self, token: &str) -> Option<Uuid> {
        self.touch(token, |ctx| ctx.user_id).flatten()
    }

    /// Resolve a live entry, refreshing its idle clock. An entry past the
    /// idle lifetime is removed and reported as absent.
    fn touch<T>(&self, token: &str, f: impl FnOnce(&mut SessionContext) -> T) -> Option<T> {
        let now = Utc::now();
        let mut sessions = self.sessions.write();
        if let Some(entry) = sessions.get_mut(token) {
            if now - entry.last_seen <= self.ttl {
                entry.last_seen = now;
                return Some(f(&mut entry.context));
            }
        } else {
            return None;
        }
        sessions.remove(token);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(Duration::minutes(30))
    }

    fn backdate(store: &SessionStore, token: &str, by: Duration) {
        store
            .sessions
            .write()
            .get_mut(token)
            .expect("session exists")
            .last_seen = Utc::now() - by;
    }

    #[test]
    fn tokens_are_unique_and_resolvable() {
        let store = store();
        let a = store.create();
        let b = store.create();
        assert_ne!(a, b);
        assert_eq!(store.get(&a), Some(SessionContext::default()));
    }

    #[test]
    fn removed_session_is_gone() {
        let store = store();
        let token = store.create();
        store.remove(&token);
        assert!(store.get(&token).is_none());
        assert!(store.with_context(&token, |_| ()).is_none());
    }

    #[test]
    fn login_binds_user_id() {
        let store = store();
        let token = store.create();
        let user = Uuid::new_v4();
        assert!(store.authenticated_user(&token).is_none());
        store.with_context(&token, |ctx| ctx.user_id = Some(user));
        assert_eq!(store.authenticated_user(&token), Some(user));
    }

    #[test]
    fn idle_session_expires_on_access() {
        let store = store();
        let token = store.create();
        backdate(&store, &token, Duration::minutes(31));
        assert!(store.get(&token).is_none());
        assert!(store.sessions.read().is_empty());
    }

    #[test]
    fn create_sweeps_expired_sessions() {
        let store = store();
        let stale = store.create();
        backdate(&store, &stale, Duration::minutes(31));
        let fresh = store.create();
        let sessions = store.sessions.read();
        assert!(!sessions.contains_key(&stale));
        assert!(sessions.contains_key(&fresh));
    }

    #[test]
    fn access_refreshes_the_idle_clock() {
        let store = store();
        let token = store.create();
        backdate(&store, &token, Duration::minutes(29));
        assert!(store.get(&token).is_some());
        // A later access within the full lifetime again still resolves
        backdate(&store, &token, Duration::minutes(29));
        assert!(store.authenticated_user(&token).is_none());
        assert!(store.get(&token).is_some());
    }
}
