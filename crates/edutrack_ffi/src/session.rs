//! Screen sessions held on behalf of the Flutter shell.
//!
//! # Responsibility
//! - Keep one state machine per mounted screen, keyed by an opaque id.
//! - Drop the state (and any armed timer) when the screen unmounts.
//!
//! # Invariants
//! - Ids are random v4 UUIDs; a closed id is never reused.
//! - A poisoned lock is reported as an error, never unwrapped.

use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

pub(crate) struct SessionRegistry<T> {
    kind: &'static str,
    sessions: Mutex<HashMap<Uuid, T>>,
}

impl<T> SessionRegistry<T> {
    pub(crate) fn new(kind: &'static str) -> Self {
        Self {
            kind,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Stores `state` and returns its session id.
    pub(crate) fn open(&self, state: T) -> Result<String, String> {
        let id = Uuid::new_v4();
        let mut sessions = self.lock()?;
        sessions.insert(id, state);
        debug!(
            "event=session_open module=ffi status=ok kind={} open={}",
            self.kind,
            sessions.len()
        );
        Ok(id.to_string())
    }

    /// Runs `f` against the state behind `session_id`.
    pub(crate) fn with<R>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, String> {
        let id = parse_id(session_id)?;
        let mut sessions = self.lock()?;
        let state = sessions
            .get_mut(&id)
            .ok_or_else(|| format!("unknown {} session: {session_id}", self.kind))?;
        Ok(f(state))
    }

    /// Removes the session. Returns the state so the caller can cancel
    /// pending work; `None` when the id was unknown.
    pub(crate) fn close(&self, session_id: &str) -> Result<Option<T>, String> {
        let id = parse_id(session_id)?;
        let mut sessions = self.lock()?;
        let removed = sessions.remove(&id);
        debug!(
            "event=session_close module=ffi status={} kind={}",
            if removed.is_some() { "ok" } else { "unknown" },
            self.kind
        );
        Ok(removed)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, T>>, String> {
        self.sessions.lock().map_err(|_| {
            warn!(
                "event=session_lock module=ffi status=error kind={} reason=poisoned",
                self.kind
            );
            format!("{} session store is unavailable", self.kind)
        })
    }
}

fn parse_id(session_id: &str) -> Result<Uuid, String> {
    Uuid::parse_str(session_id.trim()).map_err(|_| format!("invalid session id: {session_id}"))
}

#[cfg(test)]
mod tests {
    use super::SessionRegistry;

    #[test]
    fn open_with_close_round_trip() {
        let registry = SessionRegistry::new("counter");
        let id = registry.open(1_u32).expect("open");

        let value = registry
            .with(&id, |count| {
                *count += 1;
                *count
            })
            .expect("with");
        assert_eq!(value, 2);

        assert_eq!(registry.close(&id).expect("close"), Some(2));
        assert!(registry.with(&id, |_| ()).is_err());
        assert_eq!(registry.close(&id).expect("second close"), None);
    }

    #[test]
    fn malformed_id_is_rejected() {
        let registry: SessionRegistry<u32> = SessionRegistry::new("counter");
        let err = registry.with("not-a-uuid", |_| ()).expect_err("bad id");
        assert!(err.contains("invalid session id"));
    }
}
