use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use ulid::Ulid;

use crate::core::{ProgressRecord, ProgressSummary, Session, TopicSlug};

/// In-memory sessions keyed by an opaque id. Each session has its own lock,
/// so a progress merge never waits on another user's request.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<Mutex<Session>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&self, user_name: &str) -> String {
        let id = Ulid::new().to_string();
        let session = Arc::new(Mutex::new(Session::login(user_name)));
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone(), session);
        id
    }

    /// Removes the session and returns the progress it held.
    pub fn logout(&self, id: &str) -> Option<ProgressRecord> {
        let handle = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)?;
        let session = handle.lock().unwrap_or_else(PoisonError::into_inner).clone();
        Some(session.logout())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keep-maximum merge under the session's lock. Returns the stored best.
    pub fn record_quiz_result(&self, id: &str, slug: TopicSlug, percentage: u8) -> Option<u8> {
        let handle = self.handle(id)?;
        let mut session = handle.lock().unwrap_or_else(PoisonError::into_inner);
        Some(session.record_quiz_result(slug, percentage))
    }

    pub fn summary(&self, id: &str) -> Option<(String, ProgressSummary)> {
        let handle = self.handle(id)?;
        let session = handle.lock().unwrap_or_else(PoisonError::into_inner);
        Some((session.user_name().to_string(), session.progress().summary()))
    }

    fn handle(&self, id: &str) -> Option<Arc<Mutex<Session>>> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }
}
