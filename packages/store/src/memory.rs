use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::models::UserRecord;
use crate::source::{SourceError, UserSource};

/// In-memory UserSource for testing and offline previews.
///
/// Clones share the same canned response and fetch counter.
#[derive(Clone, Debug)]
pub struct StaticSource {
    response: Arc<Mutex<Result<Vec<UserRecord>, SourceError>>>,
    fetches: Arc<AtomicUsize>,
}

impl StaticSource {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self::with_response(Ok(users))
    }

    /// A source whose every fetch fails with `error`.
    pub fn failing(error: SourceError) -> Self {
        Self::with_response(Err(error))
    }

    fn with_response(response: Result<Vec<UserRecord>, SourceError>) -> Self {
        Self {
            response: Arc::new(Mutex::new(response)),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Swap the canned response, e.g. to let a retry succeed.
    pub fn respond_with(&self, response: Result<Vec<UserRecord>, SourceError>) {
        if let Ok(mut slot) = self.response.lock() {
            *slot = response;
        }
    }

    /// How many times `fetch_users` has been awaited.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl Default for StaticSource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl UserSource for StaticSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match self.response.lock() {
            Ok(response) => response.clone(),
            Err(_) => Err(SourceError::Transport("static source poisoned".to_string())),
        }
    }
}
