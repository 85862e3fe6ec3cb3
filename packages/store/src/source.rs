//! The seam between the list state and wherever the records come from.

use thiserror::Error;

use crate::models::UserRecord;

/// Why a load did not produce any records.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The request never completed (DNS, connection, timeout, CORS).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16 },
    /// The body was not a JSON array of user records.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Async source of the full user list. Read once per successful load.
pub trait UserSource {
    fn fetch_users(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<UserRecord>, SourceError>>;
}
