//! Typed error type for the db crate.

use std::time::Duration;

use mongodb::bson::oid;
use mongodb::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// The store could not be reached, authenticated against, or selected.
    #[error("connection error: {0}")]
    Connection(#[source] mongodb::error::Error),

    /// A store call did not answer within the configured bound.
    #[error("store call timed out after {0:?}")]
    Timeout(Duration),

    /// The caller-supplied id is not a 24-character hex ObjectId.
    #[error("malformed job id '{id}': {source}")]
    InvalidId {
        id: String,
        #[source]
        source: oid::Error,
    },

    #[error("job listing {0} not found")]
    NotFound(String),

    /// A stored document does not have the shape of a job listing.
    #[error("failed to decode job listing: {0}")]
    Decode(String),

    #[error("mongodb error: {0}")]
    Store(#[source] mongodb::error::Error),
}

impl DbError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<mongodb::error::Error> for DbError {
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::BsonDeserialization(e) => Self::Decode(e.to_string()),
            ErrorKind::Io(_)
            | ErrorKind::Authentication { .. }
            | ErrorKind::ServerSelection { .. }
            | ErrorKind::ConnectionPoolCleared { .. } => Self::Connection(err),
            _ => Self::Store(err),
        }
    }
}
