//! Connection settings for the job listing store.

use std::time::Duration;

pub const DEFAULT_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "graphql-golang";
pub const DEFAULT_COLLECTION: &str = "jobs";

/// Bound applied to every individual round trip to the store.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the job listings live and how long a single call may take.
///
/// Read once at startup; the resulting handle is shared by every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// MongoDB connection string.
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_owned(),
            database: DEFAULT_DATABASE.to_owned(),
            collection: DEFAULT_COLLECTION.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
