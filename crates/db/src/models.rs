//! Job listing documents and the transient request/response shapes around them.
//!
//! Field names match the BSON document stored in the `jobs` collection:
//! `_id`, `title`, `description`, `url`, `company`.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{serde_helpers, Document};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// jobs
// ---------------------------------------------------------------------------

/// A persisted job listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    /// Store-generated id. Rendered as a hex string when serialized for
    /// callers; this struct is never written back to the store.
    #[serde(
        rename = "_id",
        serialize_with = "serde_helpers::serialize_object_id_as_hex_string"
    )]
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    pub url: String,
    pub company: String,
}

/// Input for creating a job listing. The id is always assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJobListing {
    pub title: String,
    pub description: String,
    pub url: String,
    pub company: String,
}

/// Partial update: `None` leaves a field untouched, `Some("")` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListingUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub company: Option<String>,
}

impl JobListingUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.url.is_none()
            && self.company.is_none()
    }

    /// Body of the `$set` operator, holding only the fields that are present.
    pub fn to_set_document(&self) -> Document {
        let mut set = Document::new();
        for (key, value) in self.fields() {
            if let Some(value) = value {
                set.insert(key, value.as_str());
            }
        }
        set
    }

    /// Apply the present fields to an in-memory listing.
    pub fn apply_to(&self, job: &mut JobListing) {
        let targets = [
            &mut job.title,
            &mut job.description,
            &mut job.url,
            &mut job.company,
        ];
        for ((_, value), target) in self.fields().into_iter().zip(targets) {
            if let Some(value) = value {
                target.clone_from(value);
            }
        }
    }

    fn fields(&self) -> [(&'static str, Option<&String>); 4] {
        [
            ("title", self.title.as_ref()),
            ("description", self.description.as_ref()),
            ("url", self.url.as_ref()),
            ("company", self.company.as_ref()),
        ]
    }
}

/// Acknowledgment of a delete, echoing the requested id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteJobResponse {
    pub delete_job_id: String,
}
