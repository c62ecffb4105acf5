//! Contract tests for `JobRepository`.
//!
//! These run against `InMemoryJobRepository` so no MongoDB is required.
//! The same scenario against a live server lives in `tests/mongo_jobs.rs`
//! and is gated behind the `integration` feature flag.

use mongodb::bson::oid::ObjectId;

use crate::mock::InMemoryJobRepository;
use crate::models::{JobListing, JobListingUpdate, NewJobListing};
use crate::{DbError, JobRepository};

fn engineer() -> NewJobListing {
    NewJobListing {
        title: "Engineer".into(),
        description: "Build things".into(),
        url: "http://x.test".into(),
        company: "Acme".into(),
    }
}

fn assert_same_fields(job: &JobListing, input: &NewJobListing) {
    assert_eq!(job.title, input.title);
    assert_eq!(job.description, input.description);
    assert_eq!(job.url, input.url);
    assert_eq!(job.company, input.company);
}

// ============================================================
// Create / read
// ============================================================

#[tokio::test]
async fn create_then_get_returns_same_fields() {
    let repo = InMemoryJobRepository::new();
    let input = engineer();

    let created = repo.create_job_listing(input.clone()).await.expect("create");
    assert_same_fields(&created, &input);

    let fetched = repo.get_job(&created.id.to_hex()).await.expect("get");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_assigns_distinct_ids() {
    let repo = InMemoryJobRepository::new();
    let a = repo.create_job_listing(engineer()).await.unwrap();
    let b = repo.create_job_listing(engineer()).await.unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(repo.len(), 2);
}

#[tokio::test]
async fn get_jobs_on_empty_collection_is_empty() {
    let repo = InMemoryJobRepository::new();
    let jobs = repo.get_jobs().await.expect("empty fetch is not an error");
    assert!(jobs.is_empty());
}

#[tokio::test]
async fn get_jobs_returns_every_listing() {
    let repo = InMemoryJobRepository::new();
    let a = repo.create_job_listing(engineer()).await.unwrap();
    let b = repo
        .create_job_listing(NewJobListing {
            title: "Designer".into(),
            ..engineer()
        })
        .await
        .unwrap();

    let jobs = repo.get_jobs().await.unwrap();
    assert_eq!(jobs, vec![a, b]);
}

#[tokio::test]
async fn malformed_id_is_not_reported_as_not_found() {
    let repo = InMemoryJobRepository::new();
    let err = repo.get_job("not-a-valid-object-id").await.unwrap_err();
    assert!(matches!(err, DbError::InvalidId { .. }), "got {err}");
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let repo = InMemoryJobRepository::new();
    let err = repo.get_job(&ObjectId::new().to_hex()).await.unwrap_err();
    assert!(err.is_not_found());
}

// ============================================================
// Update
// ============================================================

#[tokio::test]
async fn empty_update_leaves_listing_unchanged() {
    let repo = InMemoryJobRepository::new();
    let created = repo.create_job_listing(engineer()).await.unwrap();

    let updated = repo
        .update_job_listing(&created.id.to_hex(), JobListingUpdate::default())
        .await
        .expect("no-op update is not an error");
    assert_eq!(updated, created);
}

#[tokio::test]
async fn single_field_update_touches_only_that_field() {
    let repo = InMemoryJobRepository::new();
    let created = repo.create_job_listing(engineer()).await.unwrap();
    let id = created.id.to_hex();

    let updates = [
        JobListingUpdate {
            title: Some("Staff Engineer".into()),
            ..Default::default()
        },
        JobListingUpdate {
            description: Some(String::new()),
            ..Default::default()
        },
        JobListingUpdate {
            url: Some("http://y.test".into()),
            ..Default::default()
        },
        JobListingUpdate {
            company: Some("NewCo".into()),
            ..Default::default()
        },
    ];

    for update in updates {
        let before = repo.get_job(&id).await.unwrap();
        let mut expected = before.clone();
        update.apply_to(&mut expected);

        let after = repo.update_job_listing(&id, update).await.unwrap();
        assert_eq!(after, expected);
        assert_eq!(after.id, before.id);
    }
}

#[tokio::test]
async fn update_of_missing_listing_is_not_found() {
    let repo = InMemoryJobRepository::new();
    let update = JobListingUpdate {
        title: Some("x".into()),
        ..Default::default()
    };
    let err = repo
        .update_job_listing(&ObjectId::new().to_hex(), update)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn update_with_malformed_id_is_rejected() {
    let repo = InMemoryJobRepository::new();
    let err = repo
        .update_job_listing("xyz", JobListingUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::InvalidId { .. }));
}

// ============================================================
// Delete
// ============================================================

#[tokio::test]
async fn delete_of_missing_listing_still_acknowledges() {
    let repo = InMemoryJobRepository::new();
    let id = ObjectId::new().to_hex();
    let ack = repo.delete_job_listing(&id).await.expect("idempotent delete");
    assert_eq!(ack.delete_job_id, id);
}

#[tokio::test]
async fn delete_with_malformed_id_is_rejected() {
    let repo = InMemoryJobRepository::new();
    let err = repo.delete_job_listing("nope").await.unwrap_err();
    assert!(matches!(err, DbError::InvalidId { .. }));
}

// ============================================================
// End-to-end lifecycle
// ============================================================

#[tokio::test]
async fn full_lifecycle() {
    let repo = InMemoryJobRepository::new();

    let created = repo.create_job_listing(engineer()).await.unwrap();
    let id = created.id.to_hex();
    assert_eq!(repo.get_job(&id).await.unwrap(), created);

    let updated = repo
        .update_job_listing(
            &id,
            JobListingUpdate {
                company: Some("NewCo".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.company, "NewCo");
    assert_eq!(updated.title, "Engineer");
    assert_eq!(updated.description, "Build things");
    assert_eq!(updated.url, "http://x.test");

    let ack = repo.delete_job_listing(&id).await.unwrap();
    assert_eq!(ack.delete_job_id, id);

    assert!(repo.get_job(&id).await.unwrap_err().is_not_found());
    assert!(repo.is_empty());
}

#[tokio::test]
async fn repository_is_usable_as_trait_object() {
    let seeded = JobListing {
        id: ObjectId::new(),
        title: "Seeded".into(),
        description: String::new(),
        url: String::new(),
        company: "Acme".into(),
    };
    let repo: std::sync::Arc<dyn JobRepository> =
        std::sync::Arc::new(InMemoryJobRepository::with_jobs(vec![seeded.clone()]));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let repo = repo.clone();
            let id = seeded.id.to_hex();
            tokio::spawn(async move { repo.get_job(&id).await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), seeded);
    }
}
