//! Shared test utilities for tutor-db unit tests.

pub(crate) mod helpers {
    use crate::TutorDb;
    use crate::service::TutorService;

    /// Create an in-memory `TutorService`.
    pub async fn test_service() -> TutorService {
        let db = TutorDb::open_local(":memory:").await.unwrap();
        TutorService::from_db(db)
    }

    /// Register a user and return its id.
    pub async fn seed_user(svc: &TutorService, username: &str) -> String {
        svc.create_user(username).await.unwrap().id
    }
}
