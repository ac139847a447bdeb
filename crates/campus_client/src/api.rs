use async_trait::async_trait;

use campus_core::{Course, CourseDraft, Credentials, RegistrationDraft, Resource, ResourceUpload, User};

use crate::{ApiError, AuthToken, Session};

/// Remote portal operations. `HttpPortalApi` is the production
/// implementation; tests and embedders may substitute their own.
///
/// Every call takes the session context explicitly; authenticated endpoints
/// send its bearer token, and the server enforces authorization.
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// Active courses, the learner-facing catalog.
    async fn list_courses(&self, session: &Session) -> Result<Vec<Course>, ApiError>;

    /// Courses awaiting activation, the instructor's queue.
    async fn list_pending(&self, session: &Session) -> Result<Vec<Course>, ApiError>;

    /// Creates a course; the server answers with the created course in
    /// `Pending` state, or a conflict for a duplicate id.
    async fn create_course(
        &self,
        session: &Session,
        draft: &CourseDraft,
    ) -> Result<Course, ApiError>;

    /// Requests activation. The server decides whether the transition is
    /// legal for the course's current state.
    async fn activate_course(&self, session: &Session, course_id: &str) -> Result<(), ApiError>;

    /// Uploads a resource to a course (legal in either lifecycle state).
    async fn add_resource(
        &self,
        session: &Session,
        course_id: &str,
        upload: &ResourceUpload,
    ) -> Result<Resource, ApiError>;

    /// Subscribes the logged-in learner to a course. The server owns
    /// duplicate detection; repeating the call is harmless here.
    async fn subscribe(&self, session: &Session, course_id: &str) -> Result<(), ApiError>;

    /// The logged-in user's profile with subscribed courses and viewed
    /// flags.
    async fn fetch_profile(&self, session: &Session) -> Result<User, ApiError>;

    /// Creates an account. Validation happens locally before calling this.
    async fn register(&self, session: &Session, draft: &RegistrationDraft)
        -> Result<(), ApiError>;

    /// Exchanges credentials for the opaque bearer token that seeds an
    /// authorized session.
    async fn login(
        &self,
        session: &Session,
        credentials: &Credentials,
    ) -> Result<AuthToken, ApiError>;
}
