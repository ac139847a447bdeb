//! Campus core: pure state machine and view-model helpers for the course
//! portal. No IO lives here; remote work is requested through effects and
//! reported back as messages.
mod course;
mod effect;
mod filter;
mod msg;
mod presentation;
mod state;
mod update;
mod validate;
mod view_model;

pub use course::{
    ordered_resources, Course, CourseId, CourseStatus, Resource, ResourceId, ResourceKind,
    SubscribedCourse, User, ViewedResource, TAG_VOCABULARY,
};
pub use effect::{Effect, ResourceUpload};
pub use filter::{compute_visible, EmptyReason, VisibleCourses};
pub use msg::Msg;
pub use presentation::{infer_kind_from_filename, presentation_for, Presentation};
pub use state::{AppState, Notice};
pub use update::update;
pub use validate::{
    resolve_upload, validate_course_draft, validate_credentials, validate_registration,
    CourseDraft, Credentials, RegistrationDraft, UploadDraft, ValidationError, MIN_PASSWORD_LEN,
};
pub use view_model::{AppViewModel, CourseCard, PendingCourse, ResourceRow, SelectedResource};
