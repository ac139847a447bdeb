use crate::{Course, CourseDraft, CourseId, ResourceId, UploadDraft, User};

/// Events consumed by the pure update loop. Completion messages carry either
/// decoded domain data or a failure message already worded for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The dashboard opened or the user asked for a refresh.
    CatalogRequested,
    CatalogLoaded(Vec<Course>),
    CatalogLoadFailed(String),
    /// The instructor's activation queue was opened.
    PendingRequested,
    PendingLoaded(Vec<Course>),
    PendingLoadFailed(String),
    /// The profile screen was opened.
    ProfileRequested,
    ProfileLoaded(User),
    ProfileLoadFailed(String),
    /// User edited the catalog search box.
    SearchChanged(String),
    /// An exact-id filter was set or cleared (e.g. following a profile link).
    IdFilterChanged(Option<CourseId>),
    /// User picked a resource to view.
    ResourceSelected {
        course_id: CourseId,
        resource_id: ResourceId,
    },
    SubscribeClicked {
        course_id: CourseId,
    },
    SubscribeFinished {
        course_id: CourseId,
        outcome: Result<(), String>,
    },
    /// The create-course form was submitted.
    CreateSubmitted(CourseDraft),
    CreateFinished {
        course_id: CourseId,
        outcome: Result<(), String>,
    },
    ActivateClicked {
        course_id: CourseId,
    },
    ActivateFinished {
        course_id: CourseId,
        outcome: Result<(), String>,
    },
    /// The upload form was submitted for a course.
    UploadSubmitted {
        course_id: CourseId,
        draft: UploadDraft,
    },
    UploadFinished {
        course_id: CourseId,
        outcome: Result<(), String>,
    },
    /// User closed the success/error banner.
    NoticeDismissed,
    /// Fallback for placeholder wiring.
    NoOp,
}
