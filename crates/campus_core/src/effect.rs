use crate::{CourseDraft, CourseId, ResourceKind};

/// Remote operations requested by the update loop and executed by the
/// client boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchCatalog,
    FetchPending,
    FetchProfile,
    CreateCourse(CourseDraft),
    ActivateCourse { course_id: CourseId },
    Subscribe { course_id: CourseId },
    UploadResource { course_id: CourseId, upload: ResourceUpload },
}

/// A validated resource upload, ready for multipart submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub order: u32,
    pub kind: ResourceKind,
}
