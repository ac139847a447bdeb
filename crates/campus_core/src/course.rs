pub type CourseId = String;
pub type ResourceId = String;

/// Fixed tag vocabulary offered by the authoring flow. Drafts carrying a tag
/// outside this list fail validation before any remote call.
pub const TAG_VOCABULARY: &[&str] = &[
    "Fullstack",
    "APIs & Integrations",
    "Cloud",
    "Data Engineering",
];

/// Lifecycle state of a course. Courses are created `Pending` and become
/// `Active` through an explicit activation action; there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseStatus {
    Pending,
    Active,
}

/// Declared content type of a resource. `Other` holds type strings the
/// server introduces before this client knows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKind {
    Video,
    Pdf,
    WordDocument,
    SlideDeck,
    Text,
    Other(String),
}

impl ResourceKind {
    /// Maps a wire type string to a kind. Total: unrecognized strings land
    /// in `Other` instead of failing the decode.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "video" => ResourceKind::Video,
            "pdf" => ResourceKind::Pdf,
            "word-document" => ResourceKind::WordDocument,
            "slide-deck" => ResourceKind::SlideDeck,
            "text" => ResourceKind::Text,
            other => ResourceKind::Other(other.to_string()),
        }
    }

    /// The wire type string for this kind.
    pub fn as_wire(&self) -> &str {
        match self {
            ResourceKind::Video => "video",
            ResourceKind::Pdf => "pdf",
            ResourceKind::WordDocument => "word-document",
            ResourceKind::SlideDeck => "slide-deck",
            ResourceKind::Text => "text",
            ResourceKind::Other(raw) => raw,
        }
    }

    /// Upload-time default for a filename extension. Case-insensitive;
    /// unknown extensions infer nothing and leave the choice to the user.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "mp4" => Some(ResourceKind::Video),
            "pdf" => Some(ResourceKind::Pdf),
            "docx" | "doc" => Some(ResourceKind::WordDocument),
            "pptx" | "ppt" => Some(ResourceKind::SlideDeck),
            "txt" => Some(ResourceKind::Text),
            _ => None,
        }
    }
}

/// A course as held in the catalog store. The `id` is instructor-assigned,
/// globally unique, and the join key for every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub creator_id: String,
    pub status: CourseStatus,
    pub resources: Vec<Resource>,
}

/// A single orderable content item belonging to a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
    pub kind: ResourceKind,
    /// Instructor-supplied display position. Duplicates are allowed; ties
    /// keep their original insertion order.
    pub order: u32,
    /// Opaque reference used to retrieve the resource content.
    pub locator: String,
}

/// Stable ascending sort by `order`. The input is left untouched so callers
/// can re-render repeatedly from the same underlying data.
pub fn ordered_resources(resources: &[Resource]) -> Vec<Resource> {
    let mut ordered = resources.to_vec();
    ordered.sort_by_key(|resource| resource.order);
    ordered
}

/// Profile data for the logged-in user, with subscribed courses and their
/// per-resource viewed flags. Viewed-state is reported by the server and
/// only rendered here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub courses: Vec<SubscribedCourse>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribedCourse {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub resources: Vec<ViewedResource>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewedResource {
    pub id: ResourceId,
    pub name: String,
    pub viewed: bool,
}
