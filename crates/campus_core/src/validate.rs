use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::{infer_kind_from_filename, ResourceKind, ResourceUpload, TAG_VOCABULARY};

/// Minimum accepted password length for registration.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Local form-validation failures. Raised before any remote call; the
/// messages are worded for direct display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("select at least one tag")]
    NoTags,
    #[error("unknown tag: {0}")]
    UnknownTag(String),
    #[error("enter a valid email address")]
    InvalidEmail,
    #[error("the password must be at least {MIN_PASSWORD_LEN} characters")]
    ShortPassword,
    #[error("choose a file to upload")]
    NoFile,
    #[error("the order must be a positive number")]
    NonPositiveOrder,
    #[error("could not determine the resource type; choose one explicitly")]
    UnknownKind,
}

/// Instructor input for a new course.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseDraft {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Checks a course draft: id, title, and description must be non-blank and
/// at least one tag from the fixed vocabulary must be chosen.
pub fn validate_course_draft(draft: &CourseDraft) -> Result<(), ValidationError> {
    if draft.id.trim().is_empty() {
        return Err(ValidationError::Required("the course id"));
    }
    if draft.title.trim().is_empty() {
        return Err(ValidationError::Required("the title"));
    }
    if draft.description.trim().is_empty() {
        return Err(ValidationError::Required("the description"));
    }
    if draft.tags.is_empty() {
        return Err(ValidationError::NoTags);
    }
    if let Some(unknown) = draft
        .tags
        .iter()
        .find(|tag| !TAG_VOCABULARY.contains(&tag.as_str()))
    {
        return Err(ValidationError::UnknownTag(unknown.clone()));
    }
    Ok(())
}

/// Sign-up input. The username doubles as the account email.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationDraft {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

pub fn validate_registration(draft: &RegistrationDraft) -> Result<(), ValidationError> {
    if draft.username.trim().is_empty() {
        return Err(ValidationError::Required("the email address"));
    }
    if draft.first_name.trim().is_empty() {
        return Err(ValidationError::Required("the first name"));
    }
    if draft.last_name.trim().is_empty() {
        return Err(ValidationError::Required("the last name"));
    }
    if !EMAIL_SHAPE.is_match(&draft.username) {
        return Err(ValidationError::InvalidEmail);
    }
    if draft.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::ShortPassword);
    }
    Ok(())
}

/// Login input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub fn validate_credentials(credentials: &Credentials) -> Result<(), ValidationError> {
    if credentials.username.trim().is_empty() {
        return Err(ValidationError::Required("the email address"));
    }
    if credentials.password.is_empty() {
        return Err(ValidationError::Required("the password"));
    }
    Ok(())
}

/// Instructor input for a resource upload. `kind` is `None` until either the
/// user picks one or the filename extension supplies a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadDraft {
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// Zero means the order field was left empty.
    pub order: u32,
    pub kind: Option<ResourceKind>,
}

/// Resolves an upload draft into a submittable upload, inferring the kind
/// from the filename when none was chosen explicitly.
pub fn resolve_upload(draft: UploadDraft) -> Result<ResourceUpload, ValidationError> {
    if draft.file_name.trim().is_empty() {
        return Err(ValidationError::NoFile);
    }
    if draft.order == 0 {
        return Err(ValidationError::NonPositiveOrder);
    }
    let kind = match draft.kind {
        Some(kind) => kind,
        None => infer_kind_from_filename(&draft.file_name).ok_or(ValidationError::UnknownKind)?,
    };
    Ok(ResourceUpload {
        file_name: draft.file_name,
        bytes: draft.bytes,
        order: draft.order,
        kind,
    })
}
