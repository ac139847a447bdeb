//! Wire schemas for the portal API. Responses are decoded into these typed
//! shapes and converted to domain types on receipt; any mismatch becomes a
//! transport error instead of an undefined field propagating.

use serde::{Deserialize, Serialize};

use campus_core::{
    Course, CourseStatus, Resource, ResourceKind, SubscribedCourse, User, ViewedResource,
};

use crate::error::ApiError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CourseDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub creator_id: String,
    pub status: String,
    #[serde(default)]
    pub resources: Vec<ResourceDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResourceDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub order: u32,
    pub locator: String,
}

impl CourseDto {
    pub(crate) fn into_course(self) -> Result<Course, ApiError> {
        let status = parse_status(&self.status)?;
        Ok(Course {
            id: self.id,
            title: self.title,
            description: self.description,
            tags: self.tags,
            creator_id: self.creator_id,
            status,
            resources: self
                .resources
                .into_iter()
                .map(ResourceDto::into_resource)
                .collect(),
        })
    }
}

impl ResourceDto {
    pub(crate) fn into_resource(self) -> Resource {
        Resource {
            id: self.id,
            name: self.name,
            // Unknown type strings survive as `Other`; presentation fails
            // closed to download for those.
            kind: ResourceKind::from_wire(&self.kind),
            order: self.order,
            locator: self.locator,
        }
    }
}

fn parse_status(raw: &str) -> Result<CourseStatus, ApiError> {
    if raw.eq_ignore_ascii_case("pending") {
        Ok(CourseStatus::Pending)
    } else if raw.eq_ignore_ascii_case("active") {
        Ok(CourseStatus::Active)
    } else {
        Err(ApiError::Transport(format!("unknown course status: {raw}")))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserDto {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub courses: Vec<SubscribedCourseDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubscribedCourseDto {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub resources: Vec<ViewedResourceDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ViewedResourceDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub viewed: bool,
}

impl UserDto {
    pub(crate) fn into_user(self) -> User {
        User {
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            courses: self
                .courses
                .into_iter()
                .map(|course| SubscribedCourse {
                    id: course.id,
                    title: course.title,
                    description: course.description,
                    resources: course
                        .resources
                        .into_iter()
                        .map(|resource| ViewedResource {
                            id: resource.id,
                            name: resource.name,
                            viewed: resource.viewed,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateCourseRequest<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub tags: &'a [String],
}

/// Body for the activate and subscribe operations, which address a course
/// by id alone.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CourseRef<'a> {
    pub id: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterRequest<'a> {
    pub username: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub password: &'a str,
}

/// Generic `{ "message": ... }` envelope used for status responses and error
/// bodies. Login also hands the issued token back in this field.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}
