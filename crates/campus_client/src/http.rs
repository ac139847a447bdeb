use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;

use campus_core::{Course, CourseDraft, Credentials, RegistrationDraft, Resource, ResourceUpload, User};

use crate::dto::{
    CourseDto, CourseRef, CreateCourseRequest, LoginRequest, MessageBody, RegisterRequest,
    ResourceDto, UserDto,
};
use crate::error::{map_reqwest_error, ApiError, REJECTED_FALLBACK};
use crate::{AuthToken, PortalApi, Session};

/// Tunables for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// `PortalApi` over reqwest, speaking the JSON wire format of the portal
/// server.
#[derive(Debug, Clone)]
pub struct HttpPortalApi {
    client: reqwest::Client,
}

impl HttpPortalApi {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(map_reqwest_error)?;
        Ok(Self { client })
    }

    fn get(&self, session: &Session, path: &str) -> reqwest::RequestBuilder {
        authorize(self.client.get(session.endpoint(path)), session)
    }

    fn post(&self, session: &Session, path: &str) -> reqwest::RequestBuilder {
        authorize(self.client.post(session.endpoint(path)), session)
    }
}

fn authorize(builder: reqwest::RequestBuilder, session: &Session) -> reqwest::RequestBuilder {
    match session.token() {
        Some(token) => builder.header(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token.as_str()),
        ),
        None => builder,
    }
}

/// Sends a request and decodes the JSON success body.
async fn send_json<T: serde::de::DeserializeOwned>(
    builder: reqwest::RequestBuilder,
) -> Result<T, ApiError> {
    let response = builder.send().await.map_err(map_reqwest_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(error_from_response(status, response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Transport(format!("malformed response body: {err}")))
}

/// Sends a request where only success or failure matters.
async fn send_status(builder: reqwest::RequestBuilder) -> Result<(), ApiError> {
    let response = builder.send().await.map_err(map_reqwest_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(error_from_response(status, response).await);
    }
    Ok(())
}

/// Turns a non-success response into the error taxonomy. The server's own
/// message is kept verbatim when it provides one.
async fn error_from_response(status: reqwest::StatusCode, response: reqwest::Response) -> ApiError {
    let message = response
        .json::<MessageBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| REJECTED_FALLBACK.to_string());
    if status == reqwest::StatusCode::CONFLICT {
        ApiError::Conflict { message }
    } else {
        ApiError::Rejected {
            status: status.as_u16(),
            message,
        }
    }
}

fn decode_courses(dtos: Vec<CourseDto>) -> Result<Vec<Course>, ApiError> {
    dtos.into_iter().map(CourseDto::into_course).collect()
}

#[async_trait]
impl PortalApi for HttpPortalApi {
    async fn list_courses(&self, session: &Session) -> Result<Vec<Course>, ApiError> {
        let dtos: Vec<CourseDto> = send_json(self.get(session, "/courses")).await?;
        decode_courses(dtos)
    }

    async fn list_pending(&self, session: &Session) -> Result<Vec<Course>, ApiError> {
        let dtos: Vec<CourseDto> = send_json(self.get(session, "/courses/pending")).await?;
        decode_courses(dtos)
    }

    async fn create_course(
        &self,
        session: &Session,
        draft: &CourseDraft,
    ) -> Result<Course, ApiError> {
        let request = CreateCourseRequest {
            id: &draft.id,
            title: &draft.title,
            description: &draft.description,
            tags: &draft.tags,
        };
        let dto: CourseDto = send_json(self.post(session, "/courses").json(&request)).await?;
        dto.into_course()
    }

    async fn activate_course(&self, session: &Session, course_id: &str) -> Result<(), ApiError> {
        let request = CourseRef { id: course_id };
        send_status(self.post(session, "/courses/activate").json(&request)).await
    }

    async fn add_resource(
        &self,
        session: &Session,
        course_id: &str,
        upload: &ResourceUpload,
    ) -> Result<Resource, ApiError> {
        let form = multipart::Form::new()
            .part(
                "file",
                multipart::Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone()),
            )
            .text("order", upload.order.to_string())
            .text("type", upload.kind.as_wire().to_string());
        let path = format!("/courses/{course_id}/resources");
        let dto: ResourceDto = send_json(self.post(session, &path).multipart(form)).await?;
        Ok(dto.into_resource())
    }

    async fn subscribe(&self, session: &Session, course_id: &str) -> Result<(), ApiError> {
        let request = CourseRef { id: course_id };
        send_status(self.post(session, "/courses/subscribe").json(&request)).await
    }

    async fn fetch_profile(&self, session: &Session) -> Result<User, ApiError> {
        let dto: UserDto = send_json(self.get(session, "/profile")).await?;
        Ok(dto.into_user())
    }

    async fn register(
        &self,
        session: &Session,
        draft: &RegistrationDraft,
    ) -> Result<(), ApiError> {
        let request = RegisterRequest {
            username: &draft.username,
            first_name: &draft.first_name,
            last_name: &draft.last_name,
            password: &draft.password,
        };
        send_status(self.post(session, "/register").json(&request)).await
    }

    async fn login(
        &self,
        session: &Session,
        credentials: &Credentials,
    ) -> Result<AuthToken, ApiError> {
        let request = LoginRequest {
            username: &credentials.username,
            password: &credentials.password,
        };
        let body: MessageBody = send_json(self.post(session, "/login").json(&request)).await?;
        // The server hands the token back in its generic message field.
        body.message
            .map(AuthToken::new)
            .ok_or_else(|| ApiError::Transport("login response carried no token".to_string()))
    }
}
