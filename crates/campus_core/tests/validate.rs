use campus_core::{
    resolve_upload, validate_course_draft, validate_credentials, validate_registration,
    CourseDraft, Credentials, RegistrationDraft, ResourceKind, UploadDraft, ValidationError,
};

fn valid_draft() -> CourseDraft {
    CourseDraft {
        id: "cloud201".to_string(),
        title: "Serverless Patterns".to_string(),
        description: "Deploying without servers".to_string(),
        tags: vec!["Cloud".to_string()],
    }
}

#[test]
fn complete_course_draft_passes() {
    assert_eq!(validate_course_draft(&valid_draft()), Ok(()));
}

#[test]
fn blank_required_fields_are_rejected() {
    let mut draft = valid_draft();
    draft.id = "  ".to_string();
    assert!(matches!(
        validate_course_draft(&draft),
        Err(ValidationError::Required(_))
    ));

    let mut draft = valid_draft();
    draft.title = String::new();
    assert!(matches!(
        validate_course_draft(&draft),
        Err(ValidationError::Required(_))
    ));

    let mut draft = valid_draft();
    draft.description = String::new();
    assert!(matches!(
        validate_course_draft(&draft),
        Err(ValidationError::Required(_))
    ));
}

#[test]
fn empty_tag_set_is_rejected() {
    let mut draft = valid_draft();
    draft.tags.clear();
    assert_eq!(validate_course_draft(&draft), Err(ValidationError::NoTags));
}

#[test]
fn tags_outside_the_vocabulary_are_rejected() {
    let mut draft = valid_draft();
    draft.tags.push("Blockchain".to_string());
    assert_eq!(
        validate_course_draft(&draft),
        Err(ValidationError::UnknownTag("Blockchain".to_string()))
    );
}

fn valid_registration() -> RegistrationDraft {
    RegistrationDraft {
        username: "ines@example.com".to_string(),
        first_name: "Ines".to_string(),
        last_name: "Moreno".to_string(),
        password: "hunter22".to_string(),
    }
}

#[test]
fn complete_registration_passes() {
    assert_eq!(validate_registration(&valid_registration()), Ok(()));
}

#[test]
fn malformed_email_is_rejected() {
    for bad in ["not-an-email", "a@b", "two words@example.com", "@example.com"] {
        let mut draft = valid_registration();
        draft.username = bad.to_string();
        assert_eq!(
            validate_registration(&draft),
            Err(ValidationError::InvalidEmail),
            "email {bad}"
        );
    }
}

#[test]
fn short_password_is_rejected() {
    let mut draft = valid_registration();
    draft.password = "five5".to_string();
    assert_eq!(
        validate_registration(&draft),
        Err(ValidationError::ShortPassword)
    );
}

#[test]
fn registration_requires_every_field() {
    let mut draft = valid_registration();
    draft.first_name = String::new();
    assert!(matches!(
        validate_registration(&draft),
        Err(ValidationError::Required(_))
    ));
}

#[test]
fn credentials_require_both_fields() {
    assert!(validate_credentials(&Credentials {
        username: "ines@example.com".to_string(),
        password: "hunter22".to_string(),
    })
    .is_ok());
    assert!(matches!(
        validate_credentials(&Credentials {
            username: String::new(),
            password: "hunter22".to_string(),
        }),
        Err(ValidationError::Required(_))
    ));
    assert!(matches!(
        validate_credentials(&Credentials {
            username: "ines@example.com".to_string(),
            password: String::new(),
        }),
        Err(ValidationError::Required(_))
    ));
}

fn upload_draft(file_name: &str, order: u32, kind: Option<ResourceKind>) -> UploadDraft {
    UploadDraft {
        file_name: file_name.to_string(),
        bytes: b"content".to_vec(),
        order,
        kind,
    }
}

#[test]
fn upload_kind_defaults_from_the_extension() {
    let upload = resolve_upload(upload_draft("lecture.mp4", 1, None)).expect("resolves");
    assert_eq!(upload.kind, ResourceKind::Video);
}

#[test]
fn explicit_upload_kind_wins_over_the_extension() {
    let upload =
        resolve_upload(upload_draft("lecture.mp4", 1, Some(ResourceKind::Text))).expect("resolves");
    assert_eq!(upload.kind, ResourceKind::Text);
}

#[test]
fn upload_without_any_kind_is_rejected() {
    assert_eq!(
        resolve_upload(upload_draft("archive.zip", 1, None)),
        Err(ValidationError::UnknownKind)
    );
}

#[test]
fn upload_order_must_be_positive() {
    assert_eq!(
        resolve_upload(upload_draft("lecture.mp4", 0, None)),
        Err(ValidationError::NonPositiveOrder)
    );
}

#[test]
fn upload_requires_a_file() {
    assert_eq!(
        resolve_upload(upload_draft("", 1, None)),
        Err(ValidationError::NoFile)
    );
}
