use crate::{
    resolve_upload, validate_course_draft, AppState, Effect, Msg, Notice,
};

/// Pure update function: applies a message to state and returns any effects.
///
/// Validation failures are handled entirely here: they become an error
/// notice and produce no effect, so no remote call is ever issued for input
/// the client already knows is bad. After every successful mutating action
/// the relevant listings are re-fetched so the catalog store stays the
/// single source of truth.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::CatalogRequested => {
            state.begin_catalog_load();
            vec![Effect::FetchCatalog]
        }
        Msg::CatalogLoaded(courses) => {
            state.set_catalog(courses);
            Vec::new()
        }
        Msg::CatalogLoadFailed(message) => {
            state.catalog_load_failed();
            state.set_notice(Notice::Error(message));
            Vec::new()
        }
        Msg::PendingRequested => vec![Effect::FetchPending],
        Msg::PendingLoaded(courses) => {
            state.set_pending(courses);
            Vec::new()
        }
        Msg::PendingLoadFailed(message) => {
            state.set_notice(Notice::Error(message));
            Vec::new()
        }
        Msg::ProfileRequested => vec![Effect::FetchProfile],
        Msg::ProfileLoaded(user) => {
            state.set_profile(user);
            Vec::new()
        }
        Msg::ProfileLoadFailed(message) => {
            state.set_notice(Notice::Error(message));
            Vec::new()
        }
        Msg::SearchChanged(term) => {
            state.set_search_term(term);
            Vec::new()
        }
        Msg::IdFilterChanged(filter) => {
            state.set_id_filter(filter);
            Vec::new()
        }
        Msg::ResourceSelected {
            course_id,
            resource_id,
        } => {
            state.select_resource(course_id, resource_id);
            Vec::new()
        }
        Msg::SubscribeClicked { course_id } => vec![Effect::Subscribe { course_id }],
        Msg::SubscribeFinished { outcome, .. } => match outcome {
            Ok(()) => {
                state.set_notice(Notice::Success("Subscribed to the course.".to_string()));
                vec![Effect::FetchProfile]
            }
            Err(message) => {
                state.set_notice(Notice::Error(message));
                Vec::new()
            }
        },
        Msg::CreateSubmitted(draft) => match validate_course_draft(&draft) {
            Ok(()) => vec![Effect::CreateCourse(draft)],
            Err(err) => {
                state.set_notice(Notice::Error(err.to_string()));
                Vec::new()
            }
        },
        Msg::CreateFinished { course_id, outcome } => match outcome {
            Ok(()) => {
                state.set_notice(Notice::Success(format!("Course {course_id} created.")));
                vec![Effect::FetchPending]
            }
            Err(message) => {
                state.set_notice(Notice::Error(message));
                Vec::new()
            }
        },
        // The current status is deliberately not re-checked before sending:
        // the server is the authority on whether activation is legal.
        Msg::ActivateClicked { course_id } => vec![Effect::ActivateCourse { course_id }],
        Msg::ActivateFinished { course_id, outcome } => match outcome {
            Ok(()) => {
                state.set_notice(Notice::Success(format!("Course {course_id} activated.")));
                vec![Effect::FetchPending, Effect::FetchCatalog]
            }
            Err(message) => {
                state.set_notice(Notice::Error(message));
                Vec::new()
            }
        },
        // Uploads are legal in either lifecycle state; there is no gating
        // on the course's current status.
        Msg::UploadSubmitted { course_id, draft } => match resolve_upload(draft) {
            Ok(upload) => vec![Effect::UploadResource { course_id, upload }],
            Err(err) => {
                state.set_notice(Notice::Error(err.to_string()));
                Vec::new()
            }
        },
        Msg::UploadFinished { outcome, .. } => match outcome {
            Ok(()) => {
                state.set_notice(Notice::Success("Resource uploaded.".to_string()));
                vec![Effect::FetchPending, Effect::FetchCatalog]
            }
            Err(message) => {
                state.set_notice(Notice::Error(message));
                Vec::new()
            }
        },
        Msg::NoticeDismissed => {
            state.clear_notice();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
