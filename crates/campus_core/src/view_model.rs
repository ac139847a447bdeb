use crate::{
    compute_visible, ordered_resources, presentation_for, AppState, CourseId, EmptyReason, Notice,
    Presentation, ResourceId, ResourceKind, User,
};

/// Everything a UI needs to render the portal, derived from `AppState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    /// Visible course cards after id filter and search, catalog order.
    pub courses: Vec<CourseCard>,
    /// Set when `courses` is empty, naming which filter ran dry.
    pub empty_reason: Option<EmptyReason>,
    /// The instructor's activation queue, unfiltered.
    pub pending: Vec<PendingCourse>,
    pub selected: Option<SelectedResource>,
    pub profile: Option<User>,
    pub notice: Option<Notice>,
    pub catalog_loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCard {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub creator_id: String,
    /// Resources in display order (ascending `order`, stable on ties).
    pub resources: Vec<ResourceRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRow {
    pub selected: bool,
    pub presentation: Presentation,
    pub id: ResourceId,
    pub name: String,
    pub kind: ResourceKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCourse {
    pub id: CourseId,
    pub title: String,
    pub description: String,
}

/// The resource currently open in the viewer pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedResource {
    pub course_title: String,
    pub name: String,
    pub locator: String,
    pub presentation: Presentation,
}

pub(crate) fn build(state: &AppState) -> AppViewModel {
    let visible = compute_visible(state.catalog(), state.id_filter(), Some(state.search_term()));
    let selection = state.selection();

    let courses = visible
        .courses
        .iter()
        .map(|course| CourseCard {
            id: course.id.clone(),
            title: course.title.clone(),
            description: course.description.clone(),
            tags: course.tags.clone(),
            creator_id: course.creator_id.clone(),
            resources: ordered_resources(&course.resources)
                .into_iter()
                .map(|resource| ResourceRow {
                    selected: selection == Some((course.id.as_str(), resource.id.as_str())),
                    presentation: presentation_for(&resource.kind),
                    id: resource.id,
                    name: resource.name,
                    kind: resource.kind,
                })
                .collect(),
        })
        .collect();

    let selected = selection.and_then(|(course_id, resource_id)| {
        state
            .catalog()
            .iter()
            .find(|course| course.id == course_id)
            .and_then(|course| {
                course
                    .resources
                    .iter()
                    .find(|resource| resource.id == resource_id)
                    .map(|resource| SelectedResource {
                        course_title: course.title.clone(),
                        name: resource.name.clone(),
                        locator: resource.locator.clone(),
                        presentation: presentation_for(&resource.kind),
                    })
            })
    });

    AppViewModel {
        courses,
        empty_reason: visible.empty_reason,
        pending: state
            .pending()
            .iter()
            .map(|course| PendingCourse {
                id: course.id.clone(),
                title: course.title.clone(),
                description: course.description.clone(),
            })
            .collect(),
        selected,
        profile: state.profile().cloned(),
        notice: state.notice().cloned(),
        catalog_loading: state.is_catalog_loading(),
    }
}
