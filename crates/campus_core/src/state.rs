use crate::view_model::AppViewModel;
use crate::{Course, CourseId, ResourceId, User};

/// Outcome banner surfaced to the user after an action or failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// The catalog store plus everything the update loop tracks between renders.
///
/// Single writer (the update function), any number of readers. All remote
/// data lands here through completion messages; derived views are computed
/// on demand from this one source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    catalog: Vec<Course>,
    pending: Vec<Course>,
    profile: Option<User>,
    id_filter: Option<CourseId>,
    search_term: String,
    selected: Option<(CourseId, ResourceId)>,
    notice: Option<Notice>,
    catalog_loading: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last-fetched active courses, in server order.
    pub fn catalog(&self) -> &[Course] {
        &self.catalog
    }

    /// The instructor's activation queue.
    pub fn pending(&self) -> &[Course] {
        &self.pending
    }

    pub fn profile(&self) -> Option<&User> {
        self.profile.as_ref()
    }

    pub fn id_filter(&self) -> Option<&str> {
        self.id_filter.as_deref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selection(&self) -> Option<(&str, &str)> {
        self.selected
            .as_ref()
            .map(|(course_id, resource_id)| (course_id.as_str(), resource_id.as_str()))
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_catalog_loading(&self) -> bool {
        self.catalog_loading
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        crate::view_model::build(self)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn begin_catalog_load(&mut self) {
        self.catalog_loading = true;
        self.mark_dirty();
    }

    pub(crate) fn set_catalog(&mut self, courses: Vec<Course>) {
        self.catalog = courses;
        self.catalog_loading = false;
        self.mark_dirty();
    }

    pub(crate) fn catalog_load_failed(&mut self) {
        self.catalog_loading = false;
        self.mark_dirty();
    }

    pub(crate) fn set_pending(&mut self, courses: Vec<Course>) {
        self.pending = courses;
        self.mark_dirty();
    }

    pub(crate) fn set_profile(&mut self, user: User) {
        self.profile = Some(user);
        self.mark_dirty();
    }

    pub(crate) fn set_search_term(&mut self, term: String) {
        self.search_term = term;
        self.mark_dirty();
    }

    pub(crate) fn set_id_filter(&mut self, filter: Option<CourseId>) {
        self.id_filter = filter;
        self.mark_dirty();
    }

    pub(crate) fn select_resource(&mut self, course_id: CourseId, resource_id: ResourceId) {
        self.selected = Some((course_id, resource_id));
        self.mark_dirty();
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.mark_dirty();
    }

    pub(crate) fn clear_notice(&mut self) {
        if self.notice.take().is_some() {
            self.mark_dirty();
        }
    }
}
