use crate::Course;

/// Why a filtered catalog came back empty. Callers word their empty-state
/// message differently depending on which filter ran dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The catalog store itself holds no courses.
    NoCourses,
    /// An id filter was set and no course carries that id.
    IdFilterUnmatched,
    /// The search term matched nothing in the (possibly id-reduced) set.
    SearchUnmatched,
}

/// Result of a catalog filter pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleCourses<'a> {
    pub courses: Vec<&'a Course>,
    pub empty_reason: Option<EmptyReason>,
}

/// Derives the visible subset of the catalog.
///
/// The id filter reduces the set first (exact match, at most one hit since
/// ids are unique); the search term then narrows the reduced set with a
/// case-insensitive substring match over title, description, and tags. The
/// filters compose conjunctively, so a search while an id filter is active
/// can legitimately narrow a single-course view to nothing. Catalog order is
/// preserved; nothing is re-sorted.
pub fn compute_visible<'a>(
    courses: &'a [Course],
    id_filter: Option<&str>,
    search_term: Option<&str>,
) -> VisibleCourses<'a> {
    if courses.is_empty() {
        return VisibleCourses {
            courses: Vec::new(),
            empty_reason: Some(EmptyReason::NoCourses),
        };
    }

    let by_id: Vec<&Course> = match id_filter {
        Some(id) => courses.iter().filter(|course| course.id == id).collect(),
        None => courses.iter().collect(),
    };
    if by_id.is_empty() {
        return VisibleCourses {
            courses: Vec::new(),
            empty_reason: Some(EmptyReason::IdFilterUnmatched),
        };
    }

    // A blank or whitespace-only term is treated as no search at all.
    let term = search_term.map(str::trim).filter(|term| !term.is_empty());
    let matched: Vec<&Course> = match term {
        Some(term) => {
            let needle = term.to_lowercase();
            by_id
                .into_iter()
                .filter(|course| matches_search(course, &needle))
                .collect()
        }
        None => by_id,
    };

    let empty_reason = if matched.is_empty() {
        Some(EmptyReason::SearchUnmatched)
    } else {
        None
    };
    VisibleCourses {
        courses: matched,
        empty_reason,
    }
}

fn matches_search(course: &Course, needle: &str) -> bool {
    course.title.to_lowercase().contains(needle)
        || course.description.to_lowercase().contains(needle)
        || course
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}
