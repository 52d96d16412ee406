use crate::domain::work_status::WorkStatus;

/// A record that can be listed in a view and matched by the search box.
pub trait Searchable {
    fn work_status(&self) -> Option<&WorkStatus>;

    /// Name, UAN number and aadhar-card name, in that order.
    fn search_fields(&self) -> [Option<&str>; 3];
}

/// Which status-scoped subset of the full collection a view lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewScope {
    /// "pending" or "updated", in any letter case.
    PendingQueue,
    /// Exactly "Completed".
    Completed,
}

impl ViewScope {
    pub fn admits(self, status: Option<&WorkStatus>) -> bool {
        match (self, status) {
            (ViewScope::PendingQueue, Some(status)) => status.is_pending_queue(),
            (ViewScope::Completed, Some(status)) => status.is_completed(),
            (_, None) => false,
        }
    }
}

/// Case-insensitive substring match over the searchable fields.
///
/// An empty query matches every record, including ones whose searchable
/// fields are all missing.
pub fn matches_query<T: Searchable>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    item.search_fields()
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Records of `items` in `scope` that match `query`, in source order.
pub fn filter_visible<'a, T: Searchable>(items: &'a [T], scope: ViewScope, query: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| scope.admits(item.work_status()))
        .filter(|item| matches_query(*item, query))
        .collect()
}
