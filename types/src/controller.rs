//! Per-screen listing state and its reducer.

use serde::{Deserialize, Serialize};

use crate::filter::FilterDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

/// The combined query/filter/sort/page/view parameters driving a single
/// listing screen's data fetch.
///
/// A screen owns exactly one `Controller` and replaces it wholesale through
/// [`Controller::apply`] on every interaction; the value is never mutated in
/// place. Filter insertion order is preserved. The struct crosses the
/// server-function boundary, so it serializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Controller {
    pub query: String,
    pub filters: Vec<FilterDescriptor>,
    pub sort: SortDir,
    #[serde(rename = "sortBy")]
    pub sort_by: String,
    /// 0-indexed; the pagination bar renders it 1-indexed.
    pub page: u32,
    pub view: String,
}

impl Default for Controller {
    fn default() -> Self {
        Self {
            query: String::new(),
            filters: Vec::new(),
            sort: SortDir::Desc,
            sort_by: "updatedAt".into(),
            page: 0,
            view: "all".into(),
        }
    }
}

/// A discrete user interaction on a listing screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerAction {
    QueryChanged(String),
    ViewChanged(String),
    FiltersApplied(Vec<FilterDescriptor>),
    /// Distinct from applying an empty list so consumers can tell an
    /// explicit clear from a cancelled dialog (which emits nothing).
    FiltersCleared,
    /// Carries the 1-indexed page number shown by the pagination bar.
    PageChanged(u32),
    /// Carries the clicked column name.
    SortChanged(String),
}

impl Controller {
    /// Pure transition: returns the next state, leaving `self` untouched.
    ///
    /// Every action except `PageChanged` snaps back to the first page;
    /// changing the result set while sitting on a stale page is disallowed.
    pub fn apply(&self, action: ControllerAction) -> Controller {
        let mut next = self.clone();
        next.page = 0;

        match action {
            ControllerAction::QueryChanged(query) => next.query = query,
            ControllerAction::ViewChanged(view) => next.view = view,
            ControllerAction::FiltersApplied(filters) => next.filters = filters,
            ControllerAction::FiltersCleared => next.filters.clear(),
            ControllerAction::PageChanged(page) => next.page = page.saturating_sub(1),
            ControllerAction::SortChanged(column) => {
                let ascending = self.sort_by == column && self.sort == SortDir::Asc;
                next.sort = if ascending { SortDir::Desc } else { SortDir::Asc };
                next.sort_by = column;
            }
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterDescriptor, FilterOperator, Property, PropertyType};

    fn name_filter(value: &str) -> FilterDescriptor {
        FilterDescriptor::new(
            Property::new("fullName", "Name", PropertyType::String),
            FilterOperator::Contains,
            Some(value.into()),
        )
        .unwrap()
    }

    fn on_page(page: u32) -> Controller {
        Controller {
            page,
            ..Controller::default()
        }
    }

    #[test]
    fn default_state() {
        let controller = Controller::default();
        assert_eq!(controller.query, "");
        assert!(controller.filters.is_empty());
        assert_eq!(controller.sort, SortDir::Desc);
        assert_eq!(controller.sort_by, "updatedAt");
        assert_eq!(controller.page, 0);
        assert_eq!(controller.view, "all");
    }

    #[test]
    fn query_change_resets_page() {
        let next = on_page(4).apply(ControllerAction::QueryChanged("blue".into()));
        assert_eq!(next.query, "blue");
        assert_eq!(next.page, 0);
    }

    #[test]
    fn view_change_resets_page() {
        let next = on_page(2).apply(ControllerAction::ViewChanged("isReturning".into()));
        assert_eq!(next.view, "isReturning");
        assert_eq!(next.page, 0);
    }

    #[test]
    fn applying_filters_resets_page_and_preserves_order() {
        let filters = vec![name_filter("a"), name_filter("b")];
        let next = on_page(7).apply(ControllerAction::FiltersApplied(filters.clone()));
        assert_eq!(next.filters, filters);
        assert_eq!(next.page, 0);
    }

    #[test]
    fn clearing_is_distinguishable_from_never_applied() {
        let applied = Controller::default()
            .apply(ControllerAction::FiltersApplied(vec![name_filter("a")]));
        assert_eq!(applied.filters.len(), 1);

        let cleared = applied.apply(ControllerAction::FiltersCleared);
        assert!(cleared.filters.is_empty());
        // the sequence of states (non-empty then empty) is observable even
        // though the cleared state equals the default one
        assert_ne!(applied.filters, cleared.filters);
    }

    #[test]
    fn page_change_converts_from_one_indexed() {
        let next = Controller::default().apply(ControllerAction::PageChanged(3));
        assert_eq!(next.page, 2);
        // a zero from a misbehaving pager saturates instead of wrapping
        let next = Controller::default().apply(ControllerAction::PageChanged(0));
        assert_eq!(next.page, 0);
    }

    #[test]
    fn sort_toggles_on_repeated_clicks() {
        let first = Controller::default().apply(ControllerAction::SortChanged("fullName".into()));
        assert_eq!(first.sort_by, "fullName");
        assert_eq!(first.sort, SortDir::Asc);

        let second = first.apply(ControllerAction::SortChanged("fullName".into()));
        assert_eq!(second.sort, SortDir::Desc);

        let third = second.apply(ControllerAction::SortChanged("fullName".into()));
        assert_eq!(third.sort, SortDir::Asc);
    }

    #[test]
    fn sorting_a_different_column_starts_ascending() {
        let sorted = Controller::default().apply(ControllerAction::SortChanged("fullName".into()));
        let other = sorted.apply(ControllerAction::SortChanged("createdAt".into()));
        assert_eq!(other.sort_by, "createdAt");
        assert_eq!(other.sort, SortDir::Asc);
        assert_eq!(other.page, 0);
    }

    #[test]
    fn every_action_except_paging_resets_page() {
        let actions = [
            ControllerAction::QueryChanged("q".into()),
            ControllerAction::ViewChanged("v".into()),
            ControllerAction::FiltersApplied(vec![name_filter("x")]),
            ControllerAction::FiltersCleared,
            ControllerAction::SortChanged("fullName".into()),
        ];
        for action in actions {
            assert_eq!(on_page(9).apply(action).page, 0);
        }
        assert_eq!(on_page(9).apply(ControllerAction::PageChanged(5)).page, 4);
    }

    #[test]
    fn apply_leaves_the_previous_state_untouched() {
        let before = on_page(3);
        let _ = before.apply(ControllerAction::QueryChanged("blue".into()));
        assert_eq!(before.page, 3);
        assert_eq!(before.query, "");
    }

    #[test]
    fn controller_round_trips_through_json() {
        let controller = Controller::default()
            .apply(ControllerAction::FiltersApplied(vec![name_filter("ann")]))
            .apply(ControllerAction::QueryChanged("blue".into()));
        let json = serde_json::to_string(&controller).unwrap();
        let back: Controller = serde_json::from_str(&json).unwrap();
        assert_eq!(back, controller);
    }
}
