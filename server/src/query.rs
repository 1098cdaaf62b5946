//! The mock query engine behind the resource API.
//!
//! Evaluates a listing screen's [`Controller`] against an in-memory
//! dataset. Stages run in a fixed order: view predicate, filter
//! descriptors (conjunctive, duplicates included), free-text query over
//! the screen's searchable fields, sort, then the pagination window.

use std::cmp::Ordering;

use types::{Controller, FieldValue, PAGE_SIZE, Page, Queryable, SortDir};

/// Per-resource configuration: which string fields the free-text query
/// scans, and how a named view tab maps to a predicate. Unknown views must
/// return `true`.
pub(crate) struct ListQuery<'a, T> {
    pub searchable: &'a [&'a str],
    pub view: fn(&T, &str) -> bool,
}

pub(crate) fn run<T: Queryable + Clone>(
    items: &[T],
    controller: &Controller,
    opts: &ListQuery<'_, T>,
) -> Page<T> {
    let mut rows: Vec<&T> = items
        .iter()
        .filter(|record| (opts.view)(record, &controller.view))
        .filter(|record| controller.filters.iter().all(|rule| rule.matches(*record)))
        .filter(|record| matches_query(*record, opts.searchable, &controller.query))
        .collect();

    sort_rows(&mut rows, &controller.sort_by, controller.sort);

    let total_count = rows.len();
    let start = controller.page as usize * PAGE_SIZE;
    let items = rows
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    Page { items, total_count }
}

fn matches_query<T: Queryable>(record: &T, fields: &[&str], query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    fields.iter().any(|field| match record.field(field) {
        Some(FieldValue::Str(s)) => s.to_lowercase().contains(&needle),
        _ => false,
    })
}

/// Stable sort on the `sort_by` field. Records without the field keep
/// their input order at the end, whichever direction is requested; an
/// unknown field therefore leaves the input order intact.
fn sort_rows<T: Queryable>(rows: &mut [&T], sort_by: &str, dir: SortDir) {
    rows.sort_by(|a, b| match (a.field(sort_by), b.field(sort_by)) {
        (Some(ka), Some(kb)) => {
            let ord = ka.compare(&kb);
            match dir {
                SortDir::Asc => ord,
                SortDir::Desc => ord.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;
    use types::{
        Controller, ControllerAction, Customer, FilterDescriptor, FilterOperator, Property,
        PropertyType,
    };
    use uuid::Uuid;

    fn ts(iso: &str) -> Timestamp {
        iso.parse().unwrap()
    }

    fn customer(n: u128, full_name: &str, email: &str, returning: bool, updated: &str) -> Customer {
        Customer {
            id: Uuid::from_u128(n),
            full_name: full_name.into(),
            email: email.into(),
            phone: String::new(),
            is_returning: returning,
            orders_count: n as u32,
            total_spent: 1_000 * n as i64,
            currency: "USD".into(),
            last_order_at: None,
            created_at: ts("2025-01-01T00:00:00Z"),
            updated_at: ts(updated),
        }
    }

    fn dataset() -> Vec<Customer> {
        vec![
            customer(1, "Ann Harper", "ann@acme.test", true, "2026-03-01T00:00:00Z"),
            customer(2, "Bruno Costa", "bruno@acme.test", false, "2026-01-15T00:00:00Z"),
            customer(3, "Annika Berg", "annika@nord.test", true, "2026-02-20T00:00:00Z"),
            customer(4, "Carol Singh", "carol@nord.test", false, "2026-04-02T00:00:00Z"),
        ]
    }

    fn opts() -> ListQuery<'static, Customer> {
        ListQuery {
            searchable: &["fullName", "email"],
            view: |customer, view| match view {
                "isReturning" => customer.is_returning,
                _ => true,
            },
        }
    }

    fn contains(property: &str, value: &str) -> FilterDescriptor {
        FilterDescriptor::new(
            Property::new(property, property, PropertyType::String),
            FilterOperator::Contains,
            Some(value.into()),
        )
        .unwrap()
    }

    #[test]
    fn filters_are_conjunctive_including_duplicates() {
        let mut controller = Controller::default();
        controller.filters = vec![contains("fullName", "ann"), contains("fullName", "ika")];

        let page = run(&dataset(), &controller, &opts());
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].full_name, "Annika Berg");
    }

    #[test]
    fn view_predicate_runs_before_filters() {
        let mut controller = Controller::default();
        controller.view = "isReturning".into();

        let page = run(&dataset(), &controller, &opts());
        assert_eq!(page.total_count, 2);
        assert!(page.items.iter().all(|c| c.is_returning));
    }

    #[test]
    fn unknown_view_matches_everything() {
        let mut controller = Controller::default();
        controller.view = "somethingElse".into();
        assert_eq!(run(&dataset(), &controller, &opts()).total_count, 4);
    }

    #[test]
    fn free_text_query_scans_searchable_fields() {
        let mut controller = Controller::default();
        controller.query = "NORD".into();

        let page = run(&dataset(), &controller, &opts());
        assert_eq!(page.total_count, 2);
    }

    #[test]
    fn sort_ascending_and_descending() {
        let mut controller = Controller::default();
        controller.sort_by = "fullName".into();
        controller.sort = SortDir::Asc;
        let page = run(&dataset(), &controller, &opts());
        let names: Vec<_> = page.items.iter().map(|c| c.full_name.as_str()).collect();
        assert_eq!(
            names,
            ["Ann Harper", "Annika Berg", "Bruno Costa", "Carol Singh"]
        );

        controller.sort = SortDir::Desc;
        let page = run(&dataset(), &controller, &opts());
        assert_eq!(page.items[0].full_name, "Carol Singh");
    }

    #[test]
    fn unknown_sort_field_keeps_input_order() {
        let mut controller = Controller::default();
        controller.sort_by = "nonsense".into();
        let page = run(&dataset(), &controller, &opts());
        assert_eq!(page.items[0].full_name, "Ann Harper");
        assert_eq!(page.items[3].full_name, "Carol Singh");
    }

    #[test]
    fn pagination_windows_the_sorted_rows() {
        let many: Vec<Customer> = (1..=23)
            .map(|n| {
                customer(
                    n,
                    &format!("Customer {n:02}"),
                    "x@test",
                    false,
                    "2026-01-01T00:00:00Z",
                )
            })
            .collect();

        let mut controller = Controller::default();
        controller.sort_by = "fullName".into();
        controller.sort = SortDir::Asc;

        let first = run(&many, &controller, &opts());
        assert_eq!(first.total_count, 23);
        assert_eq!(first.items.len(), PAGE_SIZE);
        assert_eq!(first.items[0].full_name, "Customer 01");

        controller.page = 2;
        let last = run(&many, &controller, &opts());
        assert_eq!(last.items.len(), 3);
        assert_eq!(last.items[0].full_name, "Customer 21");

        controller.page = 9;
        assert!(run(&many, &controller, &opts()).items.is_empty());
    }

    #[test]
    fn query_change_through_the_reducer_reaches_the_engine() {
        // initial state → user types a query → the fetch sees that exact state
        let initial = Controller::default();
        assert_eq!((initial.page, initial.sort), (0, SortDir::Desc));

        let next = initial.apply(ControllerAction::QueryChanged("ann".into()));
        assert_eq!(next.query, "ann");
        assert_eq!(next.page, 0);

        let page = run(&dataset(), &next, &opts());
        assert_eq!(page.total_count, 2);
        // default sort: updatedAt descending
        assert_eq!(page.items[0].full_name, "Ann Harper");
        assert_eq!(page.items[1].full_name, "Annika Berg");
    }
}
