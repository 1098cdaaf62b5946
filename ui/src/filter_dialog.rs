use dioxus::prelude::*;
use types::{FilterDescriptor, FilterOperator, Property, PropertyType};

/// One editable row of the dialog. `property_index` points into the
/// screen's property table, so a stale selection can never outlive a
/// property change.
#[derive(Debug, Clone, PartialEq)]
struct EditorRow {
    property_index: usize,
    operator: FilterOperator,
    value: String,
}

fn default_row(properties: &[Property]) -> EditorRow {
    let kind = properties
        .first()
        .map_or(PropertyType::String, |property| property.kind);
    EditorRow {
        property_index: 0,
        operator: FilterOperator::first_compatible(kind),
        value: String::new(),
    }
}

/// Seed the editor from the currently-applied rules: a copy, never a
/// reference, so cancelling leaves the applied list untouched.
fn seed_rows(properties: &[Property], applied: &[FilterDescriptor]) -> Vec<EditorRow> {
    let rows: Vec<EditorRow> = applied
        .iter()
        .filter_map(|descriptor| {
            let property_index = properties
                .iter()
                .position(|property| property.name == descriptor.property.name)?;
            Some(EditorRow {
                property_index,
                operator: descriptor.operator,
                value: descriptor.value.clone().unwrap_or_default(),
            })
        })
        .collect();

    if rows.is_empty() {
        vec![default_row(properties)]
    } else {
        rows
    }
}

/// Move a row to a different property. If the current operator does not
/// accept the new property's type, fall back to the first compatible one;
/// an invalid pairing is never addressable.
fn retarget(row: &EditorRow, properties: &[Property], property_index: usize) -> EditorRow {
    let Some(property) = properties.get(property_index) else {
        return row.clone();
    };

    let operator = if row.operator.accepts(property.kind) {
        row.operator
    } else {
        FilterOperator::first_compatible(property.kind)
    };

    EditorRow {
        property_index,
        operator,
        value: row.value.clone(),
    }
}

/// Build the descriptors to emit on apply. Binary rows with an empty
/// operand are dropped rather than surfaced as an error; duplicates on the
/// same property pass through untouched.
fn build_descriptors(properties: &[Property], rows: &[EditorRow]) -> Vec<FilterDescriptor> {
    rows.iter()
        .filter_map(|row| {
            let property = properties.get(row.property_index)?.clone();
            let value = if row.operator.is_unary() {
                None
            } else {
                Some(row.value.clone())
            };
            FilterDescriptor::new(property, row.operator, value).ok()
        })
        .collect()
}

#[component]
pub fn FilterDialog(
    properties: Vec<Property>,
    filters: Vec<FilterDescriptor>,
    on_apply: EventHandler<Vec<FilterDescriptor>>,
    on_clear: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let mut rows = use_signal({
        let properties = properties.clone();
        let filters = filters.clone();
        move || seed_rows(&properties, &filters)
    });

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "Filters" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    for (index, row) in rows.read().iter().cloned().enumerate() {
                        FilterRowEditor {
                            key: "{index}",
                            properties: properties.clone(),
                            row_index: index,
                            property_index: row.property_index,
                            operator: row.operator,
                            value: row.value.clone(),
                            removable: rows.read().len() > 1,
                            on_property_change: {
                                let properties = properties.clone();
                                move |(row_index, property_index): (usize, usize)| {
                                    let mut rows = rows.write();
                                    if let Some(current) = rows.get(row_index).cloned() {
                                        rows[row_index] = retarget(&current, &properties, property_index);
                                    }
                                }
                            },
                            on_operator_change: move |(row_index, operator): (usize, FilterOperator)| {
                                if let Some(row) = rows.write().get_mut(row_index) {
                                    row.operator = operator;
                                }
                            },
                            on_value_change: move |(row_index, value): (usize, String)| {
                                if let Some(row) = rows.write().get_mut(row_index) {
                                    row.value = value;
                                }
                            },
                            on_remove: move |row_index: usize| {
                                let mut rows = rows.write();
                                if rows.len() > 1 {
                                    rows.remove(row_index);
                                }
                            },
                        }
                    }
                    button {
                        class: "btn btn-link",
                        onclick: {
                            let properties = properties.clone();
                            move |_| rows.write().push(default_row(&properties))
                        },
                        "+ Add filter"
                    }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-link",
                        onclick: move |_| on_clear.call(()),
                        "Clear filters"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: {
                            let properties = properties.clone();
                            move |_| on_apply.call(build_descriptors(&properties, &rows.read()))
                        },
                        "Apply"
                    }
                }
            }
        }
    }
}

#[component]
fn FilterRowEditor(
    properties: Vec<Property>,
    row_index: usize,
    property_index: usize,
    operator: FilterOperator,
    value: String,
    removable: bool,
    on_property_change: EventHandler<(usize, usize)>,
    on_operator_change: EventHandler<(usize, FilterOperator)>,
    on_value_change: EventHandler<(usize, String)>,
    on_remove: EventHandler<usize>,
) -> Element {
    let kind = properties
        .get(property_index)
        .map_or(PropertyType::String, |property| property.kind);

    rsx! {
        div { class: "filter-row",
            select {
                class: "form-input",
                value: "{property_index}",
                onchange: move |e| {
                    if let Ok(index) = e.value().parse::<usize>() {
                        on_property_change.call((row_index, index));
                    }
                },
                for (index, property) in properties.iter().enumerate() {
                    option {
                        value: "{index}",
                        selected: index == property_index,
                        "{property.label}"
                    }
                }
            }
            select {
                class: "form-input",
                value: "{operator.token()}",
                onchange: move |e| {
                    let token = e.value();
                    if let Some(op) = FilterOperator::ALL.into_iter().find(|op| op.token() == token) {
                        on_operator_change.call((row_index, op));
                    }
                },
                for op in FilterOperator::compatible(kind) {
                    option {
                        value: "{op.token()}",
                        selected: op == operator,
                        "{op.label()}"
                    }
                }
            }
            if !operator.is_unary() {
                if kind == PropertyType::Bool {
                    select {
                        class: "form-input",
                        value: "{value}",
                        onchange: move |e| on_value_change.call((row_index, e.value())),
                        option { value: "true", selected: value == "true", "true" }
                        option { value: "false", selected: value == "false", "false" }
                    }
                } else {
                    input {
                        class: "form-input",
                        r#type: match kind {
                            PropertyType::Number => "number",
                            PropertyType::Date => "date",
                            _ => "text",
                        },
                        value: "{value}",
                        oninput: move |e| on_value_change.call((row_index, e.value())),
                    }
                }
            }
            if removable {
                button {
                    class: "btn btn-link filter-row-remove",
                    onclick: move |_| on_remove.call(row_index),
                    "Remove"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn properties() -> Vec<Property> {
        vec![
            Property::new("fullName", "Name", PropertyType::String),
            Property::new("createdAt", "Created", PropertyType::Date),
            Property::new("isReturning", "Returning", PropertyType::Bool),
        ]
    }

    #[test]
    fn seeding_an_empty_filter_list_yields_one_blank_row() {
        let rows = seed_rows(&properties(), &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].property_index, 0);
        assert!(rows[0].value.is_empty());
    }

    #[test]
    fn seeding_copies_applied_filters() {
        let applied = vec![
            FilterDescriptor::new(
                Property::new("createdAt", "Created", PropertyType::Date),
                FilterOperator::IsAfter,
                Some("2026-01-01".into()),
            )
            .unwrap(),
        ];
        let rows = seed_rows(&properties(), &applied);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].property_index, 1);
        assert_eq!(rows[0].operator, FilterOperator::IsAfter);
        assert_eq!(rows[0].value, "2026-01-01");
    }

    #[test]
    fn retargeting_resets_an_incompatible_operator() {
        let row = EditorRow {
            property_index: 0,
            operator: FilterOperator::Contains,
            value: "ann".into(),
        };
        // Contains does not accept dates
        let moved = retarget(&row, &properties(), 1);
        assert_eq!(moved.property_index, 1);
        assert!(moved.operator.accepts(PropertyType::Date));
        assert_eq!(moved.operator, FilterOperator::first_compatible(PropertyType::Date));
    }

    #[test]
    fn retargeting_keeps_a_compatible_operator() {
        let row = EditorRow {
            property_index: 0,
            operator: FilterOperator::Equal,
            value: "x".into(),
        };
        let moved = retarget(&row, &properties(), 1);
        assert_eq!(moved.operator, FilterOperator::Equal);
    }

    #[test]
    fn built_descriptors_always_satisfy_the_pairing_invariant() {
        let props = properties();
        let rows = vec![
            EditorRow {
                property_index: 0,
                operator: FilterOperator::Contains,
                value: "ann".into(),
            },
            EditorRow {
                property_index: 1,
                operator: FilterOperator::IsBlank,
                value: String::new(),
            },
            EditorRow {
                property_index: 2,
                operator: FilterOperator::Equal,
                value: "true".into(),
            },
        ];
        let descriptors = build_descriptors(&props, &rows);
        assert_eq!(descriptors.len(), 3);
        for descriptor in &descriptors {
            assert!(descriptor.operator.accepts(descriptor.property.kind));
        }
    }

    #[test]
    fn blank_binary_rows_are_dropped_on_apply() {
        let rows = vec![EditorRow {
            property_index: 0,
            operator: FilterOperator::Contains,
            value: "   ".into(),
        }];
        assert!(build_descriptors(&properties(), &rows).is_empty());
    }

    #[test]
    fn duplicate_properties_are_permitted() {
        let rows = vec![
            EditorRow {
                property_index: 0,
                operator: FilterOperator::Contains,
                value: "a".into(),
            },
            EditorRow {
                property_index: 0,
                operator: FilterOperator::Contains,
                value: "b".into(),
            },
        ];
        let descriptors = build_descriptors(&properties(), &rows);
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].property.name, descriptors[1].property.name);
    }
}
