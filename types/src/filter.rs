//! The resource filtering model shared by every listing screen.
//!
//! A screen declares the [`Property`] set it can filter on; the filter
//! dialog pairs each property with a compatible [`FilterOperator`] and an
//! optional operand, producing [`FilterDescriptor`] rows. The query engine
//! evaluates those rows against any record that implements [`Queryable`].

use std::cmp::Ordering;

use jiff::Timestamp;
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

use crate::{Result, err};

/// The value domain of a filterable property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Number,
    Date,
    #[serde(rename = "boolean")]
    Bool,
}

/// A filterable attribute of a listing screen. Each screen carries a static
/// property table; `name` doubles as the field key in query serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
}

impl Property {
    pub fn new(name: &str, label: &str, kind: PropertyType) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
        }
    }
}

/// The comparison rules available to the filter dialog.
///
/// The set is closed; there is no dynamic registration. Each operator has a
/// stable wire token (its serde name), a human label, and a compatibility
/// rule over property types. `IsBlank` and `IsPresent` are unary and take
/// no operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOperator {
    Equal,
    NotEqual,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    GreaterThan,
    LessThan,
    IsAfter,
    IsBefore,
    IsBlank,
    IsPresent,
}

impl FilterOperator {
    pub const ALL: [FilterOperator; 12] = [
        Self::Equal,
        Self::NotEqual,
        Self::Contains,
        Self::NotContains,
        Self::StartsWith,
        Self::EndsWith,
        Self::GreaterThan,
        Self::LessThan,
        Self::IsAfter,
        Self::IsBefore,
        Self::IsBlank,
        Self::IsPresent,
    ];

    /// Stable token used in query serialization. Matches the serde name.
    pub fn token(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::NotEqual => "notEqual",
            Self::Contains => "contains",
            Self::NotContains => "notContains",
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
            Self::GreaterThan => "greaterThan",
            Self::LessThan => "lessThan",
            Self::IsAfter => "isAfter",
            Self::IsBefore => "isBefore",
            Self::IsBlank => "isBlank",
            Self::IsPresent => "isPresent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Equal => "equals",
            Self::NotEqual => "not equal",
            Self::Contains => "contains",
            Self::NotContains => "not contains",
            Self::StartsWith => "starts with",
            Self::EndsWith => "ends with",
            Self::GreaterThan => "greater than",
            Self::LessThan => "less than",
            Self::IsAfter => "is after",
            Self::IsBefore => "is before",
            Self::IsBlank => "is blank",
            Self::IsPresent => "is present",
        }
    }

    pub fn accepts(self, kind: PropertyType) -> bool {
        use PropertyType::*;

        match self {
            Self::Equal | Self::NotEqual => true,
            Self::Contains | Self::NotContains | Self::StartsWith | Self::EndsWith => {
                kind == String
            }
            Self::GreaterThan | Self::LessThan => matches!(kind, Number | Date),
            Self::IsAfter | Self::IsBefore => kind == Date,
            Self::IsBlank | Self::IsPresent => true,
        }
    }

    /// Unary operators take no operand; the dialog hides the value field.
    pub fn is_unary(self) -> bool {
        matches!(self, Self::IsBlank | Self::IsPresent)
    }

    /// Operators applicable to a property type, in registry order.
    pub fn compatible(kind: PropertyType) -> impl Iterator<Item = FilterOperator> {
        Self::ALL.into_iter().filter(move |op| op.accepts(kind))
    }

    /// The operator the dialog falls back to when a property change makes
    /// the current selection incompatible. `Equal` accepts every type, so
    /// this always yields something.
    pub fn first_compatible(kind: PropertyType) -> FilterOperator {
        Self::compatible(kind).next().unwrap_or(Self::Equal)
    }

    /// Evaluate this operator against a record field.
    ///
    /// `operand` is the raw text the user entered; unary operators ignore
    /// it. An operand that does not parse in the field's domain fails the
    /// match rather than erroring, and a missing field only satisfies
    /// `IsBlank`.
    pub fn matches(self, field: Option<&FieldValue>, operand: Option<&str>) -> bool {
        match self {
            Self::IsBlank => field.is_none_or(FieldValue::is_blank),
            Self::IsPresent => field.is_some_and(|v| !v.is_blank()),
            _ => {
                let (Some(field), Some(operand)) = (field, operand) else {
                    return false;
                };
                self.matches_value(field, operand)
            }
        }
    }

    fn matches_value(self, field: &FieldValue, operand: &str) -> bool {
        match self {
            Self::Equal => field.equals(operand),
            Self::NotEqual => !field.equals(operand),
            Self::Contains => field
                .as_lowercase()
                .is_some_and(|s| s.contains(&operand.to_lowercase())),
            Self::NotContains => field
                .as_lowercase()
                .is_some_and(|s| !s.contains(&operand.to_lowercase())),
            Self::StartsWith => field
                .as_lowercase()
                .is_some_and(|s| s.starts_with(&operand.to_lowercase())),
            Self::EndsWith => field
                .as_lowercase()
                .is_some_and(|s| s.ends_with(&operand.to_lowercase())),
            Self::GreaterThan => field
                .compare_operand(operand)
                .is_some_and(|ord| ord == Ordering::Greater),
            Self::LessThan => field
                .compare_operand(operand)
                .is_some_and(|ord| ord == Ordering::Less),
            Self::IsAfter => matches!(
                (field, parse_date_operand(operand)),
                (FieldValue::Date(at), Some(pivot)) if *at > pivot
            ),
            Self::IsBefore => matches!(
                (field, parse_date_operand(operand)),
                (FieldValue::Date(at), Some(pivot)) if *at < pivot
            ),
            Self::IsBlank | Self::IsPresent => unreachable!("unary operators handled in matches"),
        }
    }
}

/// A dynamically-typed record field, produced by [`Queryable::field`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Number(f64),
    Date(Timestamp),
    Bool(bool),
}

impl FieldValue {
    fn is_blank(&self) -> bool {
        matches!(self, Self::Str(s) if s.trim().is_empty())
    }

    fn as_lowercase(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s.to_lowercase()),
            _ => None,
        }
    }

    fn equals(&self, operand: &str) -> bool {
        match self {
            Self::Str(s) => s == operand,
            Self::Number(n) => operand.parse::<f64>().is_ok_and(|o| o == *n),
            Self::Date(at) => parse_date_operand(operand).is_some_and(|o| o == *at),
            Self::Bool(b) => operand.parse::<bool>().is_ok_and(|o| o == *b),
        }
    }

    fn compare_operand(&self, operand: &str) -> Option<Ordering> {
        match self {
            Self::Number(n) => operand.parse::<f64>().ok().and_then(|o| n.partial_cmp(&o)),
            Self::Date(at) => parse_date_operand(operand).map(|o| at.cmp(&o)),
            _ => None,
        }
    }

    /// Ordering used by the sort stage. Mixed-type comparisons are treated
    /// as equal, leaving the input order intact.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (Self::Str(a), Self::Str(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Parse a date operand: an RFC 3339 instant, or a bare calendar date taken
/// as midnight UTC (the shape an HTML date input produces).
fn parse_date_operand(raw: &str) -> Option<Timestamp> {
    if let Ok(at) = raw.parse::<Timestamp>() {
        return Some(at);
    }
    let date: jiff::civil::Date = raw.parse().ok()?;
    date.to_zoned(TimeZone::UTC).ok().map(|zoned| zoned.timestamp())
}

/// One applied filter rule: a property, a compatible operator, and the
/// operand for binary operators.
///
/// Construction goes through [`FilterDescriptor::new`], which enforces the
/// pairing invariant, so an incompatible combination is never addressable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDescriptor {
    pub property: Property,
    pub operator: FilterOperator,
    pub value: Option<String>,
}

impl FilterDescriptor {
    pub fn new(
        property: Property,
        operator: FilterOperator,
        value: Option<String>,
    ) -> Result<Self> {
        if !operator.accepts(property.kind) {
            return Err(err!(
                "operator '{}' does not accept {:?} properties",
                operator.token(),
                property.kind
            ));
        }
        if !operator.is_unary() && value.as_deref().is_none_or(|v| v.trim().is_empty()) {
            return Err(err!("operator '{}' requires a value", operator.token()));
        }

        let value = if operator.is_unary() { None } else { value };
        Ok(Self {
            property,
            operator,
            value,
        })
    }

    /// Whether a record passes this rule.
    pub fn matches<R: Queryable>(&self, record: &R) -> bool {
        let field = record.field(&self.property.name);
        self.operator.matches(field.as_ref(), self.value.as_deref())
    }
}

/// Field access by property name, implemented by every record the query
/// engine can evaluate. Unknown names return `None`.
pub trait Queryable {
    fn field(&self, property: &str) -> Option<FieldValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop(kind: PropertyType) -> Property {
        Property::new("field", "Field", kind)
    }

    struct OneField(Option<FieldValue>);

    impl Queryable for OneField {
        fn field(&self, _property: &str) -> Option<FieldValue> {
            self.0.clone()
        }
    }

    #[test]
    fn every_type_has_a_compatible_operator() {
        for kind in [
            PropertyType::String,
            PropertyType::Number,
            PropertyType::Date,
            PropertyType::Bool,
        ] {
            assert!(FilterOperator::first_compatible(kind).accepts(kind));
        }
    }

    #[test]
    fn string_operators_reject_other_types() {
        for op in [
            FilterOperator::Contains,
            FilterOperator::NotContains,
            FilterOperator::StartsWith,
            FilterOperator::EndsWith,
        ] {
            assert!(op.accepts(PropertyType::String));
            assert!(!op.accepts(PropertyType::Number));
            assert!(!op.accepts(PropertyType::Date));
            assert!(!op.accepts(PropertyType::Bool));
        }
    }

    #[test]
    fn date_only_operators() {
        for op in [FilterOperator::IsAfter, FilterOperator::IsBefore] {
            assert!(op.accepts(PropertyType::Date));
            assert!(!op.accepts(PropertyType::String));
            assert!(!op.accepts(PropertyType::Number));
        }
    }

    #[test]
    fn descriptor_rejects_incompatible_pairing() {
        let result = FilterDescriptor::new(
            prop(PropertyType::Number),
            FilterOperator::Contains,
            Some("x".into()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn descriptor_requires_value_for_binary_operators() {
        assert!(
            FilterDescriptor::new(prop(PropertyType::String), FilterOperator::Equal, None)
                .is_err()
        );
        assert!(
            FilterDescriptor::new(
                prop(PropertyType::String),
                FilterOperator::Equal,
                Some("  ".into())
            )
            .is_err()
        );
    }

    #[test]
    fn descriptor_drops_value_for_unary_operators() {
        let descriptor = FilterDescriptor::new(
            prop(PropertyType::String),
            FilterOperator::IsBlank,
            Some("ignored".into()),
        )
        .unwrap();
        assert_eq!(descriptor.value, None);
    }

    #[test]
    fn operator_tokens_are_stable_on_the_wire() {
        let json = serde_json::to_string(&FilterOperator::NotEqual).unwrap();
        assert_eq!(json, r#""notEqual""#);
        for op in FilterOperator::ALL {
            let json = serde_json::to_string(&op).unwrap();
            assert_eq!(json, format!(r#""{}""#, op.token()));
            let back: FilterOperator = serde_json::from_str(&json).unwrap();
            assert_eq!(back, op);
        }
    }

    #[test]
    fn contains_is_case_insensitive() {
        let field = FieldValue::Str("Blue Widget".into());
        assert!(FilterOperator::Contains.matches(Some(&field), Some("blue")));
        assert!(!FilterOperator::NotContains.matches(Some(&field), Some("WIDGET")));
        assert!(FilterOperator::StartsWith.matches(Some(&field), Some("bLuE")));
        assert!(FilterOperator::EndsWith.matches(Some(&field), Some("widget")));
    }

    #[test]
    fn equal_is_exact_for_strings() {
        let field = FieldValue::Str("Blue".into());
        assert!(FilterOperator::Equal.matches(Some(&field), Some("Blue")));
        assert!(!FilterOperator::Equal.matches(Some(&field), Some("blue")));
        assert!(FilterOperator::NotEqual.matches(Some(&field), Some("blue")));
    }

    #[test]
    fn numeric_comparisons() {
        let field = FieldValue::Number(24.5);
        assert!(FilterOperator::GreaterThan.matches(Some(&field), Some("20")));
        assert!(FilterOperator::LessThan.matches(Some(&field), Some("25")));
        assert!(!FilterOperator::GreaterThan.matches(Some(&field), Some("24.5")));
        // unparsable operand fails the match, it does not error
        assert!(!FilterOperator::GreaterThan.matches(Some(&field), Some("twenty")));
    }

    #[test]
    fn date_comparisons_accept_bare_calendar_dates() {
        let at: Timestamp = "2026-05-14T09:30:00Z".parse().unwrap();
        let field = FieldValue::Date(at);
        assert!(FilterOperator::IsAfter.matches(Some(&field), Some("2026-05-14")));
        assert!(FilterOperator::IsBefore.matches(Some(&field), Some("2026-05-15")));
        assert!(!FilterOperator::IsAfter.matches(Some(&field), Some("2026-06-01")));
        assert!(FilterOperator::GreaterThan.matches(Some(&field), Some("2026-01-01")));
    }

    #[test]
    fn blank_and_present_are_unary() {
        let empty = FieldValue::Str("  ".into());
        let filled = FieldValue::Str("x".into());
        assert!(FilterOperator::IsBlank.matches(Some(&empty), None));
        assert!(FilterOperator::IsBlank.matches(None, None));
        assert!(!FilterOperator::IsBlank.matches(Some(&filled), None));
        assert!(FilterOperator::IsPresent.matches(Some(&filled), None));
        assert!(!FilterOperator::IsPresent.matches(None, None));
    }

    #[test]
    fn missing_field_fails_binary_operators() {
        assert!(!FilterOperator::Equal.matches(None, Some("x")));
        assert!(!FilterOperator::Contains.matches(None, Some("x")));
    }

    #[test]
    fn descriptor_matches_through_queryable() {
        let descriptor = FilterDescriptor::new(
            prop(PropertyType::Bool),
            FilterOperator::Equal,
            Some("true".into()),
        )
        .unwrap();
        assert!(descriptor.matches(&OneField(Some(FieldValue::Bool(true)))));
        assert!(!descriptor.matches(&OneField(Some(FieldValue::Bool(false)))));
        assert!(!descriptor.matches(&OneField(None)));
    }

    #[test]
    fn mixed_type_sort_comparison_is_equal() {
        let a = FieldValue::Str("a".into());
        let b = FieldValue::Number(1.0);
        assert_eq!(a.compare(&b), Ordering::Equal);
        assert_eq!(
            FieldValue::Str("Apple".into()).compare(&FieldValue::Str("banana".into())),
            Ordering::Less
        );
    }
}
