//! Traits for record access during sorting.
//!
//! [`Sortable`] is implemented by record types shown in list tables (claims,
//! moderation events, facility list items). It is usually derived with
//! `#[derive(Sortable)]` from `registry-filters-macros`, which relies on
//! [`SortField`] to turn each annotated field into a [`Value`].

use crate::value::{Number, Timestamp, Value};

/// Trait for records that can be sorted by a named column.
///
/// # Manual Implementation
///
/// ```
/// use registry_filters::{Sortable, Value};
///
/// struct FacilityList {
///     name: String,
///     status: Option<String>,
/// }
///
/// impl Sortable for FacilityList {
///     fn sort_value(&self, key: &str) -> Value<'_> {
///         match key {
///             "name" => Value::String(&self.name),
///             "status" => match &self.status {
///                 Some(status) => Value::String(status),
///                 None => Value::None,
///             },
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Sortable {
    /// Returns the value of a column for comparison.
    ///
    /// Unknown keys return [`Value::None`].
    fn sort_value(&self, key: &str) -> Value<'_>;

    /// Returns a static accessor function for the accessor-based helpers.
    fn accessor<'a>(item: &'a Self, key: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.sort_value(key)
    }
}

/// Conversion from a field type into a sort [`Value`].
///
/// `Option<T>` maps `None` to [`Value::None`], which is how nullable columns
/// reach the comparator.
pub trait SortField {
    /// Borrows this field as a sort value.
    fn sort_field(&self) -> Value<'_>;
}

impl SortField for String {
    fn sort_field(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl SortField for str {
    fn sort_field(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl SortField for bool {
    fn sort_field(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl SortField for Timestamp {
    fn sort_field(&self) -> Value<'_> {
        Value::Timestamp(*self)
    }
}

macro_rules! number_sort_field {
    ($($ty:ty),*) => {
        $(
            impl SortField for $ty {
                fn sort_field(&self) -> Value<'_> {
                    Value::Number(Number::from(*self))
                }
            }
        )*
    };
}

number_sort_field!(i32, i64, u32, u64, usize, f32, f64);

impl<T: SortField> SortField for Option<T> {
    fn sort_field(&self) -> Value<'_> {
        match self {
            Some(inner) => inner.sort_field(),
            None => Value::None,
        }
    }
}

impl<T: SortField + ?Sized> SortField for &T {
    fn sort_field(&self) -> Value<'_> {
        (**self).sort_field()
    }
}

/// JSON records from the API sort by their top-level fields.
///
/// Arrays, nested objects and missing keys read as [`Value::None`].
impl Sortable for serde_json::Value {
    fn sort_value(&self, key: &str) -> Value<'_> {
        match self.get(key) {
            Some(serde_json::Value::String(s)) => Value::String(s),
            Some(serde_json::Value::Bool(b)) => Value::Bool(*b),
            Some(serde_json::Value::Number(n)) => {
                if let Some(i) = n.as_i64() {
                    Value::Number(Number::I64(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Number(Number::U64(u))
                } else {
                    n.as_f64()
                        .map(|f| Value::Number(Number::F64(f)))
                        .unwrap_or(Value::None)
                }
            }
            _ => Value::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Claim {
        facility_name: String,
        decision_date: Option<i64>,
    }

    impl Sortable for Claim {
        fn sort_value(&self, key: &str) -> Value<'_> {
            match key {
                "facility_name" => self.facility_name.sort_field(),
                "decision_date" => self.decision_date.sort_field(),
                _ => Value::None,
            }
        }
    }

    #[test]
    fn sortable_manual_impl() {
        let claim = Claim {
            facility_name: "Mill".to_string(),
            decision_date: None,
        };

        assert_eq!(claim.sort_value("facility_name"), Value::String("Mill"));
        assert_eq!(claim.sort_value("decision_date"), Value::None);
        assert_eq!(Claim::accessor(&claim, "unknown"), Value::None);
    }

    #[test]
    fn option_field_maps_to_none() {
        let present: Option<i64> = Some(3);
        let absent: Option<i64> = None;
        assert_eq!(present.sort_field(), Value::Number(Number::I64(3)));
        assert_eq!(absent.sort_field(), Value::None);
    }

    #[test]
    fn json_record_fields() {
        let record = json!({
            "name": "Facility Alpha",
            "contributors": 4,
            "score": 1.5,
            "claimed": true,
            "decided_at": null,
            "tags": ["a"]
        });

        assert_eq!(record.sort_value("name"), Value::String("Facility Alpha"));
        assert_eq!(record.sort_value("contributors"), Value::Number(Number::I64(4)));
        assert_eq!(record.sort_value("score"), Value::Number(Number::F64(1.5)));
        assert_eq!(record.sort_value("claimed"), Value::Bool(true));
        assert_eq!(record.sort_value("decided_at"), Value::None);
        assert_eq!(record.sort_value("tags"), Value::None);
        assert_eq!(record.sort_value("missing"), Value::None);
    }
}
