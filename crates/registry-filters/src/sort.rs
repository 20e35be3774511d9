//! Stable comparator-based sorting for list tables.
//!
//! Provides [`Dir`] for sort direction, [`SortState`] for the header-click
//! toggle, [`make_comparator`] for building a column comparator and
//! [`stable_sort`] for applying it without mutating the input.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::traits::Sortable;
use crate::value::{compare_values, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Returns the opposite direction.
    pub fn toggled(self) -> Dir {
        match self {
            Dir::Asc => Dir::Desc,
            Dir::Desc => Dir::Asc,
        }
    }

    /// Returns the wire name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The column a table is sorted by, and in which direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// The column key passed to [`Sortable::sort_value`].
    pub order_by: String,
    /// The sort direction.
    pub dir: Dir,
}

impl SortState {
    /// Creates a sort state for the given column and direction.
    pub fn new(order_by: impl Into<String>, dir: Dir) -> Self {
        SortState {
            order_by: order_by.into(),
            dir,
        }
    }

    /// Applies a header click on `key`.
    ///
    /// Clicking the column that is currently sorted ascending flips it to
    /// descending; any other click sorts `key` ascending.
    pub fn request_sort(&mut self, key: &str) {
        let is_asc = self.order_by == key && self.dir.is_asc();
        self.dir = if is_asc { Dir::Desc } else { Dir::Asc };
        self.order_by = key.to_string();
    }

    /// Builds the comparator for this state.
    pub fn comparator<T: Sortable>(&self) -> impl Fn(&T, &T) -> Ordering {
        make_comparator(self.dir, self.order_by.clone())
    }
}

/// Base comparator for descending order.
///
/// Null handling follows the table behaviour the claim and moderation views
/// were built against: a null left-hand value puts `a` first, a null or
/// greater right-hand value puts `b` first. Two nulls therefore report
/// `Less` in both argument orders; [`stable_sort`] treats such pairs as
/// ties.
pub fn descending_comparator(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    if a.is_none() || (!b.is_none() && compare_values(b, a) == Ordering::Less) {
        return Ordering::Less;
    }
    if b.is_none() || compare_values(b, a) == Ordering::Greater {
        return Ordering::Greater;
    }
    Ordering::Equal
}

/// Compares two values in the given direction.
///
/// Ascending is the negation of [`descending_comparator`], so nulls sort
/// last ascending and first descending.
pub fn compare_in_direction(dir: Dir, a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match dir {
        Dir::Desc => descending_comparator(a, b),
        Dir::Asc => descending_comparator(a, b).reverse(),
    }
}

/// Builds a comparator over a column of [`Sortable`] records.
///
/// ```
/// use registry_filters::{make_comparator, stable_sort, Dir};
/// use serde_json::json;
///
/// let rows = vec![json!({"name": "b"}), json!({"name": "A"})];
/// let sorted = stable_sort(&rows, make_comparator(Dir::Asc, "name"));
/// assert_eq!(sorted[0]["name"], "A");
/// ```
pub fn make_comparator<T>(dir: Dir, key: impl Into<String>) -> impl Fn(&T, &T) -> Ordering
where
    T: Sortable,
{
    let key = key.into();
    move |a: &T, b: &T| compare_in_direction(dir, &a.sort_value(&key), &b.sort_value(&key))
}

/// Builds a comparator using an accessor function instead of [`Sortable`].
pub fn make_comparator_with<T, F>(dir: Dir, key: impl Into<String>, accessor: F) -> impl Fn(&T, &T) -> Ordering
where
    for<'a> F: Fn(&'a T, &str) -> Value<'a>,
{
    let key = key.into();
    move |a: &T, b: &T| compare_in_direction(dir, &accessor(a, &key), &accessor(b, &key))
}

/// Sorts a copy of `items`, keeping equal elements in their original order.
///
/// Each element is paired with its index, the pairs are sorted with the
/// index as tie-breaker and the index is stripped again. A pair the
/// comparator orders the same way in both argument orders also falls back
/// to the index, so the combined ordering is always total.
pub fn stable_sort<T, F>(items: &[T], comparator: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut decorated: Vec<(usize, &T)> = items.iter().enumerate().collect();
    decorated.sort_unstable_by(|(ia, a), (ib, b)| {
        let forward = comparator(a, b);
        if forward == Ordering::Equal || forward == comparator(b, a) {
            ia.cmp(ib)
        } else {
            forward
        }
    });
    decorated.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Sorts a copy of `items` by the column and direction in `state`.
pub fn sort_records<T>(items: &[T], state: &SortState) -> Vec<T>
where
    T: Sortable + Clone,
{
    stable_sort(items, state.comparator())
}
