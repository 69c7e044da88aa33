//! List-query resolution for collection endpoints.
//!
//! Every listing accepts the same four optional, string-typed parameters
//! (`sort_by`, `order`, `page`, `limit`). This module turns them into a
//! [`ListQuery`] without touching HTTP or database types, so the rules can
//! be unit tested in isolation.
//!
//! Resolution is deliberately lenient: junk pagination values disable
//! pagination instead of erroring, and an unrecognized `order` keyword
//! leaves the listing's default direction untouched.

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

/// Sort direction for a single-field sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Numeric form used by MongoDB sort documents (`1` / `-1`).
    pub fn as_i32(self) -> i32 {
        match self {
            SortOrder::Asc => 1,
            SortOrder::Desc => -1,
        }
    }
}

/// A resolved single-field sort.
///
/// The field name is passed through unvalidated; sorting on a field that
/// no document carries is a no-op at the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub order: SortOrder,
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// Resolved listing options: an optional sort plus an optional
/// pagination window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub sort: Option<SortSpec>,
    pub skip: Option<u64>,
    pub limit: Option<i64>,
}

impl ListQuery {
    /// Resolve raw query parameters into a [`ListQuery`].
    ///
    /// - A sort is produced only when `sort_by` is present and non-empty.
    ///   Its direction starts from `default_order` and is flipped only by
    ///   the exact opposite keyword (see [`resolve_order`]).
    /// - Pagination applies only when both `page` and `limit` parse as
    ///   integers greater than zero; the window is then
    ///   `skip = (page - 1) * limit` with `limit` rows. An offset too
    ///   large to compute disables pagination like any other junk input.
    pub fn from_params(
        sort_by: Option<&str>,
        order: Option<&str>,
        page: Option<&str>,
        limit: Option<&str>,
        default_order: SortOrder,
    ) -> Self {
        let sort = match sort_by {
            Some(field) if !field.is_empty() => Some(SortSpec {
                field: field.to_string(),
                order: resolve_order(order, default_order),
            }),
            _ => None,
        };

        let (skip, limit) = match (parse_positive(page), parse_positive(limit)) {
            // A window whose offset overflows i64 is treated like any
            // other junk pagination input and disables itself.
            (Some(page), Some(limit)) => match page.checked_sub(1).and_then(|p| p.checked_mul(limit)) {
                Some(skip) => (Some(skip as u64), Some(limit)),
                None => (None, None),
            },
            _ => (None, None),
        };

        ListQuery { sort, skip, limit }
    }
}

/// Resolve the effective sort direction.
///
/// The default is flipped only when `order` is the exact keyword of the
/// opposite direction: `asc` against a descending default, `desc` against
/// an ascending one. Anything else (absent, empty, unknown, mixed case)
/// keeps the default.
fn resolve_order(order: Option<&str>, default: SortOrder) -> SortOrder {
    match (default, order) {
        (SortOrder::Desc, Some("asc")) => SortOrder::Asc,
        (SortOrder::Asc, Some("desc")) => SortOrder::Desc,
        _ => default,
    }
}

/// Parse a raw query value as a strictly positive integer.
///
/// Absent, non-numeric, zero, and negative values all yield `None`.
fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.parse::<i64>().ok()).filter(|n| *n > 0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
