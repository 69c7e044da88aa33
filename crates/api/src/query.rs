//! Shared query parameter types for API handlers.
//!
//! Every listing endpoint accepts the same `?sort_by=&order=&page=&limit=`
//! quartet. Values are kept as raw strings so junk input disables the
//! option instead of rejecting the request; normalization happens in
//! [`ListQuery::from_params`].

use fauna_core::query::{ListQuery, SortOrder};
use serde::Deserialize;

/// Generic listing parameters (`?sort_by=&order=&page=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListParams {
    /// Normalize into a [`ListQuery`], starting from `default_order` for the
    /// sort direction. Each listing endpoint passes its own default.
    pub fn into_query(self, default_order: SortOrder) -> ListQuery {
        ListQuery::from_params(
            self.sort_by.as_deref(),
            self.order.as_deref(),
            self.page.as_deref(),
            self.limit.as_deref(),
            default_order,
        )
    }
}
