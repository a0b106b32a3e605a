//! Query parameters, normalization and the paginated result envelope
//!
//! This is the defensive boundary of the whole pipeline: a
//! [`RawOrdersQuery`] may be missing fields, carry nonsense strings or
//! out-of-range numbers, and [`RawOrdersQuery::normalize`] still produces
//! a fully-populated, in-range [`OrdersQuery`]. Nothing in this module
//! returns an error.
//!
//! # Example
//! ```rust,ignore
//! // In handler:
//! pub async fn list_orders(
//!     State(state): State<AppState>,
//!     Query(raw): Query<RawOrdersQuery>,
//! ) -> Json<OrdersPage> {
//!     Json(state.store.query(&raw))
//! }
//!
//! // Usage:
//! GET /orders?page=2&pageSize=10
//! GET /orders?q=cm9810&status=Pending&sort=user&dir=asc
//! ```

use crate::core::order::{Order, SortDir, SortKey, StatusFilter};
use serde::{Deserialize, Serialize};

/// Default page size when the request leaves it out or mangles it.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Page size bounds.
pub const PAGE_SIZE_RANGE: (usize, usize) = (5, 50);
/// Page number bounds. The ceiling only guards arithmetic; requests past
/// the last page are clamped down again by the engine.
pub const PAGE_RANGE: (usize, usize) = (1, 9999);

/// Raw, untrusted query parameters for the order list.
///
/// Every field is optional and string-typed, exactly as it arrives from a
/// URL query string. Values are validated during [`Self::normalize`],
/// never here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOrdersQuery {
    /// Free-text search over id, user, project, address and status.
    pub q: Option<String>,

    /// Status label to filter by, or "all".
    pub status: Option<String>,

    /// Sort key: `date`, `user`, `project` or `status`.
    pub sort: Option<String>,

    /// Sort direction: `asc` or `desc`.
    pub dir: Option<String>,

    /// Page number (starts at 1).
    pub page: Option<String>,

    /// Number of items per page.
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

impl RawOrdersQuery {
    /// Normalize into a canonical, bounded query.
    ///
    /// Guaranteed for every input, including the empty query:
    /// - `status` is a valid label or `all`
    /// - `sort` ∈ {date, user, project, status}, `dir` ∈ {asc, desc}
    /// - `page` ∈ [1, 9999], `page_size` ∈ [5, 50]
    pub fn normalize(&self) -> OrdersQuery {
        OrdersQuery {
            q: self.q.clone().unwrap_or_default(),
            status: self
                .status
                .as_deref()
                .map_or(StatusFilter::All, StatusFilter::parse_or_all),
            sort: self
                .sort
                .as_deref()
                .map_or(SortKey::Date, SortKey::parse_or_default),
            dir: self
                .dir
                .as_deref()
                .map_or(SortDir::Desc, SortDir::parse_or_default),
            page: clamp_int(self.page.as_deref(), PAGE_RANGE.0, PAGE_RANGE),
            page_size: clamp_int(
                self.page_size.as_deref(),
                DEFAULT_PAGE_SIZE,
                PAGE_SIZE_RANGE,
            ),
        }
    }
}

/// Coerce a raw numeric parameter: number-coerce the string, fall back
/// on anything non-finite or unparsable, truncate toward zero, clamp.
fn clamp_int(value: Option<&str>, fallback: usize, (min, max): (usize, usize)) -> usize {
    let Some(raw) = value else {
        return fallback;
    };
    let Some(num) = coerce_number(raw) else {
        return fallback;
    };
    if !num.is_finite() {
        return fallback;
    }
    let truncated = num.trunc();
    if truncated < min as f64 {
        min
    } else if truncated > max as f64 {
        max
    } else {
        truncated as usize
    }
}

/// String-to-number coercion with URL-parameter semantics: a blank
/// value counts as zero and the `0x`/`0o`/`0b` integer prefixes are
/// honored; anything else goes through float parsing.
fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).ok().map(|v| v as f64);
        }
    }
    trimmed.parse::<f64>().ok()
}

/// Canonical, fully-populated query. Always valid per the bounds above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersQuery {
    pub q: String,
    pub status: StatusFilter,
    pub sort: SortKey,
    pub dir: SortDir,
    /// Requested page; the envelope echoes the *effective* page instead.
    pub page: usize,
    pub page_size: usize,
}

impl Default for OrdersQuery {
    fn default() -> Self {
        RawOrdersQuery::default().normalize()
    }
}

impl OrdersQuery {
    /// Lower-cased, trimmed search needle; empty means "no search".
    pub fn needle(&self) -> String {
        self.q.trim().to_lowercase()
    }
}

/// Paginated result envelope returned to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersPage {
    /// Records for the served page; at most `page_size` long, possibly
    /// shorter on the last page, possibly empty.
    pub items: Vec<Order>,

    /// Count of records matching filter + search, before pagination.
    pub total: usize,

    /// Effective page actually served (requested page clamped to
    /// `total_pages`).
    pub page: usize,

    pub page_size: usize,

    /// Always at least 1, even for an empty result.
    pub total_pages: usize,

    /// The normalized query, with `page` corrected to the effective value.
    pub query: OrdersQuery,
}

/// `max(1, ceil(total / page_size))`.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}
