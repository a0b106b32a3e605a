//! Order records and the closed vocabularies used to query them
//!
//! Statuses, sort keys and sort directions are closed enumerations. Raw
//! input is only ever turned into these types at the normalization
//! boundary ([`crate::core::query`]); past that point no free-form string
//! can reach the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an order.
///
/// The wire representation matches the dashboard labels verbatim,
/// including the space in "In Progress".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Complete,
    Pending,
    Approved,
    Rejected,
}

impl OrderStatus {
    /// All statuses, in catalog order. Exposed to filter UIs as-is.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::InProgress,
        OrderStatus::Complete,
        OrderStatus::Pending,
        OrderStatus::Approved,
        OrderStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Complete => "Complete",
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::Rejected => "Rejected",
        }
    }

    /// Parse an exact status label. Case-sensitive, no fuzzy matching.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status filter: a concrete status or the "all" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[serde(rename = "all")]
    All,
    #[serde(untagged)]
    Only(OrderStatus),
}

impl StatusFilter {
    /// Parse a raw status parameter. Anything that is not an exact status
    /// label degrades to [`StatusFilter::All`].
    pub fn parse_or_all(value: &str) -> Self {
        if value == "all" {
            StatusFilter::All
        } else {
            OrderStatus::parse(value).map_or(StatusFilter::All, StatusFilter::Only)
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

/// Key the order list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Date,
    User,
    Project,
    Status,
}

impl SortKey {
    /// Parse a raw sort parameter, falling back to [`SortKey::Date`].
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "user" => SortKey::User,
            "project" => SortKey::Project,
            "status" => SortKey::Status,
            _ => SortKey::Date,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    /// Parse a raw direction parameter, falling back to [`SortDir::Desc`].
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "asc" => SortDir::Asc,
            _ => SortDir::Desc,
        }
    }

    /// Apply the direction to an ascending comparison.
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    }
}

/// One synthetic order. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier in the `#CM<N>` display format.
    pub id: String,
    pub user: String,
    pub project: String,
    pub address: String,
    pub status: OrderStatus,
    /// Reference into the fixed avatar asset catalog.
    pub avatar_src: String,
    /// Absolute creation time; serialized as an ISO-8601 / RFC 3339 string.
    pub created_at: DateTime<Utc>,
    /// Human-relative rendering of `created_at`, computed at generation
    /// time (see the recompute-on-read option on the store).
    pub date_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_is_exact() {
        assert_eq!(OrderStatus::parse("In Progress"), Some(OrderStatus::InProgress));
        assert_eq!(OrderStatus::parse("in progress"), None);
        assert_eq!(OrderStatus::parse("COMPLETE"), None);
        assert_eq!(OrderStatus::parse("Complete"), Some(OrderStatus::Complete));
        assert_eq!(OrderStatus::parse(""), None);
    }

    #[test]
    fn status_filter_degrades_to_all() {
        assert_eq!(StatusFilter::parse_or_all("all"), StatusFilter::All);
        assert_eq!(StatusFilter::parse_or_all("bogus"), StatusFilter::All);
        assert_eq!(
            StatusFilter::parse_or_all("Pending"),
            StatusFilter::Only(OrderStatus::Pending)
        );
    }

    #[test]
    fn status_serializes_with_display_labels() {
        let json = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let back: OrderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OrderStatus::InProgress);
    }

    #[test]
    fn status_filter_serializes_flat() {
        assert_eq!(serde_json::to_string(&StatusFilter::All).unwrap(), "\"all\"");
        assert_eq!(
            serde_json::to_string(&StatusFilter::Only(OrderStatus::Rejected)).unwrap(),
            "\"Rejected\""
        );
    }

    #[test]
    fn sort_parsing_defaults() {
        assert_eq!(SortKey::parse_or_default("user"), SortKey::User);
        assert_eq!(SortKey::parse_or_default("created_at"), SortKey::Date);
        assert_eq!(SortDir::parse_or_default("asc"), SortDir::Asc);
        assert_eq!(SortDir::parse_or_default("descending"), SortDir::Desc);
    }
}
