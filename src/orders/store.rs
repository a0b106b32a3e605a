//! The order store: memoized dataset plus the query engine
//!
//! `OrderStore` owns the generated dataset behind a compute-once cache
//! and answers queries against it. Queries never fail: normalization
//! bounds every input and the engine only ever degrades to an empty page.

use crate::core::order::{Order, OrderStatus, SortKey, StatusFilter};
use crate::core::query::{total_pages, OrdersPage, OrdersQuery, RawOrdersQuery};
use crate::core::rng::SeededRng;
use crate::orders::catalog::{DATASET_SEED, DATASET_SIZE, ID_BASE};
use crate::orders::generator::{date_label, generate_orders};
use chrono::Utc;
use std::sync::OnceLock;

/// In-memory store over the deterministic dataset.
///
/// The dataset is generated on first access and cached for the lifetime
/// of the store; concurrent first accesses are serialized by the cache,
/// so every reader observes the same records. Records are never mutated
/// after generation, so reads take no lock.
pub struct OrderStore {
    dataset: OnceLock<Vec<Order>>,
    count: usize,
    recompute_labels: bool,
}

impl OrderStore {
    /// Store with the default 137-record dataset and snapshot labels.
    pub fn new() -> Self {
        Self::with_options(DATASET_SIZE, false)
    }

    /// Store with an explicit record count and date-label policy.
    ///
    /// With `recompute_labels`, the relative date labels on served pages
    /// are recomputed against the request-time clock instead of the
    /// generation-time snapshot.
    pub fn with_options(count: usize, recompute_labels: bool) -> Self {
        Self {
            dataset: OnceLock::new(),
            count,
            recompute_labels,
        }
    }

    /// The full cached dataset, generating it on first call.
    pub fn dataset(&self) -> &[Order] {
        self.dataset.get_or_init(|| {
            tracing::info!(count = self.count, "generating order dataset");
            generate_orders(self.count, Utc::now())
        })
    }

    /// The fixed list of valid status values, for filter UIs.
    pub fn statuses(&self) -> &'static [OrderStatus] {
        &OrderStatus::ALL
    }

    /// Run a raw query through normalize → filter → sort → paginate.
    ///
    /// Always returns a well-formed envelope; an out-of-range page is
    /// clamped to the last valid page and a non-matching query yields an
    /// empty first page with `total_pages == 1`.
    pub fn query(&self, raw: &RawOrdersQuery) -> OrdersPage {
        let query = raw.normalize();
        let needle = query.needle();

        let matches: Vec<&Order> = self
            .dataset()
            .iter()
            .filter(|order| match query.status {
                StatusFilter::All => true,
                StatusFilter::Only(status) => order.status == status,
            })
            .filter(|order| needle.is_empty() || matches_needle(order, &needle))
            .collect();

        let total = matches.len();
        let total_pages = total_pages(total, query.page_size);
        let page = query.page.min(total_pages);

        // Sort a copy; the cached dataset stays untouched.
        let mut sorted: Vec<Order> = matches.into_iter().cloned().collect();
        sorted.sort_by(|a, b| {
            let ordering = match query.sort {
                SortKey::Date => a.created_at.cmp(&b.created_at),
                SortKey::User => a.user.cmp(&b.user),
                SortKey::Project => a.project.cmp(&b.project),
                SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
            };
            query.dir.apply(ordering)
        });

        let start = (page - 1) * query.page_size;
        let mut items: Vec<Order> = sorted
            .into_iter()
            .skip(start)
            .take(query.page_size)
            .collect();

        if self.recompute_labels {
            refresh_labels(&mut items, Utc::now());
        }

        tracing::debug!(total, page, total_pages, "served order query");

        OrdersPage {
            items,
            total,
            page,
            page_size: query.page_size,
            total_pages,
            query: OrdersQuery { page, ..query },
        }
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive substring match over every searchable field.
fn matches_needle(order: &Order, needle: &str) -> bool {
    order.id.to_lowercase().contains(needle)
        || order.user.to_lowercase().contains(needle)
        || order.project.to_lowercase().contains(needle)
        || order.address.to_lowercase().contains(needle)
        || order.status.as_str().to_lowercase().contains(needle)
}

/// Recompute relative date labels against the given clock.
///
/// The same-day wording draw comes from a stream seeded per record, so
/// repeated requests within the same day stay stable.
fn refresh_labels(items: &mut [Order], now: chrono::DateTime<Utc>) {
    for order in items {
        let sequence = order
            .id
            .strip_prefix("#CM")
            .and_then(|n| n.parse::<usize>().ok())
            .unwrap_or(ID_BASE);
        let mut rng = SeededRng::new(DATASET_SEED.wrapping_add(sequence as u32));
        order.date_label = date_label(order.created_at, now, || rng.next_f64());
    }
}
