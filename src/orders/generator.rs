//! Deterministic generation of the synthetic order dataset
//!
//! `generate_orders` is a pure function of `count`, `now` and the fixed
//! seed: the same inputs always produce the same records. One `now` is
//! captured per generation pass so every record ages against the same
//! reference instant.

use crate::core::order::{Order, OrderStatus};
use crate::core::rng::SeededRng;
use crate::orders::catalog::{
    ADDRESSES, AVATARS, DATASET_SEED, ID_BASE, MAX_AGE_DAYS, PROJECTS, USERS,
};
use chrono::{DateTime, Duration, Utc};

/// Generate `count` orders against the reference instant `now`.
///
/// Ids are assigned monotonically from [`ID_BASE`], so they are unique
/// within a run. Creation times never exceed `now`.
pub fn generate_orders(count: usize, now: DateTime<Utc>) -> Vec<Order> {
    let mut rng = SeededRng::new(DATASET_SEED);
    let mut orders = Vec::with_capacity(count);

    for i in 0..count {
        let user = rng.pick(&USERS);
        let status = *rng.pick(&OrderStatus::ALL);
        let avatar_src = rng.pick(&AVATARS);
        let project = rng.pick(&PROJECTS);
        let address = rng.pick(&ADDRESSES);

        let days_ago = rng.below(MAX_AGE_DAYS);
        let created_at = now - Duration::days(days_ago as i64);

        // Screenshot-like id format, unique across the dataset:
        // #CM9801, #CM9802, ...
        let id = format!("#CM{}", ID_BASE + i);
        let date_label = date_label(created_at, now, || rng.next_f64());

        orders.push(Order {
            id,
            user: (*user).to_string(),
            project: (*project).to_string(),
            address: (*address).to_string(),
            status,
            avatar_src: (*avatar_src).to_string(),
            created_at,
            date_label,
        });
    }

    orders
}

/// Render a creation time relative to `now`.
///
/// Same-day records get one of three wordings; `wording` is only invoked
/// on that branch, so generation consumes a random draw exactly when the
/// original dataset did.
pub fn date_label<F>(created_at: DateTime<Utc>, now: DateTime<Utc>, wording: F) -> String
where
    F: FnOnce() -> f64,
{
    let days = (now - created_at).num_days();
    if days <= 0 {
        let variant = wording();
        let label = if variant < 0.34 {
            "Just now"
        } else if variant < 0.67 {
            "A minute ago"
        } else {
            "1 hour ago"
        };
        label.to_string()
    } else if days == 1 {
        "Yesterday".to_string()
    } else {
        created_at.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::catalog::DATASET_SIZE;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap()
    }

    #[test]
    fn generation_is_deterministic_for_a_fixed_now() {
        let now = fixed_now();
        assert_eq!(generate_orders(DATASET_SIZE, now), generate_orders(DATASET_SIZE, now));
    }

    #[test]
    fn ids_are_unique_and_monotone() {
        let orders = generate_orders(DATASET_SIZE, fixed_now());
        let ids: HashSet<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids.len(), DATASET_SIZE);
        for (i, order) in orders.iter().enumerate() {
            assert_eq!(order.id, format!("#CM{}", 9801 + i));
        }
    }

    #[test]
    fn records_draw_from_the_catalogs() {
        let orders = generate_orders(DATASET_SIZE, fixed_now());
        for order in &orders {
            assert!(USERS.contains(&order.user.as_str()));
            assert!(PROJECTS.contains(&order.project.as_str()));
            assert!(ADDRESSES.contains(&order.address.as_str()));
            assert!(AVATARS.contains(&order.avatar_src.as_str()));
        }
    }

    #[test]
    fn creation_times_never_exceed_now() {
        let now = fixed_now();
        for order in generate_orders(DATASET_SIZE, now) {
            assert!(order.created_at <= now);
            assert!(now - order.created_at < Duration::days(MAX_AGE_DAYS as i64));
        }
    }

    #[test]
    fn zero_count_yields_empty_dataset() {
        assert!(generate_orders(0, fixed_now()).is_empty());
    }

    #[test]
    fn label_for_old_records_is_absolute() {
        let now = fixed_now();
        let created = now - Duration::days(30);
        let label = date_label(created, now, || unreachable!("no draw for old records"));
        assert_eq!(label, "Jul 30, 2026");
    }

    #[test]
    fn label_for_yesterday() {
        let now = fixed_now();
        assert_eq!(date_label(now - Duration::days(1), now, || 0.0), "Yesterday");
    }

    #[test]
    fn same_day_wording_variants() {
        let now = fixed_now();
        assert_eq!(date_label(now, now, || 0.10), "Just now");
        assert_eq!(date_label(now, now, || 0.50), "A minute ago");
        assert_eq!(date_label(now, now, || 0.90), "1 hour ago");
    }

    #[test]
    fn sub_day_age_counts_as_same_day() {
        let now = fixed_now();
        let created = now - Duration::hours(23);
        assert_eq!(date_label(created, now, || 0.0), "Just now");
    }
}
