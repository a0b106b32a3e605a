//! Overview page data: stat cards, chart series and fixed tables
//!
//! Chart rendering itself is the presentation layer's business; this
//! module only serves the plain numbers behind the overview page. All
//! values are fixed sample content mirroring the dashboard design.

use serde::{Deserialize, Serialize};

/// Direction of a stat card's delta arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

/// One headline stat card (Customers, Orders, Revenue, Growth).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub delta: String,
    pub direction: TrendDirection,
}

/// One month of the projections-vs-actuals bar series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyProjection {
    pub label: String,
    pub value: u64,
}

/// One month of the revenue line series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub label: String,
    pub revenue: u64,
    pub projection: u64,
}

/// Weekly revenue legend plus the monthly series.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueOverview {
    pub current_week: u64,
    pub previous_week: u64,
    pub monthly: Vec<MonthlyRevenue>,
}

/// Revenue contribution of one location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRevenue {
    pub name: String,
    pub value: String,
}

/// One row of the top selling products table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub price: String,
    pub quantity: u32,
    pub amount: String,
}

/// Sales split by channel, in dollars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesChannel {
    pub label: String,
    pub value: f64,
}

/// Everything the overview page needs, in one envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub stats: Vec<StatCard>,
    pub projections: Vec<MonthlyProjection>,
    pub revenue: RevenueOverview,
    pub locations: Vec<LocationRevenue>,
    pub top_products: Vec<TopProduct>,
    pub sales: Vec<SalesChannel>,
}

impl DashboardSummary {
    /// The fixed sample summary behind the overview page.
    pub fn sample() -> Self {
        Self {
            stats: vec![
                stat("Customers", "3,781", "+11.01%", TrendDirection::Up),
                stat("Orders", "1,219", "-0.03%", TrendDirection::Down),
                stat("Revenue", "$695", "+15.03%", TrendDirection::Up),
                stat("Growth", "30.1%", "+6.08%", TrendDirection::Up),
            ],
            projections: [20, 25, 21, 28, 18, 25]
                .into_iter()
                .zip(MONTHS)
                .map(|(value, label)| MonthlyProjection {
                    label: label.to_string(),
                    value: value * 1_000_000,
                })
                .collect(),
            revenue: RevenueOverview {
                current_week: 58_211,
                previous_week: 68_768,
                monthly: [(8, 14), (18, 9), (13, 10), (11, 16), (16, 20), (24, 21)]
                    .into_iter()
                    .zip(MONTHS)
                    .map(|((revenue, projection), label)| MonthlyRevenue {
                        label: label.to_string(),
                        revenue: revenue * 1_000_000,
                        projection: projection * 1_000_000,
                    })
                    .collect(),
            },
            locations: vec![
                location("New York", "72K"),
                location("San Francisco", "39K"),
                location("Sydney", "25K"),
                location("Singapore", "61K"),
            ],
            top_products: vec![
                product("ASOS Ridley High Waist", "$79.49", 82, "$6,518.18"),
                product("Marco Lightweight Shirt", "$128.50", 37, "$4,754.50"),
                product("Half Sleeve  Shirt", "$39.99", 64, "$2,559.36"),
                product("Lightweight Jacket", "$20.00", 184, "$3,680.00"),
                product("Marco Shoes", "$79.49", 64, "$1,965.81"),
            ],
            sales: vec![
                channel("Direct", 300.56),
                channel("Affiliate", 135.18),
                channel("Sponsored", 154.02),
                channel("E-mail", 48.96),
            ],
        }
    }
}

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

fn stat(title: &str, value: &str, delta: &str, direction: TrendDirection) -> StatCard {
    StatCard {
        title: title.to_string(),
        value: value.to_string(),
        delta: delta.to_string(),
        direction,
    }
}

fn location(name: &str, value: &str) -> LocationRevenue {
    LocationRevenue {
        name: name.to_string(),
        value: value.to_string(),
    }
}

fn product(name: &str, price: &str, quantity: u32, amount: &str) -> TopProduct {
    TopProduct {
        name: name.to_string(),
        price: price.to_string(),
        quantity,
        amount: amount.to_string(),
    }
}

fn channel(label: &str, value: f64) -> SalesChannel {
    SalesChannel {
        label: label.to_string(),
        value,
    }
}
