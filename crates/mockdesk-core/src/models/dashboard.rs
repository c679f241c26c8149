//! Fixed dashboard payloads. None of these touch the store.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat<T> {
    pub value: T,
    pub change: String,
}

impl<T> Stat<T> {
    fn new(value: T, change: &str) -> Self {
        Self {
            value,
            change: change.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_revenue: Stat<f64>,
    pub subscriptions: Stat<u64>,
    pub sales: Stat<u64>,
    pub active_now: Stat<u64>,
}

impl DashboardStats {
    pub fn fixed() -> Self {
        Self {
            total_revenue: Stat::new(45231.89, "+20.1% from last month"),
            subscriptions: Stat::new(2350, "+180.1% from last month"),
            sales: Stat::new(12234, "+19% from last month"),
            active_now: Stat::new(573, "+201 since last hour"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTotal {
    pub name: String,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    pub data: Vec<MonthTotal>,
}

impl Overview {
    pub fn fixed() -> Self {
        const MONTHS: [(&str, u64); 12] = [
            ("Jan", 1500),
            ("Feb", 2300),
            ("Mar", 3200),
            ("Apr", 4500),
            ("May", 3800),
            ("Jun", 5000),
            ("Jul", 4200),
            ("Aug", 4800),
            ("Sep", 5500),
            ("Oct", 4900),
            ("Nov", 5800),
            ("Dec", 6200),
        ];
        Self {
            data: MONTHS
                .iter()
                .map(|(name, total)| MonthTotal {
                    name: name.to_string(),
                    total: *total,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub name: String,
    pub email: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSales {
    pub data: Vec<Sale>,
    pub total_sales: u64,
}

impl RecentSales {
    pub fn fixed() -> Self {
        const SALES: [(&str, &str, f64); 5] = [
            ("Olivia Martin", "olivia.martin@email.com", 1999.00),
            ("Jackson Lee", "jackson.lee@email.com", 39.00),
            ("Isabella Nguyen", "isabella.nguyen@email.com", 299.00),
            ("William Kim", "will@email.com", 99.00),
            ("Sofia Davis", "sofia.davis@email.com", 39.00),
        ];
        Self {
            data: SALES
                .iter()
                .map(|(name, email, amount)| Sale {
                    name: name.to_string(),
                    email: email.to_string(),
                    amount: *amount,
                })
                .collect(),
            total_sales: 265,
        }
    }
}
