//! Static analytics payloads. No store access.

use axum::response::Json;
use mockdesk_core::models::{DashboardStats, Overview, RecentSales};

pub(super) async fn stats() -> Json<DashboardStats> {
    Json(DashboardStats::fixed())
}

pub(super) async fn overview() -> Json<Overview> {
    Json(Overview::fixed())
}

pub(super) async fn recent_sales() -> Json<RecentSales> {
    Json(RecentSales::fixed())
}
