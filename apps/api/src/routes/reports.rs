//! Report routes.
//!
//! Every report answers with a JSON array, including `/cmc` which wraps its
//! single row in one.
//!
//! ```json
//! GET /prodmaisvendidos  [{"productName":"Café","sumQuantity":12}]
//! GET /prodCliente       [{"productName":"Café","customerCount":3}]
//! GET /cmc               [{"acc":30.0}]   or   [{"acc":null}]
//! GET /prodBaixoEst      [{"name":"Sal","stockQuantity":-3}]
//! ```

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use loja_core::{AverageConsumption, ProductReach, ProductSales, StockLevel};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::ApiResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/prodmaisvendidos", get(top_selling))
        .route("/prodCliente", get(customer_reach))
        .route("/cmc", get(average_consumption))
        .route("/prodBaixoEst", get(low_stock))
}

// =============================================================================
// Response Rows
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSellerRow {
    pub product_name: String,
    pub sum_quantity: i64,
}

impl From<ProductSales> for TopSellerRow {
    fn from(row: ProductSales) -> Self {
        TopSellerRow {
            product_name: row.product_name,
            sum_quantity: row.total_quantity,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReachRow {
    pub product_name: String,
    pub customer_count: i64,
}

impl From<ProductReach> for ReachRow {
    fn from(row: ProductReach) -> Self {
        ReachRow {
            product_name: row.product_name,
            customer_count: row.customer_count,
        }
    }
}

/// `acc` is `null` when no sale was ever recorded.
#[derive(Debug, Serialize)]
pub struct AccRow {
    #[serde(with = "rust_decimal::serde::float_option")]
    pub acc: Option<Decimal>,
}

impl From<AverageConsumption> for AccRow {
    fn from(avg: AverageConsumption) -> Self {
        AccRow { acc: avg.acc }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockRow {
    pub name: String,
    pub stock_quantity: i64,
}

impl From<StockLevel> for LowStockRow {
    fn from(row: StockLevel) -> Self {
        LowStockRow {
            name: row.name,
            stock_quantity: row.stock_quantity,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /prodmaisvendidos
async fn top_selling(State(state): State<AppState>) -> ApiResult<Json<Vec<TopSellerRow>>> {
    let rows = state.reports.top_selling_products().await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// GET /prodCliente
async fn customer_reach(State(state): State<AppState>) -> ApiResult<Json<Vec<ReachRow>>> {
    let rows = state.reports.product_customer_reach().await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// GET /cmc
async fn average_consumption(State(state): State<AppState>) -> ApiResult<Json<Vec<AccRow>>> {
    let avg = state.reports.average_customer_consumption().await?;
    Ok(Json(vec![avg.into()]))
}

/// GET /prodBaixoEst
async fn low_stock(State(state): State<AppState>) -> ApiResult<Json<Vec<LowStockRow>>> {
    let rows = state.reports.low_stock_products().await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
