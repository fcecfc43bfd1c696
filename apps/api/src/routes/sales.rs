//! Sales ledger route.
//!
//! `POST /adicionando_venda` appends one sale. Names are free text: nothing
//! checks them against registered customers or products.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use loja_core::validation::{validate_amount, validate_name};
use loja_core::{NewSale, Sale};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/adicionando_venda", post(record_sale))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSaleRequest {
    #[serde(alias = "nomeCliente")]
    pub customer_name: String,

    #[serde(alias = "nomeProduto")]
    pub product_name: String,

    #[serde(alias = "quantidade")]
    pub quantity: i64,

    /// Total value of the sale.
    #[serde(alias = "valor")]
    pub value: Decimal,
}

impl RecordSaleRequest {
    fn into_new_sale(self) -> ApiResult<NewSale> {
        Ok(NewSale {
            customer_name: validate_name("customerName", &self.customer_name)?,
            product_name: validate_name("productName", &self.product_name)?,
            quantity: self.quantity,
            value: validate_amount("value", self.value)?,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleResponse {
    pub id: i64,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
}

impl From<Sale> for SaleResponse {
    fn from(sale: Sale) -> Self {
        SaleResponse {
            id: sale.id,
            value: sale.value().to_decimal(),
            customer_name: sale.customer_name,
            product_name: sale.product_name,
            quantity: sale.quantity,
        }
    }
}

/// POST /adicionando_venda
async fn record_sale(
    State(state): State<AppState>,
    payload: Result<Json<RecordSaleRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SaleResponse>)> {
    let Json(request) = payload?;
    let sale = state.ledger.record_sale(request.into_new_sale()?).await?;

    Ok((StatusCode::CREATED, Json(sale.into())))
}
