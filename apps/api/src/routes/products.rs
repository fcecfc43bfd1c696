//! Product CRUD routes.
//!
//! Stock is stored as given, negatives included. Prices travel as decimals
//! and are kept in cents.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use loja_core::validation::{validate_name, validate_price};
use loja_core::{NewProduct, Product};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::MessageResponse;
use crate::error::ApiResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/getDataProduto", get(list))
        .route("/cadastrar_produto", post(create))
        .route("/atualizar_produto/{id}", put(update))
        .route("/deletar_produto/{id}", delete(remove))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[serde(alias = "nome")]
    pub name: String,

    #[serde(alias = "qtdEstoque")]
    pub stock_quantity: i64,

    /// Unit price.
    #[serde(alias = "valor")]
    pub price: Decimal,
}

impl ProductRequest {
    fn into_new_product(self) -> ApiResult<NewProduct> {
        Ok(NewProduct {
            name: validate_name("name", &self.name)?,
            stock_quantity: self.stock_quantity,
            price: validate_price(self.price)?,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub stock_quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id,
            price: product.price().to_decimal(),
            name: product.name,
            stock_quantity: product.stock_quantity,
        }
    }
}

/// GET /getDataProduto
async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<ProductResponse>>> {
    let products = state.db.products().list().await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// POST /cadastrar_produto
async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProductResponse>)> {
    let Json(request) = payload?;
    let product = state.db.products().insert(&request.into_new_product()?).await?;

    info!(id = product.id, "Product registered");
    Ok((StatusCode::CREATED, Json(product.into())))
}

/// PUT /atualizar_produto/{id}
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(request) = payload?;
    state.db.products().update(id, &request.into_new_product()?).await?;

    info!(id, "Product updated");
    Ok(Json(MessageResponse::new("Product updated")))
}

/// DELETE /deletar_produto/{id}
async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    state.db.products().delete(id).await?;

    info!(id, "Product deleted");
    Ok(Json(MessageResponse::new("Product deleted")))
}
