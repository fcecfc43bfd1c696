//! Customer CRUD routes.
//!
//! Plain persistence: customers never feed a report, and deleting or
//! renaming one leaves the sales made under its old name untouched.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use loja_core::validation::validate_name;
use loja_core::{Customer, NewCustomer};
use serde::Deserialize;
use tracing::info;

use super::MessageResponse;
use crate::error::ApiResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/getDataCliente", get(list))
        .route("/cadastrar_cliente", post(create))
        .route("/atualizar_cliente/{id}", put(update))
        .route("/deletar_cliente/{id}", delete(remove))
}

#[derive(Debug, Deserialize)]
pub struct CustomerRequest {
    #[serde(alias = "nome")]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default, alias = "telefone")]
    pub phone: String,
}

impl CustomerRequest {
    fn into_new_customer(self) -> ApiResult<NewCustomer> {
        Ok(NewCustomer {
            name: validate_name("name", &self.name)?,
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        })
    }
}

/// GET /getDataCliente
async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Customer>>> {
    Ok(Json(state.db.customers().list().await?))
}

/// POST /cadastrar_cliente
async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CustomerRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Customer>)> {
    let Json(request) = payload?;
    let customer = state.db.customers().insert(&request.into_new_customer()?).await?;

    info!(id = customer.id, "Customer registered");
    Ok((StatusCode::CREATED, Json(customer)))
}

/// PUT /atualizar_cliente/{id}
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<CustomerRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(request) = payload?;
    state.db.customers().update(id, &request.into_new_customer()?).await?;

    info!(id, "Customer updated");
    Ok(Json(MessageResponse::new("Customer updated")))
}

/// DELETE /deletar_cliente/{id}
async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    state.db.customers().delete(id).await?;

    info!(id, "Customer deleted");
    Ok(Json(MessageResponse::new("Customer deleted")))
}
