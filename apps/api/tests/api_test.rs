//! HTTP contract tests, driven through the router without a socket.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use loja_api::{build_router, AppState};
use loja_db::{Database, DbConfig};

async fn app() -> Router {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    build_router(AppState::new(db), None)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn sell(app: &Router, customer: &str, product: &str, quantity: i64, value: f64) {
    let (status, _) = send(
        app,
        Method::POST,
        "/adicionando_venda",
        Some(json!({
            "customerName": customer,
            "productName": product,
            "quantity": quantity,
            "value": value,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

// =============================================================================
// Sales
// =============================================================================

#[tokio::test]
async fn test_record_sale_returns_created_sale() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/adicionando_venda",
        Some(json!({"customerName": "Ana", "productName": "Café", "quantity": 2, "value": 18.5})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["customerName"], "Ana");
    assert_eq!(body["productName"], "Café");
    assert_eq!(body["quantity"], 2);
    assert_eq!(body["value"].as_f64(), Some(18.5));
}

#[tokio::test]
async fn test_record_sale_accepts_portuguese_fields() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/adicionando_venda",
        Some(json!({"nomeCliente": "Bia", "nomeProduto": "Pão", "quantidade": 3, "valor": "4.50"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["customerName"], "Bia");
    assert_eq!(body["value"].as_f64(), Some(4.5));
}

#[tokio::test]
async fn test_record_sale_rejects_bad_bodies() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/adicionando_venda",
        Some(json!({"customerName": "Ana", "productName": "Café", "quantity": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, body) = send(
        &app,
        Method::POST,
        "/adicionando_venda",
        Some(json!({"customerName": "  ", "productName": "Café", "quantity": 1, "value": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "customerName is required");

    let (status, _) = send(&app, Method::POST, "/adicionando_venda", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sales_cannot_be_updated_over_http() {
    let app = app().await;
    sell(&app, "Ana", "Café", 1, 10.0).await;

    let (status, _) = send(&app, Method::PUT, "/adicionando_venda", Some(json!({}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// Reports
// =============================================================================

#[tokio::test]
async fn test_reports_on_empty_ledger() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/cmc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"acc": null}]));

    let (_, body) = send(&app, Method::GET, "/prodmaisvendidos", None).await;
    assert_eq!(body, json!([]));

    let (_, body) = send(&app, Method::GET, "/prodCliente", None).await;
    assert_eq!(body, json!([]));

    let (_, body) = send(&app, Method::GET, "/prodBaixoEst", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_average_customer_consumption() {
    let app = app().await;
    sell(&app, "A", "X", 1, 10.0).await;
    sell(&app, "A", "Y", 1, 20.0).await;
    sell(&app, "B", "X", 1, 30.0).await;

    let (status, body) = send(&app, Method::GET, "/cmc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["acc"].as_f64(), Some(30.0));
}

#[tokio::test]
async fn test_top_sellers_and_reach() {
    let app = app().await;
    sell(&app, "Ana", "Arroz", 5, 10.0).await;
    sell(&app, "Bia", "Arroz", 1, 10.0).await;
    sell(&app, "Ana", "Arroz", 1, 10.0).await;
    sell(&app, "Ana", "Café", 4, 10.0).await;
    sell(&app, "Ana", "Leite", 2, 10.0).await;
    sell(&app, "Ana", "Sal", 1, 10.0).await;

    let (_, body) = send(&app, Method::GET, "/prodmaisvendidos", None).await;
    assert_eq!(
        body,
        json!([
            {"productName": "Arroz", "sumQuantity": 7},
            {"productName": "Café", "sumQuantity": 4},
            {"productName": "Leite", "sumQuantity": 2},
        ])
    );

    let (_, body) = send(&app, Method::GET, "/prodCliente", None).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], json!({"productName": "Arroz", "customerCount": 2}));
}

#[tokio::test]
async fn test_names_group_on_the_exact_string() {
    let app = app().await;
    sell(&app, "Ana", "Arroz", 1, 10.0).await;
    sell(&app, " Ana", "Arroz", 1, 10.0).await;

    let (_, body) = send(&app, Method::GET, "/prodCliente", None).await;
    assert_eq!(body, json!([{"productName": "Arroz", "customerCount": 2}]));

    let (_, body) = send(&app, Method::GET, "/cmc", None).await;
    assert_eq!(body[0]["acc"].as_f64(), Some(10.0));
}

#[tokio::test]
async fn test_report_sum_overflow_is_a_store_error() {
    let app = app().await;
    for quantity in [i64::MAX, 1] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/adicionando_venda",
            Some(json!({"customerName": "Ana", "productName": "Arroz", "quantity": quantity, "value": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, Method::GET, "/prodmaisvendidos", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "DATABASE_ERROR");
}

#[tokio::test]
async fn test_low_stock() {
    let app = app().await;
    for (name, stock) in [("P1", 5), ("P2", -3), ("P3", 100), ("P4", 2)] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/cadastrar_produto",
            Some(json!({"name": name, "stockQuantity": stock, "price": 1.0})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, Method::GET, "/prodBaixoEst", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"name": "P2", "stockQuantity": -3},
            {"name": "P4", "stockQuantity": 2},
            {"name": "P1", "stockQuantity": 5},
        ])
    );
}

// =============================================================================
// Customers & Products
// =============================================================================

#[tokio::test]
async fn test_customer_crud() {
    let app = app().await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/cadastrar_cliente",
        Some(json!({"nome": "Ana", "email": "ana@example.com", "telefone": "1199"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({"id": 1, "name": "Ana", "email": "ana@example.com", "phone": "1199"}));

    let (status, body) = send(
        &app,
        Method::PUT,
        "/atualizar_cliente/1",
        Some(json!({"name": "Ana Souza", "email": "ana@example.com", "phone": "1199"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (_, list) = send(&app, Method::GET, "/getDataCliente", None).await;
    assert_eq!(list[0]["name"], "Ana Souza");

    let (status, _) = send(&app, Method::DELETE, "/deletar_cliente/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::DELETE, "/deletar_cliente/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_product_crud() {
    let app = app().await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/cadastrar_produto",
        Some(json!({"nome": "Arroz", "qtdEstoque": 10, "valor": 8.99})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["stockQuantity"], 10);
    assert_eq!(created["price"].as_f64(), Some(8.99));

    let (status, _) = send(
        &app,
        Method::PUT,
        "/atualizar_produto/42",
        Some(json!({"name": "Ghost", "stockQuantity": 1, "price": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        "/cadastrar_produto",
        Some(json!({"name": "Sal", "stockQuantity": 1, "price": -1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = send(&app, Method::GET, "/getDataProduto", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_renamed_product_keeps_sales_under_old_name() {
    let app = app().await;
    send(
        &app,
        Method::POST,
        "/cadastrar_produto",
        Some(json!({"name": "Arroz", "stockQuantity": 10, "price": 8.99})),
    )
    .await;
    sell(&app, "Ana", "Arroz", 2, 17.98).await;

    send(
        &app,
        Method::PUT,
        "/atualizar_produto/1",
        Some(json!({"name": "Arroz 5kg", "stockQuantity": 8, "price": 8.99})),
    )
    .await;

    let (_, body) = send(&app, Method::GET, "/prodmaisvendidos", None).await;
    assert_eq!(body, json!([{"productName": "Arroz", "sumQuantity": 2}]));
}

// =============================================================================
// Cross-cutting
// =============================================================================

#[tokio::test]
async fn test_health() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = app().await;
    let request = Request::builder()
        .uri("/prodmaisvendidos")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_unknown_path_without_static_dir() {
    let app = app().await;
    let (status, _) = send(&app, Method::GET, "/index.html", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
