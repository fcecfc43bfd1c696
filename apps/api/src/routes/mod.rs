//! HTTP routes.
//!
//! | Path | Method | Module |
//! |------|--------|--------|
//! | /adicionando_venda | POST | [`sales`] |
//! | /prodmaisvendidos | GET | [`reports`] |
//! | /prodCliente | GET | [`reports`] |
//! | /cmc | GET | [`reports`] |
//! | /prodBaixoEst | GET | [`reports`] |
//! | /getDataCliente, /cadastrar_cliente, /atualizar_cliente/{id}, /deletar_cliente/{id} | GET/POST/PUT/DELETE | [`customers`] |
//! | /getDataProduto, /cadastrar_produto, /atualizar_produto/{id}, /deletar_produto/{id} | GET/POST/PUT/DELETE | [`products`] |
//! | /health | GET | [`health`] |
//!
//! Bodies are camelCase JSON. Request fields also accept the Portuguese
//! names used by the existing frontend (`nomeCliente`, `qtdEstoque`, ...).

pub mod customers;
pub mod health;
pub mod products;
pub mod reports;
pub mod sales;

use serde::Serialize;

/// Body of update/delete responses.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}
