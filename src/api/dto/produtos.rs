/*
 * Responsibility
 * - Produtos request/response DTOs + shape validation
 */
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateProdutoRequest {
    pub nome: String,
    pub preco: f64,
}

impl CreateProdutoRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.nome.trim().is_empty() {
            return Err("nome is required");
        }
        if !self.preco.is_finite() || self.preco <= 0.0 {
            return Err("preco must be positive");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ProdutoResponse {
    pub id: i64,
    pub nome: String,
    pub preco: f64,
}
