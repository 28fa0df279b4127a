/*
 * Responsibility
 * - Clientes request/response DTOs + shape validation
 */
use serde::{Deserialize, Serialize};

/// Signup body. No Debug derive: the senha must not be printable.
#[derive(Deserialize)]
pub struct CreateClienteRequest {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

impl CreateClienteRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.nome.trim().is_empty() {
            return Err("nome is required");
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err("a valid email is required");
        }
        if self.senha.len() < 8 {
            return Err("senha must be at least 8 characters");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ClienteResponse {
    pub id: i64,
    pub nome: String,
    pub email: String,
}
