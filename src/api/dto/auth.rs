use serde::Deserialize;

/// Request body for `POST /login`.
///
/// No Debug derive: the senha must not be printable.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.email.trim().is_empty() {
            return Err("email is required");
        }
        if self.senha.is_empty() {
            return Err("senha is required");
        }
        Ok(())
    }
}
