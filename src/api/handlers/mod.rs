pub mod auth;
pub mod clientes;
pub mod health;
pub mod produtos;
