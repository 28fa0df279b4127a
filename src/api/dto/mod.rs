pub mod auth;
pub mod clientes;
pub mod produtos;
