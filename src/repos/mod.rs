pub mod cliente_repo;
pub mod error;
pub mod produto_repo;
