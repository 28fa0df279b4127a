pub mod authenticator;
pub mod password;
pub mod policy;
pub mod store;
pub mod token_codec;

pub use authenticator::{AuthError, Authenticator, Credentials};
pub use policy::{AccessPolicy, Requirement};
pub use store::{PgUserStore, Role, StoredPrincipal, UserStore};
pub use token_codec::{TokenCodec, VerifyError};
