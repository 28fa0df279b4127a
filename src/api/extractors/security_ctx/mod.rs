/*!
 * Security context extractor
 *
 * Responsibility:
 * - Hand handlers the authenticated principal of the current request
 * - The access middleware verifies the token and fills the context; handlers
 *   only ever see these types
 *
 * Public API:
 * - SecurityContext / Principal
 * - CurrentPrincipal
 */

mod core;
mod types;

pub use core::CurrentPrincipal;
pub use types::{Principal, SecurityContext};
