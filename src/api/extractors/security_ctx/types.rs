use crate::services::auth::{Role, StoredPrincipal};

/// Authenticated identity attached to a request, as handlers see it.
/// Carries no secret material.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: i64,
    pub email: String,
    pub roles: Vec<Role>,
}

impl Principal {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

impl From<StoredPrincipal> for Principal {
    fn from(p: StoredPrincipal) -> Self {
        Self {
            id: p.id,
            email: p.email,
            roles: p.roles,
        }
    }
}

/// Per-request security context. The access middleware creates one for
/// every non-public request and stores it in the request's extensions; it
/// is dropped with the request and never shared across requests.
#[derive(Debug, Clone, Default)]
pub struct SecurityContext {
    pub principal: Option<Principal>,
}
