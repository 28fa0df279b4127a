//! Declarative endpoint access rules.
//!
//! An ordered table of (method, path pattern) → requirement, built once at
//! startup and consulted on every request. First matching rule wins; a
//! request no rule matches requires authentication.

use axum::http::Method;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Proceed regardless of the security context.
    Public,
    /// A populated security context is required.
    Authenticated,
}

#[derive(Debug, Clone)]
struct Rule {
    /// `None` applies the rule to every method.
    method: Option<Method>,
    pattern: String,
    requirement: Requirement,
}

#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    rules: Vec<Rule>,
}

impl AccessPolicy {
    pub fn builder() -> AccessPolicyBuilder {
        AccessPolicyBuilder { rules: Vec::new() }
    }

    pub fn requirement(&self, method: &Method, path: &str) -> Requirement {
        self.rules
            .iter()
            .find(|rule| {
                rule.method.as_ref().is_none_or(|m| m == method)
                    && pattern_matches(&rule.pattern, path)
            })
            .map(|rule| rule.requirement)
            .unwrap_or(Requirement::Authenticated)
    }
}

pub struct AccessPolicyBuilder {
    rules: Vec<Rule>,
}

impl AccessPolicyBuilder {
    pub fn rule(
        mut self,
        method: Option<Method>,
        pattern: &str,
        requirement: Requirement,
    ) -> Self {
        self.rules.push(Rule {
            method,
            pattern: pattern.to_string(),
            requirement,
        });
        self
    }

    pub fn public(self, method: Method, pattern: &str) -> Self {
        self.rule(Some(method), pattern, Requirement::Public)
    }

    pub fn public_any(self, pattern: &str) -> Self {
        self.rule(None, pattern, Requirement::Public)
    }

    pub fn build(self) -> AccessPolicy {
        AccessPolicy { rules: self.rules }
    }
}

/// `prefix/**` matches the prefix itself and anything below it; any other
/// pattern is an exact match.
fn pattern_matches(pattern: &str, path: &str) -> bool {
    match pattern.strip_suffix("/**") {
        Some(prefix) => path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/')),
        None => path == pattern,
    }
}
