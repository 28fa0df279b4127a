/*
 * Responsibility
 * - Middleware public interface (re-export of the apply functions)
 */
pub mod auth;
pub mod cors;
