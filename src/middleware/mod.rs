/*
 * Responsibility
 * - public interface of the middleware layers
 * - each module exposes apply(router, ..) -> Router
 */
pub mod cors;
pub mod headers;
pub mod http;
