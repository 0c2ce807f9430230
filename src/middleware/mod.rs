/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth::api_key::apply(...), http::apply(...)
 */
pub mod auth;
pub mod http;
