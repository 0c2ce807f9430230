/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health は認証なし、/whoami は API キー必須
 * - API キーが必要な範囲はここで middleware::auth::api_key::apply を掛けて決める
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{health::health, whoami::whoami};
use crate::middleware;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new().route("/whoami", get(whoami));
    let protected = middleware::auth::api_key::apply(protected, state);

    Router::new().route("/health", get(health)).merge(protected)
}
