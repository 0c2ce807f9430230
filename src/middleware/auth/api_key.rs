//! `Authorization: ApiKey <token>` を取り出す → ApiKeyCtx を extensions に入れる
//!
//! - 取り出しは `services::auth::ApiKey::from_headers` に任せる（構文チェックのみ）
//! - キーの照合や利用者の解決はここではしない。後段の handler/service 側の責務
//! - 生のキーはログに出さない（fingerprint のみ）

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::error::AppError;
use crate::services::auth::ApiKey;
use crate::state::AppState;

/// 保護したい Router に API キー認証を掛ける。
///
/// 例：
/// ```ignore
/// let protected = Router::new().route("/whoami", get(whoami));
/// let protected = middleware::auth::api_key::apply(protected, state);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, api_key_middleware))
}

async fn api_key_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let key = match ApiKey::from_headers(req.headers()) {
        Ok(key) => key,
        Err(err) => {
            tracing::warn!(
                error = %err,
                method = %req.method(),
                path = %req.uri().path(),
                "api key extraction failed"
            );
            return Err(AppError::from_api_key(err, state.malformed_status));
        }
    };

    let ctx = ApiKeyCtx::new(key);
    tracing::debug!(key_fingerprint = %ctx.fingerprint, "api key extracted");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
