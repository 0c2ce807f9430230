/*
 * Responsibility
 * - GET /whoami (API キー必須)
 * - middleware が取り出したキーの fingerprint を返す (生のキーは返さない)
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::ApiKeyCtxExtractor;

#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub key_fingerprint: String,
}

pub async fn whoami(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> Json<WhoamiResponse> {
    Json(WhoamiResponse {
        key_fingerprint: ctx.fingerprint,
    })
}
