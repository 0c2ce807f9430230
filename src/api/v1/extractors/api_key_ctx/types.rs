/*
 * Responsibility
 * - Handler から見える「API キー認証済みコンテキスト」の型
 * - middleware がヘッダから取り出して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - キー → 利用者の解決や権限判定はここでは扱わない
 */
use crate::services::auth::ApiKey;

/// API キーが付与されたリクエストのコンテキスト
///
/// - `key` は取り出した生のキー（Debug では伏せられる）
/// - `fingerprint` はログ相関用
#[derive(Debug, Clone)]
pub struct ApiKeyCtx {
    pub key: ApiKey,
    pub fingerprint: String,
}

impl ApiKeyCtx {
    pub fn new(key: ApiKey) -> Self {
        let fingerprint = key.fingerprint();
        Self { key, fingerprint }
    }
}
