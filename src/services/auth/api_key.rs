/*
 * Responsibility
 * - `Authorization: ApiKey <token>` ヘッダから API キーを取り出す (構文チェックのみ)
 * - キーの有効性・失効・権限の判定はしない (呼び出し側の責務)
 * - HTTP フレームワーク (axum) 非依存: HeaderMap だけを受け取る純粋関数
 */
use std::fmt;

use axum::http::{HeaderMap, header};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Authorization ヘッダの scheme。大文字小文字を区別する (`apikey` は不可)
pub const API_KEY_SCHEME: &str = "ApiKey";

const FINGERPRINT_BYTES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiKeyError {
    /// ヘッダが無い、または最初の値が空文字
    #[error("no authorization header included")]
    NoAuthHeader,
    /// ヘッダはあるが `ApiKey <token>` として読めない
    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

/// Extract the API key from `Authorization: ApiKey <token>`.
///
/// - Only the first `Authorization` value is read (`HeaderMap::get`); later
///   instances of the header are ignored.
/// - The value is split on whitespace. The first field must be exactly
///   [`API_KEY_SCHEME`] and the second field is returned. Anything after the
///   second field is ignored.
/// - A non-empty value that is not visible ASCII cannot be split and is
///   reported as [`ApiKeyError::MalformedAuthHeader`].
pub fn extract_api_key(headers: &HeaderMap) -> Result<String, ApiKeyError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .filter(|v| !v.as_bytes().is_empty())
        .ok_or(ApiKeyError::NoAuthHeader)?;

    let value = value
        .to_str()
        .map_err(|_| ApiKeyError::MalformedAuthHeader)?;

    let mut fields = value.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(API_KEY_SCHEME), Some(key)) => Ok(key.to_owned()),
        _ => Err(ApiKeyError::MalformedAuthHeader),
    }
}

/// 取り出した API キー
///
/// - 生のキーは Debug/ログに出さない。ログ相関には `fingerprint()` を使う
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, ApiKeyError> {
        extract_api_key(headers).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// SHA-256 の先頭 8 byte を hex にしたもの (ログ・レスポンスに出して良い)
    pub fn fingerprint(&self) -> String {
        Sha256::digest(self.0.as_bytes())
            .iter()
            .take(FINGERPRINT_BYTES)
            .map(|b| format!("{b:02x}"))
            .collect()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_tuple("ApiKey").field(&self.fingerprint()).finish()
    }
}
