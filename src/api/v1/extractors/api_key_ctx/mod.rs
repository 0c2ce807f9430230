/*!
 * API key context extractor
 *
 * Responsibility:
 * - API キー認証済みリクエストのコンテキスト（ApiKeyCtx）を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - ApiKeyCtx
 * - ApiKeyCtxExtractor
 */

mod core;
mod types;

pub use core::ApiKeyCtxExtractor;
pub use types::ApiKeyCtx;
