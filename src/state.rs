/*
 * Responsibility
 * - Router / middleware に紐づける共有コンテキスト (AppState)
 *   - ex: 認証失敗時のステータス方針
 * - Clone 前提で持つ (中身は Copy のみ)
 */
use crate::config::{Config, MalformedStatus};

#[derive(Clone, Copy, Debug, Default)]
pub struct AppState {
    pub malformed_status: MalformedStatus,
}

impl AppState {
    pub fn new(malformed_status: MalformedStatus) -> Self {
        Self { malformed_status }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.malformed_status)
    }
}
