//! `Authorization: ApiKey <token>` から API キーを取り出すライブラリと、
//! それを使う axum サーバ。
//!
//! 中心は [`services::auth::extract_api_key`]。それ以外はこの関数を呼ぶ側
//! (middleware / handler / 起動処理)。

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

pub use services::auth::{ApiKey, ApiKeyError, extract_api_key};
