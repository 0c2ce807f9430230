/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config読み込み → AppState 生成 → Router 組み立て
 * - Middleware の適用 (request-id / trace / limit / timeout, API キー)
 * - axum::serve() で起動
 */
use std::{panic, process};

use anyhow::Result;
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, middleware, state::AppState};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,apikey_auth=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // stderr は起動方法によっては見えないので、必ず tracing にも流す
        tracing::error!(?info, "panic");

        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    // development では panic で即落として気付けるようにする
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        app_env = ?config.app_env,
        addr = %config.addr,
        malformed_status = ?config.malformed_status,
        "starting api"
    );

    let state = AppState::from_config(&config);
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .nest("/api/v1", api::v1::routes(state))
        .with_state(state);

    middleware::http::apply(router, &config.http)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::MalformedStatus;

    fn test_config(malformed_status: Option<&str>) -> Config {
        let malformed_status = malformed_status.map(str::to_owned);
        Config::from_lookup(move |key| match key {
            "AUTH_MALFORMED_STATUS" => malformed_status.clone(),
            _ => None,
        })
        .unwrap()
    }

    async fn get(router: Router, uri: &str, auth: Option<&str>) -> (StatusCode, Value) {
        let mut req = Request::builder().uri(uri);
        if let Some(auth) = auth {
            req = req.header(header::AUTHORIZATION, auth);
        }
        let res = router
            .oneshot(req.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn router(malformed_status: Option<&str>) -> Router {
        let config = test_config(malformed_status);
        build_router(AppState::from_config(&config), &config)
    }

    #[tokio::test]
    async fn health_needs_no_api_key() {
        let (status, body) = get(router(None), "/api/v1/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn whoami_returns_fingerprint_only() {
        let (status, body) =
            get(router(None), "/api/v1/whoami", Some("ApiKey xyz789 extra")).await;
        assert_eq!(status, StatusCode::OK);

        let fingerprint = body["key_fingerprint"].as_str().unwrap();
        assert_eq!(fingerprint.len(), 16);
        assert!(!body.to_string().contains("xyz789"));
    }

    #[tokio::test]
    async fn whoami_without_header_is_unauthorized() {
        let (status, body) = get(router(None), "/api/v1/whoami", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "NO_AUTH_HEADER");
    }

    #[tokio::test]
    async fn malformed_status_policy_is_wired_from_config() {
        let (status, _) = get(router(None), "/api/v1/whoami", Some("Bearer abc123")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) =
            get(router(Some("400")), "/api/v1/whoami", Some("Bearer abc123")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "MALFORMED_AUTH_HEADER");
    }

    #[test]
    fn state_carries_policy_from_config() {
        let state = AppState::from_config(&test_config(Some("400")));
        assert_eq!(state.malformed_status, MalformedStatus::BadRequest);
    }
}
