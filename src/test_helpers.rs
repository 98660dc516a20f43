//! Shared fixtures for tests: an in-process stub of the analytics API.

use axum::Router;

use crate::api::ApiClient;
use crate::config::DashboardConfig;

/// Serve `router` under `/api` on an ephemeral port and return a client
/// pointed at it.
pub async fn spawn_stub(router: Router) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, Router::new().nest("/api", router)).await.unwrap();
    });
    let config = DashboardConfig::default()
        .with_base_url(&format!("http://{addr}/api"))
        .unwrap();
    ApiClient::new(&config).unwrap()
}

/// A client pointed at a port nobody listens on.
pub async fn unreachable_client() -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let config = DashboardConfig {
        api_base_url: format!("http://{addr}/api"),
        request_timeout_secs: Some(5),
        connect_timeout_secs: Some(2),
    };
    ApiClient::new(&config).unwrap()
}
