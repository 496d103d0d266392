use std::sync::Arc;

use studbud_service::{MockGenerator, PlanRequester};
use tokio::net::TcpListener;

/// A running test server with base_url and background task handle.
pub struct TestServer {
    pub base_url: String,
    _handle: tokio::task::JoinHandle<()>,
}

/// Spawn the web shell on a random port, backed by `generator`.
pub async fn spawn_test_server(generator: Arc<MockGenerator>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");
    let app = crate::build_router(PlanRequester::new(generator));
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base_url,
        _handle: handle,
    }
}
