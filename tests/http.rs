//! End-to-end tests against a real listener.

use std::net::SocketAddr;

use env_greeter::api::AppState;
use env_greeter::env::InMemoryEnv;
use env_greeter::greeting::render_greeting;
use env_greeter::server;
use pretty_assertions::assert_eq;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct TestServer {
    addr: SocketAddr,
    stop: oneshot::Sender<()>,
    handle: JoinHandle<env_greeter::Result<()>>,
}

impl TestServer {
    async fn start(env: InMemoryEnv) -> Self {
        let listener = server::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let (stop, stopped) = oneshot::channel::<()>();

        let handle = tokio::spawn(server::serve(listener, AppState::with_env(env), async move {
            let _ = stopped.await;
        }));

        Self { addr, stop, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn shutdown(self) {
        self.stop.send(()).unwrap();
        self.handle.await.unwrap().unwrap();
    }
}

#[tokio::test]
async fn serves_greeting_with_default_environment() {
    let server = TestServer::start(InMemoryEnv::new()).await;

    let response = reqwest::get(server.url("/")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), render_greeting("dev"));

    server.shutdown().await;
}

#[tokio::test]
async fn serves_greeting_with_configured_environment() {
    let server = TestServer::start(InMemoryEnv::new().with("ENV", "prod")).await;

    let body = reqwest::get(server.url("/"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("prod"));

    server.shutdown().await;
}

#[tokio::test]
async fn concurrent_requests_get_identical_bodies() {
    let server = TestServer::start(InMemoryEnv::new().with("ENV", "stage")).await;
    let client = reqwest::Client::new();

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        let url = server.url("/");
        tasks.push(tokio::spawn(async move {
            client.get(url).send().await.unwrap().text().await.unwrap()
        }));
    }

    for task in tasks {
        assert_eq!(task.await.unwrap(), render_greeting("stage"));
    }

    server.shutdown().await;
}

#[tokio::test]
async fn other_paths_and_methods_use_framework_defaults() {
    let server = TestServer::start(InMemoryEnv::new()).await;
    let client = reqwest::Client::new();

    let missing = client.get(server.url("/missing")).send().await.unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);

    let delete = client.delete(server.url("/")).send().await.unwrap();
    assert_eq!(delete.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);

    server.shutdown().await;
}
