//! Shared setup for the contract suites
//!
//! Each test gets its own freshly seeded server on an ephemeral port, so
//! updates and deletes of the seeded records never leak between tests.
//! Setting `BRT_API_BASE_URL` points the suites at an already running
//! service instead.

#![allow(dead_code)]

use brt_api::AppState;
use brt_billing::startup;
use brt_client::{ApiClient, ClientConfig};
use brt_core::AppConfig;
use brt_store::InMemoryStore;
use std::net::TcpListener;

pub use brt_client::fixtures::*;

pub struct TestApp {
    pub client: ApiClient,
}

pub async fn spawn_app() -> TestApp {
    if std::env::var("BRT_API_BASE_URL").is_ok() {
        let client = ApiClient::from_env().expect("client config from environment");
        return TestApp { client };
    }

    let mut config = AppConfig::default();
    config.server.workers = 1;

    let store = InMemoryStore::seeded(&config.seed)
        .await
        .expect("seed store");

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();

    let server = startup::run(listener, AppState::from_store(&store), &config)
        .expect("build server");
    tokio::spawn(server);

    let client = ApiClient::new(ClientConfig::new(format!("http://127.0.0.1:{}", port)))
        .expect("build client");

    TestApp { client }
}
