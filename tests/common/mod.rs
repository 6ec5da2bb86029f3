#![allow(dead_code)]

use axum::Router;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use url::Url;
use url_shortener_client::application::services::LinkWorkflow;
use url_shortener_client::infrastructure::http::HttpLinkApi;

/// Request bodies received by a stub service, in arrival order.
pub type Recorded = Arc<Mutex<Vec<Value>>>;

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn_stub(app: Router) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Url::parse(&format!("http://{addr}")).unwrap()
}

/// Returns a base URL on which nothing is listening.
pub async fn closed_port_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    Url::parse(&format!("http://{addr}")).unwrap()
}

pub fn create_api(base_url: Url, timeout: Duration) -> HttpLinkApi {
    HttpLinkApi::new(base_url, timeout).unwrap()
}

pub fn create_workflow(base_url: Url) -> LinkWorkflow<HttpLinkApi> {
    LinkWorkflow::new(Arc::new(create_api(base_url, Duration::from_secs(5))))
}

pub fn recorded() -> Recorded {
    Arc::new(Mutex::new(Vec::new()))
}
