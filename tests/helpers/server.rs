use jobledger::settings::Settings;
use jobledger::web::{self, AppState};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Router served on an ephemeral local port for the lifetime of the test
pub struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub async fn start(db: DatabaseConnection) -> Self {
        let state = AppState {
            settings: Arc::new(Settings::default()),
            db,
        };

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("No local addr");

        let handle = tokio::spawn(async move {
            axum::serve(listener, web::router(state))
                .await
                .expect("Test server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
