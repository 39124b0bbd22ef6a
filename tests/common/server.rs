use api_key_header::{config::AppConfig, rate_limited, router, state::AppState};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub struct TestServer {
    pub addr: SocketAddr,
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start(config: AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let app = rate_limited(router(AppState::new(&config)), &config)
            .map_err(|e| e.to_string())?;

        let handle = tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Server failed to start");
        });

        Ok(TestServer {
            addr,
            base_url: format!("http://{addr}"),
            handle,
        })
    }

    pub fn create_http_client(&self) -> Result<reqwest::Client, Box<dyn std::error::Error>> {
        Ok(reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()?)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
