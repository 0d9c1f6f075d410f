use std::time::Duration;

use async_trait::async_trait;
use smarteats_config::api::ApiConfig;
use smarteats_core::menu::parse_halls;
use smarteats_types::DiningHall;

use crate::{MenuSource, SourceError};

/// SmartEats REST backend
#[derive(Clone)]
pub struct BackendClient {
    halls_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    pub fn new(config: &ApiConfig) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            halls_url: config.halls_url(),
            client,
        })
    }
}

#[async_trait]
impl MenuSource for BackendClient {
    async fn halls(&self) -> Result<Vec<DiningHall>, SourceError> {
        tracing::info!("Fetching dining halls from {}", self.halls_url);

        let response = self.client.get(&self.halls_url).send().await?;

        if !response.status().is_success() {
            tracing::warn!("Halls request failed with {}", response.status());
            return Err(SourceError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let halls = parse_halls(&body)?;
        tracing::info!("Loaded {} dining halls from backend", halls.len());
        Ok(halls)
    }

    fn describe(&self) -> String {
        self.halls_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Serve one canned HTTP response on a random local port
    async fn serve_once(status: &'static str, body: &'static str) -> ApiConfig {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        ApiConfig {
            base_url: format!("http://{addr}/"),
            timeout_seconds: 5,
        }
    }

    #[tokio::test]
    async fn test_fetch_halls() {
        let config = serve_once(
            "200 OK",
            r#"[{ "Dining_Hall_ID": 2, "name": "PAR Dining", "location": "", "dishes": [
                { "dish_id": 1, "dish_name": "Grilled Shrimp Tacos", "calories": 480, "protein": 28,
                  "carbohydrates": 40, "fat": 18, "category": "protein" } ] }]"#,
        )
        .await;

        let client = BackendClient::new(&config).unwrap();
        assert!(client.describe().ends_with("/api/halls/"));

        let halls = client.halls().await.unwrap();
        assert_eq!(halls.len(), 1);
        assert_eq!(halls[0].dishes[0].dish_name, "Grilled Shrimp Tacos");
    }

    #[tokio::test]
    async fn test_error_status() {
        let config = serve_once("500 Internal Server Error", "{}").await;
        let client = BackendClient::new(&config).unwrap();

        match client.halls().await {
            Err(SourceError::Status(code)) => assert_eq!(code, 500),
            other => panic!("expected status error, got {other:?}"),
        }
    }
}
