use notification_service::config::NotificationConfig;
use notification_service::startup::Application;
use service_core::config::Config as CoreConfig;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service with the fixture notification.
    pub async fn spawn() -> Self {
        Self::spawn_with(true).await
    }

    /// Spawn the service with an empty store.
    pub async fn spawn_empty() -> Self {
        Self::spawn_with(false).await
    }

    async fn spawn_with(seed_fixtures: bool) -> Self {
        // Use random port for testing (port 0)
        let config = NotificationConfig {
            common: CoreConfig {
                port: 0,
                log_level: "error".to_string(),
                otlp_endpoint: None,
            },
            seed_fixtures,
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn list_notifications(&self) -> Vec<serde_json::Value> {
        self.client
            .get(format!("{}/notifications", self.address))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse response")
    }

    pub async fn post_notification(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/notifications", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
