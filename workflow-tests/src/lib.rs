//! Cross-service workflow integration tests library.
//!
//! Spawns both services in-process on random ports and drives them over HTTP,
//! the way a shop front-end would.

use analytics_service::config::AnalyticsConfig;
use anyhow::{anyhow, Context, Result};
use notification_service::config::NotificationConfig;
use service_core::config::Config as CoreConfig;
use std::sync::Once;
use std::time::Duration;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,workflow_tests=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

fn test_core_config() -> CoreConfig {
    CoreConfig {
        port: 0,
        log_level: "error".to_string(),
        otlp_endpoint: None,
    }
}

/// Both services running side by side.
pub struct WorkflowTestContext {
    pub analytics_url: String,
    pub notification_url: String,
    pub client: reqwest::Client,
}

impl WorkflowTestContext {
    /// Spawn both services with their fixture records and wait until healthy.
    pub async fn new() -> Result<Self> {
        init_tracing();

        let analytics = analytics_service::Application::build(AnalyticsConfig {
            common: test_core_config(),
            seed_fixtures: true,
        })
        .await
        .map_err(|e| anyhow!("analytics-service failed to start: {}", e))?;

        let notifications = notification_service::Application::build(NotificationConfig {
            common: test_core_config(),
            seed_fixtures: true,
        })
        .await
        .map_err(|e| anyhow!("notification-service failed to start: {}", e))?;

        let ctx = Self {
            analytics_url: format!("http://127.0.0.1:{}", analytics.port()),
            notification_url: format!("http://127.0.0.1:{}", notifications.port()),
            client: reqwest::Client::new(),
        };

        tokio::spawn(async move {
            analytics.run_until_stopped().await.ok();
        });
        tokio::spawn(async move {
            notifications.run_until_stopped().await.ok();
        });

        wait_for_services(&ctx, Duration::from_secs(5)).await?;
        tracing::debug!(
            analytics = %ctx.analytics_url,
            notifications = %ctx.notification_url,
            "Workflow services ready"
        );

        Ok(ctx)
    }

    pub async fn get_json(&self, url: String) -> Result<serde_json::Value> {
        self.client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?
            .json()
            .await
            .with_context(|| format!("decoding response of GET {url}"))
    }

    pub async fn post_json(
        &self,
        url: String,
        body: serde_json::Value,
    ) -> Result<(u16, serde_json::Value)> {
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("POST {url}"))?;
        let status = response.status().as_u16();
        let body = response
            .json()
            .await
            .with_context(|| format!("decoding response of POST {url}"))?;
        Ok((status, body))
    }
}

/// Poll both `/health` endpoints until they answer or `timeout` elapses.
pub async fn wait_for_services(ctx: &WorkflowTestContext, timeout: Duration) -> Result<()> {
    let deadline = tokio::time::Instant::now() + timeout;

    for base in [&ctx.analytics_url, &ctx.notification_url] {
        let url = format!("{base}/health");
        loop {
            match ctx.client.get(&url).send().await {
                Ok(response) if response.status().is_success() => break,
                _ if tokio::time::Instant::now() >= deadline => {
                    return Err(anyhow!("{url} did not become healthy within {:?}", timeout));
                }
                _ => tokio::time::sleep(Duration::from_millis(50)).await,
            }
        }
    }

    Ok(())
}
