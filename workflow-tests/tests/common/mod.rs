//! Common test utilities for workflow integration tests.

use workflow_tests::WorkflowTestContext;

/// Spawn both services and return a context connected to them.
pub async fn setup() -> WorkflowTestContext {
    WorkflowTestContext::new()
        .await
        .expect("Failed to start workflow services")
}
