//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for building the router with a given configuration
//! - Request bodies for the export and filename endpoints

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use exam_export_backend::config::Config;
use exam_export_backend::{router, AppState};

/// Test context holding the application router.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a context with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            app: router(AppState::new(config)),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }
}
