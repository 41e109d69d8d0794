//! Top-level client orchestrating the runtime and a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (refresh loops, command interpreter, view channels)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The one-shot subcommands of the `sconwar` binary live in [`commands`];
//! they talk to the server through [`runtime::GameApi`] without starting a
//! runtime.

mod builder;
pub mod commands;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() collects the runtime and frontend
/// 2. Client::run() transfers control to the frontend (blocking)
/// 3. On frontend exit the refresh loops are shut down and joined
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until the user quits, then stop the runtime.
    ///
    /// # Errors
    ///
    /// Returns the frontend's error, after the runtime has been stopped.
    pub async fn run(self) -> Result<()> {
        let handle = self.runtime.handle();

        let mut frontend = self.frontend;
        let frontend_result = frontend.run(handle).await;

        for (kind, outcome) in self.runtime.shutdown().await {
            tracing::info!(%kind, ?outcome, "refresh loop finished");
        }

        frontend_result
    }
}
