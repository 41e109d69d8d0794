//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::RuntimeHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends talk to the game through a [`RuntimeHandle`]:
/// - read the board, status and log panels from its view
/// - submit command lines typed by the player
/// - start the refresh loops on request
///
/// Frontends do NOT own the Runtime; shutting down the loops is the caller's
/// job once `run` returns.
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::Frontend;
/// use runtime::RuntimeHandle;
/// use anyhow::Result;
///
/// struct PrintOnce;
///
/// #[async_trait]
/// impl Frontend for PrintOnce {
///     async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
///         handle.start_refresh().await;
///         println!("{}", handle.view().board());
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}
