use crate::{api, err::Error, init::signals};
use axum::{routing::get, Router};
use axum_server::Handle;
use std::net::{SocketAddr, TcpListener};
use tower_http::trace::TraceLayer;
use tracing::info;

/// The main application object
pub struct App {
    router: Router,
}

impl App {
    /// Create a new application object with the time route registered
    pub fn new() -> Self {
        let router = Router::new()
            .route("/", get(api::time_srv::time))
            .layer(TraceLayer::new_for_http());

        Self { router }
    }

    /// The router serving the application
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind to `address` and serve until a shutdown signal is received
    ///
    /// # Arguments
    /// * `address` - The address to bind to
    ///
    /// # Returns
    /// * `Ok(())` if the server exited successfully
    /// * An error if binding or serving failed
    pub async fn serve(self, address: SocketAddr) -> Result<(), Error> {
        let listener = TcpListener::bind(address)?;
        let handle = Handle::new();

        tokio::spawn(signals::graceful_shutdown(handle.clone()));

        self.serve_listener(listener, handle).await
    }

    /// Serve on an already bound listener until `handle` is shut down
    ///
    /// # Arguments
    /// * `listener` - A bound TCP listener
    /// * `handle` - Handle used to stop the server
    ///
    /// # Returns
    /// * `Ok(())` if the server exited successfully
    /// * An error if serving failed
    pub async fn serve_listener(self, listener: TcpListener, handle: Handle) -> Result<(), Error> {
        listener.set_nonblocking(true)?;
        let address = listener.local_addr()?;

        info!("Listening on: http://{}", address);

        axum_server::from_tcp(listener)
            .handle(handle)
            .serve(
                self.router
                    .into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await?;

        info!("Server exited");
        Ok(())
    }
}
