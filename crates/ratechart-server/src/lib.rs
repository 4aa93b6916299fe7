//! # Ratechart Server
//!
//! REST server for synthetic profit-rate charts.
//!
//! ## Features
//!
//! - `GET /{api-version}/functional/random/chart?fromDate=&toDate=`: one
//!   random rate per business day
//! - `POST /{api-version}/functional/mask`: sensitive-data masking
//! - Health endpoint
//! - Configuration via TOML file
//!
//! ## Usage
//!
//! ```ignore
//! use ratechart_server::Server;
//!
//! let server = Server::new(config, holidays);
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod handlers;
pub mod mask;
pub mod routes;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use ratechart_ext_http::{DataPortalHolidaySource, EmptyHolidaySource};
use ratechart_traits::holidays::HolidaySource;

pub use config::{ConfigError, ServerConfig};
pub use service::ChartService;

/// The Ratechart server.
pub struct Server {
    config: ServerConfig,
    holidays: Arc<dyn HolidaySource>,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig, holidays: Arc<dyn HolidaySource>) -> Self {
        Self { config, holidays }
    }

    /// Create a server whose holiday source is chosen from `config`.
    pub fn from_config(config: ServerConfig) -> Self {
        let holidays = holiday_source(&config);
        Self::new(config, holidays)
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let charts = ChartService::new(self.holidays.clone(), self.config.allocation)
            .with_holiday_timeout(self.config.holiday_timeout());

        routes::create_router(&self.config, charts)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = SocketAddr::new(
            self.config.host.parse().unwrap_or([0, 0, 0, 0].into()),
            self.config.port,
        );

        info!(
            "Starting Ratechart server on {} (holidays via {})",
            addr,
            self.holidays.name()
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}

/// The data portal source when a holiday server is configured, otherwise the
/// empty source.
pub fn holiday_source(config: &ServerConfig) -> Arc<dyn HolidaySource> {
    match config.api_server(config::HOLIDAY_SERVER) {
        Some(server) => Arc::new(
            DataPortalHolidaySource::new(&server.domain, server.key)
                .with_num_of_rows(config.holiday_rows)
                .with_timeout(config.holiday_timeout()),
        ),
        None => {
            tracing::warn!(
                "No '{}' API server configured; charts will skip weekends only",
                config::HOLIDAY_SERVER
            );
            Arc::new(EmptyHolidaySource)
        }
    }
}
