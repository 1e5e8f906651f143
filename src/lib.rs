//! # Water Tariff Service
//!
//! Tiered water tariff tables and consumption pricing over a REST API.
//!
//! ## Architecture
//!
//! - **domain**: rate table aggregate, range validation, category set,
//!   pricing walk, repository traits
//! - **application**: rate table lifecycle and calculation services
//! - **infrastructure**: SeaORM persistence and in-memory storage
//! - **interfaces**: axum REST API with Swagger documentation
//! - **shared**: error taxonomy, money, pagination, shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

pub use interfaces::http::create_api_router;
