pub mod calculations;
pub mod health;
pub mod metrics;
pub mod rate_tables;
pub mod request_id;
