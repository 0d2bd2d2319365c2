//! src/lib.rs

pub mod configurations;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod domain;
pub mod identity;
pub mod storage_client;
