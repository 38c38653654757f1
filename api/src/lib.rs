//! Client for the equipment-analysis backend: configuration, wire types and the HTTP
//! collaborator the UI talks to. Nothing here renders; all aggregation happens server side.

pub mod client;
pub mod config;
pub mod model;

pub use client::{Backend, HttpBackend};
pub use config::ApiConfig;
pub use model::{EquipmentResult, HistoryEntry, RecordId, Summary, MEASUREMENTS};
