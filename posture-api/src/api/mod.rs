//! HTTP API handlers for posture-api

pub mod analyze;
pub mod buildinfo;
pub mod health;

pub use analyze::analyze_posture;
pub use buildinfo::get_build_info;
pub use health::health_routes;
