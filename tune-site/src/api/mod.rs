//! HTTP handlers for tune-site

pub mod buildinfo;
pub mod health;
pub mod site;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use site::serve_site;
