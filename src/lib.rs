// ============================================================================
// storefront - catalog, cart, and order core behind a REST API
// ============================================================================
//
// Server side: `api` over `domain` and `store`.
// Customer side: `session` and `catalog`, consumable as a library.
//
// ============================================================================

pub mod api;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod session;
pub mod store;
