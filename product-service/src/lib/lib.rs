//! Product catalogue service.
//!
//! Users register and exchange their credentials for a short-lived bearer
//! token. Every product operation requires that token.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::product;
pub use domain::user;
pub use outbound::repositories;
