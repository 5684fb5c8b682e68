//! storefront-hex: hexagonal storefront library (session service + inbound console)

pub mod config;
pub mod errors;

pub mod application;

pub use storefront_types::{domain, ports};

pub mod inbound; // console adapter (menu loop + input handling)
