//! Adapters - concrete implementations of the ports plus the HTTP surface.

pub mod export;
pub mod http;
pub mod memory;
