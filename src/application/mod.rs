//! Application layer - wires domain logic to the ports.

pub mod handlers;
