/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod build_system;
pub mod clock;
pub mod formatters;
pub mod network;
