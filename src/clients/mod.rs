//! Outbound clients

pub mod generate_client;

pub use generate_client::GenerateClient;
