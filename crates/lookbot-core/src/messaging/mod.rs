pub mod outbound;
pub mod port;
pub mod types;
