pub mod client;
pub mod inventory;
pub mod session;
pub mod types;

pub use client::SmartZoneClient;
pub use session::Session;
