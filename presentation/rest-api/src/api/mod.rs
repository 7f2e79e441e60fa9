pub mod error;
pub mod gift;
pub mod health;
pub mod session;
pub mod tags;
