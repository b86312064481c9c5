pub mod catalog;
pub mod health;
pub mod interactions;
pub mod session;
