pub mod downloads;
pub mod health;
pub mod reports;
