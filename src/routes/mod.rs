pub mod export;
pub mod health;
pub mod questions;
pub mod results;
pub mod users;
