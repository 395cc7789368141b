pub mod csp;
pub mod error;
pub mod factories;
