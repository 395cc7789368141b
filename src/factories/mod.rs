pub mod clause;
pub mod random;
