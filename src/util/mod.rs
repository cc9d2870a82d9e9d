pub mod round;
pub mod segment;
