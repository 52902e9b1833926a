pub mod aggregate;
pub mod breaks;
pub mod intervals;
