//! Garage - the fixed car catalog behind the four boards
//!
//! The garage is the source of truth for what cars exist. Each era owns a
//! deck of eight cars in canonical year order; the puzzle board is built
//! from one deck and never invents cars of its own.

pub mod builtins;
pub mod car;
pub mod era;

pub use car::Car;
pub use era::Era;
