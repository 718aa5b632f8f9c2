//! Persistence Layer

pub mod sled;
