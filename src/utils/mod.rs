//! Small shared helpers

pub mod hashing;

pub use hashing::stable_hash;
