//! Admin password hashing and verification.

pub mod hasher;

pub use hasher::{AdminPassword, hash_password};
