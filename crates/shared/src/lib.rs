//! Shared utilities for the Contact Desk backend.
//!
//! This crate provides functionality used by the persistence and app crates:
//! - Password hashing (bcrypt, with Argon2 verification for older hashes)
//! - Random credential generation for first-run provisioning

pub mod password;
