//! Domain layer for the Contact Desk backend.
//!
//! This crate contains the backend-neutral records exchanged between the
//! persistence core and its collaborators:
//! - Contact submissions, their status and service enumerations
//! - Administrative accounts
//! - Key/value settings and social-media links
//! - Filter and statistics value types

pub mod models;
