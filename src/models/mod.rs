//! Data models and serialization structs.
//!
//! This module contains all data structures used to represent the platform's
//! auth, listing and detail payloads, plus the flat record shapes the report
//! is built from.
pub mod violation;
