//! Utilities for cryptographic purposes
//!
//! For now, this module is just contains a couple of helper types for
//! handling secret-dependent bytes.

pub mod ct;
pub mod scratch;
