//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Digest utilities (SHA-1, MD5, lowercase hex)
//! - Credential hashing for stored passwords and avatar URLs
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
