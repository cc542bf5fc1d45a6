//! Plugin adapters bundled with the crate.

#[cfg(feature = "syntect")]
pub mod syntect;
