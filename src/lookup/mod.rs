//! Remote catalog lookup.
//!
//! Blocking GraphQL client for resolving identifiers and slugs to
//! (identifier, title, difficulty) records. Lookup misses are soft.

mod client;

pub use client::LookupClient;
