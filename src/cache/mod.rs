//! Persistent resolution caching.
//!
//! One JSON object on disk mapping symbol names to resolved records.
//! Load-once at startup, wholesale overwrite on flush.

mod store;

pub use store::{CacheWarning, ResolutionCache, NO_KEY};
