//! Cache Module
//!
//! Provides a generic in-memory cache with lazy TTL expiration.

mod clock;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::TtlCache;

// == Public Constants ==
/// Default lifetime of cached component metadata and content
pub const DEFAULT_TTL_SECS: u64 = 5 * 60;
