//! Content hashes, the in-memory index cache, and the persisted index.
//!
//! Two hashes are kept per file: the raw file hash, and a comment-level
//! hash over the parsed annotation payload. The second is what change
//! detection compares — edits that only move code around (shifting line
//! numbers) leave it untouched.

mod cache;
mod persist;

pub use cache::{CacheEntry, IndexCache, comment_hash, hash_bytes, hash_text};
pub use persist::{PersistEntry, PersistError, PersistentIndex};
