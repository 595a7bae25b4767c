//! Storage Adapters
//!
//! Concrete implementations of the domain storage ports:
//!
//! | Adapter | Backing store | Use |
//! |---------|---------------|-----|
//! | [`FileStorage`] | One `<role>.json` file per role in a base directory | Durable local client state |
//! | [`MemoryStorage`] | In-process `HashMap` | Tests and ephemeral setups |

/// Filesystem-backed storage adapter
pub mod file;
/// In-memory storage adapter
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;
