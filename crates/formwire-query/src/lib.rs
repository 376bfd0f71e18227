//! formwire Query State
//!
//! URL-synchronized state: named slots, sort directions and pagination
//! cursors, with the query string as the single source of truth.
//!
//! # Overview
//!
//! - **QueryStore**: slot reads derived from the URL, bulk set/clear as one history entry
//! - **Location**: injectable URL + history ([`MemoryLocation`], [`UrlLocation`])
//! - **ServerSort / ClientSort**: per-column sort state machines
//! - **PaginationConfig**: page keys, reset on every filter change
//!
//! # Example
//!
//! ```rust
//! use formwire_query::{MemoryLocation, PaginationConfig, QuerySlot, QueryStore};
//!
//! let mut store = QueryStore::new(
//!     MemoryLocation::new(),
//!     [QuerySlot::filter("filter"), QuerySlot::filter("session")],
//! )
//! .with_pagination(PaginationConfig::page_index());
//!
//! store.set_many([
//!     ("filter", Some("john".to_string())),
//!     ("session", Some("s1".to_string())),
//! ]);
//! assert_eq!(store.location().query(), "filter=john&session=s1&pageIndex=1");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod location;
pub mod slot;
pub mod sort;
pub mod store;

// Re-exports
pub use error::LocationError;
pub use location::{decode_query, encode_query, Location, MemoryLocation, QueryPairs, UrlLocation};
pub use slot::{PaginationConfig, QuerySlot, SlotRole};
pub use sort::{active_sorts, ClientSort, ServerSort, SortBinding, SortDirection, DEFAULT_SORT_PREFIX};
pub use store::QueryStore;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for query-state operations
    pub use crate::{
        Location, MemoryLocation, PaginationConfig, QuerySlot, QueryStore, ServerSort,
        SlotRole, SortBinding, SortDirection, UrlLocation,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
