//! formwire Core - form controllers for admin consoles
//!
//! Binds compiled field descriptors to the state they edit:
//! - [`FilterBar`] keeps a draft of list filters in sync with the URL query
//! - [`EntityForm`] edits one record and produces its JSON payload
//! - [`ConsoleConfig`] fixes the query-key layout shared by list pages
//!
//! # Example
//!
//! ```rust
//! use formwire_core::prelude::*;
//! use formwire_query::MemoryLocation;
//! use formwire_schema::{ObjectSchema, SchemaNode};
//!
//! let extra = ObjectSchema::new().field("session", SchemaNode::string());
//! let mut bar = FilterBar::new(Some(&extra));
//! let mut store = bar.store(MemoryLocation::new(), &ConsoleConfig::default());
//!
//! bar.edit("filter", "john").unwrap();
//! bar.edit("session", "s1").unwrap();
//! bar.submit(&mut store);
//!
//! assert_eq!(store.location().query(), "filter=john&session=s1&pageIndex=1");
//! ```

// Core modules
pub mod config;
pub mod entity_form;
pub mod error;
pub mod filter_bar;

// Re-exports for convenience
pub use config::ConsoleConfig;
pub use entity_form::EntityForm;
pub use error::{FormError, FormResult};
pub use filter_bar::FilterBar;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with form controllers
    pub use crate::{ConsoleConfig, EntityForm, FilterBar, FormError, FormResult};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
