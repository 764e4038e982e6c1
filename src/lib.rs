//! dotcfg: Hierarchical Defaults/Locals Configuration
//!
//! Builds one configuration tree from a mandatory defaults document and an
//! optional locals document, then serves dot-addressed reads and typed or
//! textual (`path=value`) writes against it.
//!
//! ```
//! use dotcfg::ConfigStore;
//! use serde_json::json;
//!
//! let mut store = ConfigStore::new();
//! store.initialize_with(
//!     json!({"greeting": "hello", "subject": {"first": "Joe"}}),
//!     Some(json!({"subject": {"first": "Jane"}})),
//! )?;
//! assert_eq!(store.get("subject.first")?.as_str(), Some("Jane"));
//!
//! store.put_str("subject.first=Anna")?;
//! assert_eq!(store.get("subject.first")?.as_str(), Some("Anna"));
//! # Ok::<(), dotcfg::ConfigError>(())
//! ```

pub mod cast;
pub mod cli;
pub mod error;
pub mod loader;
pub mod logging;
pub mod merge;
pub mod resolve;
pub mod store;
pub mod tree;
pub mod update;

pub use error::{ConfigError, Result};
pub use loader::{FileLoader, Loader, RawConfig, StaticLoader};
pub use resolve::Selection;
pub use store::ConfigStore;
pub use tree::{ConfigNode, ConfigTree, ConfigValue, PropertyPath};
pub use update::Update;
