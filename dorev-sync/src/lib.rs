//! Dictionary retrieval and message hook for dorev
//!
//! The `dorev` crate only translates; this crate owns everything around it:
//! settings, downloading the dictionary, caching it on disk, refreshing it
//! and rewriting outgoing messages.
//!
//! # Example
//!
//! ```ignore
//! use dorev_sync::{DictionaryStore, HookResult, HttpSource, MessageHook, Settings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::from_env()?;
//!     let store = DictionaryStore::new(settings, Box::new(HttpSource::new()?));
//!     let mut hook = MessageHook::new(store);
//!
//!     if let HookResult::Modify(text) = hook.on_send_message("Привет, мир!").await? {
//!         println!("{}", text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod hook;
pub mod mock;
pub mod settings;
pub mod source;
pub mod store;

#[cfg(test)]
mod integration_tests;

pub use error::{SyncError, SyncResult};
pub use hook::{HookResult, MessageHook};
pub use mock::{MockMode, MockSource};
pub use settings::{DEFAULT_DICT_ADDRESS, Settings, validate_dictionary_url};
pub use source::{DictionarySource, HttpSource};
pub use store::DictionaryStore;
