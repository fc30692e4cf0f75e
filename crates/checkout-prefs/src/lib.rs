//! # checkout-prefs: Display Preferences
//!
//! Theme and font-size preferences for the checkout front end, held as an
//! explicit configuration object with its own load/save lifecycle.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Preferences Lifecycle                                │
//! │                                                                         │
//! │  PreferencesService::init(store, system_prefers_dark)                   │
//! │       │                                                                 │
//! │       ├── store.load() ── saved? ──► use saved theme / font size        │
//! │       │                     │                                           │
//! │       │                     └─ no ──► system theme, 16px                │
//! │       ▼                                                                 │
//! │  toggle_theme() / increase_font() / decrease_font() / set_font_size()   │
//! │       │                                                                 │
//! │       └──► store.save() after every change                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`model`] - `Preferences`, `Theme`, `FontSize`
//! - [`store`] - `PreferencesStore` trait, file and in-memory stores
//! - [`service`] - `PreferencesService`
//! - [`error`] - `PrefsError`

pub mod error;
pub mod model;
pub mod service;
pub mod store;

pub use error::{PrefsError, PrefsResult};
pub use model::{FontSize, Preferences, SavedPreferences, Theme};
pub use service::PreferencesService;
pub use store::{FileStore, MemoryStore, PreferencesStore};
