//! # Cinema Eats Core
//!
//! Interaction core for the Cinema Eats catalog of movie food scenes.
//!
//! ## Overview
//!
//! - [`catalog`]: the read-only scene catalog and curated collections
//! - [`query`]: facet filtering, free-text search and pagination
//! - [`favorites`]: the persisted favorites set and its storage backends
//! - [`view`]: the view controller that turns user intents into render frames
//!
//! Rendering is left to the caller. A front end feeds [`view::Intent`]s to a
//! [`view::ViewController`] (directly, or through [`view::run_view_loop`] when
//! search debouncing should follow wall-clock time) and draws the
//! [`view::RenderFrame`]s it gets back.
//!
//! ```no_run
//! use cinema_eats_core::{
//!     catalog::Catalog,
//!     favorites::{FavoritesStore, MemoryStorage},
//!     settings::ViewSettings,
//!     view::{Intent, ViewController},
//! };
//! use cinema_eats_model::Facet;
//! use std::sync::Arc;
//!
//! let favorites = FavoritesStore::load(Arc::new(MemoryStorage::default()));
//! let mut view = ViewController::new(
//!     Catalog::builtin(),
//!     favorites,
//!     ViewSettings::default(),
//! );
//!
//! for effect in view.update(Intent::FilterToggled {
//!     facet: Facet::Cuisine,
//!     value: "Italian".into(),
//!     selected: true,
//! }) {
//!     println!("{effect:?}");
//! }
//! ```
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod favorites;
pub mod query;
pub mod settings;
pub mod view;

pub use cinema_eats_model as model;
pub use error::{CatalogError, StorageError};
