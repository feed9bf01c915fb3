//! Client-side car catalog browser: filter, sort and page a fixed list of
//! vehicles, with a wishlist persisted to local key-value storage.

pub mod catalog;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod filter;
pub mod models;
pub mod paginator;
pub mod session;
pub mod storage;
pub mod view;
pub mod wishlist;

pub use catalog::Catalog;
pub use controller::CatalogController;
pub use models::{FilterCriteria, FuelType, SeatFilter, SortMode, VehicleRecord, ViewMode};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
pub use wishlist::{WISHLIST_KEY, Wishlist};
