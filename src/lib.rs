pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::LocalStorage;
pub use crate::core::aggregate::fetch_places_with_images;
pub use crate::core::handle::{FetchHandle, HandleSlot};
pub use crate::core::image_loader::ImageLoader;
pub use crate::core::repository::PlaceRepository;
pub use crate::domain::model::Place;
pub use crate::domain::services::{filter_places, PlaceListing};
pub use crate::utils::error::{FetchError, Result};
