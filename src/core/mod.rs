pub mod aggregate;
pub mod handle;
pub mod image_loader;
pub mod repository;

pub use crate::domain::model::Place;
pub use crate::domain::ports::{ConfigProvider, PlaceApi, Storage};
pub use crate::utils::error::Result;
