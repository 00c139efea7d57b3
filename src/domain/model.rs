use serde::{Deserialize, Serialize};
use url::Url;

/// A single business record returned by the places API.
///
/// `image_url` is never part of the list payload; it is filled in by the
/// aggregation pipeline and stays `None` when the lookup fails. Equality is
/// structural over all fields so consumers can detect whether a refreshed
/// list actually changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub address: String,
    pub stars: u8,
    pub reviews: u32,
    pub price: String,
    pub description: String,
    #[serde(default, rename = "imageURL")]
    pub image_url: Option<Url>,
}

/// Wire shape of `GET /api/data/places`.
#[derive(Debug, Deserialize)]
pub(crate) struct PlacesPayload {
    pub places: Vec<Place>,
}

/// Wire shape of `GET /api/data/img/{id}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ImagePayload {
    #[serde(rename = "img")]
    pub image: Url,
}
