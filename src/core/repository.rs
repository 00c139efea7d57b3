use crate::domain::model::{ImagePayload, Place, PlacesPayload};
use crate::domain::ports::{ConfigProvider, PlaceApi};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// HTTP implementation of [`PlaceApi`] against the places directory API.
///
/// Both operations collapse every failure (transport, status, decode) to an
/// absence value at the public boundary; callers never see an error.
pub struct PlaceRepository<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> PlaceRepository<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url().trim_end_matches('/'), path)
    }

    async fn try_fetch_places(&self) -> Result<Vec<Place>> {
        let url = self.endpoint("/api/data/places");
        tracing::debug!("Fetching place list from {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        let payload: PlacesPayload = serde_json::from_slice(&body)?;

        Ok(payload.places)
    }

    async fn try_fetch_image_url(&self, place_id: &str) -> Result<Url> {
        let url = self.endpoint(&format!("/api/data/img/{}", place_id));
        tracing::debug!("Fetching image URL from {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        let payload: ImagePayload = serde_json::from_slice(&body)?;

        Ok(payload.image)
    }
}

#[async_trait]
impl<C: ConfigProvider> PlaceApi for PlaceRepository<C> {
    /// Fetches the full place list, or an empty list on any failure. An empty
    /// directory and a failed fetch are deliberately indistinguishable.
    async fn fetch_places(&self) -> Vec<Place> {
        match self.try_fetch_places().await {
            Ok(places) => {
                tracing::debug!("Fetched {} places", places.len());
                places
            }
            Err(e) => {
                tracing::warn!("Place list fetch failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_image_url(&self, place_id: &str) -> Option<Url> {
        match self.try_fetch_image_url(place_id).await {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("Image URL fetch for place {} failed: {}", place_id, e);
                None
            }
        }
    }
}
