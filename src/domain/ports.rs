use crate::domain::model::Place;
use crate::utils::error::Result;
use async_trait::async_trait;
use url::Url;

/// The places API surface. Failures never surface as errors: a failed list
/// fetch is an empty list, a failed image lookup is `None`.
#[async_trait]
pub trait PlaceApi: Send + Sync {
    async fn fetch_places(&self) -> Vec<Place>;
    async fn fetch_image_url(&self, place_id: &str) -> Option<Url>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
