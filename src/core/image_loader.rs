use crate::core::handle::FetchHandle;
use crate::utils::error::Result;
use image::DynamicImage;
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Fetches arbitrary image bytes and decodes them in memory. Transport
/// errors, non-success statuses, and undecodable payloads all collapse to
/// `None`; nothing panics across the fetch boundary.
#[derive(Clone, Default)]
pub struct ImageLoader {
    client: Client,
}

impl ImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts fetching immediately and invokes `callback` on the runtime with
    /// the decoded image, or `None` on any failure.
    ///
    /// The returned handle suppresses the callback once cancelled, even when
    /// the response has already arrived; cancelling after the callback ran is
    /// a no-op.
    pub fn load<F>(&self, url: Url, callback: F) -> FetchHandle
    where
        F: FnOnce(Option<DynamicImage>) + Send + 'static,
    {
        let token = CancellationToken::new();
        let guard = token.clone();
        let client = self.client.clone();

        let task = tokio::spawn(async move {
            let image = tokio::select! {
                _ = guard.cancelled() => return,
                image = fetch_image(&client, &url) => image,
            };

            // Cancelled between response arrival and delivery: stay silent.
            if guard.is_cancelled() {
                return;
            }

            callback(image);
        });

        FetchHandle::new(token, task)
    }

    /// Plain awaitable form of [`ImageLoader::load`], for callers that own
    /// their own lifetime and need no cancellation handle.
    pub async fn fetch(&self, url: &Url) -> Option<DynamicImage> {
        fetch_image(&self.client, url).await
    }
}

async fn fetch_image(client: &Client, url: &Url) -> Option<DynamicImage> {
    match try_fetch_image(client, url).await {
        Ok(image) => Some(image),
        Err(e) => {
            tracing::warn!("Image fetch from {} failed: {}", url, e);
            None
        }
    }
}

async fn try_fetch_image(client: &Client, url: &Url) -> Result<DynamicImage> {
    let response = client.get(url.clone()).send().await?.error_for_status()?;
    let body = response.bytes().await?;
    let image = image::load_from_memory(&body)?;
    Ok(image)
}
