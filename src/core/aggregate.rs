use crate::domain::model::Place;
use crate::domain::ports::PlaceApi;
use futures::future;

/// Fetches the place list and enriches every place with its image URL.
///
/// The per-place lookups run concurrently and may complete in any order; the
/// result still contains exactly the fetched places, in their original order,
/// with `image_url` set to the resolved URL or left `None` when that lookup
/// failed. A failed or empty list fetch yields an empty result immediately,
/// without starting any image lookups. No retries anywhere.
pub async fn fetch_places_with_images<A: PlaceApi>(api: &A) -> Vec<Place> {
    let places = api.fetch_places().await;
    if places.is_empty() {
        return places;
    }

    tracing::debug!("Resolving image URLs for {} places", places.len());

    let lookups = places.into_iter().map(|mut place| async move {
        place.image_url = api.fetch_image_url(&place.id).await;
        place
    });

    future::join_all(lookups).await
}
