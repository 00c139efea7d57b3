use crate::domain::model::Place;

/// Filters places on a case-insensitive substring match against `name`.
///
/// An empty filter returns the input unmodified, in its original order.
/// A non-empty filter returns the matches sorted ascending by name.
pub fn filter_places(places: &[Place], filter: &str) -> Vec<Place> {
    if filter.is_empty() {
        return places.to_vec();
    }

    let needle = filter.to_lowercase();
    let mut matches: Vec<Place> = places
        .iter()
        .filter(|place| place.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    matches.sort_by(|a, b| a.name.cmp(&b.name));
    matches
}

/// The full place list plus the current filter text, with the visible list
/// kept in sync. Both setters report whether the visible list actually
/// changed, so callers can skip a refresh when the content is identical.
#[derive(Debug, Default)]
pub struct PlaceListing {
    all: Vec<Place>,
    filter: String,
    visible: Vec<Place>,
}

impl PlaceListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the full list. Returns true if the visible list changed.
    pub fn set_places(&mut self, places: Vec<Place>) -> bool {
        self.all = places;
        self.refresh()
    }

    /// Replaces the filter text. Returns true if the visible list changed.
    pub fn set_filter(&mut self, filter: impl Into<String>) -> bool {
        self.filter = filter.into();
        self.refresh()
    }

    pub fn visible(&self) -> &[Place] {
        &self.visible
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    fn refresh(&mut self) -> bool {
        let next = filter_places(&self.all, &self.filter);
        if next == self.visible {
            return false;
        }

        self.visible = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: &str, name: &str) -> Place {
        Place {
            id: id.to_string(),
            name: name.to_string(),
            address: "1 Main St".to_string(),
            stars: 3,
            reviews: 10,
            price: "$".to_string(),
            description: String::new(),
            image_url: None,
        }
    }

    #[test]
    fn test_filter_matches_case_insensitively() {
        let places = vec![place("1", "Alpha Cafe"), place("2", "Beta Bar")];

        let filtered = filter_places(&places, "alpha");

        let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha Cafe"]);
    }

    #[test]
    fn test_empty_filter_returns_input_unmodified() {
        let places = vec![place("2", "Beta Bar"), place("1", "Alpha Cafe")];

        let filtered = filter_places(&places, "");

        assert_eq!(filtered, places);
    }

    #[test]
    fn test_non_empty_filter_sorts_by_name() {
        let places = vec![
            place("3", "Gamma Grill"),
            place("2", "Beta Bar"),
            place("1", "Alpha Cafe"),
        ];

        let filtered = filter_places(&places, "a");

        let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha Cafe", "Beta Bar", "Gamma Grill"]);
    }

    #[test]
    fn test_listing_reports_visible_change() {
        let mut listing = PlaceListing::new();

        assert!(listing.set_places(vec![place("1", "Alpha Cafe"), place("2", "Beta Bar")]));
        assert_eq!(listing.visible().len(), 2);

        assert!(listing.set_filter("beta"));
        let names: Vec<&str> = listing.visible().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Beta Bar"]);
    }

    #[test]
    fn test_listing_suppresses_refresh_when_unchanged() {
        let mut listing = PlaceListing::new();
        let places = vec![place("1", "Alpha Cafe"), place("2", "Beta Bar")];

        assert!(listing.set_places(places.clone()));
        // Same content again: the visible list is identical, no refresh.
        assert!(!listing.set_places(places));
        // A filter that matches everything keeps the set but re-sorts it;
        // here the input is already sorted, so nothing visibly changes.
        assert!(!listing.set_filter("a"));
        assert!(listing.set_filter("nothing-matches-this"));
        assert!(listing.visible().is_empty());
    }
}
