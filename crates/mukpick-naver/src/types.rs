//! Naver open-API response types.
//!
//! Venue fields arrive as strings (including the map coordinates), and any of
//! them may be absent, so everything is defaulted.

use serde::Deserialize;

/// One venue record returned by the local search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Restaurant {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, rename = "roadAddress")]
    pub road_address: String,
    #[serde(default)]
    pub mapx: String,
    #[serde(default)]
    pub mapy: String,
}

impl Restaurant {
    /// The title with Naver's `<b>` highlight markup stripped.
    #[must_use]
    pub fn plain_title(&self) -> String {
        self.title.replace("<b>", "").replace("</b>", "")
    }

    /// Whether the record carries a usable (non-blank) title.
    #[must_use]
    pub fn has_usable_title(&self) -> bool {
        !self.plain_title().trim().is_empty()
    }
}

/// Wrapper for the image search response.
#[derive(Debug, Deserialize)]
pub(crate) struct ImageSearchResponse {
    #[serde(default)]
    pub items: Vec<ImageItem>,
}

/// One image result; `link` is the direct URL, `thumbnail` the smaller copy.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ImageItem {
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub thumbnail: String,
}

impl ImageItem {
    /// The best available URL for this image, preferring the direct link.
    pub(crate) fn best_url(&self) -> Option<String> {
        if !self.link.is_empty() {
            Some(self.link.clone())
        } else if !self.thumbnail.is_empty() {
            Some(self.thumbnail.clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_title_strips_bold_markup() {
        let restaurant = Restaurant {
            title: "<b>강남</b> 한식당".to_string(),
            ..Restaurant::default()
        };
        assert_eq!(restaurant.plain_title(), "강남 한식당");
    }

    #[test]
    fn blank_title_is_not_usable() {
        let restaurant = Restaurant {
            title: "<b></b> ".to_string(),
            ..Restaurant::default()
        };
        assert!(!restaurant.has_usable_title());
    }

    #[test]
    fn restaurant_parses_with_missing_fields() {
        let parsed: Restaurant = serde_json::from_str(r#"{"title": "국밥집"}"#).unwrap();
        assert_eq!(parsed.title, "국밥집");
        assert!(parsed.road_address.is_empty());
        assert!(parsed.mapx.is_empty());
    }

    #[test]
    fn road_address_uses_api_field_name() {
        let parsed: Restaurant =
            serde_json::from_str(r#"{"roadAddress": "테헤란로 1"}"#).unwrap();
        assert_eq!(parsed.road_address, "테헤란로 1");
    }

    #[test]
    fn image_item_prefers_direct_link() {
        let item = ImageItem {
            link: "https://img.example/full.jpg".to_string(),
            thumbnail: "https://img.example/thumb.jpg".to_string(),
        };
        assert_eq!(item.best_url().unwrap(), "https://img.example/full.jpg");
    }

    #[test]
    fn image_item_falls_back_to_thumbnail() {
        let item = ImageItem {
            link: String::new(),
            thumbnail: "https://img.example/thumb.jpg".to_string(),
        };
        assert_eq!(item.best_url().unwrap(), "https://img.example/thumb.jpg");
    }

    #[test]
    fn image_item_with_no_urls_is_none() {
        assert!(ImageItem::default().best_url().is_none());
    }
}
