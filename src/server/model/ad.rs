use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Ad {
    pub id: String,
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostAdsRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
}

impl Ad {
    /// `link` falls back to an empty string when not supplied.
    pub fn new(id: &str, title: &str, image_url: &str, link: Option<String>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            image_url: image_url.to_string(),
            link: link.unwrap_or_default(),
        }
    }
}
