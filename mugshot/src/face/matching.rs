use serde::{Deserialize, Serialize};

use super::{
    metadata::{null_as_default, Metadata},
    search::image_form,
};
use crate::{error::MugshotResult, image::ImageInput, MugshotClient};

pub const MATCH_FACE_PATH: &str = "/face/find/match";

impl MugshotClient {
    /// Like [`MugshotClient::search_face`] but the server also decides whether each candidate is a match.
    pub async fn match_face<I>(&self, image: I) -> MugshotResult<MatchFaceResponse>
    where
        I: Into<ImageInput>,
    {
        self.post_multipart(MATCH_FACE_PATH, image_form(image.into())?)
            .await
    }
}

/// Response body for **`POST /face/find/match`**.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MatchFaceResponse {
    pub success: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub result: Vec<MatchFaceItem>,
}

impl MatchFaceResponse {
    /// Candidates the server flagged as matches.
    pub fn matches(&self) -> impl Iterator<Item = &MatchFaceItem> {
        self.result.iter().filter(|item| item.is_match)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MatchFaceItem {
    pub id: String,
    #[serde(rename = "match")]
    pub is_match: bool,
    pub score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: Metadata,
}
