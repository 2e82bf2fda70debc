use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

use super::metadata::{null_as_default, Metadata};
use crate::{error::MugshotResult, image::ImageInput, MugshotClient};

pub const SEARCH_FACE_PATH: &str = "/face/find";

impl MugshotClient {
    /// Finds stored faces similar to `image`, ordered as the server ranks them.
    pub async fn search_face<I>(&self, image: I) -> MugshotResult<SearchFaceResponse>
    where
        I: Into<ImageInput>,
    {
        self.post_multipart(SEARCH_FACE_PATH, image_form(image.into())?)
            .await
    }

    /// Same request as [`MugshotClient::search_face`]; kept for API compatibility.
    pub async fn search_face_first<I>(&self, image: I) -> MugshotResult<SearchFaceResponse>
    where
        I: Into<ImageInput>,
    {
        self.search_face(image).await
    }
}

/// Multipart body holding only the `image` part.
pub(crate) fn image_form(image: ImageInput) -> MugshotResult<Form> {
    Ok(Form::new().part("image", image.into_part()?))
}

/// Response body for **`POST /face/find`**.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SearchFaceResponse {
    pub success: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub result: Vec<SearchFaceItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SearchFaceItem {
    pub id: String,
    /// Server-defined similarity.
    pub score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: Metadata,
}
