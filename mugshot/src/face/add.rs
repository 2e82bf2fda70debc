use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

use super::metadata::encode_metadata;
use crate::{error::MugshotResult, image::ImageInput, MugshotClient};

pub const ADD_FACE_PATH: &str = "/face/add";

impl MugshotClient {
    /// Enrolls a face together with caller metadata.
    ///
    /// `metadata` is usually a [`super::Metadata`] map but anything that serializes to JSON works.
    pub async fn add_face<I, M>(&self, image: I, metadata: &M) -> MugshotResult<AddFaceResponse>
    where
        I: Into<ImageInput>,
        M: Serialize + ?Sized,
    {
        let form = add_face_form(image.into(), metadata)?;
        self.post_multipart(ADD_FACE_PATH, form).await
    }
}

pub(crate) fn add_face_form<M>(image: ImageInput, metadata: &M) -> MugshotResult<Form>
where
    M: Serialize + ?Sized,
{
    let metadata = encode_metadata(metadata)?;
    crate::trace!("metadata field: {}", metadata);
    Ok(Form::new()
        .part("image", image.into_part()?)
        .text("metadata", metadata))
}

/// Response body for **`POST /face/add`**.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AddFaceResponse {
    pub success: bool,
    pub message: String,
    /// Identifier assigned to the new face record.
    pub face_id: String,
}
