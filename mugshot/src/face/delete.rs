use serde::{Deserialize, Serialize};

use crate::{error::MugshotResult, MugshotClient};

pub const DELETE_FACE_PATH: &str = "/face/delete";

impl MugshotClient {
    /// Removes a face record by the id [`MugshotClient::add_face`] returned.
    pub async fn delete_face<S: AsRef<str>>(&self, face_id: S) -> MugshotResult<DeleteFaceResponse> {
        self.post_form(DELETE_FACE_PATH, &[("face_id", face_id.as_ref())])
            .await
    }
}

/// Response body for **`POST /face/delete`**.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DeleteFaceResponse {
    pub success: bool,
    pub message: String,
}
