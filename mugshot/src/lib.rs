//! mugshot – client for the [Mugshot](https://mugshot.dev) face-recognition API
//! ============================================================================
//!
//! Every method is one HTTP round trip: build the request, attach the
//! `Authorization` and `User-Agent` headers, check the status, decode the JSON.
//! Nothing is cached and nothing is retried.
//!
//! ```rust,no_run
//! use mugshot::*;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> MugshotResult<()> {
//!     let client = MugshotClient::new("your-api-key");
//!
//!     let image = ImageInput::from_path("ada.jpg").await?;
//!     let added = client
//!         .add_face(image.clone(), &json!({"name": "Ada"}))
//!         .await?;
//!
//!     let found = client.search_face(image).await?;
//!     for item in &found.result {
//!         println!("{} scored {}", item.id, item.score);
//!     }
//!
//!     client.delete_face(&added.face_id).await?;
//!     Ok(())
//! }
//! ```
//!
//! ### Endpoints ⇄ Typed Helpers
//! | HTTP Route               | Helper on `MugshotClient`               | Body                         | Response type            |
//! |--------------------------|-----------------------------------------|------------------------------|--------------------------|
//! | `POST /face/add`         | `add_face()`                            | multipart `image`+`metadata` | [`AddFaceResponse`]      |
//! | `POST /face/find`        | `search_face()`, `search_face_first()`  | multipart `image`            | [`SearchFaceResponse`]   |
//! | `POST /face/find/match`  | `match_face()`                          | multipart `image`            | [`MatchFaceResponse`]    |
//! | `POST /face/delete`      | `delete_face()`                         | form `face_id`               | [`DeleteFaceResponse`]   |

#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, trace, warn};

pub mod client;
pub mod error;
pub mod face;
pub mod image;
pub mod logging;

pub use client::{
    builder::MugshotClientBuilder,
    config::{
        ApiConfig, MugshotConfig, MugshotConfigTrait, MUGSHOT_API_ENDPOINT,
        MUGSHOT_API_KEY_ENV_VAR, MUGSHOT_USER_AGENT,
    },
    MugshotClient,
};
pub use error::{MugshotError, MugshotResult};
pub use face::{
    AddFaceResponse, DeleteFaceResponse, MatchFaceItem, MatchFaceResponse, Metadata,
    SearchFaceItem, SearchFaceResponse,
};
pub use image::ImageInput;
pub use logging::{LoggingConfig, LoggingConfigTrait, TerminalOutput};
