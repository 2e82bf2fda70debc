pub mod add;
pub mod delete;
pub mod matching;
pub mod metadata;
pub mod search;

pub use add::AddFaceResponse;
pub use delete::DeleteFaceResponse;
pub use matching::{MatchFaceItem, MatchFaceResponse};
pub use metadata::Metadata;
pub use search::{SearchFaceItem, SearchFaceResponse};
