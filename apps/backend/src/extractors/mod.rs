pub mod id_path;
pub mod pagination;
pub mod validated_json;
pub mod validated_query;

pub use id_path::IdPath;
pub use pagination::{AuthorListQuery, BookListQuery};
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
