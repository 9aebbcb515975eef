//! Project catalog: the static list of case studies and the queries pages run over it.

pub mod query;
pub mod store;
pub mod types;

pub use query::{query, related, RELATED_LIMIT};
pub use store::{Catalog, FEATURED_COUNT};
pub use types::{CategoryFilter, ProjectId, ProjectLinks, ProjectRecord, ProjectType};
