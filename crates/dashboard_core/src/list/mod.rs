pub mod comparator;
pub mod paginator;
pub mod pipeline;
pub mod predicate;
pub mod schema;

pub use comparator::{build_comparator, sort_records};
pub use paginator::paginate;
pub use pipeline::{query, ListQuery};
pub use predicate::{build_predicate, RecordFilter};
pub use schema::ListSchema;
