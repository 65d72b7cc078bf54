//! List engine behind the admin dashboard screens: search, filter, sort and
//! paginate in-memory collections, and validate commission tiers.

pub mod error;
pub mod list;
pub mod shared;
pub mod tiers;

pub use error::{QueryError, TierField, TierValidationError};
