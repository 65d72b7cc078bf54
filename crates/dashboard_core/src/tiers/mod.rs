pub mod table;
pub mod validator;

pub use table::{commission_for, remove_tier, sort_tiers, tier_for_value, upsert_tier};
pub use validator::{validate_tier, ValidationResult};
