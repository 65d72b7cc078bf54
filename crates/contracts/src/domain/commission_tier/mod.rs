pub mod aggregate;

pub use aggregate::Tier;
