pub mod commission_tier;
