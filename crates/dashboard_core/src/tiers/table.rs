//! Operations on a screen's tier collection built around `validate_tier`

use contracts::domain::commission_tier::Tier;

use super::validator::validate_tier;
use crate::error::TierValidationError;

/// Order tiers by `min_value` ascending; equal bounds keep their order
pub fn sort_tiers(tiers: &mut [Tier]) {
    tiers.sort_by(|a, b| a.min_value.total_cmp(&b.min_value));
}

/// Insert a new tier or replace the one with the same id, then re-sort.
/// The collection is left untouched when validation fails.
pub fn upsert_tier(tiers: &mut Vec<Tier>, proposed: Tier) -> Result<(), TierValidationError> {
    let position = tiers.iter().position(|t| t.id == proposed.id);
    let excluding = position.map(|_| proposed.id.as_str());
    let tier = validate_tier(&proposed, tiers, excluding)?;

    match position {
        Some(idx) => tiers[idx] = tier,
        None => tiers.push(tier),
    }
    sort_tiers(tiers);
    Ok(())
}

pub fn remove_tier(tiers: &mut Vec<Tier>, id: &str) -> Option<Tier> {
    let idx = tiers.iter().position(|t| t.id == id)?;
    Some(tiers.remove(idx))
}

/// Tier whose `[min_value, max_value)` contains `value`
pub fn tier_for_value(tiers: &[Tier], value: f64) -> Option<&Tier> {
    tiers.iter().find(|t| t.contains(value))
}

/// Commission for `amount` at the matching tier's rate (rate is a percentage)
pub fn commission_for(tiers: &[Tier], amount: f64) -> Option<f64> {
    tier_for_value(tiers, amount).map(|t| amount * t.rate / 100.0)
}
