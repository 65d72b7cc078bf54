use std::cmp::Ordering;

use contracts::domain::commission_tier::Tier;

use crate::error::{TierField, TierValidationError};

pub type ValidationResult = Result<Tier, TierValidationError>;

/// Validate a new or edited commission tier.
///
/// Checks run in order and stop at the first failure:
/// non-negative `min_value` and `rate`, `max_value > min_value`, then no overlap
/// with any tier in `existing` other than `excluding_id`.
/// The collection is never modified; on success the proposed tier is returned as is.
pub fn validate_tier(proposed: &Tier, existing: &[Tier], excluding_id: Option<&str>) -> ValidationResult {
    let result = check(proposed, existing, excluding_id);
    match &result {
        Ok(_) => tracing::debug!(tier = %proposed.id, "tier accepted"),
        Err(e) => tracing::warn!(tier = %proposed.id, error = %e, "tier rejected"),
    }
    result
}

fn check(proposed: &Tier, existing: &[Tier], excluding_id: Option<&str>) -> ValidationResult {
    non_negative(TierField::MinValue, proposed.min_value)?;
    non_negative(TierField::Rate, proposed.rate)?;
    if let Some(max) = proposed.max_value {
        // NaN max fails here too
        if max.partial_cmp(&proposed.min_value) != Some(Ordering::Greater) {
            return Err(TierValidationError::InvalidRange {
                min_value: proposed.min_value,
                max_value: max,
            });
        }
    }

    let conflict = existing
        .iter()
        .filter(|t| Some(t.id.as_str()) != excluding_id)
        .find(|t| proposed.overlaps(t));

    if let Some(other) = conflict {
        return Err(TierValidationError::OverlappingRange {
            conflicting_id: other.id.clone(),
            min_value: other.min_value,
            max_value: other.max_value,
        });
    }

    Ok(proposed.clone())
}

// NaN fails this check as well
fn non_negative(field: TierField, value: f64) -> Result<(), TierValidationError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(TierValidationError::NegativeValue { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> Vec<Tier> {
        vec![
            Tier::with_id("t1", 0.0, Some(50.0), 8.0),
            Tier::with_id("t2", 50.0, None, 6.0),
        ]
    }

    #[test]
    fn test_overlap_reports_first_conflict() {
        let proposed = Tier::with_id("new", 40.0, Some(60.0), 5.0);
        let err = validate_tier(&proposed, &existing(), None).unwrap_err();
        assert_eq!(
            err,
            TierValidationError::OverlappingRange {
                conflicting_id: "t1".into(),
                min_value: 0.0,
                max_value: Some(50.0),
            }
        );
    }

    #[test]
    fn test_editing_excludes_itself() {
        let edited = Tier::with_id("t2", 50.0, Some(100.0), 7.0);
        let ok = validate_tier(&edited, &existing(), Some("t2")).unwrap();
        assert_eq!(ok, edited);

        let err = validate_tier(&edited, &existing(), None).unwrap_err();
        assert!(matches!(err, TierValidationError::OverlappingRange { ref conflicting_id, .. } if conflicting_id == "t2"));
    }

    #[test]
    fn test_equal_bounds_rejected() {
        let err = validate_tier(&Tier::with_id("x", 10.0, Some(10.0), 5.0), &[], None).unwrap_err();
        assert_eq!(
            err,
            TierValidationError::InvalidRange {
                min_value: 10.0,
                max_value: 10.0,
            }
        );
    }

    #[test]
    fn test_negative_checked_before_range() {
        let err = validate_tier(&Tier::with_id("x", -1.0, Some(-5.0), 5.0), &[], None).unwrap_err();
        assert_eq!(err.field(), TierField::MinValue);

        let err = validate_tier(&Tier::with_id("x", 0.0, Some(-5.0), 5.0), &[], None).unwrap_err();
        assert!(matches!(err, TierValidationError::InvalidRange { .. }));

        let err = validate_tier(&Tier::with_id("x", 0.0, Some(10.0), -0.5), &[], None).unwrap_err();
        assert!(matches!(err, TierValidationError::NegativeValue { field: TierField::Rate, .. }));
    }

    #[test]
    fn test_nan_rejected() {
        let err = validate_tier(&Tier::with_id("x", f64::NAN, None, 1.0), &[], None).unwrap_err();
        assert!(matches!(err, TierValidationError::NegativeValue { field: TierField::MinValue, .. }));

        let err = validate_tier(&Tier::with_id("x", 0.0, None, f64::NAN), &[], None).unwrap_err();
        assert_eq!(err.field(), TierField::Rate);

        let err = validate_tier(&Tier::with_id("x", 10.0, Some(f64::NAN), 1.0), &[], None).unwrap_err();
        assert!(matches!(err, TierValidationError::InvalidRange { min_value, .. } if min_value == 10.0));
    }

    #[test]
    fn test_gap_between_tiers_is_accepted() {
        let tiers = vec![
            Tier::with_id("t1", 0.0, Some(50.0), 8.0),
            Tier::with_id("t3", 100.0, None, 4.0),
        ];
        assert!(validate_tier(&Tier::with_id("t2", 50.0, Some(100.0), 6.0), &tiers, None).is_ok());
        assert!(validate_tier(&Tier::with_id("t2", 60.0, Some(80.0), 6.0), &tiers, None).is_ok());
    }

    #[test]
    fn test_unbounded_tiers_always_overlap() {
        let tiers = vec![Tier::with_id("open", 500.0, None, 2.0)];
        let err = validate_tier(&Tier::with_id("x", 1000.0, None, 1.0), &tiers, None).unwrap_err();
        assert!(matches!(err, TierValidationError::OverlappingRange { .. }));
    }
}
