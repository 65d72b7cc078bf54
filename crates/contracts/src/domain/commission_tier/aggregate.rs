use serde::{Deserialize, Serialize};

/// Commission tier: value range [min_value, max_value) and a percentage rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub id: String,
    pub min_value: f64,
    /// `None` = no upper bound
    #[serde(default)]
    pub max_value: Option<f64>,
    pub rate: f64,
}

impl Tier {
    /// Create a tier with a freshly generated id
    pub fn new(min_value: f64, max_value: Option<f64>, rate: f64) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), min_value, max_value, rate)
    }

    pub fn with_id(id: impl Into<String>, min_value: f64, max_value: Option<f64>, rate: f64) -> Self {
        Self {
            id: id.into(),
            min_value,
            max_value,
            rate,
        }
    }

    /// Upper bound with `None` read as +infinity
    pub fn effective_max(&self) -> f64 {
        self.max_value.unwrap_or(f64::INFINITY)
    }

    /// True when `value` lies in `[min_value, max_value)`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min_value && value < self.effective_max()
    }

    /// Half-open ranges overlap iff each starts before the other ends
    pub fn overlaps(&self, other: &Tier) -> bool {
        self.min_value < other.effective_max() && other.min_value < self.effective_max()
    }
}
