use crate::error::{CanopyError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ══════════════════════════════════════════════════════════════════════════════
// Category
// ══════════════════════════════════════════════════════════════════════════════

/// Species category shown in the catalog filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Large Trees")]
    LargeTrees,
    #[serde(rename = "Flowering Trees")]
    FloweringTrees,
    #[serde(rename = "Medicinal Trees")]
    MedicinalTrees,
    #[serde(rename = "Fruit Trees")]
    FruitTrees,
    #[serde(rename = "Timber Trees")]
    TimberTrees,
    #[serde(rename = "Palm Trees")]
    PalmTrees,
    #[serde(rename = "Fast Growing")]
    FastGrowing,
    #[serde(rename = "Economic Trees")]
    EconomicTrees,
}

impl Category {
    /// All categories in filter display order.
    pub const ALL: [Category; 8] = [
        Category::LargeTrees,
        Category::FloweringTrees,
        Category::MedicinalTrees,
        Category::FruitTrees,
        Category::TimberTrees,
        Category::PalmTrees,
        Category::FastGrowing,
        Category::EconomicTrees,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::LargeTrees => "Large Trees",
            Self::FloweringTrees => "Flowering Trees",
            Self::MedicinalTrees => "Medicinal Trees",
            Self::FruitTrees => "Fruit Trees",
            Self::TimberTrees => "Timber Trees",
            Self::PalmTrees => "Palm Trees",
            Self::FastGrowing => "Fast Growing",
            Self::EconomicTrees => "Economic Trees",
        }
    }

    /// Parse a filter value where `"all"` (or an empty string) means no filter.
    pub fn parse_filter(value: &str) -> Result<Option<Category>, CanopyError> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CanopyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s.trim())
            .ok_or_else(|| {
                CanopyError::new(
                    ErrorCode::UNKNOWN_CATEGORY,
                    format!("unknown category '{s}'"),
                )
                .with_subject(s)
            })
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// ViewMode
// ══════════════════════════════════════════════════════════════════════════════

/// How yearly chart values are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Damped running proxy: `rate(y) * y * damping`.
    #[default]
    Cumulative,
    /// The rate for the year itself.
    Annual,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cumulative => write!(f, "cumulative"),
            Self::Annual => write!(f, "annual"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = CanopyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cumulative" => Ok(Self::Cumulative),
            "annual" => Ok(Self::Annual),
            other => Err(CanopyError::new(
                ErrorCode::MALFORMED_INPUT,
                format!("view mode must be 'cumulative' or 'annual', got '{other}'"),
            )
            .with_subject("mode")),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// SurvivalBand
// ══════════════════════════════════════════════════════════════════════════════

/// Coarse survival classification used to color survival charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurvivalBand {
    /// At least 80 %.
    High,
    /// 60 % up to 80 %.
    Medium,
    /// Below 60 %.
    Low,
}

impl SurvivalBand {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 80.0 {
            Self::High
        } else if percent >= 60.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Bar color for the band.
    pub fn color(self) -> &'static str {
        match self {
            Self::High => "#2ca02c",
            Self::Medium => "#ff7f0e",
            Self::Low => "#d62728",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High (≥80%)",
            Self::Medium => "Medium (60-79%)",
            Self::Low => "Low (<60%)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip_through_label() {
        for c in Category::ALL {
            assert_eq!(c.label().parse::<Category>().unwrap(), c);
        }
    }

    #[test]
    fn test_category_filter_all() {
        assert_eq!(Category::parse_filter("all").unwrap(), None);
        assert_eq!(Category::parse_filter("").unwrap(), None);
        assert_eq!(
            Category::parse_filter("Palm Trees").unwrap(),
            Some(Category::PalmTrees)
        );
        assert_eq!(
            Category::parse_filter("Shrubs").unwrap_err().code,
            ErrorCode::UNKNOWN_CATEGORY
        );
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::FastGrowing).unwrap();
        assert_eq!(json, "\"Fast Growing\"");
    }

    #[test]
    fn test_view_mode_parse() {
        assert_eq!("annual".parse::<ViewMode>().unwrap(), ViewMode::Annual);
        assert_eq!(
            " Cumulative ".parse::<ViewMode>().unwrap(),
            ViewMode::Cumulative
        );
        assert!("weekly".parse::<ViewMode>().is_err());
        assert_eq!(ViewMode::default(), ViewMode::Cumulative);
    }

    #[test]
    fn test_survival_band_thresholds() {
        assert_eq!(SurvivalBand::from_percent(80.0), SurvivalBand::High);
        assert_eq!(SurvivalBand::from_percent(79.9), SurvivalBand::Medium);
        assert_eq!(SurvivalBand::from_percent(60.0), SurvivalBand::Medium);
        assert_eq!(SurvivalBand::from_percent(59.9), SurvivalBand::Low);
    }
}
