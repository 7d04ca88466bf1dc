//! General profile estimator: the quick "carbon profile" calculator.
//!
//! Works in kilograms per day, and the diet multiplier scales the whole sum
//! rather than contributing a term of its own.

use crate::coerce::{self, finite_or_zero};
use crate::estimator::{EmissionsResult, ParseCategoryError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const TRAVEL_KG_PER_KM: f64 = 0.21;
pub const ELECTRICITY_KG_PER_KWH: f64 = 0.233;
pub const SHOPPING_KG_PER_POINT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneralDiet {
    Vegan,
    Vegetarian,
    #[default]
    Other,
}

impl GeneralDiet {
    pub fn factor(self) -> f64 {
        match self {
            GeneralDiet::Vegan => 0.5,
            GeneralDiet::Vegetarian => 0.7,
            GeneralDiet::Other => 1.0,
        }
    }

    pub fn is_plant_based(self) -> bool {
        matches!(self, GeneralDiet::Vegan | GeneralDiet::Vegetarian)
    }
}

impl FromStr for GeneralDiet {
    type Err = ParseCategoryError;

    /// Anything but vegan or vegetarian ("omnivore", "heavy meat") is `Other`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "vegan" => GeneralDiet::Vegan,
            "vegetarian" => GeneralDiet::Vegetarian,
            _ => GeneralDiet::Other,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralProfileInput {
    #[serde(deserialize_with = "coerce::de_quantity")]
    pub daily_travel_km: f64,
    #[serde(deserialize_with = "coerce::de_quantity")]
    pub electricity_usage_kwh: f64,
    #[serde(deserialize_with = "coerce::de_category_or_default")]
    pub diet_type: GeneralDiet,
    #[serde(deserialize_with = "coerce::de_quantity")]
    pub shopping_score: f64,
}

impl GeneralProfileInput {
    /// Values the profile form starts out with.
    pub fn form_defaults() -> Self {
        Self {
            daily_travel_km: 30.0,
            electricity_usage_kwh: 500.0,
            diet_type: GeneralDiet::Vegan,
            shopping_score: 5.0,
        }
    }
}

/// Diet-scaled daily kilograms per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralBreakdown {
    pub travel: f64,
    pub electricity: f64,
    pub shopping: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub daily: f64,
    pub weekly: f64,
    pub monthly: f64,
    pub yearly: f64,
}

impl Projection {
    pub fn from_daily(daily: f64) -> Self {
        Self {
            daily,
            weekly: finite_or_zero(daily * 7.0),
            monthly: finite_or_zero(daily * 30.0),
            yearly: finite_or_zero(daily * 365.0),
        }
    }
}

/// `total` is kilograms per day. The profile has no threshold rules, so
/// `recommendations` is always empty; see [`crate::insights`].
pub fn estimate_general(input: &GeneralProfileInput) -> EmissionsResult<GeneralBreakdown> {
    let travel = finite_or_zero(input.daily_travel_km * TRAVEL_KG_PER_KM);
    let electricity = finite_or_zero(input.electricity_usage_kwh * ELECTRICITY_KG_PER_KWH);
    let shopping = finite_or_zero(input.shopping_score * SHOPPING_KG_PER_POINT);
    let factor = input.diet_type.factor();

    EmissionsResult {
        total: (travel + electricity + shopping) * factor,
        breakdown: GeneralBreakdown {
            travel: travel * factor,
            electricity: electricity * factor,
            shopping: shopping * factor,
        },
        recommendations: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn form_defaults_estimate() {
        let result = estimate_general(&GeneralProfileInput::form_defaults());
        // (6.3 + 116.5 + 2.5) * 0.5
        assert_relative_eq!(result.total, 62.65, epsilon = 1e-9);
        assert_relative_eq!(result.breakdown.travel, 3.15, epsilon = 1e-9);
        assert_relative_eq!(result.breakdown.electricity, 58.25, epsilon = 1e-9);
        assert_relative_eq!(result.breakdown.shopping, 1.25, epsilon = 1e-9);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn diet_factor_scales_whole_sum() {
        let mut input = GeneralProfileInput {
            daily_travel_km: 10.0,
            electricity_usage_kwh: 0.0,
            diet_type: GeneralDiet::Other,
            shopping_score: 2.0,
        };
        let other = estimate_general(&input).total;
        input.diet_type = GeneralDiet::Vegetarian;
        let vegetarian = estimate_general(&input).total;
        assert_relative_eq!(other, 3.1, epsilon = 1e-9);
        assert_relative_eq!(vegetarian, 3.1 * 0.7, epsilon = 1e-9);
    }

    #[test]
    fn unknown_diet_labels_fall_back_to_other() {
        let input: GeneralProfileInput =
            serde_json::from_value(json!({ "dietType": "Heavy Meat" })).unwrap();
        assert_eq!(input.diet_type, GeneralDiet::Other);

        let input: GeneralProfileInput =
            serde_json::from_value(json!({ "dietType": "Vegetarian" })).unwrap();
        assert_eq!(input.diet_type, GeneralDiet::Vegetarian);
    }

    #[test]
    fn projection_scales_daily() {
        let projection = Projection::from_daily(2.0);
        assert_eq!(projection.weekly, 14.0);
        assert_eq!(projection.monthly, 60.0);
        assert_eq!(projection.yearly, 730.0);
    }

    #[test]
    fn projection_never_overflows() {
        let projection = Projection::from_daily(f64::MAX / 2.0);
        assert_eq!(projection.weekly, 0.0);
        assert_eq!(projection.monthly, 0.0);
        assert_eq!(projection.yearly, 0.0);
    }

    #[test]
    fn empty_form_is_zero() {
        let input: GeneralProfileInput = serde_json::from_value(json!({})).unwrap();
        let result = estimate_general(&input);
        assert_eq!(result.total, 0.0);
    }
}
