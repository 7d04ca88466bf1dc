//! Narrative insights for the general profile.
//!
//! Each rule adds one insight and one paired recommendation. The closing pair
//! is always present.

use crate::estimator::EmissionsResult;
use crate::profile::{GeneralBreakdown, GeneralProfileInput, TRAVEL_KG_PER_KM};
use serde::Serialize;

const HIGH_TRAVEL_KM: f64 = 50.0;
const HIGH_ELECTRICITY_KWH: f64 = 600.0;
const HIGH_SHOPPING_SCORE: f64 = 7.0;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

impl Insights {
    fn push(&mut self, insight: impl Into<String>, recommendation: impl Into<String>) {
        self.insights.push(insight.into());
        self.recommendations.push(recommendation.into());
    }
}

pub fn generate(
    input: &GeneralProfileInput,
    result: &EmissionsResult<GeneralBreakdown>,
) -> Insights {
    let mut out = Insights::default();

    if input.daily_travel_km > HIGH_TRAVEL_KM {
        out.push(
            "Your travel emissions are above average. Consider carpooling or using public transport.",
            "Switch 2-3 car trips per week to public transport to reduce emissions by ~15%",
        );
    }

    if input.electricity_usage_kwh > HIGH_ELECTRICITY_KWH {
        out.push(
            "Your electricity consumption is high. Smart usage patterns could help.",
            "Use smart power strips and LED lighting to reduce consumption by ~20%",
        );
    }

    if input.diet_type.is_plant_based() {
        out.push(
            "Your diet choice is already eco-friendly! Great job reducing food-related emissions.",
            "Share your sustainable lifestyle with others to amplify impact",
        );
    }

    if input.shopping_score > HIGH_SHOPPING_SCORE {
        out.push(
            "High shopping activity increases your carbon footprint. Consider buying secondhand or sustainable brands.",
            "Buy second-hand items or invest in durable products to reduce consumption emissions by ~25%",
        );
    }

    let daily = result.total;
    out.push(
        format!(
            "Your daily footprint is {daily:.2} kg CO₂, equivalent to driving a car for {:.0} km.",
            daily / TRAVEL_KG_PER_KM
        ),
        "Track your progress monthly and adjust behaviors for continuous improvement",
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{GeneralDiet, estimate_general};

    fn insights_for(input: GeneralProfileInput) -> Insights {
        let result = estimate_general(&input);
        generate(&input, &result)
    }

    #[test]
    fn quiet_profile_gets_only_summary() {
        let out = insights_for(GeneralProfileInput {
            daily_travel_km: 10.0,
            electricity_usage_kwh: 100.0,
            diet_type: GeneralDiet::Other,
            shopping_score: 3.0,
        });
        assert_eq!(out.insights.len(), 1);
        assert_eq!(out.recommendations.len(), 1);
        // 2.1 + 23.3 + 1.5 = 26.9 kg/day, 26.9 / 0.21 = 128.09 km
        assert_eq!(
            out.insights[0],
            "Your daily footprint is 26.90 kg CO₂, equivalent to driving a car for 128 km."
        );
    }

    #[test]
    fn every_rule_fires_in_order() {
        let out = insights_for(GeneralProfileInput {
            daily_travel_km: 80.0,
            electricity_usage_kwh: 900.0,
            diet_type: GeneralDiet::Vegan,
            shopping_score: 9.0,
        });
        assert_eq!(out.insights.len(), 5);
        assert!(out.insights[0].contains("travel"));
        assert!(out.insights[1].contains("electricity"));
        assert!(out.insights[2].contains("eco-friendly"));
        assert!(out.insights[3].contains("shopping"));
        assert!(out.recommendations[4].starts_with("Track your progress"));
    }

    #[test]
    fn thresholds_are_exclusive() {
        let out = insights_for(GeneralProfileInput {
            daily_travel_km: 50.0,
            electricity_usage_kwh: 600.0,
            diet_type: GeneralDiet::Other,
            shopping_score: 7.0,
        });
        assert_eq!(out.insights.len(), 1);
    }
}
