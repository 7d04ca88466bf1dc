//! Keyword-driven situation analyzer.
//!
//! A placeholder for a language-model assessment: the free-text description is
//! matched against fixed keyword lists and answered with a canned report.

use crate::coerce::parse_leading_f64;
use crate::estimator::TravelMode;
use serde::Serialize;

const DEFAULT_TRIP_KM: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SituationCategory {
    Flight,
    Road,
    Event,
    General,
}

impl SituationCategory {
    /// First category whose keywords appear in `text`, case-insensitively.
    pub fn classify(text: &str) -> Self {
        let text = text.to_lowercase();

        if contains_any(&text, &["flight", "flying", "plane"]) {
            SituationCategory::Flight
        } else if contains_any(&text, &["car", "drive", "road trip"]) {
            SituationCategory::Road
        } else if contains_any(&text, &["dinner", "party", "event", "meal"]) {
            SituationCategory::Event
        } else {
            SituationCategory::General
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SituationAnalysis {
    pub category: SituationCategory,
    pub analysis: String,
}

pub fn analyze(situation: &str) -> SituationAnalysis {
    let category = SituationCategory::classify(situation);
    let analysis = match category {
        SituationCategory::Flight => FLIGHT_REPORT.to_string(),
        SituationCategory::Road => road_report(situation),
        SituationCategory::Event => EVENT_REPORT.to_string(),
        SituationCategory::General => GENERAL_REPORT.to_string(),
    };
    SituationAnalysis { category, analysis }
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}

/// First run of digits in the text, or the default trip length.
fn trip_distance_km(text: &str) -> f64 {
    text.find(|c: char| c.is_ascii_digit())
        .and_then(|start| {
            let digits: String = text[start..]
                .chars()
                .take_while(char::is_ascii_digit)
                .collect();
            parse_leading_f64(&digits)
        })
        .unwrap_or(DEFAULT_TRIP_KM)
}

fn road_report(situation: &str) -> String {
    let kg = (trip_distance_km(situation) * TravelMode::Car.kg_per_km()).round();
    format!(
        "**Road Trip Carbon Analysis:**

Your road trip will generate approximately {kg} kg CO2.

**Environmental Impact:** MEDIUM ⚠️
- Cars emit ~192g CO2 per km
- Highway driving is more efficient than city
- SUVs emit 30-40% more than sedans

**Reduction Strategies:**
1. Carpool with 3+ people (reduces per-person emissions by 75%)
2. Maintain proper tire pressure (improves efficiency 3%)
3. Drive at steady speeds, avoid rapid acceleration
4. Consider renting a hybrid or electric vehicle
5. Plan efficient routes to minimize distance

**Carbon Offset:** Plant 12 trees to offset this trip's emissions over their lifetime."
    )
}

const FLIGHT_REPORT: &str = "**Flight Carbon Analysis:**

Your flight will generate significant emissions. A typical transatlantic flight produces ~1.6 tonnes CO2 per passenger.

**Environmental Impact:** HIGH ⚠️
- Contributes to ~2.5% of global CO2 emissions
- High-altitude emissions have 2-4x climate impact
- Equivalent to driving 6,400 km in a car

**Reduction Strategies:**
1. Choose direct flights (takeoff/landing uses most fuel)
2. Fly economy class (business class has 3x footprint)
3. Purchase verified carbon offsets
4. Consider train travel for distances <1000km
5. Bundle trips to reduce frequency

**Alternative:** Video conferencing can eliminate 99% of travel emissions for business meetings.";

const EVENT_REPORT: &str = "**Event Carbon Analysis:**

Hosting events generates emissions from food, energy, and waste.

**Environmental Impact:** MEDIUM ⚠️
- Food production: 60% of event emissions
- Energy (lighting/heating): 25%
- Transportation of guests: 15%

**Sustainable Event Tips:**
1. Serve plant-based menu options (70% lower emissions)
2. Use seasonal, local ingredients
3. Provide reusable plates and utensils
4. Minimize food waste (plan portions carefully)
5. Encourage carpooling or public transit
6. Use LED lighting and natural ventilation

**Impact:** A vegan dinner party produces 87% less CO2 than beef-centered meals.";

const GENERAL_REPORT: &str = "**General Carbon Impact Analysis:**

Based on your situation, here's an AI-powered assessment:

**Current Trajectory:** Your described activities likely generate moderate carbon emissions through energy consumption, transportation, or resource use.

**Key Factors to Consider:**
1. **Energy Sources:** Renewable vs. fossil fuels makes 4-10x difference
2. **Transportation:** Mode choice affects emissions by 10-50x
3. **Consumption:** New products have embedded manufacturing emissions
4. **Diet:** Food choices create 20-30% of personal carbon footprint

**Universal Recommendations:**
- Track all emissions to identify high-impact areas
- Set reduction goals: aim for 50% reduction in 5 years
- Prioritize high-impact changes (travel, diet, energy)
- Support renewable energy and carbon offset programs
- Educate others about climate action

**Remember:** Every action counts. Small changes compound over time to create significant impact.";
