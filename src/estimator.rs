//! Individual footprint estimator.
//!
//! Converts the individual tracker's form into a monthly breakdown in tonnes of
//! CO2e and the recommendations triggered by that breakdown. Everything here is
//! pure: no I/O, no logging, no failure path.

use crate::coerce;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grid carbon intensity, tonnes CO2 per kWh (0.233 kg/kWh).
pub const GRID_TONNES_PER_KWH: f64 = 0.000233;
pub const KG_TO_TONNES: f64 = 0.001;
pub const DAYS_PER_MONTH: f64 = 30.0;

const DIET_HIGH_THRESHOLD: f64 = 2.0;
const DIET_EXEMPLARY_THRESHOLD: f64 = 1.8;
const ELECTRICITY_THRESHOLD: f64 = 0.05;
const TRAVEL_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    kind: &'static str,
    value: String,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.kind, self.value)
    }
}

impl std::error::Error for ParseCategoryError {}

impl ParseCategoryError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    Vegan,
    Vegetarian,
    NoBeef,
    #[default]
    Omnivore,
    HighMeat,
}

impl DietType {
    /// Monthly tonnes CO2 attributed to the diet.
    pub fn monthly_tonnes(self) -> f64 {
        match self {
            DietType::Vegan => 1.5,
            DietType::Vegetarian => 1.7,
            DietType::NoBeef => 2.5,
            DietType::Omnivore => 2.8,
            DietType::HighMeat => 3.3,
        }
    }
}

impl FromStr for DietType {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vegan" => Ok(DietType::Vegan),
            "vegetarian" => Ok(DietType::Vegetarian),
            "no-beef" => Ok(DietType::NoBeef),
            "omnivore" => Ok(DietType::Omnivore),
            "high-meat" => Ok(DietType::HighMeat),
            other => Err(ParseCategoryError::new("diet type", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TravelMode {
    RailAbove,
    RailBelow,
    Bus,
    Motorbike,
    Car,
    Suv,
}

impl TravelMode {
    /// Kilograms CO2 per kilometre travelled.
    pub fn kg_per_km(self) -> f64 {
        match self {
            TravelMode::RailAbove | TravelMode::RailBelow => 0.041,
            TravelMode::Bus => 0.089,
            TravelMode::Motorbike => 0.103,
            TravelMode::Car => 0.192,
            TravelMode::Suv => 0.255,
        }
    }
}

impl FromStr for TravelMode {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rail-above" => Ok(TravelMode::RailAbove),
            "rail-below" => Ok(TravelMode::RailBelow),
            "bus" => Ok(TravelMode::Bus),
            "motorbike" => Ok(TravelMode::Motorbike),
            "car" => Ok(TravelMode::Car),
            "suv" => Ok(TravelMode::Suv),
            other => Err(ParseCategoryError::new("travel mode", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceType {
    Laptop,
    Desktop,
    Phone,
    Tablet,
    Tv,
}

impl DeviceType {
    /// Average draw in kilowatts while in use.
    pub fn kilowatts(self) -> f64 {
        match self {
            DeviceType::Laptop => 0.05,
            DeviceType::Desktop => 0.2,
            DeviceType::Phone => 0.005,
            DeviceType::Tablet => 0.015,
            DeviceType::Tv => 0.15,
        }
    }
}

impl FromStr for DeviceType {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "laptop" => Ok(DeviceType::Laptop),
            "desktop" => Ok(DeviceType::Desktop),
            "phone" => Ok(DeviceType::Phone),
            "tablet" => Ok(DeviceType::Tablet),
            "tv" => Ok(DeviceType::Tv),
            other => Err(ParseCategoryError::new("device type", other)),
        }
    }
}

/// Individual tracker form. Deserialization never fails on field content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmissionsInput {
    #[serde(deserialize_with = "coerce::de_category_or_default")]
    pub diet_type: DietType,
    #[serde(deserialize_with = "coerce::de_quantity")]
    pub electricity_kwh: f64,
    #[serde(deserialize_with = "coerce::de_category")]
    pub travel_mode: Option<TravelMode>,
    #[serde(deserialize_with = "coerce::de_quantity")]
    pub travel_distance_km: f64,
    #[serde(deserialize_with = "coerce::de_category")]
    pub device_type: Option<DeviceType>,
    #[serde(deserialize_with = "coerce::de_quantity")]
    pub device_hours_per_day: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub diet: f64,
    pub electricity: f64,
    pub travel: f64,
    pub devices: f64,
}

impl Breakdown {
    pub fn total(&self) -> f64 {
        self.diet + self.electricity + self.travel + self.devices
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLevel {
    #[serde(rename = "High Impact")]
    High,
    #[serde(rename = "Medium Impact")]
    Medium,
    #[serde(rename = "Exemplary")]
    Exemplary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub message: String,
    pub impact_level: ImpactLevel,
    pub estimated_saving: String,
    pub icon: String,
}

impl Recommendation {
    fn new(message: &str, impact_level: ImpactLevel, estimated_saving: &str, icon: &str) -> Self {
        Self {
            message: message.to_string(),
            impact_level,
            estimated_saving: estimated_saving.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Output shared by every estimator profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsResult<B = Breakdown> {
    pub total: f64,
    pub breakdown: B,
    pub recommendations: Vec<Recommendation>,
}

pub fn estimate(input: &EmissionsInput) -> EmissionsResult {
    let diet = input.diet_type.monthly_tonnes();
    let electricity = coerce::finite_or_zero(input.electricity_kwh * GRID_TONNES_PER_KWH);
    let travel = coerce::finite_or_zero(
        input.travel_mode.map_or(0.0, TravelMode::kg_per_km)
            * input.travel_distance_km
            * KG_TO_TONNES,
    );
    // 30 * hours can overflow before the grid factor scales it back down.
    let devices = coerce::finite_or_zero(
        input.device_type.map_or(0.0, DeviceType::kilowatts)
            * input.device_hours_per_day
            * DAYS_PER_MONTH
            * GRID_TONNES_PER_KWH,
    );

    let breakdown = Breakdown {
        diet,
        electricity,
        travel,
        devices,
    };

    EmissionsResult {
        total: breakdown.total(),
        recommendations: recommend(&breakdown),
        breakdown,
    }
}

/// Threshold rules over a breakdown, in diet, electricity, travel order.
/// Diet values in `[1.8, 2.0]` and any device figure trigger nothing.
pub fn recommend(breakdown: &Breakdown) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if breakdown.diet > DIET_HIGH_THRESHOLD {
        recommendations.push(Recommendation::new(
            "Your diet contributes significantly to emissions. Try Meatless Mondays to reduce 0.5t CO2 annually",
            ImpactLevel::High,
            "0.5t CO2/year",
            "🌱",
        ));
    } else if breakdown.diet < DIET_EXEMPLARY_THRESHOLD {
        recommendations.push(Recommendation::new(
            "Outstanding! You are a climate champion! Share your habits to inspire others",
            ImpactLevel::Exemplary,
            "Net-zero achieved!",
            "🌟",
        ));
    }

    if breakdown.electricity > ELECTRICITY_THRESHOLD {
        recommendations.push(Recommendation::new(
            "Switch to LED bulbs and unplug devices when not in use to save 0.3t CO2 annually",
            ImpactLevel::Medium,
            "0.3t CO2/year",
            "💡",
        ));
    }

    if breakdown.travel > TRAVEL_THRESHOLD {
        recommendations.push(Recommendation::new(
            "Consider carpooling or public transit for 2 days/week to reduce 0.4t CO2 annually",
            ImpactLevel::High,
            "0.4t CO2/year",
            "🚌",
        ));
    }

    recommendations
}
