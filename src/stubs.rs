//! Placeholder collaborators for the receipt scanner and the sector forecaster.
//!
//! Neither performs OCR or forecasting. Both return the same literal data on
//! every call; only the echoed request labels and the receipt count vary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptScan {
    pub receipts_scanned: usize,
    pub report: String,
}

pub fn scan_receipts(receipt_count: usize) -> ReceiptScan {
    ReceiptScan {
        receipts_scanned: receipt_count,
        report: format!("Scanned {receipt_count} receipt(s) using AI OCR:\n\n{RECEIPT_FINDINGS}"),
    }
}

const RECEIPT_FINDINGS: &str = "**Detected Items:**
• Gasoline: 50L → 11.5 kg CO2
• Electricity bill: 450 kWh → 104.9 kg CO2
• Groceries (meat products): 5kg beef → 137.5 kg CO2
• Restaurant meal (chicken): ~3 kg CO2

**Total Carbon Impact:** 256.9 kg CO2 (0.26 tonnes)

**Recommendations:**
- Consider reducing meat consumption
- Switch to renewable energy provider
- Use public transport to reduce fuel consumption";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SectorQuery {
    pub sector: String,
    pub country: String,
    pub year: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    VeryHigh,
    High,
    Moderate,
    Low,
}

impl RiskLevel {
    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::VeryHigh => "#ef4444",
            RiskLevel::High => "#f97316",
            RiskLevel::Moderate => "#eab308",
            RiskLevel::Low => "#22c55e",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorPrediction {
    pub year: u16,
    pub emissions: f64,
    pub reduction: f64,
    pub risk_level: RiskLevel,
    pub recommendations: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub region: &'static str,
    pub country: &'static str,
    pub emissions: f64,
    pub risk_level: RiskLevel,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearPoint {
    pub year: String,
    pub emissions: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorAnalysis {
    pub current_emissions: f64,
    pub sector: String,
    pub country: String,
    pub year: String,
    pub predictions: Vec<SectorPrediction>,
    pub heatmap_data: Vec<HeatmapCell>,
    pub line_chart_data: Vec<YearPoint>,
}

const FORECAST: [(u16, f64, f64); 5] = [
    (2026, 4300.8, 4.0),
    (2027, 4085.87, 8.8),
    (2028, 3841.04, 14.3),
    (2029, 3572.77, 20.3),
    (2030, 3287.89, 26.6),
];

const HEATMAP: [(&str, &str, f64, RiskLevel); 11] = [
    ("Asia", "China", 11200.0, RiskLevel::VeryHigh),
    ("Asia", "India", 2800.0, RiskLevel::High),
    ("Asia", "Japan", 1150.0, RiskLevel::High),
    ("North America", "United States", 5200.0, RiskLevel::VeryHigh),
    ("North America", "Canada", 730.0, RiskLevel::Moderate),
    ("Europe", "Germany", 750.0, RiskLevel::Moderate),
    ("Europe", "France", 330.0, RiskLevel::Low),
    ("Europe", "United Kingdom", 380.0, RiskLevel::Low),
    ("South America", "Brazil", 470.0, RiskLevel::Low),
    ("Africa", "South Africa", 450.0, RiskLevel::Low),
    ("Oceania", "Australia", 420.0, RiskLevel::Low),
];

/// Fixed forecast dataset. The query labels are echoed back untouched.
pub fn analyze_sector(query: SectorQuery) -> SectorAnalysis {
    let predictions = FORECAST
        .iter()
        .map(|&(year, emissions, reduction)| SectorPrediction {
            year,
            emissions,
            reduction,
            risk_level: RiskLevel::High,
            recommendations: format!(
                "{year}: {reduction:.1}% reduction needed! Urgent action required - implement renewable energy transition and efficiency programs now."
            ),
        })
        .collect();

    let line_chart_data = FORECAST
        .iter()
        .map(|&(year, emissions, _)| YearPoint {
            year: year.to_string(),
            emissions,
        })
        .collect();

    let heatmap_data = HEATMAP
        .iter()
        .map(|&(region, country, emissions, risk_level)| HeatmapCell {
            region,
            country,
            emissions,
            risk_level,
            color: risk_level.color(),
        })
        .collect();

    SectorAnalysis {
        current_emissions: 4500.0,
        sector: query.sector,
        country: query.country,
        year: query.year,
        predictions,
        heatmap_data,
        line_chart_data,
    }
}
