use crate::estimator::EmissionsResult;
use crate::insights::Insights;
use crate::profile::{GeneralBreakdown, Projection};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SituationRequest {
    pub situation: String,
}

#[derive(Debug, Serialize)]
pub struct GeneralResponse {
    pub result: EmissionsResult<GeneralBreakdown>,
    pub projection: Projection,
    pub insights: Insights,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}
