use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString};

/// Detection pipeline selectable in the UI. The lowercase string form is the
/// path segment of the prediction endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ModelKind {
    #[default]
    Soil,
    Vegetation,
}

impl ModelKind {
    pub fn label(&self) -> &'static str {
        match self {
            ModelKind::Soil => "Soil Detection",
            ModelKind::Vegetation => "Vegetation Detection",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PredictResponse {
    #[serde(default)]
    pub result_image: Option<String>,
    #[serde(default)]
    pub summary: Option<DetectionSummary>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DetectionSummary {
    #[serde(default)]
    pub detected_classes: Vec<String>,
    #[serde(default)]
    pub class_counts: BTreeMap<String, u32>,
    #[serde(default)]
    pub detailed: Vec<DetectionRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DetectionRecord {
    pub class: String,
    /// Percentage in [0, 100], as reported by the service.
    pub confidence: f32,
}

/// Joins the service origin onto the relative image path from the response.
pub fn resolve_result_url(origin: &str, path: &str) -> String {
    let origin = origin.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", origin, path)
    } else {
        format!("{}/{}", origin, path)
    }
}

/// Educational texts keyed by soil-name substring. Matched in table order,
/// first match wins.
pub const SOIL_INSIGHTS: [(&str, &str); 4] = [
    (
        "clay",
        "Clay soil is made of very fine particles that hold water and nutrients \
         well but drain slowly and turn heavy when wet. It suits crops such as \
         rice, broccoli and cabbage.",
    ),
    (
        "alluvial",
        "Alluvial soil is deposited by rivers and is rich in humus and minerals. \
         Its fertility and moisture retention make it ideal for wheat, rice, \
         sugarcane and pulses.",
    ),
    (
        "black",
        "Black soil is rich in clay, calcium carbonate, magnesium and iron, and \
         retains moisture exceptionally well. It is the classic cotton soil and \
         also supports millets and oilseeds.",
    ),
    (
        "red",
        "Red soil owes its colour to iron oxide and is typically low in nitrogen, \
         phosphorus and humus. With fertiliser and irrigation it supports \
         groundnut, millet, potato and fruit crops.",
    ),
];

/// Insight for the top detected class. Only the soil model produces one.
pub fn insight_for(model: ModelKind, detected_classes: &[String]) -> Option<&'static str> {
    if model != ModelKind::Soil {
        return None;
    }
    let name = detected_classes.first()?.trim().to_lowercase();
    SOIL_INSIGHTS
        .iter()
        .find(|(key, _)| name.contains(key))
        .map(|(_, text)| *text)
}
