//! Risk result records consumed by the writers

use serde::{Deserialize, Serialize};

use crate::document::format_float;

/// A geographic location
///
/// `wkt` is the Well-known text representation of the point. Map writers
/// group records by it, so two records share a `<node>` exactly when their
/// `wkt` strings are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawLocation")]
pub struct Location {
    /// Longitude
    pub x: f64,
    /// Latitude
    pub y: f64,
    /// Well-known text representation
    pub wkt: String,
}

impl Location {
    /// Location with the canonical `POINT(x y)` representation
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            wkt: format!("POINT({} {})", format_float(x), format_float(y)),
        }
    }

    /// Location with a caller-supplied Well-known text representation
    pub fn with_wkt(x: f64, y: f64, wkt: &str) -> Self {
        Self {
            x,
            y,
            wkt: wkt.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct RawLocation {
    x: f64,
    y: f64,
    wkt: Option<String>,
}

impl From<RawLocation> for Location {
    fn from(raw: RawLocation) -> Self {
        match raw.wkt {
            Some(wkt) => Location::with_wkt(raw.x, raw.y, &wkt),
            None => Location::new(raw.x, raw.y),
        }
    }
}

/// Loss curve of a single asset
///
/// `poes`, `losses` and `loss_ratios` are indexed coherently: the loss (and
/// loss ratio) at index `i` belongs to the probability of exceedance at `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossCurve {
    /// Asset location
    pub location: Location,
    /// Unique asset identifier
    pub asset_ref: String,
    /// Probabilities of exceedance
    pub poes: Vec<f64>,
    /// Losses
    pub losses: Vec<f64>,
    /// Loss ratios, if computed
    #[serde(default)]
    pub loss_ratios: Option<Vec<f64>>,
}

/// Loss of a single asset at the map's probability of exceedance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loss {
    /// Asset location
    pub location: Location,
    /// Unique asset identifier
    pub asset_ref: String,
    /// Loss value
    pub value: f64,
}

/// Benefit-cost ratio of retrofitting a single asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BcrValue {
    /// Asset location
    pub location: Location,
    /// Unique asset identifier
    pub asset_ref: String,
    /// Benefit-cost ratio
    pub bcr: f64,
    /// Expected average annual loss with the original vulnerability
    pub average_annual_loss_original: f64,
    /// Expected average annual loss with the retrofitted vulnerability
    pub average_annual_loss_retrofitted: f64,
}
