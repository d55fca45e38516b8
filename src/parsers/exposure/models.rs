use serde::{Deserialize, Serialize};

/// Number of occupants of an asset in a given context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    /// Number of occupants
    pub occupants: u64,
    /// When the occupants were counted, e.g. `day` or `night`
    pub description: String,
}

/// Context of the `exposureList` enclosing an asset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExposureListInfo {
    /// `gml:id` of the list
    pub list_id: Option<String>,
    /// `gml:description` of the list
    pub list_description: Option<String>,
    /// Source of the taxonomy strings
    pub taxonomy_source: Option<String>,
    /// Asset category (buildings, population, ...)
    pub asset_category: Option<String>,
    /// Area type
    pub area_type: Option<String>,
    /// Area unit
    pub area_unit: Option<String>,
    /// Contents cost type
    pub coco_type: Option<String>,
    /// Contents cost unit
    pub coco_unit: Option<String>,
    /// Retrofitting cost type
    pub reco_type: Option<String>,
    /// Retrofitting cost unit
    pub reco_unit: Option<String>,
    /// Structural cost type
    pub stco_type: Option<String>,
    /// Structural cost unit
    pub stco_unit: Option<String>,
}

/// Attributes of a single asset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetAttributes {
    /// `gml:id` of the asset
    pub asset_id: Option<String>,
    /// Taxonomy of the asset
    pub taxonomy: String,
    /// Contents cost
    pub coco: Option<f64>,
    /// Retrofitting cost
    pub reco: Option<f64>,
    /// Structural cost
    pub stco: Option<f64>,
    /// Area
    pub area: Option<f64>,
    /// Number of units
    pub number: Option<f64>,
    /// Insurance limit
    pub limit: Option<f64>,
    /// Insurance deductible
    pub deductible: Option<f64>,
    /// Enclosing list context
    #[serde(flatten)]
    pub exposure_list: ExposureListInfo,
}

/// One `assetDefinition` of an exposure model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDefinition {
    /// `[lon, lat]`
    pub site: [f64; 2],
    /// Occupancy figures, in document order
    pub occupancy: Vec<Occupancy>,
    /// Everything else known about the asset
    pub attributes: AssetAttributes,
}
