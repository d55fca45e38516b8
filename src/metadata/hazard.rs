use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::MetadataError;
use crate::document::format_float;

/// Statistical aggregate a result set was computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Statistics {
    /// Mean over all logic-tree branches
    Mean,
    /// A quantile over all logic-tree branches
    Quantile,
}

impl Statistics {
    /// Value written to the `statistics` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Statistics::Mean => "mean",
            Statistics::Quantile => "quantile",
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Statistics {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean" => Ok(Statistics::Mean),
            "quantile" => Ok(Statistics::Quantile),
            _ => Err(MetadataError::InvalidMetadata(
                "`statistics` must be in ('quantile', 'mean')".to_string(),
            )),
        }
    }
}

/// Validated provenance of a result set
#[derive(Debug, Clone, PartialEq)]
pub enum Provenance {
    /// No provenance given; no provenance attributes are written
    Unspecified,
    /// Results computed for a single logic-tree branch
    LogicTree {
        /// Concatenated branch IDs through the source model logic tree
        source_model_tree_path: String,
        /// Concatenated branch IDs through the GSIM logic tree
        gsim_tree_path: String,
    },
    /// Results computed from mean hazard
    Mean,
    /// Results computed from quantile hazard at the given quantile
    Quantile(f64),
}

impl Provenance {
    /// The statistics kind, if this is a statistical aggregate
    pub fn statistics(&self) -> Option<Statistics> {
        match self {
            Provenance::Mean => Some(Statistics::Mean),
            Provenance::Quantile(_) => Some(Statistics::Quantile),
            _ => None,
        }
    }

    /// Container attributes for this provenance, in document order.
    ///
    /// Absent fields produce no attribute at all.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            Provenance::Unspecified => Vec::new(),
            Provenance::LogicTree {
                source_model_tree_path,
                gsim_tree_path,
            } => vec![
                ("sourceModelTreePath", source_model_tree_path.clone()),
                ("gsimTreePath", gsim_tree_path.clone()),
            ],
            Provenance::Mean => vec![("statistics", Statistics::Mean.to_string())],
            Provenance::Quantile(value) => vec![
                ("statistics", Statistics::Quantile.to_string()),
                ("quantileValue", format_float(*value)),
            ],
        }
    }
}

/// Provenance and unit metadata shared by all risk writers
///
/// Fields hold the raw caller input; nothing is checked until
/// [`HazardMetadata::validate`] or [`HazardMetadata::provenance`] runs,
/// which every writer constructor does.
///
/// A `quantile_value` given without `statistics` passes validation. It is
/// not part of the typed [`Provenance`] but is still written as the
/// `quantileValue` attribute, see [`HazardMetadata::provenance_attributes`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HazardMetadata {
    /// Source model logic-tree path
    pub source_model_tree_path: Option<String>,

    /// Ground-motion (GSIM) logic-tree path
    pub gsim_tree_path: Option<String>,

    /// `mean` or `quantile`
    pub statistics: Option<String>,

    /// Quantile value; required when `statistics` is `quantile`
    pub quantile_value: Option<f64>,

    /// How the value of the assets has been measured
    pub unit: Option<String>,
}

impl HazardMetadata {
    /// Metadata without provenance or unit
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata for results from a single logic-tree branch
    pub fn logic_tree(source_model_tree_path: &str, gsim_tree_path: &str) -> Self {
        Self {
            source_model_tree_path: Some(source_model_tree_path.to_string()),
            gsim_tree_path: Some(gsim_tree_path.to_string()),
            ..Default::default()
        }
    }

    /// Metadata for results computed from mean hazard
    pub fn mean() -> Self {
        Self {
            statistics: Some(Statistics::Mean.to_string()),
            ..Default::default()
        }
    }

    /// Metadata for results computed from quantile hazard
    pub fn quantile(quantile_value: f64) -> Self {
        Self {
            statistics: Some(Statistics::Quantile.to_string()),
            quantile_value: Some(quantile_value),
            ..Default::default()
        }
    }

    /// Set the unit attribute
    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    /// Check the provenance fields
    pub fn validate(&self) -> Result<(), MetadataError> {
        validate_hazard_metadata(
            self.gsim_tree_path.as_deref(),
            self.source_model_tree_path.as_deref(),
            self.statistics.as_deref(),
            self.quantile_value,
        )
    }

    /// Validate and convert into a typed [`Provenance`]
    pub fn provenance(&self) -> Result<Provenance, MetadataError> {
        self.validate()?;

        let provenance = match (
            self.statistics.as_deref(),
            &self.source_model_tree_path,
            &self.gsim_tree_path,
        ) {
            (Some(statistics), _, _) => match (statistics.parse::<Statistics>()?, self.quantile_value) {
                (Statistics::Quantile, Some(value)) => Provenance::Quantile(value),
                _ => Provenance::Mean,
            },
            (None, Some(source_model_tree_path), Some(gsim_tree_path)) => Provenance::LogicTree {
                source_model_tree_path: source_model_tree_path.clone(),
                gsim_tree_path: gsim_tree_path.clone(),
            },
            _ => Provenance::Unspecified,
        };

        Ok(provenance)
    }

    /// Validated container attributes for the provenance fields, in
    /// document order.
    ///
    /// Every present field is written, including a `quantile_value` that
    /// accompanies a logic-tree pair or stands alone.
    pub fn provenance_attributes(&self) -> Result<Vec<(&'static str, String)>, MetadataError> {
        let provenance = self.provenance()?;
        let mut attributes = provenance.attributes();
        if let (None, Some(value)) = (provenance.statistics(), self.quantile_value) {
            attributes.push(("quantileValue", format_float(value)));
        }
        Ok(attributes)
    }
}

/// Validate the hazard input metadata.
///
/// Either a statistics descriptor or a complete logic-tree branch pair may be
/// given, never both. Giving neither is accepted and means the document
/// carries no provenance. A statistics descriptor must be `mean` (with no
/// quantile value) or `quantile` (with one).
pub fn validate_hazard_metadata(
    gsim_tree_path: Option<&str>,
    source_model_tree_path: Option<&str>,
    statistics: Option<&str>,
    quantile_value: Option<f64>,
) -> Result<(), MetadataError> {
    match statistics {
        Some(statistics) => {
            check_statistics_or_logic_tree(source_model_tree_path, gsim_tree_path)?;
            check_statistics_metadata(statistics, quantile_value)
        }
        None => check_logic_tree_metadata(source_model_tree_path, gsim_tree_path),
    }
}

fn check_statistics_metadata(
    statistics: &str,
    quantile_value: Option<f64>,
) -> Result<(), MetadataError> {
    match (statistics.parse::<Statistics>()?, quantile_value) {
        (Statistics::Quantile, None) => Err(MetadataError::InvalidMetadata(
            "when `statistics` == 'quantile', `quantile_value` must also be specified"
                .to_string(),
        )),
        (Statistics::Mean, Some(_)) => Err(MetadataError::InvalidMetadata(
            "when `statistics` == 'mean', `quantile_value` must not be specified".to_string(),
        )),
        _ => Ok(()),
    }
}

fn check_logic_tree_metadata(
    source_model_tree_path: Option<&str>,
    gsim_tree_path: Option<&str>,
) -> Result<(), MetadataError> {
    if source_model_tree_path.is_some() != gsim_tree_path.is_some() {
        return Err(MetadataError::InvalidMetadata(
            "when specifying a logic tree branch, both `source_model_tree_path` \
             and `gsim_tree_path` must be specified"
                .to_string(),
        ));
    }
    Ok(())
}

fn check_statistics_or_logic_tree(
    source_model_tree_path: Option<&str>,
    gsim_tree_path: Option<&str>,
) -> Result<(), MetadataError> {
    if source_model_tree_path.is_some() || gsim_tree_path.is_some() {
        return Err(MetadataError::InvalidMetadata(
            "you must choose `statistics` or (`source_model_tree_path`, \
             `gsim_tree_path`), not both"
                .to_string(),
        ));
    }
    Ok(())
}
