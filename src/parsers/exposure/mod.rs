//! Streaming NRML exposure model parser using quick-xml
//!
//! Yields one [`AssetDefinition`] per `<assetDefinition>` element without
//! loading the document into memory. Namespace prefixes are ignored; elements
//! and attributes are matched by local name.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

pub use error::ExposureError;
pub use models::{AssetAttributes, AssetDefinition, ExposureListInfo, Occupancy};

use helpers::{get_attribute, parse_f64, parse_pos};

mod error;
mod helpers;
mod models;

#[cfg(test)]
mod tests;

/// Streaming parser for exposure model documents
pub struct ExposureModelParser<R: BufRead> {
    reader: Reader<R>,
    exposure_list: ExposureListInfo,
    in_exposure_list: bool,
    assets_read: usize,
}

impl ExposureModelParser<BufReader<File>> {
    /// Open an exposure model file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ExposureError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> ExposureModelParser<R> {
    /// Create a new parser from a BufRead source
    pub fn new(reader: R) -> Self {
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.config_mut().trim_text(true);

        Self {
            reader: xml_reader,
            exposure_list: ExposureListInfo::default(),
            in_exposure_list: false,
            assets_read: 0,
        }
    }

    /// Context of the most recently entered `exposureList`
    pub fn exposure_list(&self) -> &ExposureListInfo {
        &self.exposure_list
    }

    /// Number of assets parsed so far
    pub fn assets_read(&self) -> usize {
        self.assets_read
    }

    /// Iterate over all remaining assets
    pub fn assets(self) -> AssetIterator<R> {
        AssetIterator { parser: self }
    }

    /// Read the next asset from the stream
    pub fn next_asset(&mut self) -> Result<Option<AssetDefinition>, ExposureError> {
        let mut buf = Vec::new();
        loop {
            match self.reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"exposureList" => {
                        self.exposure_list = exposure_list_info(&e, self.reader.decoder())?;
                        self.in_exposure_list = true;
                        debug!("Entering exposure list {:?}", self.exposure_list.list_id);
                    }
                    b"description" if self.in_exposure_list => {
                        self.exposure_list.list_description = Some(self.read_text()?);
                    }
                    b"taxonomySource" if self.in_exposure_list => {
                        self.exposure_list.taxonomy_source = Some(self.read_text()?);
                    }
                    b"assetDefinition" => {
                        let asset_id = get_attribute(&e, self.reader.decoder(), "id")?;
                        let asset = self.parse_asset(asset_id)?;
                        self.assets_read += 1;
                        return Ok(Some(asset));
                    }
                    _ => {}
                },
                Event::End(e) => {
                    if e.local_name().as_ref() == b"exposureList" {
                        self.in_exposure_list = false;
                    }
                }
                Event::Eof => return Ok(None),
                _ => {}
            }
            buf.clear();
        }
    }

    fn parse_asset(&mut self, asset_id: Option<String>) -> Result<AssetDefinition, ExposureError> {
        let mut site = None;
        let mut occupancy = Vec::new();
        let mut attributes = AssetAttributes {
            asset_id,
            exposure_list: self.exposure_list.clone(),
            ..Default::default()
        };
        let mut taxonomy = None;

        let mut buf = Vec::new();
        loop {
            match self.reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    match name.as_str() {
                        "pos" => site = Some(parse_pos(&self.read_text()?)?),
                        "occupants" => {
                            let decoder = self.reader.decoder();
                            let description = get_attribute(&e, decoder, "description")?
                                .ok_or_else(|| {
                                    ExposureError::MissingAttribute(
                                        "occupants/@description".to_string(),
                                    )
                                })?;
                            let text = self.read_text()?;
                            let occupants = text.parse().map_err(|_| {
                                ExposureError::InvalidValue(format!(
                                    "occupants: '{}' is not a count",
                                    text
                                ))
                            })?;
                            occupancy.push(Occupancy {
                                occupants,
                                description,
                            });
                        }
                        "taxonomy" => taxonomy = Some(self.read_text()?),
                        "coco" | "reco" | "stco" | "area" | "number" | "limit" | "deductible" => {
                            let value = parse_f64(&self.read_text()?, &name)?;
                            set_numeric_attribute(&mut attributes, &name, value);
                        }
                        _ => {}
                    }
                }
                Event::End(e) => {
                    if e.local_name().as_ref() == b"assetDefinition" {
                        break;
                    }
                }
                Event::Eof => {
                    return Err(ExposureError::InvalidStructure(
                        "unterminated assetDefinition".to_string(),
                    ))
                }
                _ => {}
            }
            buf.clear();
        }

        attributes.taxonomy = taxonomy
            .filter(|taxonomy| !taxonomy.is_empty())
            .ok_or_else(|| ExposureError::MissingElement("taxonomy".to_string()))?;
        let site =
            site.ok_or_else(|| ExposureError::MissingElement("site/gml:Point/gml:pos".to_string()))?;

        Ok(AssetDefinition {
            site,
            occupancy,
            attributes,
        })
    }

    /// Read the text content of the element just opened, consuming its end tag
    fn read_text(&mut self) -> Result<String, ExposureError> {
        let mut buf = Vec::new();
        let mut text = String::new();
        let mut depth = 0usize;
        loop {
            match self.reader.read_event_into(&mut buf)? {
                Event::Text(t) => text.push_str(&t.unescape()?),
                Event::Start(_) => depth += 1,
                Event::End(_) => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                Event::Eof => {
                    return Err(ExposureError::InvalidStructure(
                        "document ended inside an element".to_string(),
                    ))
                }
                _ => {}
            }
            buf.clear();
        }
        Ok(text.trim().to_string())
    }
}

fn exposure_list_info(e: &BytesStart, decoder: Decoder) -> Result<ExposureListInfo, ExposureError> {
    Ok(ExposureListInfo {
        list_id: get_attribute(e, decoder, "id")?,
        list_description: None,
        taxonomy_source: None,
        asset_category: get_attribute(e, decoder, "assetCategory")?,
        area_type: get_attribute(e, decoder, "areaType")?,
        area_unit: get_attribute(e, decoder, "areaUnit")?,
        coco_type: get_attribute(e, decoder, "cocoType")?,
        coco_unit: get_attribute(e, decoder, "cocoUnit")?,
        reco_type: get_attribute(e, decoder, "recoType")?,
        reco_unit: get_attribute(e, decoder, "recoUnit")?,
        stco_type: get_attribute(e, decoder, "stcoType")?,
        stco_unit: get_attribute(e, decoder, "stcoUnit")?,
    })
}

fn set_numeric_attribute(attributes: &mut AssetAttributes, name: &str, value: f64) {
    let slot = match name {
        "coco" => &mut attributes.coco,
        "reco" => &mut attributes.reco,
        "stco" => &mut attributes.stco,
        "area" => &mut attributes.area,
        "number" => &mut attributes.number,
        "limit" => &mut attributes.limit,
        "deductible" => &mut attributes.deductible,
        _ => return,
    };
    *slot = Some(value);
}

/// Iterator over the assets of an exposure model
pub struct AssetIterator<R: BufRead> {
    parser: ExposureModelParser<R>,
}

impl<R: BufRead> Iterator for AssetIterator<R> {
    type Item = Result<AssetDefinition, ExposureError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.parser.next_asset() {
            Ok(Some(asset)) => Some(Ok(asset)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
