use super::*;
use std::io::Cursor;

const PAVIA_EXPOSURE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<nrml xmlns:gml="http://www.opengis.net/gml" xmlns="http://openquake.org/xmlns/nrml/0.4">
  <exposureModel gml:id="ep">
    <exposureList gml:id="PAV01" assetCategory="buildings" stcoType="aggregated" stcoUnit="EUR">
      <gml:description>Collection of existing building in Pavia</gml:description>
      <taxonomySource>Pavia taxonomy</taxonomySource>
      <assetDefinition gml:id="asset_01">
        <site>
          <gml:Point srsName="epsg:4326">
            <gml:pos>9.15000 45.16667</gml:pos>
          </gml:Point>
        </site>
        <number>7</number>
        <occupants description="day">12</occupants>
        <occupants description="night">50</occupants>
        <stco>150000</stco>
        <taxonomy>RC/DMRF-D/LR</taxonomy>
      </assetDefinition>
      <assetDefinition gml:id="asset_02">
        <site>
          <gml:Point srsName="epsg:4326">
            <gml:pos>9.15333 45.12200</gml:pos>
          </gml:Point>
        </site>
        <area>119</area>
        <coco>21.95</coco>
        <deductible>66</deductible>
        <limit>1999</limit>
        <reco>250000</reco>
        <stco>250000</stco>
        <taxonomy>RC/DMRF-D/HR</taxonomy>
      </assetDefinition>
    </exposureList>
  </exposureModel>
</nrml>"#;

fn parse(xml: &str) -> Vec<Result<AssetDefinition, ExposureError>> {
    ExposureModelParser::new(Cursor::new(xml.as_bytes()))
        .assets()
        .collect()
}

#[test]
fn test_parse_assets_in_order() {
    let assets: Vec<_> = parse(PAVIA_EXPOSURE)
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].attributes.asset_id.as_deref(), Some("asset_01"));
    assert_eq!(assets[1].attributes.asset_id.as_deref(), Some("asset_02"));
}

#[test]
fn test_site_and_occupancy() {
    let asset = parse(PAVIA_EXPOSURE).remove(0).unwrap();

    assert_eq!(asset.site, [9.15, 45.16667]);
    assert_eq!(
        asset.occupancy,
        vec![
            Occupancy {
                occupants: 12,
                description: "day".to_string()
            },
            Occupancy {
                occupants: 50,
                description: "night".to_string()
            },
        ]
    );
}

#[test]
fn test_asset_attributes() {
    let assets = parse(PAVIA_EXPOSURE);
    let first = assets[0].as_ref().unwrap();
    let second = assets[1].as_ref().unwrap();

    assert_eq!(first.attributes.taxonomy, "RC/DMRF-D/LR");
    assert_eq!(first.attributes.number, Some(7.0));
    assert_eq!(first.attributes.stco, Some(150000.0));
    assert_eq!(first.attributes.coco, None);

    assert_eq!(second.attributes.area, Some(119.0));
    assert_eq!(second.attributes.coco, Some(21.95));
    assert_eq!(second.attributes.deductible, Some(66.0));
    assert_eq!(second.attributes.limit, Some(1999.0));
    assert_eq!(second.attributes.reco, Some(250000.0));
    assert!(second.occupancy.is_empty());
}

#[test]
fn test_exposure_list_context() {
    let asset = parse(PAVIA_EXPOSURE).remove(0).unwrap();
    let list = &asset.attributes.exposure_list;

    assert_eq!(list.list_id.as_deref(), Some("PAV01"));
    assert_eq!(
        list.list_description.as_deref(),
        Some("Collection of existing building in Pavia")
    );
    assert_eq!(list.taxonomy_source.as_deref(), Some("Pavia taxonomy"));
    assert_eq!(list.asset_category.as_deref(), Some("buildings"));
    assert_eq!(list.stco_type.as_deref(), Some("aggregated"));
    assert_eq!(list.stco_unit.as_deref(), Some("EUR"));
    assert_eq!(list.area_type, None);
}

#[test]
fn test_missing_taxonomy() {
    let xml = r#"<nrml xmlns:gml="http://www.opengis.net/gml">
      <exposureList gml:id="L">
        <assetDefinition gml:id="a">
          <site><gml:Point><gml:pos>1.0 2.0</gml:pos></gml:Point></site>
        </assetDefinition>
      </exposureList>
    </nrml>"#;

    let result = parse(xml).remove(0);
    assert!(matches!(result, Err(ExposureError::MissingElement(ref e)) if e == "taxonomy"));
}

#[test]
fn test_occupants_require_description() {
    let xml = r#"<nrml xmlns:gml="http://www.opengis.net/gml">
      <exposureList gml:id="L">
        <assetDefinition gml:id="a">
          <site><gml:Point><gml:pos>1.0 2.0</gml:pos></gml:Point></site>
          <occupants>3</occupants>
          <taxonomy>T</taxonomy>
        </assetDefinition>
      </exposureList>
    </nrml>"#;

    let result = parse(xml).remove(0);
    assert!(matches!(result, Err(ExposureError::MissingAttribute(_))));
}

#[test]
fn test_invalid_position() {
    let xml = r#"<nrml xmlns:gml="http://www.opengis.net/gml">
      <exposureList gml:id="L">
        <assetDefinition gml:id="a">
          <site><gml:Point><gml:pos>1.0</gml:pos></gml:Point></site>
          <taxonomy>T</taxonomy>
        </assetDefinition>
      </exposureList>
    </nrml>"#;

    let result = parse(xml).remove(0);
    assert!(matches!(result, Err(ExposureError::InvalidValue(_))));
}

#[test]
fn test_empty_model_yields_nothing() {
    let xml = r#"<nrml><exposureModel/></nrml>"#;
    assert!(parse(xml).is_empty());
}

#[test]
fn test_assets_read_counter() {
    let mut parser = ExposureModelParser::new(Cursor::new(PAVIA_EXPOSURE.as_bytes()));
    while parser.next_asset().unwrap().is_some() {}
    assert_eq!(parser.assets_read(), 2);
    assert_eq!(parser.exposure_list().list_id.as_deref(), Some("PAV01"));
}

#[test]
fn test_escaped_attribute_values() {
    let xml = r#"<nrml xmlns:gml="http://www.opengis.net/gml">
  <exposureList gml:id="PAV&amp;01" stcoUnit="&lt;EUR&gt;">
    <assetDefinition gml:id="a&quot;1">
      <site><gml:Point><gml:pos>9.15 45.16</gml:pos></gml:Point></site>
      <occupants description="day &amp; night">3</occupants>
      <taxonomy>RC</taxonomy>
    </assetDefinition>
  </exposureList>
</nrml>"#;

    let asset = parse(xml).remove(0).unwrap();
    assert_eq!(asset.attributes.asset_id.as_deref(), Some("a\"1"));
    assert_eq!(asset.attributes.exposure_list.list_id.as_deref(), Some("PAV&01"));
    assert_eq!(asset.attributes.exposure_list.stco_unit.as_deref(), Some("<EUR>"));
    assert_eq!(asset.occupancy[0].description, "day & night");
}
