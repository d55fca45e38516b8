use super::{format_float, Element};
use crate::models::Location;
use crate::namespace::gml;

/// Append the geographical location of `location` to `element` as
/// `<gml:Point><gml:pos>x y</gml:pos></gml:Point>`.
pub fn append_location(element: &mut Element, location: &Location) {
    let point = element.sub_element(&gml("Point"));
    point
        .sub_element(&gml("pos"))
        .set_text(format!("{} {}", format_float(location.x), format_float(location.y)));
}
