use super::serialization::*;
use super::*;
use std::fs::File;
use std::io::Write;

/// Parse an input string and print some details about the shape
pub fn parse_show_detail(input: String) -> Result<(), String> {
    let geometry = match parse_wkt(&input) {
        Err(e) => return Err(format!("Failed to parse WKT: {e}")),
        Ok(g) => g,
    };
    println!("Parsed a Geometry of Type {}!", geometry.geometry_type());
    match &geometry {
        Geometry::Point(pt) => {
            println!("The point coordinates are: ({})", pt.coord());
        }
        Geometry::MultiPoint(mp) => {
            println!("The multipoint contains {} total points.", mp.points.len());
        }
        Geometry::LineString(ls) => {
            println!(
                "The linestring contains {} total vertices (closed: {}).",
                ls.total_vertices(),
                ls.is_closed()
            );
        }
        Geometry::MultiLineString(mls) => {
            println!(
                "The multilinestring contains {} total linestrings.",
                mls.lines.len()
            );
        }
        Geometry::Polygon(poly) => {
            println!(
                "The polygon has {} ring(s); the exterior ring contains {} vertices.",
                poly.rings().len(),
                poly.exterior().total_vertices() - 1
            );
        }
        Geometry::MultiPolygon(mp) => {
            println!(
                "The multipolygon contains {} total polygons.",
                mp.polygons.len()
            );
        }
        Geometry::GeometryCollection(gc) => {
            println!(
                "The collection contains {} total geometries.",
                gc.geometries.len()
            );
        }
    }
    println!("Raw value: {geometry:?}");
    Ok(())
}

/// Parse the given input string and print its bounding envelope
pub fn show_envelope(input: String) -> Result<(), String> {
    let geometry = match parse_wkt(&input) {
        Err(e) => return Err(format!("Failed to parse WKT: {e}")),
        Ok(g) => g,
    };
    match geometry.envelope() {
        None => Err(String::from(
            "The geometry holds no coordinates, so it has no envelope!",
        )),
        Some(env) => {
            println!("Envelope min: ({})", env.min());
            println!("Envelope max: ({})", env.max());
            Ok(())
        }
    }
}

/// Parse the given input string and re-emit it in canonical WKT form,
/// optionally saving the result to a file
pub fn write_canonical(input: String, output_path: Option<String>) -> Result<(), String> {
    let geometry = match parse_wkt(&input) {
        Err(e) => return Err(format!("Failed to parse WKT: {e}")),
        Ok(g) => g,
    };
    let canonical = to_wkt(&geometry);
    match output_path {
        None => {
            println!("{canonical}");
            Ok(())
        }
        Some(ref fp) => {
            let mut file = match File::create(fp) {
                Ok(f) => f,
                Err(e) => return Err(format!("Failed to create file: {e}")),
            };
            match file.write_all(canonical.as_bytes()) {
                Err(_) => Err(String::from("Failed to write to file!")),
                Ok(_) => {
                    println!("Geometry saved to file: '{fp}'");
                    Ok(())
                }
            }
        }
    }
}
