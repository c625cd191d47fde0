use super::coords::Envelope;
use super::core::{GeomResult, GeometricObject, GeometryError, display_for_geom};
use super::linestring::LineString;

/// A polygon made of one exterior ring and zero or more interior holes.
///
/// Every ring must be a linear ring (closed, at least 4 coordinates).
/// Whether the holes actually lie inside the exterior is the caller's
/// responsibility; only ring closure and arity are checked here.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    rings: Vec<LineString>,
}

impl Polygon {
    /// Instantiate a polygon from its rings. The first ring is the
    /// exterior boundary, the rest are holes.
    pub fn new(rings: Vec<LineString>) -> GeomResult<Self> {
        if rings.is_empty() {
            return Err(GeometryError::invalid(
                "Polygon",
                "must have at least one ring",
            ));
        }
        for (i, ring) in rings.iter().enumerate() {
            if !ring.is_linear_ring() {
                let reason = if !ring.is_closed() {
                    "ring is not closed".to_string()
                } else {
                    format!(
                        "ring must have at least 4 coordinates, got {}",
                        ring.total_vertices()
                    )
                };
                return Err(GeometryError::invalid(format!("Polygon/rings[{i}]"), reason));
            }
        }
        Ok(Self { rings })
    }

    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    /// The exterior boundary ring
    pub fn exterior(&self) -> &LineString {
        &self.rings[0]
    }

    /// The interior hole rings, if any
    pub fn interiors(&self) -> &[LineString] {
        &self.rings[1..]
    }

    // Ring list without the surrounding keyword, shared with the
    // multi-polygon writer.
    pub(crate) fn wkt_body(&self) -> String {
        self.rings
            .iter()
            .map(|ring| format!("({})", ring.wkt_body()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl GeometricObject for Polygon {
    /// WKT representation of the polygon
    fn wkt(&self) -> String {
        format!("POLYGON ({})", self.wkt_body())
    }

    fn envelope(&self) -> Option<Envelope> {
        Envelope::union_of(&self.rings)
    }
}

display_for_geom!(Polygon);

/// A collection of polygons
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPolygon {
    pub polygons: Vec<Polygon>,
}

impl MultiPolygon {
    /// Instantiate a multi-polygon collection
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }
}

impl GeometricObject for MultiPolygon {
    /// WKT representation of the multi-polygon collection
    fn wkt(&self) -> String {
        let body = self
            .polygons
            .iter()
            .map(|poly| format!("({})", poly.wkt_body()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("MULTIPOLYGON ({body})")
    }

    fn envelope(&self) -> Option<Envelope> {
        Envelope::union_of(&self.polygons)
    }
}

display_for_geom!(MultiPolygon);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Coord;

    fn ring(coords: &[(f64, f64)]) -> LineString {
        LineString::new(coords.iter().map(|&(x, y)| Coord::new(x, y)).collect()).unwrap()
    }

    #[test]
    fn test_instantiation() {
        // Open ring
        let open = ring(&[(0.0, 1.0), (0.0, 0.0), (1.0, 0.0), (2.0, 2.0)]);
        if let Ok(_) = Polygon::new(vec![open]) {
            panic!("Instantiated a polygon with an open ring");
        }

        // Closed but too short
        let short = ring(&[(0.0, 1.0), (1.0, 0.0), (0.0, 1.0)]);
        if let Ok(_) = Polygon::new(vec![short]) {
            panic!("Instantiated a polygon with a 3-coordinate ring");
        }

        let triangle = ring(&[(0.0, 1.0), (0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        if let Err(_) = Polygon::new(vec![triangle]) {
            panic!("Failed to instantiate a valid polygon");
        }

        if let Ok(_) = Polygon::new(Vec::new()) {
            panic!("Instantiated a polygon without rings");
        }
    }

    #[test]
    fn test_invalid_ring_path() {
        let exterior = ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]);
        let bad_hole = ring(&[(2.0, 2.0), (3.0, 3.0), (2.0, 3.0), (2.5, 2.5)]);

        match Polygon::new(vec![exterior, bad_hole]) {
            Err(GeometryError::InvalidGeometry { path, .. }) => {
                assert_eq!(path, "Polygon/rings[1]");
            }
            other => panic!("Expected an invalid geometry error, got {other:?}"),
        }
    }

    #[test]
    fn test_exterior_and_holes() {
        let exterior = ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]);
        let hole = ring(&[(2.0, 2.0), (3.0, 3.0), (2.0, 3.0), (2.0, 2.0)]);
        let poly = Polygon::new(vec![exterior.clone(), hole.clone()]).unwrap();

        assert_eq!(poly.exterior(), &exterior);
        assert_eq!(poly.interiors(), &[hole]);
    }

    #[test]
    fn test_polygon_wkt() {
        let poly = Polygon::new(vec![ring(&[
            (30.0, 10.0),
            (40.0, 40.0),
            (20.0, 40.0),
            (10.0, 20.0),
            (30.0, 10.0),
        ])])
        .unwrap();
        assert_eq!(poly.wkt(), "POLYGON ((30 10, 40 40, 20 40, 10 20, 30 10))");
    }

    #[test]
    fn test_polygon_envelope() {
        let poly = Polygon::new(vec![ring(&[
            (30.0, 10.0),
            (40.0, 40.0),
            (20.0, 40.0),
            (10.0, 20.0),
            (30.0, 10.0),
        ])])
        .unwrap();
        let env = poly.envelope().unwrap();
        assert_eq!(env.min(), &Coord::new(10.0, 10.0));
        assert_eq!(env.max(), &Coord::new(40.0, 40.0));
    }

    #[test]
    fn test_multipolygon_wkt() {
        let mp = MultiPolygon::new(vec![
            Polygon::new(vec![ring(&[(30.0, 20.0), (45.0, 40.0), (10.0, 40.0), (30.0, 20.0)])])
                .unwrap(),
            Polygon::new(vec![ring(&[(15.0, 5.0), (40.0, 10.0), (10.0, 20.0), (15.0, 5.0)])])
                .unwrap(),
        ]);
        assert_eq!(
            mp.wkt(),
            "MULTIPOLYGON (((30 20, 45 40, 10 40, 30 20)), ((15 5, 40 10, 10 20, 15 5)))"
        );
    }
}
