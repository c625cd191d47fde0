use super::coords::{Coord, Envelope};
use super::core::{GeomResult, GeometricObject, GeometryError, display_for_geom};

/// A sequence of at least two coordinates joined by straight segments
#[derive(Clone, Debug, PartialEq)]
pub struct LineString {
    coords: Vec<Coord>,
}

impl LineString {
    /// Instantiate a new LineString from a vector of coordinates.
    ///
    /// Fails if fewer than two coordinates are given.
    pub fn new(coords: Vec<Coord>) -> GeomResult<Self> {
        if coords.len() < 2 {
            Err(GeometryError::invalid(
                "LineString",
                format!("must have at least 2 coordinates, got {}", coords.len()),
            ))
        } else {
            Ok(Self { coords })
        }
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Get the total number of vertices in the linestring.
    pub fn total_vertices(&self) -> usize {
        self.coords.len()
    }

    /// True if the first and last coordinates are exactly equal,
    /// elevation included.
    pub fn is_closed(&self) -> bool {
        self.coords.first() == self.coords.last()
    }

    /// True if the linestring can serve as a polygon ring: closed, with
    /// at least 3 distinct vertices plus the closing repeat.
    pub fn is_linear_ring(&self) -> bool {
        self.coords.len() >= 4 && self.is_closed()
    }

    // Coordinate list without the surrounding keyword, shared with the
    // polygon and multi-linestring writers.
    pub(crate) fn wkt_body(&self) -> String {
        self.coords
            .iter()
            .map(Coord::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl GeometricObject for LineString {
    /// WKT representation of the LineString
    fn wkt(&self) -> String {
        format!("LINESTRING ({})", self.wkt_body())
    }

    fn envelope(&self) -> Option<Envelope> {
        let (first, rest) = self.coords.split_first()?;
        let mut env = Envelope::of(first);
        for coord in rest {
            env.expand_to_include(coord);
        }
        Some(env)
    }
}

display_for_geom!(LineString);

/// A collection of linestrings
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiLineString {
    pub lines: Vec<LineString>,
}

impl MultiLineString {
    /// Instantiate a multi-linestring collection
    pub fn new(lines: Vec<LineString>) -> Self {
        Self { lines }
    }
}

impl GeometricObject for MultiLineString {
    /// WKT representation of the multi-linestring collection
    fn wkt(&self) -> String {
        let body = self
            .lines
            .iter()
            .map(|line| format!("({})", line.wkt_body()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("MULTILINESTRING ({body})")
    }

    fn envelope(&self) -> Option<Envelope> {
        Envelope::union_of(&self.lines)
    }
}

display_for_geom!(MultiLineString);

#[cfg(test)]
mod tests {
    use super::*;

    fn line(coords: &[(f64, f64)]) -> LineString {
        LineString::new(coords.iter().map(|&(x, y)| Coord::new(x, y)).collect()).unwrap()
    }

    #[test]
    fn test_instantiation_valid() {
        let pts = vec![
            Coord::new(0.3, 0.3),
            Coord::new(0.34, 0.98),
            Coord::new(0.56, -123.6),
        ];
        LineString::new(pts).unwrap();
    }

    #[test]
    fn test_instantiation_invalid() {
        let err = LineString::new(vec![Coord::new(0.3, 0.3)]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidGeometry { .. }));

        let err = LineString::new(Vec::new()).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_is_closed() {
        assert!(line(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]).is_closed());
        assert!(!line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]).is_closed());
    }

    #[test]
    fn test_is_closed_elevation() {
        // Same x/y but only one endpoint has a z: not closed
        let open = LineString::new(vec![
            Coord::with_z(0.0, 0.0, 5.0),
            Coord::new(1.0, 1.0),
            Coord::new(0.0, 0.0),
        ])
        .unwrap();
        assert!(!open.is_closed());

        let closed = LineString::new(vec![
            Coord::with_z(0.0, 0.0, 5.0),
            Coord::new(1.0, 1.0),
            Coord::with_z(0.0, 0.0, 5.0),
        ])
        .unwrap();
        assert!(closed.is_closed());
    }

    #[test]
    fn test_is_linear_ring() {
        // Closed but only 3 coordinates: not a ring
        assert!(!line(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]).is_linear_ring());
        // 4 coordinates but open: not a ring
        assert!(!line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).is_linear_ring());
        // Triangle with closing repeat
        assert!(line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]).is_linear_ring());
    }

    #[test]
    fn test_envelope() {
        let ls = line(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]);
        let env = ls.envelope().unwrap();
        assert_eq!(env.min(), &Coord::new(0.0, 0.0));
        assert_eq!(env.max(), &Coord::new(4.0, 3.0));
    }

    #[test]
    fn test_multilinestring_wkt() {
        let mls = MultiLineString::new(vec![
            line(&[(10.0, 10.0), (20.0, 20.0), (10.0, 40.0)]),
            line(&[(40.0, 40.0), (30.0, 30.0)]),
        ]);
        assert_eq!(
            mls.wkt(),
            "MULTILINESTRING ((10 10, 20 20, 10 40), (40 40, 30 30))"
        );
    }

    #[test]
    fn test_multilinestring_envelope() {
        let mls = MultiLineString::new(vec![
            line(&[(10.0, 10.0), (20.0, 20.0)]),
            line(&[(40.0, 40.0), (30.0, 5.0)]),
        ]);
        let env = mls.envelope().unwrap();
        assert_eq!(env.min(), &Coord::new(10.0, 5.0));
        assert_eq!(env.max(), &Coord::new(40.0, 40.0));

        assert!(MultiLineString::new(Vec::new()).envelope().is_none());
    }
}
