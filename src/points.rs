use super::coords::{Coord, Envelope};
use super::core::{GeometricObject, display_for_geom};

/// A single point geometry
///
/// Examples
/// ```rust
/// use geoconvlib::{Coord, Point};
/// let my_point = Point::new(Coord::new(0.2, -7.9));
/// assert_eq!(my_point.coord().x(), 0.2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    coord: Coord,
}

impl Point {
    /// Instantiate a new point at the given coordinate
    pub fn new(coord: Coord) -> Self {
        Self { coord }
    }

    pub fn coord(&self) -> &Coord {
        &self.coord
    }
}

impl From<Coord> for Point {
    fn from(coord: Coord) -> Self {
        Self::new(coord)
    }
}

impl GeometricObject for Point {
    /// WKT representation of the point
    fn wkt(&self) -> String {
        format!("POINT ({})", self.coord)
    }

    fn envelope(&self) -> Option<Envelope> {
        Some(Envelope::of(&self.coord))
    }
}

display_for_geom!(Point);

/// A simple collection of points
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPoint {
    pub points: Vec<Point>,
}

impl MultiPoint {
    /// Instantiate a multipoint collection
    ///
    /// Example
    /// ```rust
    /// use geoconvlib::{Coord, MultiPoint, Point};
    /// let my_points = MultiPoint::new(vec![
    ///     Point::new(Coord::new(0.0, 0.0)),
    ///     Point::new(Coord::new(0.0, 1.0)),
    /// ]);
    /// ```
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl GeometricObject for MultiPoint {
    /// WKT representation of the multipoint collection. Always emits the
    /// parenthesized-tuple form, which is the canonical one of the two
    /// syntaxes the parser accepts.
    fn wkt(&self) -> String {
        let body = self
            .points
            .iter()
            .map(|pt| format!("({})", pt.coord()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("MULTIPOINT ({body})")
    }

    fn envelope(&self) -> Option<Envelope> {
        Envelope::union_of(&self.points)
    }
}

display_for_geom!(MultiPoint);
