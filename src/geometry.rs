use super::coords::Envelope;
use super::core::{GeometricObject, display_for_geom};
use super::linestring::{LineString, MultiLineString};
use super::points::{MultiPoint, Point};
use super::polygons::{MultiPolygon, Polygon};

/// Discriminant tags for the supported geometry variants.
///
/// Derived from the [`Geometry`] variant on demand, never stored, so it
/// can never disagree with the structural identity of the value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GeometryType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    /// Uppercase WKT keyword for this geometry type
    pub fn wkt_keyword(&self) -> &'static str {
        match self {
            Self::Point => "POINT",
            Self::MultiPoint => "MULTIPOINT",
            Self::LineString => "LINESTRING",
            Self::MultiLineString => "MULTILINESTRING",
            Self::Polygon => "POLYGON",
            Self::MultiPolygon => "MULTIPOLYGON",
            Self::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// Look up a geometry type from a WKT keyword, case-insensitively
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_uppercase().as_str() {
            "POINT" => Some(Self::Point),
            "MULTIPOINT" => Some(Self::MultiPoint),
            "LINESTRING" => Some(Self::LineString),
            "MULTILINESTRING" => Some(Self::MultiLineString),
            "POLYGON" => Some(Self::Polygon),
            "MULTIPOLYGON" => Some(Self::MultiPolygon),
            "GEOMETRYCOLLECTION" => Some(Self::GeometryCollection),
            _ => None,
        }
    }
}

impl std::fmt::Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Self::Point => "Point",
            Self::MultiPoint => "MultiPoint",
            Self::LineString => "LineString",
            Self::MultiLineString => "MultiLineString",
            Self::Polygon => "Polygon",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
        };
        write!(f, "{name}")
    }
}

/// Tagged union over all supported geometry variants.
///
/// Two geometries are equal iff they are the same variant and their
/// ordered sub-component sequences are equal element-wise.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// Discriminant tag of this geometry
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Self::Point(_) => GeometryType::Point,
            Self::MultiPoint(_) => GeometryType::MultiPoint,
            Self::LineString(_) => GeometryType::LineString,
            Self::MultiLineString(_) => GeometryType::MultiLineString,
            Self::Polygon(_) => GeometryType::Polygon,
            Self::MultiPolygon(_) => GeometryType::MultiPolygon,
            Self::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }
}

impl GeometricObject for Geometry {
    fn wkt(&self) -> String {
        match self {
            Self::Point(g) => g.wkt(),
            Self::MultiPoint(g) => g.wkt(),
            Self::LineString(g) => g.wkt(),
            Self::MultiLineString(g) => g.wkt(),
            Self::Polygon(g) => g.wkt(),
            Self::MultiPolygon(g) => g.wkt(),
            Self::GeometryCollection(g) => g.wkt(),
        }
    }

    fn envelope(&self) -> Option<Envelope> {
        match self {
            Self::Point(g) => g.envelope(),
            Self::MultiPoint(g) => g.envelope(),
            Self::LineString(g) => g.envelope(),
            Self::MultiLineString(g) => g.envelope(),
            Self::Polygon(g) => g.envelope(),
            Self::MultiPolygon(g) => g.envelope(),
            Self::GeometryCollection(g) => g.envelope(),
        }
    }
}

display_for_geom!(Geometry);

macro_rules! geometry_from {
    ($variant:ident, $type:ty) => {
        impl From<$type> for Geometry {
            fn from(value: $type) -> Self {
                Self::$variant(value)
            }
        }
    };
}

geometry_from!(Point, Point);
geometry_from!(MultiPoint, MultiPoint);
geometry_from!(LineString, LineString);
geometry_from!(MultiLineString, MultiLineString);
geometry_from!(Polygon, Polygon);
geometry_from!(MultiPolygon, MultiPolygon);
geometry_from!(GeometryCollection, GeometryCollection);

/// A geometry whose members are themselves arbitrary geometries of
/// possibly differing variants. May be empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryCollection {
    pub geometries: Vec<Geometry>,
}

impl GeometryCollection {
    /// Instantiate a geometry collection
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self { geometries }
    }
}

impl GeometricObject for GeometryCollection {
    /// WKT representation of the collection: each member rendered as its
    /// own full WKT string, joined by commas.
    fn wkt(&self) -> String {
        let body = self
            .geometries
            .iter()
            .map(Geometry::wkt)
            .collect::<Vec<_>>()
            .join(", ");
        format!("GEOMETRYCOLLECTION ({body})")
    }

    fn envelope(&self) -> Option<Envelope> {
        Envelope::union_of(&self.geometries)
    }
}

display_for_geom!(GeometryCollection);
