use crate::coords::Coord;
use crate::core::{GeomResult, GeometricObject, GeometryError};
use crate::geometry::{Geometry, GeometryCollection, GeometryType};
use crate::linestring::{LineString, MultiLineString};
use crate::points::{MultiPoint, Point};
use crate::polygons::{MultiPolygon, Polygon};
use regex::Regex;
use std::iter::Peekable;
use std::sync::OnceLock;
use std::vec::IntoIter;

const NUMBER: &str = r"^-?\d+\.?\d*(?:[eE][-+]?\d+)?";
const KEYWORD: &str = r"^[A-Za-z]+";

static NUMBER_RE: OnceLock<Regex> = OnceLock::new();
static KEYWORD_RE: OnceLock<Regex> = OnceLock::new();

/// Get number regex once to avoid recompilation (thread-safe)
fn number_re() -> &'static Regex {
    NUMBER_RE.get_or_init(|| Regex::new(NUMBER).unwrap())
}

// Get keyword regex once to avoid recompilation (thread-safe)
fn keyword_re() -> &'static Regex {
    KEYWORD_RE.get_or_init(|| Regex::new(KEYWORD).unwrap())
}

// Flat lexer output, before grouping
#[derive(Debug)]
enum RawToken {
    Word(String),
    Number(f64),
    Open,
    Close,
    Comma,
}

/// One node of the token tree: a keyword, a numeric value, or a
/// parenthesized group of comma-delimited elements.
#[derive(Debug)]
enum WktToken {
    Word(String),
    Number(f64),
    Group(Vec<Element>),
}

/// One comma-delimited element inside a group: a run of sibling tokens
type Element = Vec<WktToken>;

/// Parse a WKT string and return the parsed geometry.
///
/// Keywords are matched case-insensitively and internal whitespace is
/// ignored. Returns `MalformedWkt` if the text is not well-formed WKT
/// and `InvalidGeometry` if it is well-formed but violates a geometry
/// invariant.
///
/// Examples
/// ```rust
/// use geoconvlib::Geometry;
/// use geoconvlib::serialization::parse_wkt;
///
/// // Instantiate a point from a string
/// if let Ok(Geometry::Point(pt)) = parse_wkt("POINT (0 0)") {
///     println!("My point is: {pt:?}");
/// }
///
/// // Instantiate a polygon
/// match parse_wkt("POLYGON ((0 0, 0 1, 1 1, 0 0))") {
///     Ok(Geometry::Polygon(poly)) => println!("I got a polygon! {poly:?}"),
///     Ok(_) => println!("This is weird..."),
///     _ => panic!("Failed"),
/// }
/// ```
pub fn parse_wkt(text: &str) -> GeomResult<Geometry> {
    let tokens = scan(text)?;
    let tree = read_tree(tokens)?;
    parse_element(&tree).inspect_err(|err| log::debug!("failed to parse WKT input: {err}"))
}

/// Render a geometry to its canonical WKT representation, the inverse
/// of [`parse_wkt`]. Never fails for a constructed geometry.
pub fn to_wkt(geometry: &Geometry) -> String {
    geometry.wkt()
}

// Lex the raw text into a flat token list
fn scan(text: &str) -> GeomResult<Vec<RawToken>> {
    let mut tokens = Vec::new();
    let mut rest = text;
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }
        if let Some(s) = rest.strip_prefix('(') {
            tokens.push(RawToken::Open);
            rest = s;
        } else if let Some(s) = rest.strip_prefix(')') {
            tokens.push(RawToken::Close);
            rest = s;
        } else if let Some(s) = rest.strip_prefix(',') {
            tokens.push(RawToken::Comma);
            rest = s;
        } else if let Some(m) = number_re().find(rest) {
            let value = m.as_str().parse::<f64>().map_err(|_| {
                GeometryError::MalformedWkt(format!("invalid number: {}", m.as_str()))
            })?;
            tokens.push(RawToken::Number(value));
            rest = &rest[m.end()..];
        } else if let Some(m) = keyword_re().find(rest) {
            tokens.push(RawToken::Word(m.as_str().to_ascii_uppercase()));
            rest = &rest[m.end()..];
        } else {
            return Err(GeometryError::MalformedWkt(format!(
                "unexpected character at: {rest:.12}"
            )));
        }
    }
    if tokens.is_empty() {
        return Err(GeometryError::MalformedWkt(String::from("empty input")));
    }
    Ok(tokens)
}

// Fold the flat token list into a single top-level element and check
// that nothing trails it
fn read_tree(tokens: Vec<RawToken>) -> GeomResult<Element> {
    let mut reader = tokens.into_iter().peekable();
    let root = read_element(&mut reader)?;
    if reader.next().is_some() {
        return Err(GeometryError::MalformedWkt(String::from(
            "trailing characters after geometry",
        )));
    }
    Ok(root)
}

// Read one element: a run of words, numbers, and nested groups, up to
// the next comma, closing parenthesis, or end of input
fn read_element(reader: &mut Peekable<IntoIter<RawToken>>) -> GeomResult<Element> {
    let mut element = Vec::new();
    loop {
        let token = match reader.peek() {
            None | Some(RawToken::Close) | Some(RawToken::Comma) => break,
            Some(_) => reader.next(),
        };
        match token {
            Some(RawToken::Open) => element.push(WktToken::Group(read_group(reader)?)),
            Some(RawToken::Word(word)) => element.push(WktToken::Word(word)),
            Some(RawToken::Number(value)) => element.push(WktToken::Number(value)),
            _ => break,
        }
    }
    Ok(element)
}

// Read the comma-delimited elements of a group whose opening
// parenthesis was already consumed, up to and including the closing one
fn read_group(reader: &mut Peekable<IntoIter<RawToken>>) -> GeomResult<Vec<Element>> {
    let mut elements = vec![read_element(reader)?];
    loop {
        match reader.next() {
            Some(RawToken::Comma) => elements.push(read_element(reader)?),
            Some(RawToken::Close) => return Ok(elements),
            _ => {
                return Err(GeometryError::MalformedWkt(String::from(
                    "unbalanced parentheses",
                )));
            }
        }
    }
}

// Dispatch a keyword-tagged element to the matching variant parser.
// Recursion re-enters here for every GEOMETRYCOLLECTION member.
fn parse_element(element: &[WktToken]) -> GeomResult<Geometry> {
    match element {
        [WktToken::Word(keyword), WktToken::Group(body)] => {
            match GeometryType::from_keyword(keyword) {
                Some(GeometryType::Point) => Ok(parse_point(body)?.into()),
                Some(GeometryType::MultiPoint) => Ok(parse_multipoint(body)?.into()),
                Some(GeometryType::LineString) => Ok(parse_linestring(body)?.into()),
                Some(GeometryType::MultiLineString) => Ok(parse_multilinestring(body)?.into()),
                Some(GeometryType::Polygon) => Ok(parse_polygon(body)?.into()),
                Some(GeometryType::MultiPolygon) => Ok(parse_multipolygon(body)?.into()),
                Some(GeometryType::GeometryCollection) => Ok(parse_collection(body)?.into()),
                None => Err(GeometryError::MalformedWkt(format!(
                    "unsupported geometry type: {keyword}"
                ))),
            }
        }
        [WktToken::Word(keyword), ..] => Err(GeometryError::MalformedWkt(format!(
            "expected parenthesized body after {keyword}"
        ))),
        _ => Err(GeometryError::MalformedWkt(String::from(
            "expected a geometry type keyword",
        ))),
    }
}

// One coordinate tuple: 2 or 3 whitespace-separated numbers
fn coord_from_element(element: &[WktToken]) -> GeomResult<Coord> {
    let mut values = Vec::with_capacity(3);
    for token in element {
        match token {
            WktToken::Number(value) => values.push(*value),
            _ => {
                return Err(GeometryError::MalformedWkt(String::from(
                    "expected a numeric coordinate value",
                )));
            }
        }
    }
    match values[..] {
        [x, y] => Ok(Coord::new(x, y)),
        [x, y, z] => Ok(Coord::with_z(x, y, z)),
        _ => Err(GeometryError::MalformedWkt(format!(
            "coordinate tuple must have 2 or 3 values, got {}",
            values.len()
        ))),
    }
}

// An element that is exactly one nested group, as required for polygon
// rings and multi-geometry members
fn group_of(element: &[WktToken]) -> Option<&[Element]> {
    match element {
        [WktToken::Group(inner)] => Some(inner),
        _ => None,
    }
}

fn parse_point(body: &[Element]) -> GeomResult<Point> {
    match body {
        [tuple] => Ok(Point::new(coord_from_element(tuple)?)),
        _ => Err(GeometryError::MalformedWkt(format!(
            "POINT takes exactly one coordinate tuple, got {}",
            body.len()
        ))),
    }
}

// MULTIPOINT accepts both bare tuples and individually parenthesized
// tuples; both normalize to the same point sequence
fn parse_multipoint(body: &[Element]) -> GeomResult<MultiPoint> {
    let mut points = Vec::with_capacity(body.len());
    for (i, element) in body.iter().enumerate() {
        let tuple = match group_of(element) {
            Some([inner]) => &inner[..],
            Some(inner) => {
                return Err(GeometryError::MalformedWkt(format!(
                    "MULTIPOINT member {i} must hold a single coordinate tuple, got {}",
                    inner.len()
                )));
            }
            None => &element[..],
        };
        points.push(Point::new(coord_from_element(tuple)?));
    }
    Ok(MultiPoint::new(points))
}

fn parse_linestring(body: &[Element]) -> GeomResult<LineString> {
    let coords = body
        .iter()
        .map(|element| coord_from_element(element))
        .collect::<GeomResult<Vec<_>>>()?;
    LineString::new(coords)
}

fn parse_multilinestring(body: &[Element]) -> GeomResult<MultiLineString> {
    let mut lines = Vec::with_capacity(body.len());
    for (i, element) in body.iter().enumerate() {
        let inner = group_of(element).ok_or_else(|| {
            GeometryError::MalformedWkt(format!(
                "MULTILINESTRING member {i} must be a parenthesized coordinate list"
            ))
        })?;
        lines.push(parse_linestring(inner).map_err(|err| err.nested("MultiLineString", i))?);
    }
    Ok(MultiLineString::new(lines))
}

fn parse_polygon(body: &[Element]) -> GeomResult<Polygon> {
    let mut rings = Vec::with_capacity(body.len());
    for (i, element) in body.iter().enumerate() {
        let inner = group_of(element).ok_or_else(|| {
            GeometryError::MalformedWkt(format!(
                "polygon ring {i} must be a parenthesized coordinate list"
            ))
        })?;
        rings.push(parse_linestring(inner).map_err(|err| err.nested("Polygon/rings", i))?);
    }
    Polygon::new(rings)
}

fn parse_multipolygon(body: &[Element]) -> GeomResult<MultiPolygon> {
    let mut polygons = Vec::with_capacity(body.len());
    for (i, element) in body.iter().enumerate() {
        let inner = group_of(element).ok_or_else(|| {
            GeometryError::MalformedWkt(format!(
                "MULTIPOLYGON member {i} must be a parenthesized ring list"
            ))
        })?;
        polygons.push(parse_polygon(inner).map_err(|err| err.nested("MultiPolygon", i))?);
    }
    Ok(MultiPolygon::new(polygons))
}

// Every collection member is a fully-qualified geometry with its own
// keyword, parsed by plain recursion over the token tree
fn parse_collection(body: &[Element]) -> GeomResult<GeometryCollection> {
    let mut geometries = Vec::with_capacity(body.len());
    for (i, element) in body.iter().enumerate() {
        geometries.push(parse_element(element).map_err(|err| err.nested("GeometryCollection", i))?);
    }
    Ok(GeometryCollection::new(geometries))
}
