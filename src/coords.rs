use super::core::GeometricObject;

/// A single position on the plane, with an optional elevation.
///
/// Coordinates are immutable once constructed and compare by exact
/// field-wise equality, including the presence or absence of `z`.
///
/// Examples
/// ```rust
/// use geoconvlib::Coord;
/// let flat = Coord::new(0.2, -7.9);
/// let tall = Coord::with_z(0.2, -7.9, 120.0);
/// assert_ne!(flat, tall);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Coord {
    x: f64,
    y: f64,
    z: Option<f64>,
}

impl Coord {
    /// Instantiate a new 2D coordinate
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Instantiate a new 3D coordinate
    pub fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> Option<f64> {
        self.z
    }
}

impl std::fmt::Display for Coord {
    /// Whitespace-separated WKT tuple form, `x y` or `x y z`
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.z {
            Some(z) => write!(f, "{} {} {}", self.x, self.y, z),
            None => write!(f, "{} {}", self.x, self.y),
        }
    }
}

/// Minimum axis-aligned bounding box of a geometry.
///
/// Computed on demand, never stored. The `z` range only covers the
/// coordinates that actually carry an elevation; if none do, the
/// corners have no `z` either.
#[derive(Clone, Debug, PartialEq)]
pub struct Envelope {
    min: Coord,
    max: Coord,
}

impl Envelope {
    /// Degenerate box containing a single coordinate
    pub fn of(coord: &Coord) -> Self {
        Self {
            min: coord.clone(),
            max: coord.clone(),
        }
    }

    pub fn min(&self) -> &Coord {
        &self.min
    }

    pub fn max(&self) -> &Coord {
        &self.max
    }

    /// Grow the box to contain the given coordinate
    pub fn expand_to_include(&mut self, coord: &Coord) {
        self.min = Coord {
            x: self.min.x.min(coord.x),
            y: self.min.y.min(coord.y),
            z: merge_z(self.min.z, coord.z, f64::min),
        };
        self.max = Coord {
            x: self.max.x.max(coord.x),
            y: self.max.y.max(coord.y),
            z: merge_z(self.max.z, coord.z, f64::max),
        };
    }

    /// Grow the box to contain another envelope
    pub fn expand(&mut self, other: &Envelope) {
        self.expand_to_include(&other.min);
        self.expand_to_include(&other.max);
    }

    /// Union of the envelopes of a sequence of geometries. None if no
    /// member has an envelope of its own.
    pub(crate) fn union_of<T: GeometricObject>(items: &[T]) -> Option<Envelope> {
        let mut result: Option<Envelope> = None;
        for env in items.iter().filter_map(|item| item.envelope()) {
            match result.as_mut() {
                Some(acc) => acc.expand(&env),
                None => result = Some(env),
            }
        }
        result
    }
}

// Componentwise combine for the optional elevation: a missing side does
// not constrain the range.
fn merge_z(a: Option<f64>, b: Option<f64>, pick: fn(f64, f64) -> f64) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(pick(a, b)),
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_equality() {
        assert_eq!(Coord::new(1.5, -2.0), Coord::new(1.5, -2.0));
        assert_ne!(Coord::new(1.5, -2.0), Coord::new(1.5, -2.0 + 1e-12));
        assert_ne!(Coord::new(1.5, -2.0), Coord::with_z(1.5, -2.0, 0.0));
        assert_eq!(
            Coord::with_z(1.5, -2.0, 3.0),
            Coord::with_z(1.5, -2.0, 3.0)
        );
    }

    #[test]
    fn test_tuple_format() {
        assert_eq!(Coord::new(30.0, 10.0).to_string(), "30 10");
        assert_eq!(Coord::new(-0.5, 10.25).to_string(), "-0.5 10.25");
        assert_eq!(Coord::with_z(30.0, 10.0, 5.0).to_string(), "30 10 5");
    }

    #[test]
    fn test_expand_to_include() {
        let mut env = Envelope::of(&Coord::new(2.0, 3.0));
        env.expand_to_include(&Coord::new(-1.0, 7.0));
        env.expand_to_include(&Coord::new(4.0, 5.0));

        assert_eq!(env.min(), &Coord::new(-1.0, 3.0));
        assert_eq!(env.max(), &Coord::new(4.0, 7.0));
    }

    #[test]
    fn test_expand_with_elevation() {
        let mut env = Envelope::of(&Coord::new(0.0, 0.0));
        env.expand_to_include(&Coord::with_z(1.0, 1.0, 10.0));
        env.expand_to_include(&Coord::with_z(2.0, -1.0, -4.0));

        assert_eq!(env.min(), &Coord::with_z(0.0, -1.0, -4.0));
        assert_eq!(env.max(), &Coord::with_z(2.0, 1.0, 10.0));
    }

    #[test]
    fn test_merge_envelopes() {
        let mut env = Envelope::of(&Coord::new(0.0, 0.0));
        let mut other = Envelope::of(&Coord::new(5.0, 5.0));
        other.expand_to_include(&Coord::new(3.0, 8.0));

        env.expand(&other);
        assert_eq!(env.min(), &Coord::new(0.0, 0.0));
        assert_eq!(env.max(), &Coord::new(5.0, 8.0));
    }
}
