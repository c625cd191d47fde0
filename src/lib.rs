pub mod cli_commands;
pub mod core;
mod coords;
mod geometry;
mod linestring;
mod points;
mod polygons;
pub mod serialization;

pub use self::coords::*;
pub use self::core::*;
pub use self::geometry::*;
pub use self::linestring::*;
pub use self::points::*;
pub use self::polygons::*;
