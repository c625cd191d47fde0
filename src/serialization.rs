pub mod wkt;

pub use wkt::{parse_wkt, to_wkt};
