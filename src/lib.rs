pub mod area_source;
pub mod config;
pub mod constants;
pub mod coordinates;
pub mod error;
pub mod output;
pub mod projection;
pub mod writer;

pub use area_source::AreaSource;
pub use config::{EmissionUnits, Hemisphere, WriterConfig};
pub use coordinates::{CoordinateInput, NormalizedCoordinates, normalize};
pub use error::{AreaSourceError, Result};
pub use projection::{Projector, UtmProjector};
pub use writer::{AreaSourceWriter, write_area_source};
