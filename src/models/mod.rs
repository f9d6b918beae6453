pub mod car;
pub mod position;

pub use car::Car;
pub use position::{CarPosition, PositionSample, ResolvedPosition};
