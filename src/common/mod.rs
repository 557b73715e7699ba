pub mod error;
pub mod executor;
pub mod geometry;

pub use error::*;
pub use executor::*;
pub use geometry::*;
