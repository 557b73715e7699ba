pub mod follow;
pub mod logger;
pub mod settings;

pub use follow::*;
pub use logger::*;
pub use settings::*;
