pub mod buffered_logger;
pub mod fanout_logger;
pub mod file_logger;
pub mod null_logger;
pub mod simulated_world;
pub mod tracing_logger;

pub use buffered_logger::*;
pub use fanout_logger::*;
pub use file_logger::*;
pub use null_logger::*;
pub use simulated_world::*;
pub use tracing_logger::*;
