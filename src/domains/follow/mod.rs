pub mod controller;
pub mod pipeline;
pub mod ports;
pub mod resolvers;
pub mod types;

pub use controller::*;
pub use ports::*;
pub use resolvers::*;
pub use types::*;
