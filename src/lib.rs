pub mod algorithms;
pub mod batch_simulation;
pub mod config;
pub mod engine;
pub mod environment;
pub mod error;
pub mod grid;
pub mod map_io;
pub mod result;
pub mod statistics;
pub mod visited;

pub use algorithms::Strategy;
pub use engine::{calc, PathfindingEngine};
pub use error::{GridSearchError, MapError};
pub use grid::{Cell, Grid, Position};
pub use result::{SearchResult, NO_PATH};
