pub mod parser;
pub mod types;

pub use parser::read_route_file;
pub use types::{Cell, Direction, GRID_SIZE, Position, Route};
