pub mod geometry;
pub mod topo;

pub use geometry::*;
pub use topo::*;
