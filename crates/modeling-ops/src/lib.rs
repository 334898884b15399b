pub mod extrude;
pub mod fillet;
pub mod kernel_ext;
pub mod select;
pub mod types;

pub use extrude::execute_extrude;
pub use fillet::{execute_fillet, try_fillet, FilletAttempt};
pub use kernel_ext::KernelBundle;
pub use select::{group_edges_by_axis, top_edges, EdgeGroup};
pub use types::*;
