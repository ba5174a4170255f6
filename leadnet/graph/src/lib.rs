//! Service dependency graph and root-to-sink path enumeration.

pub mod enumerate;
pub mod error;
pub mod graph;
pub mod path;

pub use enumerate::enumerate_paths;
pub use error::{GraphError, Result};
pub use graph::{ServiceGraph, ServiceNode};
pub use path::Path;
