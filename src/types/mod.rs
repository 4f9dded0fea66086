//! Data types for decoded sheets and extracted layouts.

mod cell;
mod location;
mod sheet;

pub use cell::*;
pub use location::*;
pub use sheet::*;
