//! Market data aggregate: quotes, overview snapshot, trending lists and table rows.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
