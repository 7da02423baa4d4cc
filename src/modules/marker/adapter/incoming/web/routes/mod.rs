mod list_markers;

pub use list_markers::*;
