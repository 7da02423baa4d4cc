pub mod marker_query;

pub use marker_query::{MarkerQuery, MarkerQueryError};
