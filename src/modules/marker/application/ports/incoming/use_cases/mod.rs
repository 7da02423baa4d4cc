mod get_markers_use_case;

pub use get_markers_use_case::{GetMarkersError, GetMarkersUseCase};
