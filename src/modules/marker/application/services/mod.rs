mod get_markers_service;

pub use get_markers_service::GetMarkersService;
