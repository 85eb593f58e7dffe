pub mod manifest_service;
pub mod scanning;

pub use manifest_service::ManifestService;
pub use scanning::ScanningService;
