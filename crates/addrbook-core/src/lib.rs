pub mod address;
pub mod error;
pub mod geo;

// Re-export commonly used types
pub use address::AddressFields;
pub use error::CoreError;
pub use geo::{meters_to_km, Coordinates, SearchRange};
