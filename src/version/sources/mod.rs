//! Source implementations for fetching published versions

pub mod playstation;

pub use playstation::PlaystationSource;
