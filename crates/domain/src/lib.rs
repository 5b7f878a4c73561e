//! Hostcheck Domain Layer
pub mod address;
pub mod config;
pub mod errors;
pub mod hostname;

pub use address::{
    AddressBytes, AddressFamily, RawAddress, RawFamily, ResolutionSummary, ResolvedAddress,
};
pub use config::{CliOverrides, Config, ConfigError, FamilyPreference};
pub use errors::DomainError;
pub use hostname::{validate, Hostname, InvalidReason, ValidationResult};
