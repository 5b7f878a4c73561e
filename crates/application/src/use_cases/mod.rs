pub mod hostname;

pub use hostname::{ResolveHostnameUseCase, ValidateHostnameUseCase};
