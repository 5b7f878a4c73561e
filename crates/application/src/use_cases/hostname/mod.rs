pub mod resolve_hostname;
pub mod validate_hostname;

pub use resolve_hostname::ResolveHostnameUseCase;
pub use validate_hostname::ValidateHostnameUseCase;
