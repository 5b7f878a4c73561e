//! Hostcheck Infrastructure Layer
#[cfg(unix)]
pub mod system;
