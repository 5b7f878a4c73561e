pub mod getaddrinfo_resolver;

pub use getaddrinfo_resolver::SystemResolver;
