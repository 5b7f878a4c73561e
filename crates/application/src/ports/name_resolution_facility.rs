use hostcheck_domain::config::ResolverConfig;
use hostcheck_domain::{DomainError, FamilyPreference, RawAddress};

/// Entries returned by a facility, in the facility's order.
///
/// Dropping the list releases whatever the facility allocated for it, so
/// consumers may stop iterating at any point.
pub type AddressList = Box<dyn Iterator<Item = RawAddress>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupHints {
    pub family: FamilyPreference,
    pub port: u16,
    pub address_config_only: bool,
}

impl Default for LookupHints {
    fn default() -> Self {
        Self::from(&ResolverConfig::default())
    }
}

impl From<&ResolverConfig> for LookupHints {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            family: config.family,
            port: config.probe_port,
            address_config_only: config.address_config_only,
        }
    }
}

/// Blocking hostname to address lookup provided by the operating environment.
pub trait NameResolutionFacility: Send + Sync {
    /// Fails with [`DomainError::ResolutionFailed`] carrying the facility's
    /// own diagnostic text.
    fn lookup(&self, host: &str, hints: &LookupHints) -> Result<AddressList, DomainError>;
}
