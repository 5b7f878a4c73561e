use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Service port passed to the facility. Only used for address discovery.
    #[serde(default = "default_probe_port")]
    pub probe_port: u16,

    #[serde(default)]
    pub family: FamilyPreference,

    /// Skip families the local network stack has no address configured for.
    #[serde(default = "default_true")]
    pub address_config_only: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            probe_port: default_probe_port(),
            family: FamilyPreference::default(),
            address_config_only: default_true(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FamilyPreference {
    #[default]
    Any,

    Ipv4,

    Ipv6,
}

impl FamilyPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
        }
    }
}

fn default_probe_port() -> u16 {
    80
}

fn default_true() -> bool {
    true
}
