use compact_str::{format_compact, CompactString};
use smallvec::SmallVec;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::hostname::Hostname;

/// Raw address bytes as handed over by the resolution facility.
pub type AddressBytes = SmallVec<[u8; 16]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ipv4 => "IPv4",
            Self::Ipv6 => "IPv6",
        }
    }

    pub fn address_len(&self) -> usize {
        match self {
            Self::Ipv4 => 4,
            Self::Ipv6 => 16,
        }
    }
}

/// Address family as reported by the facility, before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawFamily {
    Inet,
    Inet6,
    Other(i32),
}

impl RawFamily {
    pub fn classify(&self) -> Option<AddressFamily> {
        match self {
            Self::Inet => Some(AddressFamily::Ipv4),
            Self::Inet6 => Some(AddressFamily::Ipv6),
            Self::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAddress {
    pub family: RawFamily,
    pub bytes: AddressBytes,
}

impl RawAddress {
    pub fn new(family: RawFamily, bytes: &[u8]) -> Self {
        Self {
            family,
            bytes: SmallVec::from_slice(bytes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddress {
    pub family: AddressFamily,
    /// `None` when the raw bytes could not be rendered.
    pub text: Option<CompactString>,
    pub raw: AddressBytes,
}

impl ResolvedAddress {
    pub fn new(family: AddressFamily, raw: AddressBytes) -> Self {
        let text = render(family, &raw);
        Self { family, text, raw }
    }

    pub fn is_printable(&self) -> bool {
        self.text.is_some()
    }

    pub fn text_or_invalid(&self) -> &str {
        self.text.as_deref().unwrap_or("<invalid>")
    }
}

fn render(family: AddressFamily, raw: &[u8]) -> Option<CompactString> {
    match family {
        AddressFamily::Ipv4 => {
            let octets: [u8; 4] = raw.try_into().ok()?;
            Some(format_compact!("{}", Ipv4Addr::from(octets)))
        }
        AddressFamily::Ipv6 => {
            let octets: [u8; 16] = raw.try_into().ok()?;
            Some(format_compact!("{}", Ipv6Addr::from(octets)))
        }
    }
}

/// Outcome of one resolution run. Address order is the facility's order.
#[derive(Debug, Clone)]
pub struct ResolutionSummary {
    hostname: Hostname,
    addresses: Vec<ResolvedAddress>,
    v4_count: usize,
    v6_count: usize,
}

impl ResolutionSummary {
    pub fn from_addresses(hostname: Hostname, addresses: Vec<ResolvedAddress>) -> Self {
        let v4_count = addresses
            .iter()
            .filter(|a| a.family == AddressFamily::Ipv4)
            .count();
        let v6_count = addresses.len() - v4_count;
        Self {
            hostname,
            addresses,
            v4_count,
            v6_count,
        }
    }

    pub fn hostname(&self) -> &Hostname {
        &self.hostname
    }

    pub fn addresses(&self) -> &[ResolvedAddress] {
        &self.addresses
    }

    pub fn v4_count(&self) -> usize {
        self.v4_count
    }

    pub fn v6_count(&self) -> usize {
        self.v6_count
    }

    pub fn total_count(&self) -> usize {
        self.v4_count + self.v6_count
    }

    /// False when no IPv4 or IPv6 entry came back at all. Entries that
    /// could not be rendered still count.
    pub fn has_addresses(&self) -> bool {
        self.total_count() > 0
    }
}
