use hostcheck_domain::{DomainError, Hostname, ResolutionSummary, ResolvedAddress};
use std::sync::Arc;
use tracing::{debug, info};

use crate::ports::{LookupHints, NameResolutionFacility};

pub struct ResolveHostnameUseCase {
    facility: Arc<dyn NameResolutionFacility>,
    hints: LookupHints,
}

impl ResolveHostnameUseCase {
    pub fn new(facility: Arc<dyn NameResolutionFacility>, hints: LookupHints) -> Self {
        Self { facility, hints }
    }

    /// Blocks until the facility answers.
    pub fn execute(&self, hostname: &Hostname) -> Result<ResolutionSummary, DomainError> {
        debug!(
            hostname = %hostname,
            family = self.hints.family.as_str(),
            port = self.hints.port,
            address_config_only = self.hints.address_config_only,
            "Resolving hostname"
        );

        let entries = self
            .facility
            .lookup(hostname.as_str(), &self.hints)
            .inspect_err(|e| debug!(hostname = %hostname, error = %e, "Resolution failed"))?;

        let mut addresses = Vec::new();
        let mut skipped = 0usize;

        for raw in entries {
            let Some(family) = raw.family.classify() else {
                skipped += 1;
                debug!(family = ?raw.family, "Skipping entry of unsupported family");
                continue;
            };

            let address = ResolvedAddress::new(family, raw.bytes);
            if !address.is_printable() {
                debug!(
                    family = family.label(),
                    len = address.raw.len(),
                    "Unprintable address in resolution result"
                );
            }
            addresses.push(address);
        }

        let summary = ResolutionSummary::from_addresses(hostname.clone(), addresses);

        info!(
            hostname = %hostname,
            total = summary.total_count(),
            v4 = summary.v4_count(),
            v6 = summary.v6_count(),
            skipped,
            "Hostname resolved"
        );

        Ok(summary)
    }
}
