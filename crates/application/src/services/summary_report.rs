use hostcheck_domain::ResolutionSummary;
use std::fmt;

/// Human-readable rendering of a [`ResolutionSummary`], one line per address.
pub struct SummaryReport<'a> {
    summary: &'a ResolutionSummary,
}

impl<'a> SummaryReport<'a> {
    pub fn new(summary: &'a ResolutionSummary) -> Self {
        Self { summary }
    }
}

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;

        writeln!(f, "Resolved addresses for {}:", summary.hostname())?;
        for address in summary.addresses() {
            writeln!(
                f,
                "{}: {}",
                address.family.label(),
                address.text_or_invalid()
            )?;
        }

        if !summary.has_addresses() {
            writeln!(f, "no printable addresses for AF_INET/AF_INET6")?;
        }

        write!(
            f,
            "Resolved {} addresses ({} IPv4, {} IPv6)",
            summary.total_count(),
            summary.v4_count(),
            summary.v6_count()
        )
    }
}
