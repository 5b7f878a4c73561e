use clap::Parser;
use hostcheck_application::ports::LookupHints;
use hostcheck_application::services::SummaryReport;
use hostcheck_application::use_cases::{ResolveHostnameUseCase, ValidateHostnameUseCase};
use hostcheck_domain::{
    CliOverrides, Config, DomainError, FamilyPreference, Hostname, ResolutionSummary,
};
use hostcheck_infrastructure::system::SystemResolver;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;

mod bootstrap;

#[derive(Parser)]
#[command(name = "hostcheck")]
#[command(version)]
#[command(about = "Validate a hostname and list the addresses it resolves to")]
struct Cli {
    /// Hostname to validate and resolve (use `--` before names starting with '-')
    hostname: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Only return IPv4 addresses
    #[arg(short = '4', long = "ipv4", conflicts_with = "ipv6")]
    ipv4: bool,

    /// Only return IPv6 addresses
    #[arg(short = '6', long = "ipv6")]
    ipv6: bool,

    /// Service port passed to the resolver
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Validate only, skip name resolution
    #[arg(long)]
    no_resolve: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn family(&self) -> Option<FamilyPreference> {
        if self.ipv4 {
            Some(FamilyPreference::Ipv4)
        } else if self.ipv6 {
            Some(FamilyPreference::Ipv6)
        } else {
            None
        }
    }

    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            family: self.family(),
            probe_port: self.port,
            log_level: self.log_level.clone(),
        }
    }
}

/// getaddrinfo blocks; keep it off the runtime thread.
async fn resolve_in_background(
    use_case: ResolveHostnameUseCase,
    hostname: Hostname,
) -> anyhow::Result<Result<ResolutionSummary, DomainError>> {
    let result = tokio::task::spawn_blocking(move || use_case.execute(&hostname)).await?;
    Ok(result)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config)?;

    debug!(
        config_path = ?cli.config.clone().or_else(Config::get_config_path),
        family = config.resolver.family.as_str(),
        probe_port = config.resolver.probe_port,
        "Configuration loaded"
    );

    let hostname = match ValidateHostnameUseCase::new().execute(&cli.hostname) {
        Ok(hostname) => hostname,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("Host: {}", cli.hostname);

    if cli.no_resolve {
        return Ok(ExitCode::SUCCESS);
    }

    let use_case = ResolveHostnameUseCase::new(
        Arc::new(SystemResolver::new()),
        LookupHints::from(&config.resolver),
    );

    match resolve_in_background(use_case, hostname).await? {
        Ok(summary) => {
            println!("{}", SummaryReport::new(&summary));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_requires_exactly_one_hostname() {
        assert!(Cli::try_parse_from(["hostcheck"]).is_err());
        assert!(Cli::try_parse_from(["hostcheck", "a.com", "b.com"]).is_err());
        assert!(Cli::try_parse_from(["hostcheck", "example.com"]).is_ok());
    }

    #[test]
    fn test_cli_accepts_empty_hostname() {
        let cli = Cli::try_parse_from(["hostcheck", ""]).unwrap();
        assert_eq!(cli.hostname, "");
    }

    #[test]
    fn test_cli_hyphen_hostname_after_separator() {
        let cli = Cli::try_parse_from(["hostcheck", "--", "-bad.com"]).unwrap();
        assert_eq!(cli.hostname, "-bad.com");
    }

    #[test]
    fn test_cli_family_flags() {
        let cli = Cli::try_parse_from(["hostcheck", "-4", "example.com"]).unwrap();
        assert_eq!(cli.family(), Some(FamilyPreference::Ipv4));

        let cli = Cli::try_parse_from(["hostcheck", "-6", "example.com"]).unwrap();
        assert_eq!(cli.family(), Some(FamilyPreference::Ipv6));

        let cli = Cli::try_parse_from(["hostcheck", "example.com"]).unwrap();
        assert_eq!(cli.family(), None);

        assert!(Cli::try_parse_from(["hostcheck", "-4", "-6", "example.com"]).is_err());
    }

    fn numeric_hints(family: FamilyPreference) -> LookupHints {
        LookupHints {
            family,
            port: 80,
            address_config_only: false,
        }
    }

    #[tokio::test]
    async fn test_resolve_in_background_numeric_host() {
        let use_case = ResolveHostnameUseCase::new(
            Arc::new(SystemResolver::new()),
            numeric_hints(FamilyPreference::Ipv4),
        );
        let hostname = Hostname::parse("127.0.0.1").unwrap();

        let summary = resolve_in_background(use_case, hostname)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(summary.v4_count(), summary.total_count());
        assert_eq!(summary.addresses()[0].text.as_deref(), Some("127.0.0.1"));
    }

    #[tokio::test]
    async fn test_resolve_in_background_reports_facility_error() {
        let use_case = ResolveHostnameUseCase::new(
            Arc::new(SystemResolver::new()),
            numeric_hints(FamilyPreference::Ipv6),
        );
        let hostname = Hostname::parse("127.0.0.1").unwrap();

        let result = resolve_in_background(use_case, hostname).await.unwrap();

        assert!(matches!(result, Err(DomainError::ResolutionFailed(_))));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "hostcheck",
            "--port",
            "443",
            "--log-level",
            "debug",
            "--no-resolve",
            "example.com",
        ])
        .unwrap();

        let overrides = cli.overrides();
        assert_eq!(overrides.probe_port, Some(443));
        assert_eq!(overrides.log_level.as_deref(), Some("debug"));
        assert!(overrides.family.is_none());
        assert!(cli.no_resolve);
    }
}
