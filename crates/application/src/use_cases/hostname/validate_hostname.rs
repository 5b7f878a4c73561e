use hostcheck_domain::{DomainError, Hostname};
use tracing::debug;

pub struct ValidateHostnameUseCase;

impl ValidateHostnameUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, input: &str) -> Result<Hostname, DomainError> {
        let hostname = Hostname::parse(input).map_err(|reason| {
            debug!(
                input_len = input.len(),
                reason = reason.as_str(),
                "Hostname rejected"
            );
            DomainError::from(reason)
        })?;

        debug!(hostname = %hostname, "Hostname accepted");
        Ok(hostname)
    }
}

impl Default for ValidateHostnameUseCase {
    fn default() -> Self {
        Self::new()
    }
}
