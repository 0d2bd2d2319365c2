//! src/identity.rs
//!
//! Pre-signup hook for the external identity provider: an email may only
//! register when its domain is on the allow-list. The service itself never
//! calls this during contact intake.

use crate::configurations::IdentitySettings;

#[derive(Debug, thiserror::Error)]
#[error("Invalid email domain: '{domain}' is not allowed to sign up.")]
pub struct DomainRejected {
    pub domain: String,
}

pub struct DomainAllowList {
    domains: Vec<String>,
}

impl From<IdentitySettings> for DomainAllowList {
    fn from(settings: IdentitySettings) -> Self {
        Self {
            domains: settings.allowed_domains,
        }
    }
}

impl DomainAllowList {
    pub fn new(domains: Vec<String>) -> Self {
        Self { domains }
    }

    pub fn is_allowed_domain(&self, email: &str) -> bool {
        match email.rsplit_once('@') {
            Some((_, domain)) => self.domains.iter().any(|allowed| allowed == domain),
            None => false,
        }
    }

    /// Typed verdict for the sign-up workflow; a rejection aborts it.
    pub fn precheck_signup(&self, email: &str) -> Result<(), DomainRejected> {
        if self.is_allowed_domain(email) {
            Ok(())
        } else {
            let domain = email.rsplit_once('@').map(|(_, d)| d).unwrap_or("").to_string();
            Err(DomainRejected { domain })
        }
    }
}
