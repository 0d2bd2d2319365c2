//! src/domain/contact_email.rs

#[derive(Debug)]
pub struct ContactEmail(String);

impl ContactEmail {
    /// Accepts an address with a non-empty local part and a non-empty domain
    /// part separated by `@`; anything else is rejected.
    pub fn parse(s: String) -> Result<ContactEmail, String> {
        match s.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(s))
            }
            _ => Err(format!("'{}' is not a valid contact email.", s)),
        }
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
