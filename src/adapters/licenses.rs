//! License resolution.

use thiserror::Error;

use crate::domain::{License, LicenseKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LicenseError {
    #[error("Missing license identifier")]
    Missing,

    #[error("Unknown license identifier '{0}'")]
    Unknown(String),
}

/// Resolves license identifiers supplied by the provider
pub trait LicenseRegistry: Send + Sync {
    fn resolve(
        &self,
        name: Option<&str>,
        description: Option<&str>,
        copyright_holder: Option<&str>,
    ) -> Result<License, LicenseError>;
}

/// The platform's fixed license table, matched case-insensitively
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardLicenses;

impl StandardLicenses {
    pub fn lookup(name: &str) -> Option<LicenseKind> {
        let name = name.trim();
        LicenseKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
    }
}

impl LicenseRegistry for StandardLicenses {
    fn resolve(
        &self,
        name: Option<&str>,
        description: Option<&str>,
        copyright_holder: Option<&str>,
    ) -> Result<License, LicenseError> {
        let name = name.filter(|n| !n.trim().is_empty()).ok_or(LicenseError::Missing)?;
        let kind = Self::lookup(name).ok_or_else(|| LicenseError::Unknown(name.to_string()))?;

        let mut license = License::new(kind);
        if let Some(description) = description {
            license = license.with_description(description);
        }
        if let Some(holder) = copyright_holder {
            license = license.with_copyright_holder(holder);
        }
        Ok(license)
    }
}
