//! License records attached to leaf nodes.

use serde::{Deserialize, Serialize};

/// Known license identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicenseKind {
    #[serde(rename = "CC BY")]
    CcBy,
    #[serde(rename = "CC BY-SA")]
    CcBySa,
    #[serde(rename = "CC BY-ND")]
    CcByNd,
    #[serde(rename = "CC BY-NC")]
    CcByNc,
    #[serde(rename = "CC BY-NC-SA")]
    CcByNcSa,
    #[serde(rename = "CC BY-NC-ND")]
    CcByNcNd,
    #[serde(rename = "All Rights Reserved")]
    AllRightsReserved,
    #[serde(rename = "Public Domain")]
    PublicDomain,
    #[serde(rename = "Special Permissions")]
    SpecialPermissions,
}

impl LicenseKind {
    pub const ALL: [LicenseKind; 9] = [
        LicenseKind::CcBy,
        LicenseKind::CcBySa,
        LicenseKind::CcByNd,
        LicenseKind::CcByNc,
        LicenseKind::CcByNcSa,
        LicenseKind::CcByNcNd,
        LicenseKind::AllRightsReserved,
        LicenseKind::PublicDomain,
        LicenseKind::SpecialPermissions,
    ];

    /// Canonical identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseKind::CcBy => "CC BY",
            LicenseKind::CcBySa => "CC BY-SA",
            LicenseKind::CcByNd => "CC BY-ND",
            LicenseKind::CcByNc => "CC BY-NC",
            LicenseKind::CcByNcSa => "CC BY-NC-SA",
            LicenseKind::CcByNcNd => "CC BY-NC-ND",
            LicenseKind::AllRightsReserved => "All Rights Reserved",
            LicenseKind::PublicDomain => "Public Domain",
            LicenseKind::SpecialPermissions => "Special Permissions",
        }
    }

    /// Everything except public domain names a holder
    pub fn requires_copyright_holder(&self) -> bool {
        !matches!(self, LicenseKind::PublicDomain)
    }
}

impl std::fmt::Display for LicenseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved license
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub kind: LicenseKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright_holder: Option<String>,
}

impl License {
    pub fn new(kind: LicenseKind) -> Self {
        Self {
            kind,
            description: None,
            copyright_holder: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_copyright_holder(mut self, holder: impl Into<String>) -> Self {
        self.copyright_holder = Some(holder.into());
        self
    }
}
