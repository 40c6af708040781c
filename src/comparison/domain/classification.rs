use crate::shared::error::ComparatorError;
use serde::Deserialize;
use std::str::FromStr;

/// Coarse market tier of an appliance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Soho,
    Smb,
    Midmarket,
    Enterprise,
    Datacenter,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Soho,
        Tier::Smb,
        Tier::Midmarket,
        Tier::Enterprise,
        Tier::Datacenter,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Tier::Soho => "soho",
            Tier::Smb => "smb",
            Tier::Midmarket => "midmarket",
            Tier::Enterprise => "enterprise",
            Tier::Datacenter => "datacenter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Soho => "SOHO / Branch",
            Tier::Smb => "SMB",
            Tier::Midmarket => "Mid-Market",
            Tier::Enterprise => "Enterprise",
            Tier::Datacenter => "Data Center",
        }
    }
}

impl FromStr for Tier {
    type Err = ComparatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ComparatorError::UnknownTier { key: s.to_string() })
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Physical form factor of an appliance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum FormFactor {
    #[serde(rename = "desktop")]
    Desktop,
    #[serde(rename = "1u")]
    OneU,
    #[serde(rename = "2u")]
    TwoU,
}

impl FormFactor {
    pub const ALL: [FormFactor; 3] = [FormFactor::Desktop, FormFactor::OneU, FormFactor::TwoU];

    pub fn key(self) -> &'static str {
        match self {
            FormFactor::Desktop => "desktop",
            FormFactor::OneU => "1u",
            FormFactor::TwoU => "2u",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormFactor::Desktop => "Desktop",
            FormFactor::OneU => "1U Rack",
            FormFactor::TwoU => "2U Rack",
        }
    }
}

impl FromStr for FormFactor {
    type Err = ComparatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormFactor::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ComparatorError::UnknownFormFactor { key: s.to_string() })
    }
}

impl std::fmt::Display for FormFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
