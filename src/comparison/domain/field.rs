//! Closed set of comparison fields.
//!
//! Every column that can be displayed, sorted on or exported is a `Field`;
//! the numeric, formatter-bearing subset that may carry a custom benchmark
//! is a `Metric`.

use super::classification::{FormFactor, Tier};
use super::vendor::VendorKey;
use crate::shared::error::ComparatorError;
use std::str::FromStr;

/// A comparison column, in fixed display/export order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Vendor,
    Model,
    Tier,
    FormFactor,
    FwThroughput,
    FwImix,
    IpsThroughput,
    TlsInspection,
    ThreatProtection,
    IpsecVpn,
    Ngfw,
    MaxSessions,
    Ports,
    ModuleOptions,
    Ha,
    RedundantPower,
    Rfc2544,
}

impl Field {
    pub const ALL: [Field; 17] = [
        Field::Vendor,
        Field::Model,
        Field::Tier,
        Field::FormFactor,
        Field::FwThroughput,
        Field::FwImix,
        Field::IpsThroughput,
        Field::TlsInspection,
        Field::ThreatProtection,
        Field::IpsecVpn,
        Field::Ngfw,
        Field::MaxSessions,
        Field::Ports,
        Field::ModuleOptions,
        Field::Ha,
        Field::RedundantPower,
        Field::Rfc2544,
    ];

    /// Column key used for sort keys and override field names
    pub fn key(self) -> &'static str {
        match self {
            Field::Vendor => "vendor",
            Field::Model => "model",
            Field::Tier => "tier",
            Field::FormFactor => "formFactor",
            Field::FwThroughput => "fwThroughput",
            Field::FwImix => "fwIMIX",
            Field::IpsThroughput => "ipsThroughput",
            Field::TlsInspection => "tlsInspection",
            Field::ThreatProtection => "threatProtection",
            Field::IpsecVpn => "ipsecVPN",
            Field::Ngfw => "ngfw",
            Field::MaxSessions => "maxSessions",
            Field::Ports => "ports",
            Field::ModuleOptions => "moduleOptions",
            Field::Ha => "ha",
            Field::RedundantPower => "redundantPower",
            Field::Rfc2544 => "rfc2544",
        }
    }

    /// Column header shared by the display table and the CSV export
    pub fn label(self) -> &'static str {
        match self {
            Field::Vendor => "Vendor",
            Field::Model => "Model",
            Field::Tier => "Tier",
            Field::FormFactor => "Form",
            Field::FwThroughput => "FW Throughput",
            Field::FwImix => "FW IMIX",
            Field::IpsThroughput => "IPS",
            Field::TlsInspection => "TLS Inspect",
            Field::ThreatProtection => "Threat Protect",
            Field::IpsecVpn => "IPSec VPN",
            Field::Ngfw => "NGFW",
            Field::MaxSessions => "Max Sessions",
            Field::Ports => "Built-in Ports",
            Field::ModuleOptions => "Modules",
            Field::Ha => "HA",
            Field::RedundantPower => "Redund. PSU",
            Field::Rfc2544 => "RFC 2544",
        }
    }

    /// Returns the metric behind this column, if it is overridable
    pub fn metric(self) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.field() == self)
    }
}

impl FromStr for Field {
    type Err = ComparatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Field::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| ComparatorError::UnknownSortKey { key: s.to_string() })
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// How a metric is scaled for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Megabits per second
    Throughput,
    /// Concurrent session count
    Sessions,
}

/// Numeric field that accepts a custom benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    FwThroughput,
    FwImix,
    IpsThroughput,
    TlsInspection,
    ThreatProtection,
    IpsecVpn,
    Ngfw,
    MaxSessions,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::FwThroughput,
        Metric::FwImix,
        Metric::IpsThroughput,
        Metric::TlsInspection,
        Metric::ThreatProtection,
        Metric::IpsecVpn,
        Metric::Ngfw,
        Metric::MaxSessions,
    ];

    pub fn field(self) -> Field {
        match self {
            Metric::FwThroughput => Field::FwThroughput,
            Metric::FwImix => Field::FwImix,
            Metric::IpsThroughput => Field::IpsThroughput,
            Metric::TlsInspection => Field::TlsInspection,
            Metric::ThreatProtection => Field::ThreatProtection,
            Metric::IpsecVpn => Field::IpsecVpn,
            Metric::Ngfw => Field::Ngfw,
            Metric::MaxSessions => Field::MaxSessions,
        }
    }

    pub fn key(self) -> &'static str {
        self.field().key()
    }

    pub fn label(self) -> &'static str {
        self.field().label()
    }

    pub fn kind(self) -> MetricKind {
        match self {
            Metric::MaxSessions => MetricKind::Sessions,
            _ => MetricKind::Throughput,
        }
    }
}

impl FromStr for Metric {
    type Err = ComparatorError;

    /// Parses an override field name; anything that is not a metric key is
    /// an `InvalidField`, including real columns such as `vendor`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Field>()
            .ok()
            .and_then(Field::metric)
            .ok_or_else(|| ComparatorError::InvalidField {
                field: s.to_string(),
            })
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Present value of a field; absence is modelled by `Option<FieldValue>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Flag(bool),
    Text(&'a str),
    Vendor(&'a VendorKey),
    Tier(Tier),
    FormFactor(FormFactor),
}

impl<'a> FieldValue<'a> {
    /// String form used for lexicographic ordering; references sort by key
    pub fn sort_text(&self) -> Option<&'a str> {
        match *self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Vendor(key) => Some(key.as_str()),
            FieldValue::Tier(tier) => Some(tier.key()),
            FieldValue::FormFactor(form_factor) => Some(form_factor.key()),
            FieldValue::Number(_) | FieldValue::Flag(_) => None,
        }
    }
}
