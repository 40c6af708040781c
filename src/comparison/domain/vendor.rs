use serde::Deserialize;

/// NewType wrapper for a vendor reference key (e.g. "sophos")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct VendorKey(String);

impl VendorKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VendorKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl std::fmt::Display for VendorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Vendor-published test methodology, shown alongside the comparison
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MethodologyNote {
    pub title: String,
    pub text: String,
}

/// Vendor reference entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Vendor {
    pub key: VendorKey,
    pub name: String,
    /// Display color as `#RRGGBB`
    pub color: String,
    pub short: String,
    #[serde(default)]
    pub methodology: Option<MethodologyNote>,
}

impl Vendor {
    pub fn new(key: &str, name: &str, color: &str, short: &str) -> Self {
        Self {
            key: VendorKey::new(key),
            name: name.to_string(),
            color: color.to_string(),
            short: short.to_string(),
            methodology: None,
        }
    }

    /// Parses the display color into RGB components.
    /// Returns None when the color is not a `#RRGGBB` string.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// Ordered vendor reference table, fixed at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorTable {
    vendors: Vec<Vendor>,
}

impl VendorTable {
    pub fn new(vendors: Vec<Vendor>) -> Self {
        Self { vendors }
    }

    pub fn get(&self, key: &VendorKey) -> Option<&Vendor> {
        self.vendors.iter().find(|v| &v.key == key)
    }

    /// Looks a vendor up by key or display name, ignoring case.
    pub fn resolve(&self, key_or_name: &str) -> Option<&Vendor> {
        self.vendors.iter().find(|v| {
            v.key.as_str().eq_ignore_ascii_case(key_or_name)
                || v.name.eq_ignore_ascii_case(key_or_name)
        })
    }

    pub fn display_name(&self, key: &VendorKey) -> Option<&str> {
        self.get(key).map(|v| v.name.as_str())
    }

    pub fn contains(&self, key: &VendorKey) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &VendorKey> {
        self.vendors.iter().map(|v| &v.key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vendor> {
        self.vendors.iter()
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> VendorTable {
        VendorTable::new(vec![
            Vendor::new("sophos", "Sophos", "#0073CF", "XGS"),
            Vendor::new("paloalto", "Palo Alto", "#FA582D", "PA"),
        ])
    }

    #[test]
    fn test_vendor_rgb() {
        let vendor = Vendor::new("sophos", "Sophos", "#0073CF", "XGS");
        assert_eq!(vendor.rgb(), Some((0x00, 0x73, 0xCF)));
    }

    #[test]
    fn test_vendor_rgb_invalid_color() {
        assert_eq!(Vendor::new("x", "X", "blue", "X").rgb(), None);
        assert_eq!(Vendor::new("x", "X", "#12345", "X").rgb(), None);
        assert_eq!(Vendor::new("x", "X", "#GG0000", "X").rgb(), None);
    }

    #[test]
    fn test_display_name_lookup() {
        let table = sample_table();
        assert_eq!(table.display_name(&VendorKey::from("paloalto")), Some("Palo Alto"));
        assert_eq!(table.display_name(&VendorKey::from("cisco")), None);
    }

    #[test]
    fn test_resolve_by_key_or_name() {
        let table = sample_table();
        assert_eq!(table.resolve("SOPHOS").unwrap().key.as_str(), "sophos");
        assert_eq!(table.resolve("palo alto").unwrap().key.as_str(), "paloalto");
        assert!(table.resolve("fortinet").is_none());
    }

    #[test]
    fn test_keys_preserve_order() {
        let table = sample_table();
        let keys: Vec<&str> = table.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["sophos", "paloalto"]);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_deserialize_vendor_entry() {
        let json = r##"{
            "key": "fortinet",
            "name": "Fortinet",
            "color": "#EE3124",
            "short": "FG",
            "methodology": { "title": "FortiGate datasheet", "text": "1518-byte UDP" }
        }"##;
        let vendor: Vendor = serde_json::from_str(json).unwrap();
        assert_eq!(vendor.key, VendorKey::from("fortinet"));
        assert_eq!(vendor.methodology.unwrap().title, "FortiGate datasheet");

        let bare: Vendor =
            serde_json::from_str(r##"{"key":"x","name":"X","color":"#000000","short":"X"}"##).unwrap();
        assert_eq!(bare.methodology, None);
    }
}
