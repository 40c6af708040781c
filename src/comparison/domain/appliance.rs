use super::classification::{FormFactor, Tier};
use super::field::{Field, FieldValue, Metric};
use super::vendor::VendorKey;
use serde::Deserialize;

/// Catalog record for one firewall appliance.
///
/// Throughput metrics are in Mbps; `None` means the vendor does not publish
/// the figure, which is distinct from zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Appliance {
    id: String,
    vendor: VendorKey,
    model: String,
    tier: Tier,
    form_factor: FormFactor,
    #[serde(default)]
    gen: Option<String>,
    #[serde(default)]
    fw_throughput: Option<f64>,
    #[serde(default)]
    fw_imix: Option<f64>,
    #[serde(default)]
    ips_throughput: Option<f64>,
    #[serde(default)]
    tls_inspection: Option<f64>,
    #[serde(default)]
    threat_protection: Option<f64>,
    #[serde(default)]
    ipsec_vpn: Option<f64>,
    #[serde(default)]
    ngfw: Option<f64>,
    #[serde(default)]
    max_sessions: Option<f64>,
    #[serde(default)]
    rfc2544: bool,
    #[serde(default)]
    ports: String,
    #[serde(default)]
    expansion_slots: u32,
    #[serde(default)]
    module_options: String,
    #[serde(default)]
    wifi: String,
    #[serde(default)]
    ha: bool,
    #[serde(default)]
    redundant_power: bool,
    #[serde(default)]
    form_factor_detail: String,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    datasheet: String,
}

impl Appliance {
    /// Creates an appliance with every metric unpublished and every
    /// capability off; use the `with_*` methods to fill it in.
    pub fn new(id: &str, vendor: &str, model: &str, tier: Tier, form_factor: FormFactor) -> Self {
        Self {
            id: id.to_string(),
            vendor: VendorKey::new(vendor),
            model: model.to_string(),
            tier,
            form_factor,
            gen: None,
            fw_throughput: None,
            fw_imix: None,
            ips_throughput: None,
            tls_inspection: None,
            threat_protection: None,
            ipsec_vpn: None,
            ngfw: None,
            max_sessions: None,
            rfc2544: false,
            ports: String::new(),
            expansion_slots: 0,
            module_options: String::new(),
            wifi: String::new(),
            ha: false,
            redundant_power: false,
            form_factor_detail: String::new(),
            notes: String::new(),
            datasheet: String::new(),
        }
    }

    pub fn with_metric(mut self, metric: Metric, value: Option<f64>) -> Self {
        *self.metric_slot(metric) = value;
        self
    }

    pub fn with_ports(mut self, ports: &str) -> Self {
        self.ports = ports.to_string();
        self
    }

    pub fn with_module_options(mut self, module_options: &str) -> Self {
        self.module_options = module_options.to_string();
        self
    }

    pub fn with_capabilities(mut self, ha: bool, redundant_power: bool, rfc2544: bool) -> Self {
        self.ha = ha;
        self.redundant_power = redundant_power;
        self.rfc2544 = rfc2544;
        self
    }

    pub fn with_gen(mut self, gen: &str) -> Self {
        self.gen = Some(gen.to_string());
        self
    }

    pub fn with_notes(mut self, notes: &str, datasheet: &str) -> Self {
        self.notes = notes.to_string();
        self.datasheet = datasheet.to_string();
        self
    }

    fn metric_slot(&mut self, metric: Metric) -> &mut Option<f64> {
        match metric {
            Metric::FwThroughput => &mut self.fw_throughput,
            Metric::FwImix => &mut self.fw_imix,
            Metric::IpsThroughput => &mut self.ips_throughput,
            Metric::TlsInspection => &mut self.tls_inspection,
            Metric::ThreatProtection => &mut self.threat_protection,
            Metric::IpsecVpn => &mut self.ipsec_vpn,
            Metric::Ngfw => &mut self.ngfw,
            Metric::MaxSessions => &mut self.max_sessions,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn vendor(&self) -> &VendorKey {
        &self.vendor
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn form_factor(&self) -> FormFactor {
        self.form_factor
    }

    pub fn gen(&self) -> Option<&str> {
        self.gen.as_deref()
    }

    pub fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::FwThroughput => self.fw_throughput,
            Metric::FwImix => self.fw_imix,
            Metric::IpsThroughput => self.ips_throughput,
            Metric::TlsInspection => self.tls_inspection,
            Metric::ThreatProtection => self.threat_protection,
            Metric::IpsecVpn => self.ipsec_vpn,
            Metric::Ngfw => self.ngfw,
            Metric::MaxSessions => self.max_sessions,
        }
    }

    pub fn ports(&self) -> &str {
        &self.ports
    }

    pub fn expansion_slots(&self) -> u32 {
        self.expansion_slots
    }

    pub fn module_options(&self) -> &str {
        &self.module_options
    }

    pub fn wifi(&self) -> &str {
        &self.wifi
    }

    pub fn ha(&self) -> bool {
        self.ha
    }

    pub fn redundant_power(&self) -> bool {
        self.redundant_power
    }

    pub fn rfc2544(&self) -> bool {
        self.rfc2544
    }

    pub fn form_factor_detail(&self) -> &str {
        &self.form_factor_detail
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn datasheet(&self) -> &str {
        &self.datasheet
    }

    /// Catalog value of a field, before any custom benchmark is applied
    pub fn field_value(&self, field: Field) -> Option<FieldValue<'_>> {
        if let Some(metric) = field.metric() {
            return self.metric(metric).map(FieldValue::Number);
        }
        let value = match field {
            Field::Vendor => FieldValue::Vendor(&self.vendor),
            Field::Model => FieldValue::Text(&self.model),
            Field::Tier => FieldValue::Tier(self.tier),
            Field::FormFactor => FieldValue::FormFactor(self.form_factor),
            Field::Ports => FieldValue::Text(&self.ports),
            Field::ModuleOptions => FieldValue::Text(&self.module_options),
            Field::Ha => FieldValue::Flag(self.ha),
            Field::RedundantPower => FieldValue::Flag(self.redundant_power),
            Field::Rfc2544 => FieldValue::Flag(self.rfc2544),
            _ => return None,
        };
        Some(value)
    }
}
