use fw_compare::prelude::*;

/// Mock CatalogReader that serves an in-memory catalog or a fixed failure
pub struct MockCatalogReader {
    catalog: Option<Catalog>,
}

impl MockCatalogReader {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Some(catalog),
        }
    }

    #[allow(dead_code)]
    pub fn failing() -> Self {
        Self { catalog: None }
    }

    /// Two vendors, six appliances, with unpublished values and a tie
    pub fn sample_catalog() -> Catalog {
        let mut sophos = Vendor::new("sophos", "Sophos", "#0073CF", "XGS");
        sophos.methodology = Some(MethodologyNote {
            title: "Sophos XGS".to_string(),
            text: "FW Throughput: HTTP traffic, 512 KB response size.".to_string(),
        });
        let fortinet = Vendor::new("fortinet", "Fortinet", "#EE3124", "FG");

        Catalog::new(
            VendorTable::new(vec![sophos, fortinet]),
            vec![
                Appliance::new("xgs-88", "sophos", "XGS 88", Tier::Soho, FormFactor::Desktop)
                    .with_metric(Metric::FwThroughput, Some(9000.0))
                    .with_metric(Metric::MaxSessions, Some(1_600_000.0))
                    .with_ports("5x 2.5GE RJ45")
                    .with_capabilities(true, false, false),
                Appliance::new("xgs-108", "sophos", "XGS 108", Tier::Soho, FormFactor::Desktop)
                    .with_metric(Metric::FwThroughput, Some(12500.0))
                    .with_metric(Metric::MaxSessions, Some(4_190_000.0))
                    .with_ports("9x 2.5GE RJ45")
                    .with_capabilities(true, false, false),
                Appliance::new("xgs-2300", "sophos", "XGS 2300", Tier::Midmarket, FormFactor::OneU)
                    .with_metric(Metric::FwThroughput, Some(30000.0))
                    .with_capabilities(true, true, true),
                Appliance::new("fg-90g", "fortinet", "FortiGate 90G", Tier::Smb, FormFactor::Desktop)
                    .with_metric(Metric::FwThroughput, Some(28000.0)),
                Appliance::new("fg-120g", "fortinet", "FortiGate 120G", Tier::Midmarket, FormFactor::OneU)
                    .with_metric(Metric::FwThroughput, Some(28000.0)),
                Appliance::new("fg-3000f", "fortinet", "FortiGate 3000F", Tier::Datacenter, FormFactor::TwoU),
            ],
        )
        .unwrap()
        .with_caveat(Some("Vendor figures use different methodologies.".to_string()))
    }
}

impl CatalogReader for MockCatalogReader {
    fn read_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(catalog) => Ok(catalog.clone()),
            None => Err(ComparatorError::CatalogParseError {
                source_name: self.source_name(),
                details: "mock failure".to_string(),
            }
            .into()),
        }
    }

    fn source_name(&self) -> String {
        "mock catalog".to_string()
    }
}
