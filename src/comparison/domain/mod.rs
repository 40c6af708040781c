pub mod appliance;
pub mod catalog;
pub mod classification;
pub mod effective_appliance;
pub mod field;
pub mod override_record;
pub mod vendor;
pub mod view_state;

pub use appliance::Appliance;
pub use catalog::Catalog;
pub use classification::{FormFactor, Tier};
pub use effective_appliance::EffectiveAppliance;
pub use field::{Field, FieldValue, Metric, MetricKind};
pub use override_record::OverrideRecord;
pub use vendor::{MethodologyNote, Vendor, VendorKey, VendorTable};
pub use view_state::{FilterState, SortDirection, SortState};
