/// Use cases module containing application business logic orchestration
mod compare_appliances;
mod export_comparison;

pub use compare_appliances::CompareAppliancesUseCase;
pub use export_comparison::ExportComparisonUseCase;
