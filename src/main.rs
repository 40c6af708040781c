mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile, CONFIG_FILENAME};
use fw_compare::adapters::outbound::catalog::BuiltinCatalogReader;
use fw_compare::adapters::outbound::console::StderrProgressReporter;
use fw_compare::adapters::outbound::filesystem::FileSystemCatalogReader;
use fw_compare::application::dto::{
    ComparisonRequest, ComparisonResponse, OutputFormat, OverrideEntry,
};
use fw_compare::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use fw_compare::application::use_cases::{CompareAppliancesUseCase, ExportComparisonUseCase};
use fw_compare::comparison::domain::SortDirection;
use fw_compare::ports::outbound::ProgressReporter;
use fw_compare::shared::error::ExitCode;
use fw_compare::shared::Result;
use std::io::IsTerminal;
use std::path::Path;
use std::process;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let reporter = StderrProgressReporter::new();
    let config = load_config(args.config.as_deref(), &reporter)?;
    let format = resolve_format(&args, &config)?;

    let request = build_request(&args, &config, &reporter);

    // Catalog source: --catalog, then config, then the built-in catalog
    let mut response = match args.catalog.clone().or_else(|| config.catalog.clone()) {
        Some(path) => {
            CompareAppliancesUseCase::new(FileSystemCatalogReader::new(path), &reporter).execute(request)?
        }
        None => CompareAppliancesUseCase::new(BuiltinCatalogReader::new(), &reporter).execute(request)?,
    };

    if let Some(id) = &args.notes {
        expand_notes(&mut response, id, &reporter);
    }

    let model = response.read_model();

    reporter.report(FormatterFactory::progress_message(format));
    let use_color = format == OutputFormat::Table
        && args.output.is_none()
        && std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();
    let formatted_output = FormatterFactory::create(format, use_color).format(&model)?;

    PresenterFactory::create(PresenterType::for_output(args.output.clone()))
        .present(&formatted_output)?;
    if let Some(path) = &args.output {
        reporter.report_completion(&format!("✅ Output complete: {}", path.display()));
    }

    if let Some(directory) = &args.export {
        let artifact = ExportComparisonUseCase::new(&reporter).execute(&model);
        let target = directory.join(&artifact.file_name);
        PresenterFactory::create(PresenterType::export_file(directory)).present(&artifact.content)?;
        reporter.report_completion(&format!(
            "✅ Exported {} ({}, {})",
            target.display(),
            artifact.mime_type,
            artifact.encoding
        ));
    }

    Ok(())
}

/// Explicit `--config` must exist; otherwise the working directory is searched
fn load_config(path: Option<&Path>, reporter: &impl ProgressReporter) -> Result<ConfigFile> {
    if let Some(path) = path {
        return load_config_from_path(path);
    }
    match discover_config(Path::new("."))? {
        Some(config) => {
            reporter.report(&format!("📄 Auto-discovered config file: {}", CONFIG_FILENAME));
            Ok(config)
        }
        None => Ok(ConfigFile::default()),
    }
}

fn resolve_format(args: &Args, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }
    match config.format.as_deref() {
        Some(raw) => raw
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!("Invalid config: format: {}", e)),
        None => Ok(OutputFormat::default()),
    }
}

/// Merges CLI flags over config values. Malformed `--override` entries are
/// reported and dropped here; the use case rejects the rest.
fn build_request(args: &Args, config: &ConfigFile, reporter: &impl ProgressReporter) -> ComparisonRequest {
    let pick = |cli: &Vec<String>, file: &Option<Vec<String>>| {
        if cli.is_empty() {
            file.clone()
        } else {
            Some(cli.clone())
        }
    };

    let sort_config = config.sort.as_ref();
    let direction = if args.ascending {
        Some(SortDirection::Ascending)
    } else {
        sort_config
            .and_then(|s| s.direction.as_deref())
            .and_then(|d| d.parse().ok())
    };

    let mut overrides: Vec<OverrideEntry> = config
        .overrides
        .iter()
        .flatten()
        .flat_map(|(id, fields)| {
            fields
                .iter()
                .map(move |(field, value)| OverrideEntry::new(id, field, &value.to_string()))
        })
        .collect();
    for raw in &args.overrides {
        match raw.parse::<OverrideEntry>() {
            Ok(entry) => overrides.push(entry),
            Err(e) => reporter.report_error(&format!("⚠️  {}", e)),
        }
    }

    ComparisonRequest {
        vendors: pick(&args.vendors, &config.vendors),
        tiers: pick(&args.tiers, &config.tiers),
        form_factors: pick(&args.form_factors, &config.form_factors),
        search: args
            .search
            .clone()
            .or_else(|| config.search.clone())
            .unwrap_or_default(),
        sort_key: args
            .sort
            .clone()
            .or_else(|| sort_config.and_then(|s| s.key.clone())),
        sort_direction: direction,
        overrides,
    }
}

fn expand_notes(response: &mut ComparisonResponse, id: &str, reporter: &impl ProgressReporter) {
    if response.catalog.get(id).is_some() {
        response.state.toggle_notes(id);
    } else {
        reporter.report_error(&format!("⚠️  Unknown appliance for --notes: {}", id));
    }
}

