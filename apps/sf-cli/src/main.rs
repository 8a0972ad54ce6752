use clap::{Args, Parser, Subcommand};
use sf_app::{
    AppResult, SelectionReport, annual_energy_cost, annual_energy_kwh, catalog_file,
    design_service, format_usd,
};
use sf_catalog::{Catalog, Family};
use sf_project::{DesignFile, LATEST_VERSION, OpenLoopInputsDef, PolicyDef, SystemDef};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sf-cli")]
#[command(about = "Side-stream filter selection for cooling water loops", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select filters from command-line inputs
    #[command(subcommand)]
    Select(SelectCommands),
    /// Evaluate a design file
    Run {
        /// Path to the design YAML or JSON file
        design_path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
        /// Catalog file overriding the one named in the design
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Validate design file syntax and inputs
    Validate {
        /// Path to the design YAML or JSON file
        design_path: PathBuf,
    },
    /// List catalog records
    Catalog {
        /// Only list one family (Separator, VAF, Vortisand)
        #[arg(long)]
        family: Option<Family>,
        /// Catalog file to read instead of the built-in catalog
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Show one model in full
        #[arg(long, conflicts_with = "export")]
        model: Option<String>,
        /// Write the catalog to this file instead of listing it
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Annual energy cost of running a pump continuously
    Cost {
        /// Motor power in horsepower
        #[arg(long)]
        hp: f64,
        /// Energy price in $/kWh
        #[arg(long)]
        price: f64,
    },
}

#[derive(Subcommand)]
enum SelectCommands {
    /// Open (cooling tower) loop
    Open {
        /// Cooling load in tons
        #[arg(long)]
        tonnage: Option<f64>,
        /// Total tower recirculation in gpm
        #[arg(long)]
        recirc: Option<f64>,
        /// Energy price in $/kWh
        #[arg(long)]
        price: f64,
        /// Require both tonnage and recirculation
        #[arg(long)]
        strict: bool,
        #[command(flatten)]
        output: OutputArgs,
        /// Catalog file to read instead of the built-in catalog
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Closed loop
    Closed {
        /// System water volume in gallons
        #[arg(long)]
        volume: f64,
        /// Energy price in $/kWh
        #[arg(long)]
        price: f64,
        #[command(flatten)]
        output: OutputArgs,
        /// Catalog file to read instead of the built-in catalog
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Args, Clone, Copy)]
struct OutputArgs {
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
    /// Show candidate counts after each filter stage
    #[arg(long)]
    explain: bool,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Select(select_cmd) => match select_cmd {
            SelectCommands::Open {
                tonnage,
                recirc,
                price,
                strict,
                output,
                catalog,
            } => {
                let policy = PolicyDef {
                    open_loop_inputs: if strict {
                        OpenLoopInputsDef::Both
                    } else {
                        OpenLoopInputsDef::Either
                    },
                    ..PolicyDef::default()
                };
                let system = SystemDef::Open {
                    tonnage,
                    total_recirc_gpm: recirc,
                };
                cmd_select(system, price, policy, catalog.as_deref(), output)
            }
            SelectCommands::Closed {
                volume,
                price,
                output,
                catalog,
            } => {
                let system = SystemDef::Closed {
                    system_volume_gal: Some(volume),
                };
                cmd_select(
                    system,
                    price,
                    PolicyDef::default(),
                    catalog.as_deref(),
                    output,
                )
            }
        },
        Commands::Run {
            design_path,
            output,
            catalog,
        } => cmd_run(&design_path, catalog.as_deref(), output),
        Commands::Validate { design_path } => cmd_validate(&design_path),
        Commands::Catalog {
            family,
            catalog,
            model,
            export,
        } => match model {
            Some(model) => cmd_show_model(&model, catalog.as_deref()),
            None => cmd_catalog(family, catalog.as_deref(), export.as_deref()),
        },
        Commands::Cost { hp, price } => cmd_cost(hp, price),
    }
}

fn cmd_select(
    system: SystemDef,
    price: f64,
    policy: PolicyDef,
    catalog_path: Option<&Path>,
    output: OutputArgs,
) -> AppResult<()> {
    let design = DesignFile {
        version: LATEST_VERSION,
        name: String::new(),
        system,
        energy_price_per_kwh: price,
        policy,
        catalog: None,
    };
    let catalog = design_service::load_catalog(catalog_path)?;
    let loaded = design_service::prepare(design, catalog)?;
    print_report(&loaded.evaluate(), output)
}

fn cmd_run(design_path: &Path, catalog_path: Option<&Path>, output: OutputArgs) -> AppResult<()> {
    let loaded = design_service::load_design(design_path, catalog_path)?;
    if !output.json && !loaded.design.name.is_empty() {
        println!("Design: {}\n", loaded.design.name);
    }
    print_report(&loaded.evaluate(), output)
}

fn print_report(report: &SelectionReport, output: OutputArgs) -> AppResult<()> {
    if output.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.text(output.explain));
    }
    Ok(())
}

fn cmd_validate(design_path: &Path) -> AppResult<()> {
    println!("Validating design: {}", design_path.display());
    let design = design_service::read_design(design_path)?;
    let catalog_path = design_service::design_catalog_path(design_path, &design);
    let catalog = design_service::load_catalog(catalog_path.as_deref())?;
    let loaded = design_service::prepare(design, catalog)?;
    println!("✓ Design is valid");
    println!(
        "  {} loop, {} catalog records",
        loaded.system.loop_type(),
        loaded.catalog.len()
    );
    Ok(())
}

fn cmd_catalog(
    family: Option<Family>,
    catalog_path: Option<&Path>,
    export: Option<&Path>,
) -> AppResult<()> {
    let catalog = design_service::load_catalog(catalog_path)?;

    if let Some(out) = export {
        let records = catalog
            .records()
            .iter()
            .filter(|r| family.is_none_or(|f| r.family() == f))
            .cloned()
            .collect();
        let file = catalog_file(&Catalog::new(records)?);
        sf_project::save_catalog(out, &file)?;
        tracing::info!(path = %out.display(), records = file.records.len(), "catalog exported");
        println!("✓ Wrote {} records to {}", file.records.len(), out.display());
        return Ok(());
    }

    let families: Vec<Family> = match family {
        Some(f) => vec![f],
        None => Family::ALL.to_vec(),
    };
    for f in families {
        println!("{} - {}", f, f.water_quality());
        let mut any = false;
        for record in catalog.records_of_family(f) {
            any = true;
            let mut line = format!(
                "  {:<8} {:>6} hp {:>6} gpm  recirc {:>11}  tons {:>11}",
                record.model(),
                record.power_hp(),
                record.rated_flow_gpm(),
                record.recirc_range().to_string(),
                record.tonnage_range().to_string(),
            );
            if let Some(volume) = record.loop_volume_range() {
                line.push_str(&format!("  loop {} gal", volume));
            }
            println!("{}", line);
        }
        if !any {
            println!("  (no records)");
        }
        println!();
    }
    Ok(())
}

fn cmd_show_model(model: &str, catalog_path: Option<&Path>) -> AppResult<()> {
    let catalog = design_service::load_catalog(catalog_path)?;
    let record = catalog.get(model).ok_or_else(|| {
        sf_app::AppError::InvalidInput(format!("Model not found in catalog: {model}"))
    })?;

    println!("{} ({})", record.model(), record.family());
    println!("  Power:       {} hp", record.power_hp());
    println!("  Rated flow:  {} gpm", record.rated_flow_gpm());
    println!("  Recirc:      {} gpm", record.recirc_range());
    println!("  Tonnage:     {} tons", record.tonnage_range());
    if let Some(volume) = record.loop_volume_range() {
        println!("  Loop volume: {} gal", volume);
    }
    if !record.description().is_empty() {
        println!("\n{}", record.description());
    }
    Ok(())
}

fn cmd_cost(hp: f64, price: f64) -> AppResult<()> {
    if !(hp.is_finite() && hp > 0.0) {
        return Err(sf_app::AppError::InvalidInput(
            "Horsepower must be a positive number.".to_string(),
        ));
    }
    if !(price.is_finite() && price > 0.0) {
        return Err(sf_app::AppError::InvalidInput(
            "Electrical cost must be a positive number.".to_string(),
        ));
    }
    println!("{} kWh/year", annual_energy_kwh(hp).round());
    println!("{}/year @${:.2}/kwh", format_usd(annual_energy_cost(hp, price)), price);
    Ok(())
}
