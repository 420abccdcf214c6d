use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

use pt_core::LayerId;
use pt_results::{PavementReportWriter, ProfileWriter, RunSummary};
use pt_sim::run_simulation;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("Project error: {0}")]
    Project(#[from] pt_project::ProjectError),

    #[error("Weather error: {0}")]
    Weather(#[from] pt_weather::WeatherError),

    #[error("Simulation error: {0}")]
    Sim(#[from] pt_sim::SimError),

    #[error("Results error: {0}")]
    Results(#[from] pt_results::ResultsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "pt-cli")]
#[command(about = "Pavetherm CLI - Layered slab thermal simulation with phase change", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project YAML file
        project_path: PathBuf,
    },
    /// List the layer stack of a project
    Layers {
        /// Path to the project YAML file
        project_path: PathBuf,
    },
    /// Run a simulation over an hourly weather file
    Run {
        /// Path to the project YAML file
        project_path: PathBuf,
        /// Path to the hourly weather CSV file
        weather_path: PathBuf,
        /// Output path for the temperature-profile CSV
        output_path: PathBuf,
        /// Pavement report path (outermost layer only)
        #[arg(long, default_value = "ThermalPCC_ILTH.dat")]
        report: PathBuf,
        /// Skip the pavement report entirely
        #[arg(long)]
        no_report: bool,
        /// Run summary path (defaults next to the output CSV)
        #[arg(long)]
        summary: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Layers { project_path } => cmd_layers(&project_path),
        Commands::Run {
            project_path,
            weather_path,
            output_path,
            report,
            no_report,
            summary,
        } => cmd_run(
            &project_path,
            &weather_path,
            &output_path,
            (!no_report).then_some(report.as_path()),
            summary.as_deref(),
        ),
    }
}

fn cmd_validate(project_path: &Path) -> CliResult<()> {
    println!("Validating project: {}", project_path.display());
    pt_project::load_yaml(project_path)?;
    println!("✓ Project is valid");
    Ok(())
}

fn cmd_layers(project_path: &Path) -> CliResult<()> {
    let project = pt_project::load_yaml(project_path)?;

    println!("Layers in '{}' (surface to depth):", project.name);
    for layer in &project.layers {
        let pcm = match &layer.phase_change {
            Some(p) => format!(
                "PCM {:.0}% over [{}, {}] C",
                p.fraction * 100.0,
                p.solidus_c,
                p.liquidus_c
            ),
            None => "no phase change".to_string(),
        };
        println!(
            "  {} - {:.0} mm, {} elements, {}",
            layer.name,
            layer.thickness_m * 1000.0,
            layer.elements,
            pcm
        );
    }
    Ok(())
}

fn cmd_run(
    project_path: &Path,
    weather_path: &Path,
    output_path: &Path,
    report_path: Option<&Path>,
    summary_path: Option<&Path>,
) -> CliResult<()> {
    let project = pt_project::load_yaml(project_path)?;
    let (model, opts) = pt_project::compile(&project)?;
    let weather = pt_weather::read_weather_file(weather_path)?;
    info!(
        hours = weather.len(),
        elements = model.mesh.len(),
        "starting run"
    );

    let record = run_simulation(&model, &weather, &opts)?;

    // Profile CSV: header of element positions, one row per hour.
    let mut profile = ProfileWriter::new(
        BufWriter::new(File::create(output_path)?),
        &model.mesh.positions_m(),
    )?;
    for hour in &record.hours {
        profile.write_hour(hour.timestamp, &hour.temperature_c)?;
    }
    profile.finish()?;

    // Pavement report: outermost layer only.
    if let Some(path) = report_path {
        let top = LayerId::from_index(0);
        let range = model.mesh.layer_range(top);
        let depths: Vec<f64> = model
            .mesh
            .layer_elements(top)
            .iter()
            .map(|e| e.x_m)
            .collect();
        let mut report = PavementReportWriter::new(
            BufWriter::new(File::create(path)?),
            model.layers[0].thickness_si(),
        );
        for hour in &record.hours {
            report.write_hour(hour.timestamp, &depths, &hour.temperature_c[range.clone()])?;
        }
        report.finish()?;
    }

    // Run summary next to the CSV unless redirected.
    let default_summary = output_path.with_extension("summary.json");
    let summary_path = summary_path.unwrap_or(&default_summary);
    let summary = RunSummary::new(
        &project.name,
        env!("CARGO_PKG_VERSION"),
        model.mesh.len(),
        record.hours.len(),
        record.stats.total_passes,
        record.stats.max_passes,
        record.stats.degraded_hours,
    );
    pt_results::save_summary(summary_path, &summary)?;

    println!("✓ Simulation completed: {} hours", record.hours.len());
    println!("  Elements: {}", model.mesh.len());
    println!("  Coupler passes: {} total, {} worst sub-step",
        record.stats.total_passes, record.stats.max_passes);
    if record.stats.degraded_hours > 0 {
        println!("  Degraded hours: {}", record.stats.degraded_hours);
    }
    println!("  Profile: {}", output_path.display());
    if let Some(path) = report_path {
        println!("  Report:  {}", path.display());
    }
    println!("  Summary: {}", summary_path.display());

    Ok(())
}
