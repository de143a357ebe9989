//! chartrange CLI — working-distance planning for multi-camera chart tests.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use chartrange::{
    CameraSpec, ChartPreset, LensDefinition, LensGeometry, SensorDefinition, SensorGeometry,
    Session,
};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "chartrange")]
#[command(about = "Find a chart distance at which every camera in a set can be tested")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute per-camera distance ranges and their common range.
    Plan(CliPlanArgs),

    /// List chart size presets.
    Charts,

    /// Write a default session file to edit.
    Template {
        /// Number of default cameras in the template.
        #[arg(long, default_value = "3")]
        cameras: usize,

        /// Output path (stdout when omitted).
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Derive sensor and lens geometry for a single camera.
    Optics(CliOpticsArgs),
}

#[derive(Debug, Clone, Args)]
struct CliPlanArgs {
    /// Session JSON (`chartrange.session.v1`). Defaults are used when omitted.
    #[arg(long)]
    session: Option<PathBuf>,

    /// Number of default cameras when no session file is given.
    #[arg(long, conflicts_with = "session")]
    cameras: Option<usize>,

    /// Chart size preset.
    #[arg(long, value_enum)]
    chart: Option<ChartPresetArg>,

    /// Custom chart width in mm (overrides the preset width).
    #[arg(long)]
    chart_width_mm: Option<f64>,

    /// Wall width in cm.
    #[arg(long)]
    wall_width_cm: Option<f64>,

    /// Max allowable distance from the wall in cm, based on room size.
    #[arg(long)]
    max_room_distance_cm: Option<f64>,

    /// Minimum chart fraction of the horizontal field of view, in [0, 1].
    #[arg(long)]
    min_chart_fraction: Option<f64>,

    /// Minimum chart sampling density in pixels per cm.
    #[arg(long)]
    min_pixels_per_cm: Option<f64>,

    /// Path to write the plan report (JSON).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the plan report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

impl CliPlanArgs {
    fn to_session(&self) -> CliResult<Session> {
        let mut session = match &self.session {
            Some(path) => {
                tracing::info!("Loading session: {}", path.display());
                Session::from_json_file(path)?
            }
            None => Session::with_cameras(self.cameras.unwrap_or(3)),
        };

        if let Some(chart) = self.chart {
            session.chart = chart.to_core();
            session.chart_width_mm = None;
        }
        if let Some(w) = self.chart_width_mm {
            session.chart_width_mm = Some(w);
        }
        if let Some(w) = self.wall_width_cm {
            session.wall_width_cm = w;
        }
        if let Some(d) = self.max_room_distance_cm {
            session.max_room_distance_cm = d;
        }
        if let Some(f) = self.min_chart_fraction {
            session.min_chart_fraction = f;
        }
        if let Some(t) = self.min_pixels_per_cm {
            session.min_pixels_per_cm = t;
        }
        Ok(session)
    }
}

#[derive(Debug, Clone, Args)]
struct CliOpticsArgs {
    /// Horizontal resolution (px).
    #[arg(long, default_value = "3848", value_parser = clap::value_parser!(u32).range(1..))]
    h_pixels: u32,

    /// Vertical resolution (px).
    #[arg(long, default_value = "2160", value_parser = clap::value_parser!(u32).range(1..))]
    v_pixels: u32,

    /// Sensor width (mm).
    #[arg(long, conflicts_with = "pitch_um", required_unless_present = "pitch_um")]
    width_mm: Option<f64>,

    /// Pixel size (µm).
    #[arg(long)]
    pitch_um: Option<f64>,

    /// Focal length (mm).
    #[arg(long, conflicts_with = "dfov_deg", required_unless_present = "dfov_deg")]
    focal_length_mm: Option<f64>,

    /// Diagonal field of view (degrees).
    #[arg(long)]
    dfov_deg: Option<f64>,
}

impl CliOpticsArgs {
    fn to_core(&self) -> CliResult<CameraSpec> {
        let sensor = match (self.width_mm, self.pitch_um) {
            (Some(w), _) => SensorDefinition::WidthMm(w),
            (None, Some(p)) => SensorDefinition::PitchUm(p),
            (None, None) => return Err("one of --width-mm or --pitch-um is required".into()),
        };
        let lens = match (self.focal_length_mm, self.dfov_deg) {
            (Some(f), _) => LensDefinition::FocalLengthMm(f),
            (None, Some(d)) => LensDefinition::DiagonalFovDeg(d),
            (None, None) => {
                return Err("one of --focal-length-mm or --dfov-deg is required".into())
            }
        };
        let camera = CameraSpec {
            name: "camera".to_string(),
            h_pixels: self.h_pixels,
            v_pixels: self.v_pixels,
            sensor,
            lens,
        };
        camera.validate()?;
        Ok(camera)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ChartPresetArg {
    A4,
    Letter,
    Legal,
    A3,
    Ledger,
}

impl ChartPresetArg {
    fn to_core(self) -> ChartPreset {
        match self {
            Self::A4 => ChartPreset::A4,
            Self::Letter => ChartPreset::Letter,
            Self::Legal => ChartPreset::Legal,
            Self::A3 => ChartPreset::A3,
            Self::Ledger => ChartPreset::Ledger,
        }
    }
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan(args) => run_plan(&args),
        Commands::Charts => run_charts(),
        Commands::Template { cameras, out } => run_template(cameras, out.as_deref()),
        Commands::Optics(args) => run_optics(&args),
    }
}

// ── charts ─────────────────────────────────────────────────────────────

fn run_charts() -> CliResult<()> {
    println!("chart presets (width is mounted horizontally)");
    for preset in ChartPreset::ALL {
        println!(
            "  {:<8} {:>5.0} mm wide  {}",
            preset.name().to_lowercase(),
            preset.width_mm(),
            preset
        );
    }
    Ok(())
}

// ── template ───────────────────────────────────────────────────────────

fn run_template(cameras: usize, out: Option<&std::path::Path>) -> CliResult<()> {
    let json = Session::with_cameras(cameras).to_json_pretty()?;
    match out {
        Some(path) => {
            std::fs::write(path, &json)?;
            tracing::info!("Session template written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

// ── optics ─────────────────────────────────────────────────────────────

fn run_optics(args: &CliOpticsArgs) -> CliResult<()> {
    let camera = args.to_core()?;
    let sensor = SensorGeometry::resolve(camera.sensor, camera.h_pixels, camera.v_pixels);
    let lens = LensGeometry::resolve(camera.lens, sensor.diagonal_mm);

    println!("Sensor ({}x{} px)", camera.h_pixels, camera.v_pixels);
    println!("  width:        {:.3} mm", sensor.width_mm);
    println!("  pixel size:   {:.3} µm", sensor.pitch_um);
    println!("  height:       {:.3} mm", sensor.height_mm);
    println!("  diagonal:     {:.3} mm", sensor.diagonal_mm);
    println!("Lens");
    println!("  focal length: {:.3} mm", lens.focal_length_mm);
    println!("  diagonal FOV: {:.2}°", lens.diagonal_fov_deg);
    Ok(())
}

// ── plan ───────────────────────────────────────────────────────────────

fn run_plan(args: &CliPlanArgs) -> CliResult<()> {
    let session = args.to_session()?;
    tracing::info!(
        "Planning {} cameras against a {:.0} mm chart",
        session.cameras.len(),
        session.chart_spec().width_mm
    );

    let report = session.plan()?;

    let infeasible = report.infeasible_cameras().count();
    if infeasible > 0 {
        tracing::warn!("{} camera(s) have no usable range on their own", infeasible);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    if let Some(out) = &args.out {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(out, &json)?;
        tracing::info!("Report written to {}", out.display());
    }

    Ok(())
}
