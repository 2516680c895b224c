use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use shademap::config::{DEFAULT_DATASET, DEFAULT_IMAGE, DEFAULT_TABLE};
use shademap::dataset::DEFAULT_NAME_PROPERTY;
use shademap::lookup::MapProbe;
use shademap::viz::{DEFAULT_HEIGHT, DEFAULT_WIDTH, EdgeStyle};
use shademap::{Config, ShadeFormula};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "shademap",
    version,
    about = "Paint every country a unique shade of green and look regions up by color"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the shaded map and export the green-value table.
    Render(RenderArgs),
    /// Print the region under a longitude/latitude of a rendered map.
    Probe(ProbeArgs),
    /// Sample a rendered map on a degree grid and write the hits as JSON.
    Sample(SampleArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormulaArg {
    /// round(255 * i / (N - 1))
    Normalized,
    /// i mod 256
    RawIndex,
}

impl From<FormulaArg> for ShadeFormula {
    fn from(f: FormulaArg) -> Self {
        match f {
            FormulaArg::Normalized => ShadeFormula::Normalized,
            FormulaArg::RawIndex => ShadeFormula::RawIndex,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EdgesArg {
    Drawn,
    None,
}

impl From<EdgesArg> for EdgeStyle {
    fn from(e: EdgesArg) -> Self {
        match e {
            EdgesArg::Drawn => EdgeStyle::Drawn,
            EdgesArg::None => EdgeStyle::None,
        }
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// GeoJSON FeatureCollection with one feature per region.
    #[arg(long, default_value = DEFAULT_DATASET)]
    dataset: PathBuf,
    /// Feature property holding the region name.
    #[arg(long, default_value = DEFAULT_NAME_PROPERTY)]
    name_property: String,
    /// Map output (.png or .svg).
    #[arg(long, default_value = DEFAULT_IMAGE)]
    image: PathBuf,
    /// CSV table output.
    #[arg(long, default_value = DEFAULT_TABLE)]
    table: PathBuf,
    /// Also write the table as JSON.
    #[arg(long)]
    json: Option<PathBuf>,
    /// Width of the map.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,
    /// Height of the map.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,
    /// Shade formula, used for both the map and the table.
    #[arg(long, value_enum, default_value_t = FormulaArg::Normalized)]
    formula: FormulaArg,
    /// Region outlines.
    #[arg(long, value_enum, default_value_t = EdgesArg::Drawn)]
    edges: EdgesArg,
}

#[derive(Args, Debug)]
struct MapArgs {
    /// Rendered map to read.
    #[arg(long, default_value = DEFAULT_IMAGE)]
    image: PathBuf,
    /// Exported CSV table belonging to the map.
    #[arg(long, default_value = DEFAULT_TABLE)]
    table: PathBuf,
}

#[derive(Args, Debug)]
struct ProbeArgs {
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    #[command(flatten)]
    map: MapArgs,
}

#[derive(Args, Debug)]
struct SampleArgs {
    /// Grid spacing in degrees.
    #[arg(long, default_value_t = 0.6)]
    step: f64,
    /// Sphere radius for the point positions.
    #[arg(long, default_value_t = 2.03)]
    radius: f64,
    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
    #[command(flatten)]
    map: MapArgs,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Probe(args) => cmd_probe(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let config = Config {
        dataset: args.dataset,
        name_property: args.name_property,
        image: args.image,
        table: args.table,
        json: args.json,
        width: args.width,
        height: args.height,
        formula: args.formula.into(),
        edges: args.edges.into(),
    };
    let summary = shademap::run(&config)?;
    if let Some(image) = summary.image.as_ref() {
        eprintln!("Wrote map to {}", image.display());
    }
    eprintln!(
        "Saved {} rows to {}",
        summary.table.len(),
        summary.table_path.display()
    );
    Ok(())
}

fn cmd_probe(args: ProbeArgs) -> Result<()> {
    let probe = MapProbe::open(&args.map.image, &args.map.table)?;
    match probe.region_at(args.lon, args.lat) {
        Some(hit) => println!(
            "{}\trgb({}, {}, {})",
            hit.region, hit.rgb[0], hit.rgb[1], hit.rgb[2]
        ),
        None => println!("none"),
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> Result<()> {
    let probe = MapProbe::open(&args.map.image, &args.map.table)?;
    let points = probe.sample(args.step, args.radius)?;
    log::info!("{} grid points landed on a region", points.len());
    match args.out.as_ref() {
        Some(path) => {
            let mut w = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut w, &points)?;
            w.flush()?;
            eprintln!("Wrote {} points to {}", points.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            serde_json::to_writer_pretty(&mut lock, &points)?;
            writeln!(lock)?;
        }
    }
    Ok(())
}
