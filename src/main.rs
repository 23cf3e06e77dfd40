use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use scc_boundary::config::FileConfig;
use scc_boundary::domain::BoundaryPoint;
use scc_boundary::editor::{
    BoundaryEditor, DialogEvent, EditorOptions, RecordingSurface, ScriptedDialogs, SurfaceEvent,
};
use scc_boundary::geometry::{
    LatLngBounds, area_weighted_centroid, calculate_polygon_centroid, geodesic_area_m2,
    point_to_wkt, points_to_wkt, wkt_to_point, wkt_to_points,
};
use scc_boundary::replay::{self, Outcome};

/// Boundary tools for the stair crusher club map editors
///
/// Examples:
///   # Encode clicked points (JSON array of {lat, lng}) as WKT
///   echo '[{"lat":37.5665,"lng":126.978},{"lat":37.567,"lng":126.979},{"lat":37.566,"lng":126.9795}]' | scc-boundary encode
///
///   # Decode a stored boundary
///   scc-boundary decode "POLYGON((126.978 37.5665, 126.979 37.567, 126.9795 37.566, 126.978 37.5665))"
///
///   # Encode a single location, or decode one back to JSON
///   scc-boundary point --lat 37.5665 --lng 126.978
///   scc-boundary point "POINT(126.978 37.5665)"
///
///   # Replay a drawing session without a map
///   scc-boundary replay session.txt --initial "POLYGON((0 0, 1 0, 1 1, 0 0))"
#[derive(Parser, Debug)]
#[command(name = "scc-boundary")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches scc-boundary.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a JSON array of points as a WKT polygon
    Encode {
        /// JSON file to read (stdin if omitted)
        input: Option<PathBuf>,
    },
    /// Decode a WKT polygon into JSON points (closing point dropped)
    Decode { wkt: String },
    /// Print the mean centroid of a WKT polygon
    Centroid { wkt: String },
    /// Encode --lat/--lng as a WKT point, or decode a WKT point into JSON
    Point {
        /// WKT point to decode
        #[arg(conflicts_with_all = ["lat", "lng"], required_unless_present = "lat")]
        wkt: Option<String>,

        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,
    },
    /// Run a scripted drawing session against an in-memory map
    Replay {
        /// Script file (stdin if omitted)
        script: Option<PathBuf>,

        /// Existing boundary to seed the editor with
        #[arg(long)]
        initial: Option<String>,

        /// Map center as "lat,lng" (defaults to the config file's editor center)
        #[arg(long, allow_hyphen_values = true)]
        center: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = match args.config {
        Some(ref path) => Some(FileConfig::load_from(path)?),
        None => FileConfig::load(),
    }
    .unwrap_or_default();

    let verbose = args.verbose || file_config.verbose;
    init_logging(verbose);

    match args.command {
        Command::Encode { input } => {
            let json = read_input(input.as_ref())?;
            let points: Vec<BoundaryPoint> =
                serde_json::from_str(&json).context("Failed to parse points JSON")?;
            if points.len() < 3 {
                bail!("A polygon needs at least 3 points, got {}", points.len());
            }
            println!("{}", points_to_wkt(&points));
        }
        Command::Decode { wkt } => {
            let points = wkt_to_points(&wkt).context("Failed to decode WKT")?;
            println!("{}", serde_json::to_string_pretty(&points)?);
        }
        Command::Centroid { wkt } => {
            let points = wkt_to_points(&wkt).context("Failed to decode WKT")?;
            print_centroid(&points, verbose)?;
        }
        Command::Point { wkt, lat, lng } => match (wkt, lat, lng) {
            (Some(wkt), _, _) => {
                let point = wkt_to_point(&wkt).context("Failed to decode WKT")?;
                println!("{}", serde_json::to_string_pretty(&point)?);
            }
            (None, Some(lat), Some(lng)) => {
                let point = BoundaryPoint::new(lat, lng);
                if !point.is_finite() {
                    bail!("Coordinates must be finite, got {}, {}", lat, lng);
                }
                println!("{}", point_to_wkt(&point));
            }
            _ => bail!("Provide a WKT point or both --lat and --lng"),
        },
        Command::Replay {
            script,
            initial,
            center,
        } => {
            let script = read_input(script.as_ref())?;
            let commands = replay::parse_script(&script)?;

            let mut options = EditorOptions::from_config(&file_config);
            if let Some(ref c) = center {
                options.initial_center = parse_center(c)?;
            }
            if let Some(wkt) = initial {
                options = options.with_initial_boundary(wkt);
            }

            run_replay(options, &commands, verbose);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read input file: {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn parse_center(value: &str) -> Result<BoundaryPoint> {
    let Some((lat, lng)) = value.split_once(',') else {
        bail!("Center must be given as \"lat,lng\": {:?}", value);
    };
    let lat: f64 = lat.trim().parse().context("Invalid center latitude")?;
    let lng: f64 = lng.trim().parse().context("Invalid center longitude")?;
    Ok(BoundaryPoint::new(lat, lng))
}

fn print_centroid(points: &[BoundaryPoint], verbose: bool) -> Result<()> {
    let Some(center) = calculate_polygon_centroid(points) else {
        bail!("Boundary has no points");
    };
    println!("Center: ({:.6}, {:.6})", center.lat, center.lng);

    if verbose {
        println!("  Vertices: {}", points.len());
        if let Some(exact) = area_weighted_centroid(points) {
            println!(
                "  Area-weighted centroid: ({:.6}, {:.6})",
                exact.lat, exact.lng
            );
        }
        if let Some(bounds) = LatLngBounds::from_points(points) {
            let (lat_span, lng_span) = bounds.span();
            println!("  Span: {:.6} x {:.6} degrees", lat_span, lng_span);
        }
        println!("  Geodesic area: {:.1} m²", geodesic_area_m2(points));
    }

    Ok(())
}

fn run_replay(options: EditorOptions, commands: &[replay::Command], verbose: bool) {
    let mut editor = BoundaryEditor::mount(
        options,
        RecordingSurface::default(),
        ScriptedDialogs::answering(true),
        |data| match data {
            Some(d) => println!("  boundary: {}", d.wkt()),
            None => println!("  boundary: none"),
        },
    );

    print_dialog_log(editor.dialogs_mut().take_log());

    for command in commands {
        let outcome = replay::run(&mut editor, std::slice::from_ref(command));
        let label = match outcome.first() {
            Some(Outcome::Applied) => "ok".to_string(),
            Some(Outcome::Ignored) => "ignored".to_string(),
            Some(Outcome::Rejected(reason)) => format!("rejected: {}", reason),
            None => continue,
        };
        println!("{:?} -> {} [{}]", command, label, editor.state());

        if verbose {
            print_surface_events(editor.surface_mut().take_events());
        }
        print_dialog_log(editor.dialogs_mut().take_log());
    }

    println!();
    match editor.boundary() {
        Some(data) => {
            println!("Final boundary ({} points):", data.points().len());
            println!("  {}", data.wkt());
            println!(
                "  center: ({:.6}, {:.6})",
                data.center().lat,
                data.center().lng
            );
        }
        None => println!("No boundary ({} points)", editor.points().len()),
    }

    let (surface, _) = editor.unmount();
    if verbose {
        print_surface_events(surface.events().to_vec());
    }
}

fn print_dialog_log(log: Vec<DialogEvent>) {
    for event in log {
        match event {
            DialogEvent::Confirm { message, answer } => {
                println!("  confirm {:?} -> {}", message, if answer { "yes" } else { "no" })
            }
            DialogEvent::Alert(message) => println!("  alert {:?}", message),
            DialogEvent::Error(message) => println!("  error {:?}", message),
        }
    }
}

fn print_surface_events(events: Vec<SurfaceEvent>) {
    for event in events {
        println!("  map: {:?}", event);
    }
}
