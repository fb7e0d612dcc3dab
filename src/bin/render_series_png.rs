#[cfg(feature = "cairo-backend")]
use graph_rs::api::{GraphConfig, GraphDisplay};
#[cfg(feature = "cairo-backend")]
use graph_rs::core::SurfaceSize;
#[cfg(feature = "cairo-backend")]
use std::fs;
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    input_path: PathBuf,
    output_path: PathBuf,
    config_path: Option<PathBuf>,
    size: Option<SurfaceSize>,
    show_axis: bool,
    show_markers: bool,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    let _ = graph_rs::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use graph_rs::render::CairoRenderer;

    let args = parse_args()?;
    let mut config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            GraphConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => GraphConfig::default(),
    };
    if let Some(size) = args.size {
        config.surface = size;
    }
    config.flags.show_axis &= args.show_axis;
    config.flags.show_markers &= args.show_markers;

    let surface = config.surface;
    let width = i32::try_from(surface.width).map_err(|_| "width overflows i32".to_owned())?;
    let height = i32::try_from(surface.height).map_err(|_| "height overflows i32".to_owned())?;
    let renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
    let mut display = GraphDisplay::new(renderer, config).map_err(|err| err.to_string())?;

    let loaded = display
        .load_series_file(&args.input_path)
        .map_err(|err| err.to_string())?;
    if !loaded {
        println!(
            "{} holds no samples, rendering background only",
            args.input_path.display()
        );
    }
    display.render().map_err(|err| err.to_string())?;
    display
        .renderer()
        .write_png(&args.output_path)
        .map_err(|err| err.to_string())?;

    println!(
        "rendered {} -> {} ({}x{})",
        args.input_path.display(),
        args.output_path.display(),
        surface.width,
        surface.height
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut positional = Vec::new();
    let mut config_path = None;
    let mut size = None;
    let mut show_axis = true;
    let mut show_markers = true;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--size" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --size".to_owned())?;
                size = Some(parse_size(&value)?);
            }
            "--no-axis" => show_axis = false,
            "--no-markers" => show_markers = false,
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ if arg.starts_with("--") => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let [input_path, output_path]: [PathBuf; 2] = positional
        .try_into()
        .map_err(|_| format!("expected <input> and <output>\n\n{}", usage_message()))?;

    Ok(CliArgs {
        input_path,
        output_path,
        config_path,
        size,
        show_axis,
        show_markers,
    })
}

#[cfg(feature = "cairo-backend")]
fn parse_size(value: &str) -> Result<SurfaceSize, String> {
    let (width, height) = value
        .split_once('x')
        .ok_or_else(|| format!("size `{value}` must look like WIDTHxHEIGHT"))?;
    let width = width
        .parse::<u32>()
        .map_err(|err| format!("invalid width `{width}`: {err}"))?;
    let height = height
        .parse::<u32>()
        .map_err(|err| format!("invalid height `{height}`: {err}"))?;
    SurfaceSize::new(width, height)
        .validate()
        .map_err(|err| err.to_string())
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    "Usage: cargo run --features cairo-backend --bin render_series_png -- <input> <output.png> [options]\n\nOptions:\n  --config <path>   JSON display config (surface, flags, style)\n  --size <WxH>      Surface size override (default: 1300x750)\n  --no-axis         Hide coordinate axes\n  --no-markers      Hide point markers\n  -h, --help        Show this message".to_owned()
}
