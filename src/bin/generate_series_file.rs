use std::path::PathBuf;

use graph_rs::core::Series;
use graph_rs::data;

const DEFAULT_FROM: f64 = -10.0;
const DEFAULT_TO: f64 = 10.0;
const DEFAULT_STEP: f64 = 0.5;
/// Upper bound on generated samples (160 MB of pair data).
const MAX_SAMPLES: usize = 10_000_000;

#[derive(Debug)]
struct CliArgs {
    output_path: PathBuf,
    function: SampleFunction,
    from: f64,
    to: f64,
    step: f64,
}

#[derive(Debug, Clone, Copy)]
enum SampleFunction {
    Square,
    Cube,
    Sine,
    Abs,
}

impl SampleFunction {
    fn parse(name: &str) -> Result<Self, String> {
        match name {
            "square" => Ok(Self::Square),
            "cube" => Ok(Self::Cube),
            "sin" => Ok(Self::Sine),
            "abs" => Ok(Self::Abs),
            _ => Err(format!("unknown function `{name}` (expected square|cube|sin|abs)")),
        }
    }

    fn eval(self, x: f64) -> f64 {
        match self {
            Self::Square => x * x,
            Self::Cube => x * x * x,
            Self::Sine => x.sin(),
            Self::Abs => x.abs(),
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let count = sample_count(args.from, args.to, args.step)?;
    let series = Series::from_pairs((0..count).map(|index| {
        let x = args.from + index as f64 * args.step;
        (x, args.function.eval(x))
    }))
    .map_err(|err| err.to_string())?;

    data::save_series(&series, &args.output_path).map_err(|err| err.to_string())?;
    println!(
        "wrote {} samples of {:?} to {}",
        series.len(),
        args.function,
        args.output_path.display()
    );
    Ok(())
}

fn sample_count(from: f64, to: f64, step: f64) -> Result<usize, String> {
    if !step.is_finite() || step <= 0.0 || !from.is_finite() || !to.is_finite() || to < from {
        return Err("expected finite --from <= --to and --step > 0".to_owned());
    }

    let count = ((to - from) / step).floor() + 1.0;
    if !count.is_finite() || count > MAX_SAMPLES as f64 {
        return Err(format!(
            "--from/--to/--step would generate more than {MAX_SAMPLES} samples"
        ));
    }
    Ok(count as usize)
}

fn parse_args() -> Result<CliArgs, String> {
    let mut output_path = None;
    let mut function = SampleFunction::Square;
    let mut from = DEFAULT_FROM;
    let mut to = DEFAULT_TO;
    let mut step = DEFAULT_STEP;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--function" => function = SampleFunction::parse(&next_value(&mut args, &arg)?)?,
            "--from" => from = parse_f64(&next_value(&mut args, &arg)?)?,
            "--to" => to = parse_f64(&next_value(&mut args, &arg)?)?,
            "--step" => step = parse_f64(&next_value(&mut args, &arg)?)?,
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ if arg.starts_with("--") => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
            _ => output_path = Some(PathBuf::from(arg)),
        }
    }

    let output_path =
        output_path.ok_or_else(|| format!("missing <output>\n\n{}", usage_message()))?;
    Ok(CliArgs {
        output_path,
        function,
        from,
        to,
        step,
    })
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next()
        .ok_or_else(|| format!("missing value for {flag}"))
}

fn parse_f64(value: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|err| format!("invalid number `{value}`: {err}"))
}

fn usage_message() -> String {
    format!(
        "Usage: cargo run --bin generate_series_file -- <output> [options]\n\nOptions:\n  --function <name>  square|cube|sin|abs (default: square)\n  --from <x>         First x (default: {DEFAULT_FROM})\n  --to <x>           Last x (default: {DEFAULT_TO})\n  --step <dx>        X increment (default: {DEFAULT_STEP})\n  -h, --help         Show this message"
    )
}
