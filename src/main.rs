use std::process::ExitCode;

use anyhow::{Result, anyhow, bail};
use clap::{Parser, Subcommand, ValueEnum};
use graphcalc::{
    AngleMode, Context, FitQuality, describe, evaluate,
    graph::{PlotPoint, sample},
    parse, regress,
    util::format::{DISPLAY_DIGITS, format_significant},
};
use serde_json::json;

/// graphcalc evaluates calculator expressions, summarizes data series and
/// fits regression lines from the terminal.
#[derive(Parser, Debug)]
#[command(name = "graphcalc", version, about, long_about = None)]
struct Cli {
    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Significant digits shown in text output.
    #[arg(long, global = true, default_value_t = DISPLAY_DIGITS)]
    digits: usize,

    /// Longest expression accepted, in characters.
    #[arg(long, global = true, default_value_t = 256)]
    max_length: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate an expression
    Eval {
        /// Expression, e.g. "2x² + √(x + 1)"
        expression: String,

        /// Angle mode for sin, cos and tan
        #[arg(short, long, default_value = "radians")]
        angle: CliAngleMode,

        /// Variable binding, e.g. x=5 (repeatable)
        #[arg(short, long, value_parser = parse_binding)]
        bind: Vec<(String, f64)>,
    },

    /// Summarize a data series
    #[command(allow_negative_numbers = true)]
    Describe {
        /// Values, separated by spaces or commas
        #[arg(required = true, value_delimiter = ',')]
        values: Vec<f64>,
    },

    /// Fit a least-squares line through paired data
    #[command(allow_negative_numbers = true)]
    Regress {
        /// x values, separated by commas
        #[arg(long, required = true, num_args = 1.., value_delimiter = ',')]
        xs: Vec<f64>,

        /// y values, separated by commas
        #[arg(long, required = true, num_args = 1.., value_delimiter = ',')]
        ys: Vec<f64>,
    },

    /// Sample a function of x over an interval
    #[command(allow_negative_numbers = true)]
    Plot {
        /// Expression in terms of x
        expression: String,

        /// Start of the interval
        #[arg(long)]
        from: f64,

        /// End of the interval
        #[arg(long)]
        to: f64,

        /// Number of points, at most 100000
        #[arg(short, long, default_value_t = 21)]
        samples: usize,

        /// Angle mode for sin, cos and tan
        #[arg(short, long, default_value = "radians")]
        angle: CliAngleMode,

        /// Binding for a variable other than x, e.g. a=2 (repeatable)
        #[arg(short, long, value_parser = parse_binding)]
        bind: Vec<(String, f64)>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliAngleMode {
    Radians,
    Degrees,
}

impl From<CliAngleMode> for AngleMode {
    fn from(mode: CliAngleMode) -> Self {
        match mode {
            CliAngleMode::Radians => Self::Radians,
            CliAngleMode::Degrees => Self::Degrees,
        }
    }
}

/// Parses a `name=value` binding.
fn parse_binding(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw.split_once('=')
                           .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("invalid variable name '{name}'"));
    }
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.to_string(), value))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()
                                 .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()))
                             .with_writer(std::io::stderr)
                             .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Eval { expression,
                         angle,
                         bind, } => cmd_eval(cli, expression, *angle, bind),
        Commands::Describe { values } => cmd_describe(cli, values),
        Commands::Regress { xs, ys } => cmd_regress(cli, xs, ys),
        Commands::Plot { expression,
                         from,
                         to,
                         samples,
                         angle,
                         bind, } => cmd_plot(cli, expression, (*from, *to), *samples, *angle, bind),
    }
}

/// Builds the evaluation context from command-line options.
fn build_context(angle: CliAngleMode, bindings: &[(String, f64)]) -> Context {
    bindings.iter()
            .fold(Context::new().with_angle_mode(angle.into()), |context, (name, value)| {
                context.with_binding(name.as_str(), *value)
            })
}

/// Most points `plot` samples in one run.
const MAX_SAMPLES: usize = 100_000;

/// Rejects expressions longer than the configured limit before they reach the
/// parser.
fn check_length(cli: &Cli, expression: &str) -> Result<()> {
    let length = expression.chars().count();
    if length > cli.max_length {
        bail!("InputTooLong: expression has {length} characters, the limit is {}",
              cli.max_length);
    }
    Ok(())
}

fn cmd_eval(cli: &Cli,
            expression: &str,
            angle: CliAngleMode,
            bindings: &[(String, f64)])
            -> Result<()> {
    check_length(cli, expression)?;
    let context = build_context(angle, bindings);

    let value = evaluate(expression, &context).map_err(|e| anyhow!("{}: {e}", e.kind()))?;

    if cli.json {
        println!("{}",
                 serde_json::to_string_pretty(&json!({ "expression": expression,
                                                       "angle_mode": context.angle_mode,
                                                       "value": value }))?);
    } else {
        println!("{}", format_significant(value, cli.digits));
    }
    Ok(())
}

fn cmd_describe(cli: &Cli, values: &[f64]) -> Result<()> {
    let stats = describe(values).map_err(|e| anyhow!("{}: {e}", e.kind()))?;

    if cli.json {
        println!("{}",
                 serde_json::to_string_pretty(&json!({ "statistics": stats,
                                                       "iqr": stats.iqr(),
                                                       "range": stats.range() }))?);
        return Ok(());
    }

    let fmt = |v: f64| format_significant(v, cli.digits);
    println!("count    {}", stats.count);
    println!("sum      {}", fmt(stats.sum));
    println!("mean     {}", fmt(stats.mean));
    println!("median   {}", fmt(stats.median));
    println!("std dev  {}", fmt(stats.std_dev));
    println!("min      {}", fmt(stats.min));
    println!("q1       {}", fmt(stats.q1));
    println!("q3       {}", fmt(stats.q3));
    println!("max      {}", fmt(stats.max));
    println!("iqr      {}", fmt(stats.iqr()));
    println!("range    {}", fmt(stats.range()));
    Ok(())
}

fn cmd_regress(cli: &Cli, xs: &[f64], ys: &[f64]) -> Result<()> {
    let fit = regress(xs, ys).map_err(|e| anyhow!("{}: {e}", e.kind()))?;
    let quality: FitQuality = fit.fit_quality();

    if cli.json {
        println!("{}",
                 serde_json::to_string_pretty(&json!({ "fit": fit,
                                                       "quality": quality,
                                                       "description": quality.describe(fit.r_squared) }))?);
        return Ok(());
    }

    let fmt = |v: f64| format_significant(v, cli.digits);
    println!("{}", fit.equation);
    println!("slope      {}", fmt(fit.slope));
    println!("intercept  {}", fmt(fit.intercept));
    println!("r²         {}", fmt(fit.r_squared));
    println!("r          {}", fmt(fit.correlation));
    println!("{}", quality.describe(fit.r_squared));
    Ok(())
}

fn cmd_plot(cli: &Cli,
            expression: &str,
            (from, to): (f64, f64),
            samples: usize,
            angle: CliAngleMode,
            bindings: &[(String, f64)])
            -> Result<()> {
    check_length(cli, expression)?;
    if samples > MAX_SAMPLES {
        bail!("TooManySamples: {samples} points requested, the limit is {MAX_SAMPLES}");
    }
    if !from.is_finite() || !to.is_finite() {
        bail!("the interval bounds must be finite numbers");
    }
    let context = build_context(angle, bindings);

    let tree = parse(expression).map_err(|e| anyhow!("{}: {e}", e.kind()))?;
    let points: Vec<PlotPoint> =
        sample(&tree, &context, from, to, samples).map_err(|e| anyhow!("{}: {e}", e.kind()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    for point in &points {
        let y = point.y.map_or_else(|| "undefined".to_string(), |y| format_significant(y, cli.digits));
        println!("{}\t{y}", format_significant(point.x, cli.digits));
    }
    Ok(())
}
