//! Command-line driver: prints root-finder call sites to stdout.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;

use rootgen::codegen::{CallSite, EmitterConfig, Generator, GeneratorConfig};
use rootgen::curves::{Condition, CurveFamily};

#[derive(Parser)]
#[command(
    name = "rootgen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate polynomial root-finder call sites for curve conditions",
    after_help = r#"
Conditions:
  match-tangent          tangent parallel to (tx, ty)
  extremum-x, extremum-y stationary x or y coordinate
  crossing-x, crossing-y coordinate equal to `value`

Examples:
  rootgen --condition match-tangent                    # every registered curve
  rootgen --condition extremum-y --family Bezier       # all Bezier degrees
  rootgen --family RationalBezier --degree 3 --scalar double
"#
)]
struct Cli {
    /// Condition the roots must satisfy
    #[arg(short, long, env = "ROOTGEN_CONDITION", default_value = "match-tangent")]
    condition: Condition,

    /// Restrict output to one curve family
    #[arg(short, long, env = "ROOTGEN_FAMILY")]
    family: Option<CurveFamily>,

    /// Restrict output to one curve degree
    #[arg(short, long, env = "ROOTGEN_DEGREE", requires = "family")]
    degree: Option<u32>,

    /// Exclusive upper bound on Bezier degrees
    #[arg(long, env = "ROOTGEN_MAX_BEZIER_DEGREE", default_value_t = 11)]
    max_bezier_degree: u32,

    /// Exclusive upper bound on rational Bezier degrees
    #[arg(long, env = "ROOTGEN_MAX_RATIONAL_DEGREE", default_value_t = 5)]
    max_rational_degree: u32,

    /// Scalar type argument of the root finder
    #[arg(long, env = "ROOTGEN_SCALAR", default_value = "Scalar")]
    scalar: String,

    /// Root finder class template
    #[arg(long, env = "ROOTGEN_ROOT_FINDER", default_value = "PolynomialRootFinder")]
    root_finder: String,

    /// Set log level
    #[arg(long, value_enum, env = "ROOTGEN_LOG_LEVEL", default_value = "warn")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Cli {
    fn generator_config(&self) -> GeneratorConfig {
        let emitter = EmitterConfig::default()
            .with_scalar(self.scalar.as_str())
            .with_root_finder(self.root_finder.as_str());
        GeneratorConfig::default()
            .with_max_bezier_degree(self.max_bezier_degree)
            .with_max_rational_degree(self.max_rational_degree)
            .with_emitter(emitter)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .filter_level(cli.log_level.into())
        .init();

    let generator = Generator::new(cli.generator_config());
    info!(
        "rootgen v{}: {} curves registered",
        env!("CARGO_PKG_VERSION"),
        generator.registry().len()
    );

    let sites = select(&generator, &cli)?;
    let rendered: Vec<String> = sites.iter().map(render).collect();
    println!("{}", rendered.join("\n\n"));
    Ok(())
}

fn select(generator: &Generator, cli: &Cli) -> Result<Vec<CallSite>> {
    match (cli.family, cli.degree) {
        (Some(family), Some(degree)) => {
            let site = generator.generate(family, degree, cli.condition)?;
            Ok(vec![site])
        }
        (Some(family), None) => generator
            .registry()
            .descriptors(family)
            .iter()
            .map(|d| generator.generate(family, d.degree(), cli.condition))
            .collect::<Result<_, _>>()
            .with_context(|| format!("generating {} for {family} curves", cli.condition)),
        (None, _) => generator
            .generate_all(cli.condition)
            .with_context(|| format!("generating {} for every curve", cli.condition)),
    }
}

fn render(site: &CallSite) -> String {
    format!("// {} degree {}\n{}", site.family, site.degree, site.text())
}
