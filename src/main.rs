use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use gradientforge::logging::{init_logging, LoggingConfig};
use gradientforge::stop::parse_stop_literal;
use gradientforge::{
    CssProperty, EngineConfig, GradientEngine, GradientType, PositionSpread, Rotation,
    POSITION_PRESETS,
};

#[derive(Parser, Debug)]
#[command(name = "gradientforge", version, about = "Build and export CSS gradients")]
struct Cli {
    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// JSON engine config; flags override its values
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive a gradient from explicit stops
    Derive {
        /// Gradient type, e.g. `linear`, `repeating-conic`
        #[arg(long = "type", short = 't')]
        gradient_type: Option<String>,
        /// Rotation in degrees (0-360)
        #[arg(long, short = 'r')]
        rotation: Option<u32>,
        /// Color stop as `#rrggbb:position`, repeatable
        #[arg(long = "stop", short = 's', required = true)]
        stops: Vec<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Draw a random linear gradient
    Random {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum)]
        spread: Option<SpreadArg>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List gradient types
    Types,
    /// List rotation presets
    Rotations,
    /// List stop position presets
    Positions,
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Print the export payload as JSON
    #[arg(long)]
    json: bool,
    /// Property used for the CSS declaration
    #[arg(long, value_enum, default_value_t = PropertyArg::Background)]
    property: PropertyArg,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SpreadArg {
    Verbatim,
    Normalized,
}

impl From<SpreadArg> for PositionSpread {
    fn from(s: SpreadArg) -> Self {
        match s {
            SpreadArg::Verbatim => PositionSpread::Verbatim,
            SpreadArg::Normalized => PositionSpread::Normalized,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PropertyArg {
    Background,
    BackgroundImage,
}

impl From<PropertyArg> for CssProperty {
    fn from(p: PropertyArg) -> Self {
        match p {
            PropertyArg::Background => CssProperty::Background,
            PropertyArg::BackgroundImage => CssProperty::BackgroundImage,
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<EngineConfig> {
    let Some(path) = &cli.config else {
        return Ok(EngineConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    Ok(EngineConfig::from_json(&raw)?)
}

fn emit(engine: &GradientEngine, output: &OutputArgs) -> anyhow::Result<()> {
    let payload = engine.request_copy()?;
    if output.json {
        println!("{}", payload.to_json().context("serializing payload")?);
    } else {
        println!("{}", payload.declaration(output.property.into()));
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(&cli)?;
    match cli.command {
        Command::Derive {
            gradient_type,
            rotation,
            stops,
            output,
        } => {
            if let Some(t) = gradient_type {
                config.gradient_type = t.parse::<GradientType>()?;
            }
            if let Some(r) = rotation {
                config.rotation = r;
            }
            let mut engine = GradientEngine::new(config)?;
            for literal in &stops {
                let (color, position) = parse_stop_literal(literal)?;
                engine.add_stop(&color, position)?;
            }
            emit(&engine, &output)
        }
        Command::Random {
            seed,
            spread,
            output,
        } => {
            if seed.is_some() {
                config.seed = seed;
            }
            if let Some(s) = spread {
                config.position_spread = s.into();
            }
            let mut engine = GradientEngine::new(config)?;
            engine.randomize();
            emit(&engine, &output)
        }
        Command::Types => {
            for t in GradientType::ALL {
                println!("{}\t{:<18}\t{}", t.id(), t.key(), t.css_function());
            }
            Ok(())
        }
        Command::Rotations => {
            for r in Rotation::PRESETS {
                println!("{}", r.label());
            }
            Ok(())
        }
        Command::Positions => {
            for p in POSITION_PRESETS {
                println!("{p}%");
            }
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(LoggingConfig {
        env_filter: cli.log_level.clone(),
        ..Default::default()
    });

    if let Err(e) = run(cli) {
        eprintln!("gradientforge: {e:#}");
        std::process::exit(1);
    }
}
