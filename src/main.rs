use crate::animations::AnimationStyle;
use crate::config::{Config, Overrides};
use crate::cycler::GlyphCycler;
use crate::dom::Document;
use crate::logging::LogDestination;
use crate::render::{HeadlessRunner, Stage, TerminalOptions, TerminalRunner};
use anyhow::Context;
use clap::Parser;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{info, warn};

mod animations;
mod config;
mod cycler;
mod dom;
mod logging;
mod render;
mod style;

/// The number of iterations a headless run prints when no limit is given: one full cycle.
const DEFAULT_HEADLESS_ITERATIONS: u64 = 3;

/// Spin a glyph in the terminal, switching between M, ♥ and L on every turn.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// The configuration file to use.
    #[arg(short, long, env = "GLYPHSPIN_CONFIG")]
    config: Option<PathBuf>,

    /// The animation bound to the animating class.
    #[arg(short, long, value_enum)]
    style: Option<AnimationStyle>,

    /// The duration of one animation iteration, in milliseconds.
    #[arg(short, long)]
    duration: Option<u64>,

    /// Frames drawn per second.
    #[arg(long)]
    fps: Option<u16>,

    /// Stop after this many iterations.
    #[arg(short = 'n', long)]
    iterations: Option<u64>,

    /// Run without a terminal, printing the glyph after every iteration.
    #[arg(long)]
    headless: bool,

    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective configuration and exit.
    #[arg(long)]
    validate_config: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides { style: self.style, duration_millis: self.duration, fps: self.fps }
    }

    fn log_destination(&self) -> LogDestination {
        match (&self.log_file, self.headless) {
            (Some(path), _) => LogDestination::File(path.clone()),
            (None, true) => LogDestination::Stderr,
            (None, false) => LogDestination::Disabled,
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(&path)?,
            None => Config::default(),
        },
    };
    config.apply(cli.overrides());
    Ok(config)
}

/// Build the document described by the configuration and hook the glyph cycler to its target.
fn build_stage(config: &Config) -> anyhow::Result<(Stage, Rc<RefCell<GlyphCycler>>)> {
    let mut document = Document::default();
    for element_config in &config.elements {
        let element = document.create_element(&element_config.id);
        let mut element = element.borrow_mut();
        if let Some(text) = &element_config.text {
            element.set_text(text.as_str());
        }
        if let Some(color) = element_config.color {
            element.set_color(color);
        }
        for class in &element_config.classes {
            element.class_list_mut().add(class);
        }
    }

    let cycler = GlyphCycler::attach(&mut document, &config.target, &config.animation.class)
        .context("cannot start the glyph cycler")?;
    let stage = Stage::new(document, config.animation.stylesheet(), config.render.foreground);
    Ok((stage, cycler))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    if cli.validate_config {
        println!("{config:#?}");
        return Ok(());
    }

    logging::init(&config.log_level, &cli.log_destination())?;
    info!(style = %config.animation.style, duration_millis = config.animation.duration_millis, "starting");
    if config.elements.iter().all(|e| e.id != config.target) {
        warn!(element = %config.target, "target element is not declared in the configuration");
    }

    let (mut stage, cycler) = build_stage(&config)?;
    if cli.headless {
        let iterations = cli.iterations.unwrap_or(DEFAULT_HEADLESS_ITERATIONS);
        let stdout = std::io::stdout();
        HeadlessRunner::new(stdout.lock(), &config.target).run(&mut stage, iterations)?;
    } else {
        let options = TerminalOptions {
            target: config.target.clone(),
            fps: config.render.fps,
            background: config.render.background,
            max_iterations: cli.iterations,
            show_status: config.render.status,
        };
        TerminalRunner::new(options).run(&mut stage)?;
    }

    let cycler = cycler.borrow();
    info!(state = %cycler.state(), iterations = cycler.iterations(), "stopped");
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("[glyphspin] error: {e:#}");
        std::process::exit(1);
    }
}
