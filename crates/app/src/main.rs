use std::{
    io::{self, BufRead},
    path::{Path, PathBuf},
    sync::Arc,
};

use carousel_core::{
    replay, AdvanceObserver, AppConfig, AutoAdvanceClock, CarouselEvent, CarouselSession,
    CarouselState, CarouselView, Key, ScriptStep, TestimonialCatalog, Transition,
};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

fn main() -> carousel_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(source) => run_interactive(&source),
        Commands::Replay { script, source } => run_replay(&script, &source),
        Commands::List(source) => run_list(&source),
    }
}

fn run_interactive(source: &Source) -> carousel_core::Result<()> {
    let catalog = source.catalog()?;
    let config = source.config()?;
    tracing::info!(interval_ms = config.carousel.interval_ms, "starting interactive carousel");

    // timer ticks only land while unpaused
    let printer = catalog.clone();
    let observer: AdvanceObserver = Arc::new(move |transition: Transition| {
        if let Some(view) = CarouselView::at(&printer, transition.to, transition.direction, false) {
            println!("\n{}", view.to_text());
        }
    });
    let session = CarouselSession::mount_with_observer(catalog, &config, Some(observer))?;

    println!("{}", session.view()?.to_text());
    println!("commands: next | prev | left | right | dot <n> | hover | leave | quit");

    for line in io::stdin().lock().lines() {
        let line = line?;
        let event = match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Event(event)) => event,
            None => {
                eprintln!("unrecognised command `{}`", line.trim());
                continue;
            }
        };
        session.dispatch(event)?;
        println!("\n{}", session.view()?.to_text());
    }

    session.unmount();
    Ok(())
}

fn run_replay(script: &Path, source: &Source) -> carousel_core::Result<()> {
    let catalog = source.catalog()?;
    let config = source.config()?;
    let steps: Vec<ScriptStep> = serde_json::from_str(&std::fs::read_to_string(script)?)?;
    tracing::info!(?script, steps = steps.len(), "replaying event script");

    let mut state = CarouselState::new(catalog.len())?;
    let mut clock = AutoAdvanceClock::new(config.carousel.interval());
    let moves = replay(&mut state, &mut clock, &steps);
    for transition in &moves {
        println!(
            "{} -> {} ({:?})",
            transition.from, transition.to, transition.direction
        );
    }

    let view = CarouselView::build(&state, &catalog)
        .ok_or_else(|| carousel_core::CarouselError::msg("carousel index outside the catalog"))?;
    println!("\n{}", view.to_text());
    Ok(())
}

fn run_list(source: &Source) -> carousel_core::Result<()> {
    let catalog = source.catalog()?;
    for (index, card) in catalog.iter().enumerate() {
        println!("[{index}] {} ({})", card.handle(), card.affiliation());
        println!("    {}", card.testimonial);
    }
    Ok(())
}

enum Command {
    Event(CarouselEvent),
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let event = match words.next()? {
        "next" | "n" => CarouselEvent::Next,
        "prev" | "p" => CarouselEvent::Previous,
        "left" => CarouselEvent::Key(Key::ArrowLeft),
        "right" => CarouselEvent::Key(Key::ArrowRight),
        "dot" => CarouselEvent::SelectIndicator(words.next()?.parse().ok()?),
        "hover" => CarouselEvent::PointerEnter,
        "leave" => CarouselEvent::PointerLeave,
        "quit" | "q" => return Some(Command::Quit),
        _ => return None,
    };
    Some(Command::Event(event))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Testimonial carousel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Mount the carousel and drive it from stdin while the timer runs.
    Run(Source),
    /// Apply a JSON script of events and waits, then print the result.
    Replay {
        /// Path to the JSON event script.
        script: PathBuf,
        #[command(flatten)]
        source: Source,
    },
    /// Print every testimonial in the catalog.
    List(Source),
}

#[derive(Args, Debug)]
struct Source {
    /// JSON array of testimonials. Defaults to the built-in list.
    #[arg(short, long)]
    testimonials: Option<PathBuf>,
    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Override the auto-advance interval.
    #[arg(long)]
    interval_ms: Option<u64>,
}

impl Source {
    fn catalog(&self) -> carousel_core::Result<TestimonialCatalog> {
        match &self.testimonials {
            Some(path) => TestimonialCatalog::load(path),
            None => Ok(TestimonialCatalog::builtin()),
        }
    }

    fn config(&self) -> carousel_core::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if let Some(interval_ms) = self.interval_ms {
            config.carousel.interval_ms = interval_ms;
        }
        Ok(config)
    }
}
