use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use photo_collage_core::{
    AppConfig, CardRegistry, CollageController, CollageError, CollageEvent, Frame, Gallery,
    InputEvent, Outcome, RenderSink,
};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

fn main() -> photo_collage_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Demo { forward, backward } => run_demo(&config, forward, backward),
        Commands::Script { path } => run_script(&config, &path),
        Commands::Layout => print_json(&layout_table(&config)),
        Commands::Photo { index } => {
            let gallery = Gallery::new(config.photos.clone())?;
            print_json(&gallery.photo_data(index)?)
        }
    }
}

fn load_config(path: Option<&Path>) -> photo_collage_core::Result<AppConfig> {
    match path {
        Some(path) => {
            tracing::info!(?path, "loading configuration");
            AppConfig::load(path)
        }
        None => Ok(AppConfig::default()),
    }
}

fn run_demo(config: &AppConfig, forward: u32, backward: u32) -> photo_collage_core::Result<()> {
    tracing::info!(forward, backward, "starting demo");

    let mut controller = CollageController::mount(config)?;
    let mut renderer = TracingRenderer::default();
    renderer.present(&controller.frame())?;

    controller.handle(CollageEvent::EnterViewport)?;
    renderer.present(&controller.frame())?;
    deliver_completions(&mut controller)?;

    for _ in 0..forward {
        controller.handle(CollageEvent::ForwardShuffleRequested)?;
        play_out(&mut controller, &mut renderer)?;
    }
    for _ in 0..backward {
        controller.handle(CollageEvent::BackwardShuffleRequested)?;
        play_out(&mut controller, &mut renderer)?;
    }

    let frame = controller.frame();
    renderer.present(&frame)?;
    controller.unmount();
    print_json(&frame)
}

fn run_script(config: &AppConfig, path: &Path) -> photo_collage_core::Result<()> {
    let raw = std::fs::read_to_string(path)?;
    let steps: Vec<ScriptStep> = serde_json::from_str(&raw)?;
    tracing::info!(?path, steps = steps.len(), "replaying script");

    let mut controller = CollageController::mount(config)?;
    let mut renderer = TracingRenderer::default();

    for step in steps {
        match step {
            ScriptStep::Wait { ms } => {
                let fired = controller.advance(ms);
                tracing::debug!(ms, fired, "waited");
            }
            ScriptStep::Input { input } => {
                let outcome = controller.handle_input(input)?;
                tracing::info!(?input, ?outcome, "input");
            }
            ScriptStep::Event { event } => {
                let outcome = controller.handle(event)?;
                tracing::info!(?event, ?outcome, "event");
            }
            ScriptStep::Complete => deliver_completions(&mut controller)?,
            ScriptStep::Settle => {
                controller.settle();
            }
        }
        renderer.present(&controller.frame())?;
    }

    let frame = controller.frame();
    controller.unmount();
    print_json(&frame)
}

/// Renders the in-flight shuffle, reports the fly animation as finished and
/// runs the remaining timer phases.
fn play_out(
    controller: &mut CollageController,
    renderer: &mut TracingRenderer,
) -> photo_collage_core::Result<()> {
    renderer.present(&controller.frame())?;
    deliver_completions(controller)?;
    controller.settle();
    renderer.present(&controller.frame())
}

fn deliver_completions(controller: &mut CollageController) -> photo_collage_core::Result<()> {
    for event in controller.frame().completions() {
        if controller.handle(event)? == Outcome::Applied {
            tracing::debug!(?event, "animation finished");
        }
    }
    Ok(())
}

fn layout_table(config: &AppConfig) -> serde_json::Value {
    let registry = CardRegistry::new(&config.collage);
    let slots: Vec<_> = registry
        .iter()
        .map(|(slot, layout)| serde_json::json!({ "slot": slot, "layout": layout }))
        .collect();
    serde_json::json!({
        "background_color": config.collage.background_color,
        "slots": slots,
    })
}

fn print_json<T: serde::Serialize>(value: &T) -> photo_collage_core::Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(CollageError::from)?;
    println!("{text}");
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Renderer that writes each frame to the log instead of a screen.
#[derive(Debug, Default)]
struct TracingRenderer {
    presented: usize,
}

impl RenderSink for TracingRenderer {
    fn present(&mut self, frame: &Frame) -> photo_collage_core::Result<()> {
        self.presented += 1;
        let front = frame.cards.last();
        tracing::info!(
            frame = self.presented,
            at = frame.time_ms,
            front = ?front.map(|props| props.id),
            photo = front.map(|props| props.photo.title.as_str()),
            "frame"
        );
        for props in &frame.cards {
            tracing::debug!(
                card = ?props.id,
                slot = ?props.slot,
                state = ?props.state,
                z = props.layout.z_index,
                photo = props.photo_index,
                "card"
            );
        }
        Ok(())
    }
}

/// One line of a replay script.
#[derive(Debug, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
enum ScriptStep {
    Wait { ms: u64 },
    Input { input: InputEvent },
    Event { event: CollageEvent },
    /// Report every animation in the current frame as finished.
    Complete,
    /// Run all pending timer phases.
    Settle,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Shuffling photo collage driver", long_about = None)]
struct Cli {
    /// JSON configuration file with collage tunables and the photo list.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Mount the collage, play the entrance and run a few shuffles.
    Demo {
        /// Number of forward shuffles to run.
        #[arg(short, long, default_value_t = 1)]
        forward: u32,
        /// Number of backward shuffles to run after the forward ones.
        #[arg(short, long, default_value_t = 1)]
        backward: u32,
    },
    /// Replay a JSON list of timed input steps.
    Script {
        /// Path to the script file.
        path: PathBuf,
    },
    /// Print the slot layout table.
    Layout,
    /// Print the photo shown for a gallery index.
    Photo {
        #[arg(allow_hyphen_values = true)]
        index: i64,
    },
}
