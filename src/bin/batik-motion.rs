use std::path::PathBuf;

use anyhow::Context as _;
use batik_motion::{
    AnimationState, CpuBackend, EngineConfig, MotifKind, Player, RecordFormat, Recorder,
    RecorderPhase, RecordingOutcome, RenderBackend,
};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "batik-motion", version)]
struct Cli {
    /// Engine config JSON (defaults apply to omitted fields).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Print a frame's draw ops as JSON.
    Dump(DumpArgs),
    /// Record one full cycle of a motif.
    Record(RecordArgs),
    /// Drive the headless player from a key script.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct FrameSelect {
    /// Motif id (1, 2 or 3).
    #[arg(long, default_value_t = 1)]
    motif: u8,

    /// Frame index within the cycle (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u32,

    /// Free-running tick counter value.
    #[arg(long)]
    tick: Option<u64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    select: FrameSelect,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    #[command(flatten)]
    select: FrameSelect,
}

#[derive(Parser, Debug)]
struct RecordArgs {
    /// Motif id (1, 2 or 3).
    #[arg(long, default_value_t = 1)]
    motif: u8,

    /// Directory receiving `pattern{N}.gif`.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Write a PNG sequence instead of a GIF.
    #[arg(long, default_value_t = false)]
    png: bool,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Keys fed one per tick ('1'..'3' select a motif, 'r' records).
    #[arg(long, default_value = "")]
    keys: String,

    /// Number of ticks to run.
    #[arg(long, default_value_t = 400)]
    ticks: u64,

    /// Directory receiving recordings.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = match cli.config.as_deref() {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };

    match cli.cmd {
        Command::Frame(args) => cmd_frame(&cfg, args),
        Command::Dump(args) => cmd_dump(&cfg, args),
        Command::Record(args) => cmd_record(cfg, args),
        Command::Play(args) => cmd_play(cfg, args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn select_state(cfg: &EngineConfig, select: &FrameSelect) -> anyhow::Result<AnimationState> {
    let motif = MotifKind::from_id(select.motif)?;
    let last = cfg.timeline().last_frame();
    anyhow::ensure!(
        select.frame <= last,
        "frame {} is past the last frame {last}",
        select.frame
    );
    Ok(AnimationState {
        motif,
        frame_index: select.frame,
        tick: select.tick.unwrap_or(u64::from(select.frame)),
    })
}

fn cmd_frame(cfg: &EngineConfig, args: FrameArgs) -> anyhow::Result<()> {
    let state = select_state(cfg, &args.select)?;
    let scene = batik_motion::render(&state, cfg);
    let frame = CpuBackend::new().render_scene(&scene)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_dump(cfg: &EngineConfig, args: DumpArgs) -> anyhow::Result<()> {
    let state = select_state(cfg, &args.select)?;
    let scene = batik_motion::render(&state, cfg);
    let json = serde_json::to_string_pretty(&scene).context("serialize scene")?;
    println!("{json}");
    Ok(())
}

fn cmd_record(cfg: EngineConfig, args: RecordArgs) -> anyhow::Result<()> {
    let motif = MotifKind::from_id(args.motif)?;
    let format = if args.png {
        RecordFormat::PngSequence
    } else {
        RecordFormat::Gif
    };
    let mut player = Player::new(cfg, Recorder::new(&args.out_dir, format))?;
    player.key(char::from(b'0' + motif.id()));
    player.key('r');
    anyhow::ensure!(
        player.recorder().phase() == RecorderPhase::Recording,
        "recording did not start"
    );

    let outcome = loop {
        if let Some(outcome) = player.tick()? {
            break Some(outcome);
        }
        if player.recorder().phase() == RecorderPhase::Finalizing {
            break player.recorder_mut().wait();
        }
    };
    report(outcome)
}

fn cmd_play(cfg: EngineConfig, args: PlayArgs) -> anyhow::Result<()> {
    let mut player = Player::new(cfg, Recorder::new(&args.out_dir, RecordFormat::Gif))?;
    let mut keys = args.keys.chars();
    for _ in 0..args.ticks {
        if let Some(key) = keys.next() {
            player.key(key);
        }
        if let Some(outcome) = player.tick()? {
            report(Some(outcome))?;
        }
    }

    let state = player.state();
    eprintln!(
        "stopped at motif {} frame {} tick {}",
        state.motif.id(),
        state.frame_index,
        state.tick
    );
    if player.recorder().phase() != RecorderPhase::Idle {
        eprintln!("recording still in progress; playing on until its cycle completes");
        while player.recorder().is_recording() {
            if let Some(outcome) = player.tick()? {
                return report(Some(outcome));
            }
        }
        report(player.recorder_mut().wait())?;
    }
    Ok(())
}

fn report(outcome: Option<RecordingOutcome>) -> anyhow::Result<()> {
    match outcome {
        Some(RecordingOutcome::Finished { path, .. }) => {
            eprintln!("wrote {}", path.display());
            Ok(())
        }
        Some(RecordingOutcome::Cancelled { motif, frames }) => {
            eprintln!("recording {} cancelled after {frames} frames", motif.name());
            Ok(())
        }
        Some(RecordingOutcome::Failed { motif, error }) => {
            Err(anyhow::Error::new(error).context(format!("recording {} failed", motif.name())))
        }
        None => Ok(()),
    }
}
