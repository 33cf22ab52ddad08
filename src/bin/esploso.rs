use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use esploso::{Arrival, Assembly, LayerStage, Lerp, MemoryStage, Stage, TimeMs, TimelineEvent, Vec3};

#[derive(Parser, Debug)]
#[command(name = "esploso", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and validate an assembly configuration.
    Validate(ValidateArgs),
    /// Print each component's exploded and assembled placement.
    Snapshot(SnapshotArgs),
    /// Play the timeline against a headless stage with a simulated clock.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input assembly JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SnapshotArgs {
    /// Input assembly JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Use the layered (2D) variant instead of the solid (3D) one.
    #[arg(long)]
    flat: bool,

    /// Which snapshot to take.
    #[arg(long, value_enum, default_value_t = ViewChoice::Exploded)]
    view: ViewChoice,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input assembly JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Use the layered (2D) variant instead of the solid (3D) one.
    #[arg(long)]
    flat: bool,

    /// Speed multiplier (> 0).
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Simulated tick rate in frames per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ViewChoice {
    Exploded,
    Assembled,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(&args),
        Command::Snapshot(args) => cmd_snapshot(&args),
        Command::Play(args) => cmd_play(&args),
    }
}

fn load_assembly(path: &PathBuf) -> anyhow::Result<Assembly> {
    Assembly::from_path(path).with_context(|| format!("load assembly '{}'", path.display()))
}

fn cmd_validate(args: &ValidateArgs) -> anyhow::Result<()> {
    let assembly = load_assembly(&args.in_path)?;
    assembly.validate()?;
    println!("ok: {} components", assembly.component_count());
    Ok(())
}

fn cmd_snapshot(args: &SnapshotArgs) -> anyhow::Result<()> {
    let assembly = load_assembly(&args.in_path)?;
    if args.flat {
        let mut stage = LayerStage::from_components(assembly.components());
        let mut timeline = assembly.timeline(&stage)?;
        match args.view {
            ViewChoice::Exploded => timeline.snapshot_exploded(&mut stage),
            ViewChoice::Assembled => timeline.snapshot_assembled(&mut stage),
        }
        for entry in timeline.entries() {
            match stage.layer(&entry.id) {
                Some(layer) => println!(
                    "{:<24} ({:.1}, {:.1})  z={} opacity={:.2}",
                    entry.id, layer.position.x, layer.position.y, layer.z_index, layer.opacity
                ),
                None => println!("{:<24} (unresolved)", entry.id),
            }
        }
    } else {
        let mut stage = MemoryStage::<Vec3>::new();
        for component in assembly.components() {
            stage.insert(component.filename.clone(), Vec3::ZERO);
        }
        let mut timeline = assembly.timeline(&stage)?;
        match args.view {
            ViewChoice::Exploded => timeline.snapshot_exploded(&mut stage),
            ViewChoice::Assembled => timeline.snapshot_assembled(&mut stage),
        }
        for entry in timeline.entries() {
            match stage.position(&entry.id) {
                Some(p) => println!("{:<24} ({:.1}, {:.1}, {:.1})", entry.id, p.x, p.y, p.z),
                None => println!("{:<24} (unresolved)", entry.id),
            }
        }
    }
    Ok(())
}

fn cmd_play(args: &PlayArgs) -> anyhow::Result<()> {
    if !args.speed.is_finite() || args.speed <= 0.0 {
        anyhow::bail!("--speed must be > 0");
    }
    if !args.fps.is_finite() || args.fps <= 0.0 {
        anyhow::bail!("--fps must be > 0");
    }
    let assembly = load_assembly(&args.in_path)?;
    if args.flat {
        let mut stage = LayerStage::from_components(assembly.components());
        run_play(&assembly, &mut stage, args.speed, args.fps)
    } else {
        let mut stage = MemoryStage::<Vec3>::new();
        for component in assembly.components() {
            stage.insert(component.filename.clone(), Vec3::ZERO);
        }
        run_play(&assembly, &mut stage, args.speed, args.fps)
    }
}

fn run_play<V>(
    assembly: &Assembly,
    stage: &mut dyn Stage<Pos = V>,
    speed: f64,
    fps: f64,
) -> anyhow::Result<()>
where
    V: Arrival + Lerp,
{
    let mut timeline = assembly.timeline(stage)?;
    timeline.set_speed(speed);
    let total = timeline.state().total_components;
    let dt = 1000.0 / fps;

    let mut now = TimeMs(0.0);
    let mut events = timeline.play(now, stage);
    loop {
        for event in &events {
            print_event(now, total, event);
        }
        if !timeline.is_playing() {
            break;
        }
        now = now.advanced_by(dt);
        events = timeline.tick(now, stage);
    }
    Ok(())
}

fn print_event(now: TimeMs, total: usize, event: &TimelineEvent) {
    match event {
        TimelineEvent::ComponentStarted { index, name } => {
            println!("[{:>9.1}ms] start    #{}/{} {}", now.0, index + 1, total, name);
        }
        TimelineEvent::ComponentCompleted { index } => {
            println!("[{:>9.1}ms] complete #{}/{}", now.0, index + 1, total);
        }
        TimelineEvent::Completed => {
            println!("[{:>9.1}ms] assembly complete", now.0);
        }
    }
}
