//! Sprite sheet playback utility.
//!
//! Provides two subcommands:
//! - `inspect`: print the frames, durations and tags of an exported sheet.
//! - `simulate`: drive a playback with a fixed time step and print the frame
//!   shown after every step, optionally as a JSON trace.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::info;
use serde::Serialize;
use sheetplay::prelude::*;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Inspect(opts) => run_inspect(opts),
		Command::Simulate(opts) => run_simulate(opts),
	}
}

#[derive(Parser)]
#[command(name = "sheet_player")]
#[command(author = "sheetplay project")]
#[command(version)]
#[command(about = "Inspect exported sprite sheets and simulate their playback", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Print frames and tags of an exported sheet
	Inspect(InspectArgs),
	/// Step a playback with a fixed delta and print the frames shown
	Simulate(SimulateArgs),
}

#[derive(Args)]
struct DecodeArgs {
	/// Clamp out-of-range tags and give zero-duration frames 100ms
	#[arg(long, default_value_t = false)]
	lenient: bool,

	/// Ignore the tags in the file
	#[arg(long, default_value_t = false, conflicts_with = "lenient")]
	frames_only: bool,
}

impl DecodeArgs {
	fn config(&self) -> DecodeConfig {
		if self.lenient {
			DecodeConfig::lenient()
		} else if self.frames_only {
			DecodeConfig::frames_only()
		} else {
			DecodeConfig::default()
		}
	}
}

#[derive(Args)]
struct InspectArgs {
	/// Path to an exported sheet description (.json)
	#[arg(value_name = "FILE")]
	file: PathBuf,

	#[command(flatten)]
	decode: DecodeArgs,
}

#[derive(Args)]
struct SimulateArgs {
	/// Path to an exported sheet description (.json)
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Play the tag with this name
	#[arg(short, long, value_name = "NAME", conflicts_with = "tag_id")]
	tag: Option<String>,

	/// Play the tag with this id
	#[arg(long, value_name = "ID")]
	tag_id: Option<usize>,

	/// Playback speed multiplier, negative values play backwards
	#[arg(short, long, value_name = "SPEED", default_value_t = 1.0, allow_negative_numbers = true)]
	speed: f32,

	/// Time step fed to each advance, in milliseconds
	#[arg(long, value_name = "MS", default_value_t = 1000.0 / 60.0)]
	step_ms: f32,

	/// Number of steps to simulate
	#[arg(short = 'n', long, value_name = "COUNT", default_value_t = 60)]
	steps: usize,

	/// Print a JSON trace instead of text
	#[arg(long, default_value_t = false)]
	json: bool,

	#[command(flatten)]
	decode: DecodeArgs,
}

#[derive(Serialize)]
struct TraceEntry {
	step: usize,
	time_ms: f32,
	frame: usize,
	tag: Option<String>,
	direction: Direction,
	remaining_repeats: Option<u32>,
	timer_ms: f64,
}

#[derive(Serialize)]
struct Trace<'a> {
	file: String,
	speed: f32,
	step_ms: f32,
	start_frame: usize,
	steps: &'a [TraceEntry],
}

fn load_sheet(file: &Path, decode: &DecodeArgs) -> Result<Sheet> {
	let sheet = Sheet::open_with_config(file, &decode.config())
		.with_context(|| format!("Failed to load sheet {}", file.display()))?;
	info!("Loaded {}: {}", file.display(), sheet);
	Ok(sheet)
}

fn run_inspect(args: InspectArgs) -> Result<()> {
	let sheet = load_sheet(&args.file, &args.decode)?;
	let meta = sheet.meta();

	println!("File: {}", args.file.display());
	println!("Image: {} ({}x{})", meta.image.as_deref().unwrap_or("<unset>"), meta.width, meta.height);
	println!(
		"Frames: {} | tags: {} | total duration: {}ms",
		sheet.frame_count(),
		sheet.tag_count(),
		sheet.total_duration_ms()
	);

	println!();
	println!("Frames:");
	for (index, frame) in sheet.frames().iter().enumerate() {
		println!("  [{index:>4}] {frame}");
	}

	if sheet.tags().is_empty() {
		return Ok(());
	}

	println!();
	println!("Tags:");
	for tag in sheet.tags() {
		let pass = sheet.tag_duration_ms(tag).unwrap_or(0);
		println!("  {tag} ({pass}ms per pass)");
	}

	Ok(())
}

fn run_simulate(args: SimulateArgs) -> Result<()> {
	if !args.step_ms.is_finite() || args.step_ms <= 0.0 {
		bail!("step-ms must be a positive number");
	}
	if !args.speed.is_finite() {
		bail!("speed must be a finite number");
	}

	let sheet = load_sheet(&args.file, &args.decode)?;

	let mut playback = if let Some(name) = args.tag.as_deref() {
		Playback::for_tag(&sheet, name)?
	} else if let Some(id) = args.tag_id {
		Playback::for_tag(&sheet, id)?
	} else {
		Playback::simple(&sheet)
	};
	playback.set_speed(args.speed);

	let start_frame = playback.current_frame();
	let step_seconds = args.step_ms / 1000.0;
	let mut trace = Vec::with_capacity(args.steps);

	for step in 1..=args.steps {
		let frame = playback.advance(step_seconds);
		trace.push(TraceEntry {
			step,
			time_ms: step as f32 * args.step_ms,
			frame,
			tag: playback
				.current_tag_id()
				.and_then(|id| sheet.find_tag_by_id(id))
				.map(|tag| tag.name.clone()),
			direction: playback.direction(),
			remaining_repeats: playback.remaining_repeats(),
			timer_ms: playback.timer_ms(),
		});
	}

	if args.json {
		let output = Trace {
			file: args.file.display().to_string(),
			speed: args.speed,
			step_ms: args.step_ms,
			start_frame,
			steps: &trace,
		};
		println!("{}", serde_json::to_string_pretty(&output)?);
		return Ok(());
	}

	println!("Start frame: {start_frame} | speed: {} | step: {}ms", args.speed, args.step_ms);
	for entry in &trace {
		let repeats = match entry.remaining_repeats {
			Some(count) => count.to_string(),
			None => "loop".to_string(),
		};
		println!(
			"{:>5} {:>9.1}ms  frame {:>4}  {:<7}  tag {:<12}  repeats {}",
			entry.step,
			entry.time_ms,
			entry.frame,
			entry.direction.to_string(),
			entry.tag.as_deref().unwrap_or("-"),
			repeats
		);
	}

	Ok(())
}
