use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use trajectory_sim::core::kinematics::{flight_summary, sample_trajectory};
use trajectory_sim::core::plot::write_trajectory_chart;
use trajectory_sim::core::{
    Clock, LaunchParameters, ManualClock, RecordingRenderer, SimConfig, SimError,
    SimulationController, SystemClock, TrajectorySample,
};

/// Longest playback `--animate` will step through.
const MAX_PLAYBACK_FRAMES: u64 = 1_000_000;

/// Points per curve when the chart is drawn without playback.
const CHART_SAMPLES: usize = 256;

/// Ideal projectile flight: time of flight, range and apex, with optional
/// frame-by-frame playback and a trajectory chart.
#[derive(Parser, Debug)]
#[command(name = "trajectory_sim", version)]
struct Cli {
    /// Launch speed in m/s.
    #[arg(long)]
    speed: Option<f64>,

    /// Launch angle in degrees above the horizontal.
    #[arg(long, allow_negative_numbers = true)]
    angle: Option<f64>,

    /// Starting x coordinate in metres.
    #[arg(long, allow_negative_numbers = true)]
    x0: Option<f64>,

    /// Starting height in metres.
    #[arg(long, allow_negative_numbers = true)]
    y0: Option<f64>,

    /// TOML file with gravity, canvas and default launch settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Play the flight back on a fixed frame clock and print every readout.
    #[arg(long)]
    animate: bool,

    /// Pace playback against the wall clock instead of stepping instantly.
    #[arg(long, requires = "animate")]
    real_time: bool,

    /// Frames per second used for playback.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=1000))]
    fps: u32,

    /// Write a trajectory chart (SVG for `.svg`, bitmap otherwise).
    #[arg(long)]
    plot: Option<PathBuf>,
}

impl Cli {
    fn has_launch_flags(&self) -> bool {
        self.speed.is_some() || self.angle.is_some() || self.x0.is_some() || self.y0.is_some()
    }
}

fn read_f64(prompt: &str) -> Result<f64, SimError> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line)?;
        if bytes == 0 {
            return Err(SimError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended unexpectedly",
            )));
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn get_inputs_from_user(defaults: LaunchParameters) -> Result<LaunchParameters, SimError> {
    Ok(LaunchParameters {
        angle_deg: read_f64("Angle (degrees): ")?,
        speed_mps: read_f64("Velocity (m/s): ")?,
        y0_m: read_f64("Height (m): ")?,
        x0_m: defaults.x0_m,
    })
}

fn get_inputs_from_args(cli: &Cli, defaults: LaunchParameters) -> LaunchParameters {
    LaunchParameters {
        speed_mps: cli.speed.unwrap_or(defaults.speed_mps),
        angle_deg: cli.angle.unwrap_or(defaults.angle_deg),
        x0_m: cli.x0.unwrap_or(defaults.x0_m),
        y0_m: cli.y0.unwrap_or(defaults.y0_m),
    }
}

fn playback_frames(time_of_flight_s: f64, fps: u32) -> Result<u64, SimError> {
    let frames = (time_of_flight_s * f64::from(fps)).ceil();
    if frames.is_nan() || frames > MAX_PLAYBACK_FRAMES as f64 {
        return Err(SimError::PlaybackTooLong {
            frames,
            limit: MAX_PLAYBACK_FRAMES,
        });
    }
    Ok(frames as u64)
}

/// Launches once and ticks at `fps` until the projectile lands. Frame times are
/// computed from the frame index so they never stall on large timestamps.
fn play_back<C: Clock + Copy>(
    config: SimConfig,
    params: LaunchParameters,
    fps: u32,
    clock: C,
    real_time: bool,
    print_frames: bool,
) -> Result<SimulationController<RecordingRenderer, C>, SimError> {
    let renderer = RecordingRenderer::bounded(config.max_trajectory_samples);
    let mut sim = SimulationController::new(config, renderer, clock);
    sim.launch(params)?;

    let (start_s, total_s) = match sim.flight() {
        Some(flight) => (flight.start_time_s, flight.total_flight_time_s),
        None => return Ok(sim),
    };
    let frames = playback_frames(total_s, fps)?;
    let frame_dt = 1.0 / f64::from(fps);

    // one spare frame covers rounding in start + n * dt
    for frame in 0..=frames + 1 {
        let scheduled = start_s + frame as f64 * frame_dt;
        let now = if real_time {
            if frame > 0 {
                thread::sleep(Duration::from_secs_f64(frame_dt));
            }
            clock.now().max(scheduled)
        } else {
            scheduled
        };
        if sim.tick(now).is_none() {
            break;
        }
        if print_frames {
            println!("{}", sim.renderer().readout);
        }
    }
    Ok(sim)
}

fn chart_samples(
    params: LaunchParameters,
    gravity_mps2: f64,
    time_of_flight_s: f64,
) -> Vec<TrajectorySample> {
    sample_trajectory(params, gravity_mps2, time_of_flight_s, CHART_SAMPLES)
        .into_iter()
        .map(|(x_m, y_m)| TrajectorySample { x_m, y_m, flight: 1 })
        .collect()
}

fn run() -> Result<(), SimError> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };

    let params = if cli.has_launch_flags() {
        get_inputs_from_args(&cli, config.defaults)
    } else {
        get_inputs_from_user(config.defaults)?
    };

    let gravity = config.gravity_mps2;
    let summary = flight_summary(params, gravity)?;

    let played: Vec<TrajectorySample> = if !cli.animate {
        Vec::new()
    } else if cli.real_time {
        let sim = play_back(config, params, cli.fps, SystemClock, true, true)?;
        sim.trajectory().iter().copied().collect()
    } else {
        let clock = ManualClock::new(0.0);
        let sim = play_back(config, params, cli.fps, &clock, false, true)?;
        sim.trajectory().iter().copied().collect()
    };

    if let Some(path) = &cli.plot {
        let samples = if played.is_empty() {
            chart_samples(params, gravity, summary.time_of_flight_s)
        } else {
            played
        };
        write_trajectory_chart(path, &samples)?;
        println!("Chart written to {}", path.display());
    }

    println!("\nTime of flight: {:.4} s", summary.time_of_flight_s);
    println!("Horizontal distance: {:.4} m", summary.range_m);
    println!(
        "Apex: {:.4} m at x = {:.4} m (t = {:.4} s)",
        summary.apex_y_m, summary.apex_x_m, summary.apex_time_s
    );

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trajectory_sim::core::SimulationMode;

    #[test]
    fn missing_flags_fall_back_to_defaults() {
        let cli = Cli::parse_from(["trajectory_sim", "--angle", "-15"]);
        let params = get_inputs_from_args(&cli, LaunchParameters::default());

        assert!(cli.has_launch_flags());
        assert_eq!(params, LaunchParameters::new(10.0, -15.0, 0.0, 0.0));
    }

    #[test]
    fn rejects_zero_fps() {
        assert!(Cli::try_parse_from(["trajectory_sim", "--fps", "0"]).is_err());
    }

    #[test]
    fn negative_height_reaches_validation() {
        let cli = Cli::parse_from(["trajectory_sim", "--y0", "-1"]);
        let params = get_inputs_from_args(&cli, LaunchParameters::default());

        let err = flight_summary(params, SimConfig::default().gravity_mps2)
            .expect_err("launch below ground should be rejected");
        assert!(matches!(err, SimError::BelowGround(_)));
    }

    #[test]
    fn real_time_requires_animate() {
        assert!(Cli::try_parse_from(["trajectory_sim", "--real-time"]).is_err());
        assert!(Cli::try_parse_from(["trajectory_sim", "--animate", "--real-time"]).is_ok());
    }

    #[test]
    fn playback_runs_until_landing() {
        let clock = ManualClock::new(0.0);
        let sim = play_back(
            SimConfig::default(),
            LaunchParameters::new(10.0, 45.0, 0.0, 0.0),
            60,
            &clock,
            false,
            false,
        )
        .expect("playback should succeed");

        assert_eq!(sim.mode(), SimulationMode::Waiting);
        let last = sim.trajectory().back().copied().expect("samples recorded");
        assert!(last.y_m.abs() < 1e-9);
        // 1.4416 s at 60 fps: frames 0..=86 plus the clamped landing frame
        assert_eq!(sim.trajectory().len(), 88);
        assert_eq!(sim.renderer().segments.len(), 88);
    }

    #[test]
    fn playback_keeps_renderer_within_sample_cap() {
        let clock = ManualClock::new(0.0);
        let config = SimConfig {
            max_trajectory_samples: 3,
            ..SimConfig::default()
        };
        let sim = play_back(
            config,
            LaunchParameters::new(10.0, 45.0, 0.0, 0.0),
            60,
            &clock,
            false,
            false,
        )
        .expect("playback should succeed");

        assert_eq!(sim.trajectory().len(), 3);
        assert!(sim.renderer().segments.len() <= 3);
    }

    #[test]
    fn refuses_playback_past_frame_limit() {
        for speed in [1.0e8, 1.0e16, 1.0e300] {
            let clock = ManualClock::new(0.0);
            let result = play_back(
                SimConfig::default(),
                LaunchParameters::new(speed, 45.0, 0.0, 0.0),
                60,
                &clock,
                false,
                false,
            );
            assert!(
                matches!(result, Err(SimError::PlaybackTooLong { .. })),
                "speed {speed} should exceed the frame limit"
            );
        }
    }

    #[test]
    fn real_time_playback_lands_on_the_wall_clock() {
        let sim = play_back(
            SimConfig::default(),
            LaunchParameters::new(1.0, 90.0, 0.0, 0.0),
            1000,
            SystemClock,
            true,
            false,
        )
        .expect("playback should succeed");

        assert_eq!(sim.mode(), SimulationMode::Waiting);
        let last = sim.trajectory().back().copied().expect("samples recorded");
        assert!(last.y_m.abs() < 1e-9);
    }

    #[test]
    fn chart_samples_span_the_whole_flight() {
        let params = LaunchParameters::new(10.0, 45.0, 0.0, 0.0);
        let summary = flight_summary(params, 9.81).expect("calculation should succeed");
        let samples = chart_samples(params, 9.81, summary.time_of_flight_s);

        assert_eq!(samples.len(), CHART_SAMPLES + 1);
        assert!(samples.iter().all(|s| s.flight == 1));
        let last = samples.last().copied().expect("samples drawn");
        assert!((last.x_m - summary.range_m).abs() < 1e-9);
        assert!(last.y_m.abs() < 1e-9);
    }
}
