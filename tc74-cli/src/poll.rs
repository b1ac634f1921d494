use std::io::Write;
use std::time::Duration;

use embedded_hal::delay::DelayNs;
use tc74::poll::DEFAULT_POLL_INTERVAL;
use tc74::{I2cBus, PollOutcome, Tc74};

#[derive(Debug, clap::Args)]
pub(crate) struct PollArgs {
    /// Whether to check the standby state before each read.
    #[arg(short, long, default_value = "skip-standby")]
    pub(crate) mode: PollMode,
    /// Milliseconds to wait between polls.
    #[arg(short, long, default_value_t = DEFAULT_POLL_INTERVAL.as_millis() as u64)]
    pub(crate) interval_ms: u64,
    /// Stop after this many polls (including skipped ones). Runs forever if absent.
    #[arg(short, long)]
    pub(crate) count: Option<u64>,
}

impl PollArgs {
    fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub(crate) enum PollMode {
    /// Read every time.
    Always,
    /// Only read while the sensor reports it is active.
    #[value(aliases = ["skip"])]
    SkipStandby,
}

impl From<PollMode> for tc74::PollMode {
    fn from(value: PollMode) -> tc74::PollMode {
        match value {
            PollMode::Always => tc74::PollMode::Always,
            PollMode::SkipStandby => tc74::PollMode::SkipStandby,
        }
    }
}

/// Poll the sensor, writing each reading to `out`.
///
/// Failed polls are logged and the loop carries on. Only a failure to write
/// the output ends it early.
pub(crate) fn run<B: I2cBus, D: DelayNs>(
    sensor: &mut Tc74<B, D>,
    args: &PollArgs,
    out: &mut impl Write,
) -> std::io::Result<()> {
    let mode = args.mode.into();
    let mut polls = 0;
    loop {
        match sensor.poll(mode) {
            Ok(PollOutcome::Reading(reading)) => {
                writeln!(out, "{reading}")?;
                out.flush()?;
            }
            Ok(PollOutcome::Skipped(state)) => {
                log::info!("skipping read, sensor state is {state:?}");
            }
            Err(e) => log::warn!("poll failed: {e}"),
        }
        polls += 1;
        if args.count.is_some_and(|count| polls >= count) {
            return Ok(());
        }
        std::thread::sleep(args.interval());
    }
}
