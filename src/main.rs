use anyhow::{Context, Result};
use bus::{ChannelSink, Envelope};
use clap::Parser;
use platform::Host;
use runtime_timer::{Clock, SystemClock, VirtualClock};
use session_input::{DEFAULT_TAG, Scenario, format_envelope};
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::thread;
use widget::SessionInput;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "session_input")]
#[command(about = "Replay a typing scenario against a <session-input> element")]
struct Cli {
    /// Scenario file (TOML)
    scenario: PathBuf,

    /// Wait in wall-clock time instead of jumping between deadlines
    #[arg(long)]
    realtime: bool,

    /// Also print the native events the element relays
    #[arg(long)]
    native: bool,

    /// Tag name to define, overriding the scenario's
    #[arg(long)]
    tag: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let scenario = Scenario::load(&cli.scenario)?;
    let tag = cli
        .tag
        .clone()
        .or_else(|| scenario.tag.clone())
        .unwrap_or_else(|| DEFAULT_TAG.to_string());

    let (sink, rx) = bus::channel();
    let native = cli.native;
    let printer = thread::spawn(move || print_envelopes(rx, native));

    let result = if cli.realtime {
        replay(&scenario, SystemClock::new(), sink, &tag)
    } else {
        replay(&scenario, VirtualClock::new(), sink, &tag)
    };

    // The host (and its sender) is gone by now, so the printer sees the channel close.
    let printed = printer
        .join()
        .map_err(|_| anyhow::anyhow!("printer thread panicked"))?;
    result.with_context(|| format!("replaying {}", cli.scenario.display()))?;
    log::info!("{printed} event(s)");
    Ok(())
}

fn replay<C: Clock>(scenario: &Scenario, clock: C, sink: ChannelSink, tag: &str) -> Result<()> {
    let mut host: Host<SessionInput, C, ChannelSink> = Host::new(clock, sink);
    session_input::run(scenario, &mut host, tag)?;
    Ok(())
}

fn print_envelopes(rx: Receiver<Envelope>, native: bool) -> usize {
    let mut printed = 0;
    for envelope in rx {
        if let Some(line) = format_envelope(&envelope, native) {
            println!("{line}");
            printed += 1;
        }
    }
    printed
}
