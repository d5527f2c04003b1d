use anyhow::Context;
use log::info;

use c64_emulator::{EmulatorSettings, C64};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut settings = EmulatorSettings::benchmark();
    if let Some(max_cycles) = std::env::args().nth(1) {
        settings.max_cycles = max_cycles
            .parse()
            .with_context(|| format!("invalid cycle budget '{max_cycles}'"))?;
    }

    let mut c64 = C64::new(settings);
    let metrics = c64.run().context("emulation failed")?;

    info!("Run finished: {metrics:?}");
    println!(
        "Ran {} cycles in {:?}.",
        metrics.cycles, metrics.recorded_time
    );
    println!("That is {} cycles per second.", metrics.cycles_per_second);

    Ok(())
}
