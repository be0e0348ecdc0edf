//! Engine-style logging example
//!
//! Demonstrates two named loggers passed to their call sites, direct
//! per-target logging, prefix broadcast and every severity level.
//!
//! Run with: cargo run --example engine_logs

use leveled_logger::prelude::*;
use leveled_logger::{failure, log};

/// Process-wide loggers, created once at startup and handed out by reference
struct EngineLog {
    core: Logger,
    client: Logger,
}

impl EngineLog {
    fn new() -> Self {
        Self {
            core: Logger::named("core"),
            client: Logger::named("client"),
        }
    }
}

fn run_game_loop(log: &Logger) {
    log.info("Entering game loop");
    log!(log, SeverityLevel::Debug, "Frame {} took {:.2} ms", 1, 16.67);
}

fn main() -> Result<()> {
    std::fs::create_dir_all("logs")?;
    let log = EngineLog::new();

    // Two ways of setting the same threshold
    log.core.set_verbose_level(-2);
    log.core.set_verbose_level(SeverityLevel::Verbose);

    println!("1. Direct and fan-out logging:");
    let console_1 = log.core.add_target(ConsoleTarget::new().with_prefix("[Target 1]"));
    let console_2 = log.core.add_target(ConsoleTarget::new().with_prefix("[Target 2]"));
    let file = log.core.add_target(FileTarget::new("logs/LogFile.log"));

    log.core.log_to(console_1, SeverityLevel::Failure, "Only console target 1!")?;
    log.core.log_to(console_2, SeverityLevel::Failure, "Only console target 2!")?;
    log.core.log(SeverityLevel::Failure, "All targets");
    failure!(log.core, "{1} and {0}", 1.5f32, "test");
    log!(log.core, SeverityLevel::Debug, "Hello {1}!", "World", "Dog");
    log.core.log_template(
        SeverityLevel::Info,
        "I would rather be {1} than {0}",
        &[&"right", &"happy"],
    )?;

    for handle in [console_1, console_2, file] {
        log.core.delete_target(handle);
    }

    println!("\n2. Shared prefix and every level:");
    log.core.add_target(ConsoleTarget::new());
    log.core.add_target(FileTarget::with_options("logs/LogFile.log", true, true, true));
    log.core.set_prefix("[ENGINE]");

    log.core.log_unleveled("Example of an unknown log severity");
    log.core.failure("Imminent program failure");
    log.core.error("Error, but program can continue");
    log.core.warning("Warning");
    log.core.important("Important messages, more relevant than regular info messages");
    log.core.info("Default level on release builds. Used for general messages");
    log.core.debug("Default level on debug builds. Used for messages that are only relevant to the developer");
    log.core.verbose("Verbose level on debug builds. Useful when developers need more information");

    println!("\n3. Client logger with label-only colors:");
    let client_console = log.client.add_target(ConsoleTarget::new().with_prefix("[GAME]"));
    log.client
        .with_target(client_console, |target| target.enable_colors(true, false));
    log.client.set_verbose_level(SeverityLevel::Info);
    run_game_loop(&log.client);

    log.core.flush()?;
    Ok(())
}
