//! Turnstile Console Session
//!
//! This demo walks a coin-operated turnstile interactively.
//!
//! Key concepts:
//! - Cursor-based pattern building
//! - Entry actions with input
//! - Graph lints before running
//! - Recovering from a dead end with `jump`
//!
//! Run with: cargo run --example turnstile
//! Set RUST_LOG=statewalk=debug to watch every builder and engine step.

use statewalk::builder::BuildError;
use statewalk::console::ConsoleSession;
use statewalk::runtime::StateMachine;
use statewalk::state_enum;
use stillwater::validation::Validation;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

state_enum! {
    enum Turnstile {
        Locked => "Arms are locked",
        Unlocked => "Arms turn freely",
        Fred => "Fred Flintstone is stuck in the arms",
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut machine = StateMachine::<Turnstile>::create_with(|p| -> Result<(), BuildError> {
        p.initial(Turnstile::Locked)?
            .t("push")?
            .t("coin")?
            .s(Turnstile::Unlocked)?
            .t("coin")?
            .t("push")?
            .s(Turnstile::Locked)?
            .t_to("squeeze", Turnstile::Fred)?;
        Ok(())
    })?;

    machine
        .on_enter(Turnstile::Unlocked, || println!("  *click* the arms are free"))
        .on_enter_with_input(Turnstile::Fred, |transition, input| {
            println!("  Yabba dabba doo! ({} with '{}')", transition.name, input)
        });

    if let Validation::Failure(findings) = machine.pattern().validate() {
        println!("Lints for this pattern:");
        for finding in findings.iter() {
            println!("  - {finding}");
        }
        println!();
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    ConsoleSession::new(&mut machine)
        .label("coin-operated turnstile")
        .run(stdin.lock(), stdout.lock())?;
    Ok(())
}
