mod fixtures;

use std::fs::File;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use engine::Engine;

/// Which built-in graph to inject before normalizing.
#[derive(Clone, Copy, ValueEnum)]
enum Fixture {
    /// `(⋆ ⋆)`.
    EraApp,
    /// `(λx.x) ⋆`.
    IdentityApp,
    /// `(λx.λy.x) ⋆ ⋆`.
    KCombinator,
    /// The 241-cell duplication benchmark transcribed from the reference injector.
    P24,
}

/// Command line arguments, interpreted with `clap`.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// which graph to inject and normalize
    #[arg(value_enum, default_value = "era-app")]
    fixture: Fixture,

    /// arena capacity, in cells
    #[arg(long, default_value_t = 1 << 10)]
    arena_capacity: usize,

    /// traversal-stack capacity, in frames
    #[arg(long, default_value_t = 1 << 10)]
    stack_capacity: usize,

    /// write the post-normalization arena dump to this file instead of discarding it
    #[arg(long)]
    dump: Option<String>,

    /// remove colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = format!("error: {err:#}");
            eprintln!("{}", if args.no_color { message.normal() } else { message.red() });
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> Result<()> {
    // The P24 benchmark is a production-sized fixture (16.7M interactions); the default
    // capacities are only large enough for the small hand-built scenarios.
    let (arena_capacity, stack_capacity) = match args.fixture {
        Fixture::P24 => (args.arena_capacity.max(1 << 27), args.stack_capacity.max(1 << 12)),
        _ => (args.arena_capacity, args.stack_capacity),
    };

    let mut engine = Engine::new(arena_capacity, stack_capacity);
    log::info!("fixture selected, arena_capacity={arena_capacity}, stack_capacity={stack_capacity}");

    match args.fixture {
        Fixture::P24 => {
            let cells = fixtures::p24();
            engine.inject(&cells).context("injecting the P24 fixture")?;
        },
        Fixture::EraApp => fixtures::era_app(&engine),
        Fixture::IdentityApp => fixtures::identity_app(&engine),
        Fixture::KCombinator => fixtures::k_combinator(&engine),
    }

    let start = Instant::now();
    let (_result, itr, size) = engine.normalize();
    let elapsed = start.elapsed();

    println!("Itrs: {itr}");
    println!("Size: {size} nodes");
    println!("Time: {:.2} seconds", elapsed.as_secs_f64());
    let mips = if elapsed.as_secs_f64() > 0.0 { f64::from(itr) / 1_000_000.0 / elapsed.as_secs_f64() } else { 0.0 };
    println!("MIPS: {mips:.2}");

    if let Some(path) = &args.dump {
        let mut file = File::create(path).with_context(|| format!("creating dump file {path}"))?;
        engine.dump(&mut file).with_context(|| format!("writing dump to {path}"))?;
        log::info!("wrote arena dump to {path}");
    }

    Ok(())
}
