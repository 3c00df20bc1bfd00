use std::{process, thread, time::Instant};

use anyhow::Context;
use clap::{error::ErrorKind, Parser};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub mod cli;
pub mod consumer;
pub mod delay;
pub mod event;
pub mod producer;

use cli::Args;
use consumer::consume;
use producer::produce;
use shared::Store;

fn main() -> anyhow::Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Usage goes to stdout, like the rest of the run report.
            print!("{}", err.render());
            process::exit(2);
        }
    };

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    println!("Seed: {seed}");

    let store = Store::new(args.capacity);

    let start = Instant::now();
    simulate(&args, &store, seed)?;
    println!("Execution time: {:.9}s", start.elapsed().as_secs_f64());

    Ok(())
}

fn simulate(args: &Args, store: &Store, seed: u64) -> anyhow::Result<()> {
    let mut producer_rng = StdRng::seed_from_u64(seed);
    let mut consumer_rng = StdRng::seed_from_u64(seed.wrapping_add(1));

    thread::scope(|s| -> anyhow::Result<()> {
        let producer = thread::Builder::new()
            .spawn_scoped(s, || {
                produce(store, args.rounds, args.producer_delay(), &mut producer_rng, |event| {
                    println!("{event}")
                })
            })
            .context("cannot create producer thread")?;
        let consumer = thread::Builder::new()
            .spawn_scoped(s, || {
                consume(store, args.rounds, args.consumer_delay(), &mut consumer_rng, |event| {
                    println!("{event}")
                })
            })
            .context("cannot create consumer thread")?;

        producer.join().unwrap();
        consumer.join().unwrap();
        Ok(())
    })
}
