use clap::Parser;

use crate::delay::DelayRange;

/// Bounded-buffer producer/consumer simulation
#[derive(Debug, Parser)]
pub struct Args {
    /// Number of slots in the shared store
    pub capacity: usize,

    /// Full passes over the store made by each role
    pub rounds: usize,

    /// Minimum production delay per slot (milliseconds)
    pub producer_min_delay_ms: u64,

    /// Maximum production delay per slot (milliseconds, exclusive)
    pub producer_max_delay_ms: u64,

    /// Minimum consumption delay per slot (milliseconds)
    pub consumer_min_delay_ms: u64,

    /// Maximum consumption delay per slot (milliseconds, exclusive)
    pub consumer_max_delay_ms: u64,

    /// Seed for the delay generators
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn producer_delay(&self) -> DelayRange {
        DelayRange {
            min_ms: self.producer_min_delay_ms,
            max_ms: self.producer_max_delay_ms,
        }
    }

    pub fn consumer_delay(&self) -> DelayRange {
        DelayRange {
            min_ms: self.consumer_min_delay_ms,
            max_ms: self.consumer_max_delay_ms,
        }
    }
}
