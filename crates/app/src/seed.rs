//! Seed selection for the desktop app. `--seed N` pins a run for replay;
//! otherwise a process-unique seed is mixed from the clock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedSource {
    Flag(u64),
    Generated(u64),
}

impl SeedSource {
    pub fn value(self) -> u64 {
        match self {
            Self::Flag(seed) | Self::Generated(seed) => seed,
        }
    }
}

static SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
    splitmix(nanos as u64 ^ (nanos >> 64) as u64 ^ pid.rotate_left(17) ^ counter.rotate_left(7))
}

pub fn resolve_seed_from_args(args: &[String], generated: u64) -> Result<SeedSource, String> {
    let mut chosen = None;
    let mut iter = args.iter().skip(1);
    while let Some(argument) = iter.next() {
        let value = if argument == "--seed" {
            let Some(value) = iter.next() else {
                return Err("missing value for --seed".to_string());
            };
            value.as_str()
        } else if let Some(value) = argument.strip_prefix("--seed=") {
            value
        } else {
            continue;
        };

        if chosen.is_some() {
            return Err("--seed given more than once".to_string());
        }
        chosen =
            Some(value.parse::<u64>().map_err(|_| format!("seed '{value}' is not a number"))?);
    }

    Ok(match chosen {
        Some(seed) => SeedSource::Flag(seed),
        None => SeedSource::Generated(generated),
    })
}

fn splitmix(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
