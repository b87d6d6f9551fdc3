//! minheap: walks through the min-heap operations and prints the heap
//! after every step.

use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use minheap::{heap_sort, Key, MinHeap};
use rand::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "minheap")]
#[command(version)]
#[command(about = "Exercise a binary min-heap of non-negative integer keys")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a heap with random keys and drain it, then run the scripted
    /// bottom-up and heap-sort cases
    Tour {
        /// Seed for the key generator (entropy when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Random keys are drawn from 0..MAX_KEY
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(i64).range(1..))]
        max_key: Key,

        /// Pause between steps, in milliseconds
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
    },

    /// Build a heap bottom-up from the given keys and print it
    Build {
        #[arg(required = true, allow_negative_numbers = true)]
        keys: Vec<Key>,
    },

    /// Heap-sort the given keys
    Sort {
        #[arg(required = true, allow_negative_numbers = true)]
        keys: Vec<Key>,
    },
}

fn join(keys: &[Key]) -> String {
    keys.iter()
        .map(|key| key.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_heap(heap: &MinHeap) {
    println!("{}", heap.flat_view());
    println!("{}", heap.tree_view());
}

/// Removes the minimum and reports whether it was `expected`.
fn remove_expected(heap: &mut MinHeap, expected: Key) -> bool {
    let removed = heap.remove_min();
    if removed == Some(expected) {
        true
    } else {
        error!(expected, ?removed, "removed key differs from the minimum");
        false
    }
}

fn build(keys: &[Key]) -> minheap::Result<()> {
    println!("\nConstructing new bottom-up heap:");
    println!("Input keys: {}", join(keys));
    let heap = MinHeap::bottom_up(keys)?;
    print_heap(&heap);
    Ok(())
}

fn sort(keys: &[Key]) -> minheap::Result<()> {
    println!("\nTesting heapsort.");
    println!("Input: [{}]", join(keys));
    println!("Output: [{}]", join(&heap_sort(keys)?));
    Ok(())
}

fn tour(seed: Option<u64>, max_key: Key, delay_ms: u64) -> minheap::Result<()> {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let pause = || {
        if delay_ms > 0 {
            thread::sleep(Duration::from_millis(delay_ms));
        }
    };

    println!("Creating new binary heap:");
    let mut heap = MinHeap::new();
    println!("{}", heap);

    for _ in 0..heap.capacity() {
        pause();
        let key = rng.gen_range(0..max_key);
        println!("\nInserting key: {}", key);
        heap.insert(key)?;
        print_heap(&heap);
    }

    println!();

    let mut previous: Option<Key> = None;
    while let Some(min) = heap.min() {
        pause();
        if let Some(previous) = previous.filter(|&previous| previous > min) {
            error!(previous, min, "minimum decreased between removals");
        }
        previous = Some(min);

        println!("\nMinimum key: {}", min);
        println!("Removing {} from heap.", min);
        remove_expected(&mut heap, min);
        print_heap(&heap);
    }
    if !heap.is_valid() {
        error!("drained heap failed its structural check");
    }

    println!("\nAttempting to remove the minimum from an empty heap:");
    match heap.remove_min() {
        None => println!("Nothing to remove."),
        Some(key) => error!(key, "empty heap returned a key"),
    }

    build(&[4, 5, 7, 1, 9, 8, 2, 3, 9, 1])?;
    build(&(1..=20).collect::<Vec<_>>())?;
    sort(&[5, 34, 56, 232, 456, 23, 545, 4, 5, 17, 34, 24, 89, 1])?;

    info!(capacity = heap.capacity(), "tour finished");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tour {
            seed,
            max_key,
            delay_ms,
        } => tour(seed, max_key, delay_ms)?,
        Commands::Build { keys } => build(&keys)?,
        Commands::Sort { keys } => sort(&keys)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_expected_checks_the_removed_key() {
        let mut heap = MinHeap::bottom_up(&[3, 1]).unwrap();
        assert!(remove_expected(&mut heap, 1));
        assert!(!remove_expected(&mut heap, 1));
        assert!(heap.is_empty());
        assert!(!remove_expected(&mut heap, 0));
    }

    #[test]
    fn cli_accepts_negative_keys() {
        let cli = Cli::try_parse_from(["minheap", "build", "4", "-2"]).unwrap();
        match cli.command {
            Commands::Build { keys } => {
                assert_eq!(keys, vec![4, -2]);
                assert!(build(&keys).is_err());
            }
            _ => panic!("expected the build subcommand"),
        }
    }
}
