//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! The walkthrough itself lives in the `demo` module.

use clap::Parser;

use fixarr::types::Element;

/// fixarr - walk a fixed-capacity array through every operation
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "fixarr", version, about, long_about = None)]
pub struct Cli {
    /// Number of starting elements, seeded with 0, 1, 2, ...
    #[arg(long, default_value_t = 5)]
    pub len: usize,

    /// Free slots allocated past the starting elements
    #[arg(long, default_value_t = 1)]
    pub headroom: usize,

    /// Index to insert at
    #[arg(long, default_value_t = 3)]
    pub insert_at: usize,

    /// Value to insert
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    pub insert_value: Element,

    /// Index to remove
    #[arg(long, default_value_t = 1)]
    pub remove_at: usize,

    /// Value to search for
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    pub target: Element,

    /// Slots to add when growing
    #[arg(long, default_value_t = 3)]
    pub extend: usize,

    /// Seed for random access (OS entropy when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Largest capacity the array may reach
    #[arg(long)]
    pub max_capacity: Option<usize>,
}
