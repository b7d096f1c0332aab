//! The array walkthrough.
//!
//! Allocates, sums, prints, samples, inserts, removes, searches, grows and
//! releases one array in that fixed order, writing each result to `out`.

use std::io::{self, Write};

use fixarr::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::cli::Cli;

/// Errors that stop the walkthrough.
#[derive(Debug, Error)]
pub enum DemoError {
    /// The flags describe an impossible array.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// An array operation rejected its arguments or could not allocate.
    #[error(transparent)]
    Array(#[from] ArrayError),
    /// `--len` asks for counting values past the largest element.
    #[error("--len {len} is too large: counting values stop at {}", Element::MAX)]
    TooManyValues { len: usize },
    /// Writing the report failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Build the array config described by the flags.
pub fn config_from(cli: &Cli) -> ArrayConfig {
    let mut config = ArrayConfig::new(cli.len.saturating_add(cli.headroom));
    if let Some(max_capacity) = cli.max_capacity {
        config = config.with_max_capacity(max_capacity);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    config
}

/// `0, 1, ..., len - 1` as elements.
fn counting_values(len: usize) -> Result<Vec<Element>, DemoError> {
    let Some(last) = len.checked_sub(1) else {
        return Ok(Vec::new());
    };
    let last = Element::try_from(last).map_err(|_| DemoError::TooManyValues { len })?;
    Ok((0..=last).collect())
}

/// Run the walkthrough, drawing random indices from `source`.
pub fn run<S, W>(cli: &Cli, source: &mut S, out: &mut W) -> Result<(), DemoError>
where
    S: IndexSource + ?Sized,
    W: Write + ?Sized,
{
    let config = config_from(cli);
    config.validate()?;
    debug!(?config, "starting walkthrough");

    let values = counting_values(cli.len)?;
    let mut array = FixedArray::from_slice_with_config(&values, &config)?;

    writeln!(out, "sum of elements: {}", array.sum())?;
    writeln!(out, "{array}")?;

    let sampled = array.sample_random(source)?;
    writeln!(out, "random element: {sampled}")?;

    array.insert(cli.insert_at, cli.insert_value)?;
    writeln!(
        out,
        "after inserting {} at index {}:",
        cli.insert_value, cli.insert_at
    )?;
    writeln!(out, "{array}")?;

    array.remove(cli.remove_at)?;
    writeln!(out, "after removing index {}:", cli.remove_at)?;
    writeln!(out, "{array}")?;

    let index = array.find_or_sentinel(cli.target);
    writeln!(out, "index of {}: {index}", cli.target)?;

    let array = array.grow(cli.extend).map_err(GrowError::into_error)?;
    writeln!(out, "after growing by {}:", cli.extend)?;
    writeln!(out, "array: {}", array.format_slots())?;

    array.release();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    struct Fixed(usize);

    impl IndexSource for Fixed {
        fn pick(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    fn run_with(args: &[&str], pick: usize) -> Result<String, DemoError> {
        let cli = Cli::parse_from(std::iter::once("fixarr").chain(args.iter().copied()));
        let mut out = Vec::new();
        run(&cli, &mut Fixed(pick), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn default_walkthrough_report() {
        let report = run_with(&[], 2).unwrap();
        let expected = "\
sum of elements: 10
array: 0 1 2 3 4
random element: 2
after inserting 5 at index 3:
array: 0 1 2 5 3 4
after removing index 1:
array: 0 2 5 3 4
index of 5: 2
after growing by 3:
array: 0 2 5 3 4 0 0 0
";
        assert_eq!(report, expected);
    }

    #[test]
    fn missing_target_reports_sentinel() {
        let report = run_with(&["--target", "42"], 0).unwrap();
        assert!(report.contains("index of 42: -1"));
    }

    #[test]
    fn no_headroom_makes_insert_fail() {
        let err = run_with(&["--headroom", "0"], 0).unwrap_err();
        assert!(matches!(
            err,
            DemoError::Array(ArrayError::Full { capacity: 5 })
        ));
    }

    #[test]
    fn empty_array_cannot_be_sampled() {
        let err = run_with(&["--len", "0"], 0).unwrap_err();
        assert!(matches!(err, DemoError::Array(ArrayError::Empty)));
    }

    #[test]
    fn out_of_range_remove_is_reported() {
        let err = run_with(&["--remove-at", "9"], 0).unwrap_err();
        assert!(matches!(
            err,
            DemoError::Array(ArrayError::IndexOutOfRange { index: 9, len: 6 })
        ));
    }

    #[test]
    fn capacity_limit_is_validated_up_front() {
        let err = run_with(&["--max-capacity", "4"], 0).unwrap_err();
        assert!(matches!(err, DemoError::Config(_)));
    }

    #[test]
    fn grow_past_limit_is_an_allocation_failure() {
        let err = run_with(&["--max-capacity", "7"], 0).unwrap_err();
        match err {
            DemoError::Array(e) => assert_eq!(e.kind(), ErrorKind::AllocationFailure),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn oversized_len_is_rejected_before_allocating() {
        let err = run_with(&["--len", "3000000000"], 0).unwrap_err();
        assert!(matches!(err, DemoError::TooManyValues { len: 3_000_000_000 }));
    }

    #[test]
    fn counting_values_stop_at_element_max() {
        assert!(counting_values(0).unwrap().is_empty());
        assert_eq!(counting_values(3).unwrap(), vec![0, 1, 2]);
        let len = Element::MAX as usize + 2;
        assert!(matches!(
            counting_values(len),
            Err(DemoError::TooManyValues { len: l }) if l == len
        ));
    }

    #[test]
    fn config_carries_seed_and_limit() {
        let cli = Cli::parse_from(["fixarr", "--seed", "7", "--max-capacity", "64"]);
        let config = config_from(&cli);
        assert_eq!(config.capacity, 6);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_capacity, 64);
    }
}
