//! The fixed `[1, 2, 3, 4]` walk run by the `highorder` binary.

use anyhow::{Context, Result};
use std::io::Write;
use std::ops::RangeInclusive;
use tracing::{debug, trace};

use crate::walker::for_each;

static SEQUENCE: [i32; 4] = [1, 2, 3, 4];
const SELECTED: RangeInclusive<i32> = 2..=3;

#[derive(Debug, Clone)]
pub struct Demo {
    sequence: &'static [i32],
    selected: RangeInclusive<i32>,
}

impl Demo {
    pub fn new() -> Self {
        Self {
            sequence: &SEQUENCE,
            selected: SELECTED,
        }
    }

    pub fn sequence(&self) -> &[i32] {
        self.sequence
    }

    /// Elements outside this range are skipped by the action
    pub fn selected(&self) -> &RangeInclusive<i32> {
        &self.selected
    }

    /// Walk the sequence, writing a blank line to `out` for every element in
    /// `2..=3`. Returns the number of blank lines written.
    ///
    /// A write error stops further writes but not the walk; it is returned
    /// once the walk has finished.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<usize> {
        let mut written = 0;
        let mut failure: Option<std::io::Error> = None;

        let (low, high) = (*self.selected.start(), *self.selected.end());

        for_each(self.sequence, |it| {
            if it < low || it > high {
                return;
            }
            if failure.is_some() {
                return;
            }
            trace!(element = it, "emitting blank line");
            match writeln!(out) {
                Ok(()) => written += 1,
                Err(e) => failure = Some(e),
            }
        });

        if let Some(e) = failure {
            return Err(e).context("Failed to write demonstration output");
        }

        debug!(written, "demonstration finished");
        Ok(written)
    }
}

impl Default for Demo {
    fn default() -> Self {
        Self::new()
    }
}
