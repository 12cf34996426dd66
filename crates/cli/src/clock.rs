// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Current-time sources.
//!
//! Relative filter values such as `now-1d` are resolved against a
//! [`ClockSource`], which lets tests pin "now" to a fixed instant.

use chrono::{DateTime, SubsecRound, Utc};

/// Trait for getting the current UTC instant.
pub trait ClockSource: Send + Sync {
    /// Returns the current time with microsecond resolution.
    fn now(&self) -> DateTime<Utc>;
}

/// System clock implementation backed by [`Utc::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(6)
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl ClockSource for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: ClockSource> ClockSource for &C {
    fn now(&self) -> DateTime<Utc> {
        (*self).now()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
