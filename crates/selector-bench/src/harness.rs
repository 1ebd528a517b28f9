//! Timing harness
//!
//! [`measure`] runs an operation once untimed to capture its match count,
//! then `repetitions` times back to back under a single clock, and reports
//! the raw mean per repetition.
//!
//! # Methodology
//!
//! There is no warm-up beyond the untimed call, no outlier rejection and no
//! median. Means are therefore sensitive to scheduler noise and cache state,
//! and can vary from run to run. Results stay comparable with earlier runs
//! of the same catalogue because the protocol never changes.

use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::engine::guard;
use crate::error::{CaseError, EngineError, Phase};

/// Outcome of timing one operation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Matches returned by the untimed execution
    pub match_count: usize,
    /// Number of timed executions
    pub repetitions: u32,
    /// Wall-clock time of the whole timed loop
    pub total_nanos: u64,
    /// `total_nanos / repetitions`
    pub average_nanos: f64,
}

impl Measurement {
    /// Build a measurement from the elapsed time of the timed loop
    ///
    /// The total is floored at 1ns so that the mean stays positive even when
    /// the clock is coarser than the loop.
    pub fn from_elapsed(match_count: usize, repetitions: u32, elapsed: Duration) -> Self {
        let repetitions = repetitions.max(1);
        let total_nanos = u64::try_from(elapsed.as_nanos())
            .unwrap_or(u64::MAX)
            .max(1);

        Self {
            match_count,
            repetitions,
            total_nanos,
            average_nanos: total_nanos as f64 / f64::from(repetitions),
        }
    }

    /// Mean time per repetition
    pub fn average(&self) -> Duration {
        Duration::from_nanos(self.average_nanos.round() as u64)
    }
}

/// Time `operation`
///
/// `operation` performs one query and returns its match count. A
/// `repetitions` of zero is treated as one.
///
/// # Errors
///
/// Returns [`CaseError::CaseFailed`] if the operation returns an error or
/// panics, in either the untimed or the timed phase.
pub fn measure<F>(mut operation: F, repetitions: u32) -> Result<Measurement, CaseError>
where
    F: FnMut() -> Result<usize, EngineError>,
{
    let repetitions = repetitions.max(1);

    let match_count = guard(&mut operation).map_err(|cause| CaseError::CaseFailed {
        phase: Phase::Untimed,
        cause,
    })?;

    let start = Instant::now();
    let timed = guard(|| {
        for _ in 0..repetitions {
            black_box(operation()?);
        }
        Ok(())
    });
    let elapsed = start.elapsed();

    timed.map_err(|cause| CaseError::CaseFailed {
        phase: Phase::Timed,
        cause,
    })?;

    Ok(Measurement::from_elapsed(match_count, repetitions, elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_runs_untimed_once_plus_repetitions() {
        let calls = Cell::new(0u32);
        let m = measure(
            || {
                calls.set(calls.get() + 1);
                Ok(7)
            },
            10,
        )
        .unwrap();

        assert_eq!(calls.get(), 11);
        assert_eq!(m.match_count, 7);
        assert_eq!(m.repetitions, 10);
        assert!(m.average_nanos > 0.0);
    }

    #[test]
    fn test_match_count_comes_from_untimed_call() {
        let calls = Cell::new(0usize);
        let m = measure(
            || {
                calls.set(calls.get() + 1);
                Ok(calls.get())
            },
            3,
        )
        .unwrap();

        assert_eq!(m.match_count, 1);
    }

    #[test]
    fn test_zero_repetitions_treated_as_one() {
        let m = measure(|| Ok(0), 0).unwrap();

        assert_eq!(m.repetitions, 1);
        assert!(m.average_nanos > 0.0);
    }

    #[test]
    fn test_untimed_error_fails_case() {
        let err = measure(|| Err(EngineError::Parse("broken".into())), 5).unwrap_err();

        assert_eq!(
            err,
            CaseError::CaseFailed {
                phase: Phase::Untimed,
                cause: EngineError::Parse("broken".into()),
            }
        );
    }

    #[test]
    fn test_timed_error_fails_case() {
        let calls = Cell::new(0u32);
        let err = measure(
            || {
                calls.set(calls.get() + 1);
                if calls.get() > 3 {
                    Err(EngineError::Panicked("late".into()))
                } else {
                    Ok(1)
                }
            },
            10,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CaseError::CaseFailed {
                phase: Phase::Timed,
                ..
            }
        ));
    }

    #[test]
    fn test_panic_fails_case() {
        let err = measure(|| -> Result<usize, EngineError> { panic!("kaboom") }, 1).unwrap_err();

        assert_eq!(
            err,
            CaseError::CaseFailed {
                phase: Phase::Untimed,
                cause: EngineError::Panicked("kaboom".into()),
            }
        );
    }

    #[test]
    fn test_from_elapsed_average() {
        let m = Measurement::from_elapsed(1, 4, Duration::from_nanos(1000));

        assert_eq!(m.total_nanos, 1000);
        assert_eq!(m.average_nanos, 250.0);
        assert_eq!(m.average(), Duration::from_nanos(250));
    }

    #[test]
    fn test_from_elapsed_floors_zero_elapsed() {
        let m = Measurement::from_elapsed(0, 2, Duration::ZERO);

        assert_eq!(m.total_nanos, 1);
        assert!(m.average_nanos > 0.0);
    }
}
