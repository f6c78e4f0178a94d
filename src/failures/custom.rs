use std::io::Write;

use thiserror::Error;

use crate::{
    DemoError,
    failures::{
        catch_order::{CatchChain, Clause},
        standard::{FailureKind, Raised},
    },
};

/// Failures raised by [`TestException`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TestFailure {
    #[error("My custom exception occurred")]
    Custom,
    #[error("Simulated runtime error: null pointer dereference")]
    Runtime,
    #[error("Simulated range error: index out of bounds")]
    Range,
    #[error("Simulated underflow error: subtraction overflow")]
    Underflow,
    #[error("Simulated overflow error: addition overflow")]
    Overflow,
}

impl TestFailure {
    /// Where this failure sits in the standard hierarchy.
    pub fn kind(self) -> FailureKind {
        match self {
            TestFailure::Custom => FailureKind::CustomException,
            TestFailure::Runtime => FailureKind::RuntimeError,
            TestFailure::Range => FailureKind::RangeError,
            TestFailure::Underflow => FailureKind::UnderflowError,
            TestFailure::Overflow => FailureKind::OverflowError,
        }
    }
}

impl From<TestFailure> for Raised {
    fn from(failure: TestFailure) -> Self {
        Raised::new(failure.kind(), failure.to_string())
    }
}

const VALUES: [i32; 5] = [1, 2, 3, 4, 5];

/// A grab bag of operations that fail on purpose.
#[derive(Debug, Default, Clone, Copy)]
pub struct TestException;

impl TestException {
    pub fn throw_exception(&self) -> Result<(), TestFailure> {
        Err(TestFailure::Custom)
    }

    /// Follows a pointer that was never set.
    pub fn throw_runtime_error(&self) -> Result<i32, TestFailure> {
        let pointer: Option<&i32> = None;
        pointer.copied().ok_or(TestFailure::Runtime)
    }

    /// Visits the first `count` values of a five element array.
    ///
    /// Values before the end are visited; asking for more fails once the walk
    /// runs off the array.
    pub fn throw_range_error(
        &self,
        count: usize,
        mut visit: impl FnMut(i32),
    ) -> Result<(), TestFailure> {
        for idx in 0..count {
            let value = VALUES.get(idx).ok_or(TestFailure::Range)?;
            visit(*value);
        }
        Ok(())
    }

    /// `a - b`, failing when the result would be negative.
    pub fn throw_underflow_error(&self, a: i32, b: i32) -> Result<i32, TestFailure> {
        match a.checked_sub(b) {
            Some(difference) if difference >= 0 => Ok(difference),
            _ => Err(TestFailure::Underflow),
        }
    }

    /// `a + b`, failing when the sum doesn't fit in an `i32`.
    pub fn throw_overflow_error(&self, a: i32, b: i32) -> Result<i32, TestFailure> {
        a.checked_add(b).ok_or(TestFailure::Overflow)
    }
}

fn catch_only<W: Write, T>(
    kind: FailureKind,
    outcome: Result<T, TestFailure>,
    out: &mut W,
    on_success: impl FnOnce(T, &mut W) -> Result<(), DemoError>,
) -> Result<(), DemoError> {
    match outcome {
        Ok(value) => on_success(value, out),
        Err(failure) => {
            let chain = CatchChain::new(vec![Clause::Catch(kind)])?;
            chain.report(&Raised::from(failure), out)
        }
    }
}

/// Calls each operation inside its own single-handler chain.
pub fn run<W: Write>(out: &mut W) -> Result<(), DemoError> {
    let test = TestException;

    catch_only(
        FailureKind::CustomException,
        test.throw_exception(),
        out,
        |(), _| Ok(()),
    )?;

    catch_only(
        FailureKind::RuntimeError,
        test.throw_runtime_error(),
        out,
        |value, out| Ok(writeln!(out, "{value}")?),
    )?;

    let mut visited = Vec::new();
    let walked = test.throw_range_error(6, |value| visited.push(value));
    for value in visited {
        writeln!(out, "{value}")?;
    }
    catch_only(FailureKind::RangeError, walked, out, |(), _| Ok(()))?;

    catch_only(
        FailureKind::UnderflowError,
        test.throw_underflow_error(10, 20),
        out,
        |value, out| Ok(writeln!(out, "{value}")?),
    )?;

    catch_only(
        FailureKind::OverflowError,
        test.throw_overflow_error(123_456_789, 20),
        out,
        |value, out| Ok(writeln!(out, "{value}")?),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_failure_message() {
        let err = TestException.throw_exception().unwrap_err();
        assert_eq!(err.to_string(), "My custom exception occurred");
        assert!(err.kind().is_a(FailureKind::Exception));
        assert!(!err.kind().is_a(FailureKind::RuntimeError));
    }

    #[test]
    fn test_runtime_error() {
        assert_eq!(TestException.throw_runtime_error(), Err(TestFailure::Runtime));
    }

    #[test]
    fn test_range_visits_until_the_end() {
        let mut visited = Vec::new();
        let result = TestException.throw_range_error(6, |value| visited.push(value));
        assert_eq!(result, Err(TestFailure::Range));
        assert_eq!(visited, vec![1, 2, 3, 4, 5]);

        let mut visited = Vec::new();
        assert!(TestException.throw_range_error(3, |value| visited.push(value)).is_ok());
        assert_eq!(visited, vec![1, 2, 3]);
    }

    #[test]
    fn test_underflow() {
        assert_eq!(TestException.throw_underflow_error(20, 10), Ok(10));
        assert_eq!(TestException.throw_underflow_error(10, 10), Ok(0));
        assert_eq!(
            TestException.throw_underflow_error(10, 20),
            Err(TestFailure::Underflow)
        );
        assert_eq!(
            TestException.throw_underflow_error(i32::MIN, 1),
            Err(TestFailure::Underflow)
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(TestException.throw_overflow_error(123_456_789, 20), Ok(123_456_809));
        assert_eq!(TestException.throw_overflow_error(-5, 1), Ok(-4));
        assert_eq!(
            TestException.throw_overflow_error(i32::MAX, 1),
            Err(TestFailure::Overflow)
        );
    }

    #[test]
    fn test_run_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Caught myException: My custom exception occurred\n\
             Caught runtime_error: Simulated runtime error: null pointer dereference\n\
             1\n2\n3\n4\n5\n\
             Caught range_error: Simulated range error: index out of bounds\n\
             Caught underflow_error: Simulated underflow error: subtraction overflow\n\
             123456809\n"
        );
    }
}
