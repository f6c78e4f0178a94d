//! Ordered handler chains.
//!
//! The first clause that matches a raised failure handles it, so a clause
//! for a general kind placed before one for a more specific kind makes the
//! later clause dead. [`CatchChain::new`] refuses such chains.

use std::{fmt, io::Write};

use crate::{
    DemoError,
    failures::standard::{FailureKind, Raised},
};

/// One handler in a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    /// Handles the kind and everything derived from it.
    Catch(FailureKind),

    /// Handles anything.
    CatchAll,
}

impl Clause {
    pub fn catches(self, kind: FailureKind) -> bool {
        match self {
            Clause::Catch(handled) => kind.is_a(handled),
            Clause::CatchAll => true,
        }
    }

    /// Whether every failure `later` could handle is already taken by `self`.
    pub fn shadows(self, later: Clause) -> bool {
        match (self, later) {
            (Clause::CatchAll, _) => true,
            (Clause::Catch(_), Clause::CatchAll) => false,
            (Clause::Catch(earlier), Clause::Catch(later)) => later.is_a(earlier),
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Catch(kind) => write!(f, "{kind}"),
            Clause::CatchAll => write!(f, "..."),
        }
    }
}

/// Returns the first `(earlier, later)` pair where `later` can never run.
pub fn find_shadowed(clauses: &[Clause]) -> Option<(Clause, Clause)> {
    clauses.iter().enumerate().find_map(|(idx, later)| {
        clauses[..idx]
            .iter()
            .find(|earlier| earlier.shadows(*later))
            .map(|earlier| (*earlier, *later))
    })
}

/// A validated, ordered list of handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatchChain {
    clauses: Vec<Clause>,
}

impl CatchChain {
    pub fn new(clauses: Vec<Clause>) -> Result<Self, DemoError> {
        if let Some((earlier, later)) = find_shadowed(&clauses) {
            return Err(DemoError::ShadowedHandler {
                earlier: earlier.to_string(),
                later: later.to_string(),
            });
        }
        Ok(Self { clauses })
    }

    /// The first clause that handles `raised`, with its position.
    pub fn dispatch(&self, raised: &Raised) -> Option<(usize, Clause)> {
        self.clauses
            .iter()
            .copied()
            .enumerate()
            .find(|(_, clause)| clause.catches(raised.kind))
    }

    /// The line the matching handler prints.
    pub fn describe(&self, raised: &Raised) -> String {
        match self.dispatch(raised) {
            Some((_, Clause::Catch(kind))) => format!("Caught {kind}: {}", raised.message),
            Some((_, Clause::CatchAll)) => "Caught unknown exception".to_string(),
            None => format!("Unhandled {}: {}", raised.kind, raised.message),
        }
    }

    pub fn report<W: Write>(&self, raised: &Raised, out: &mut W) -> Result<(), DemoError> {
        writeln!(out, "{}", self.describe(raised))?;
        Ok(())
    }
}

/// Flags for [`throw_some_exception`]: `[runtime, plain]`.
pub const DEFAULT_FLAGS: [bool; 2] = [true, false];

/// Raises a `runtime_error` or a plain `exception` depending on the flags.
pub fn throw_some_exception(flags: &[bool; 2]) -> Result<(), Raised> {
    if flags[0] {
        return Err(Raised::new(FailureKind::RuntimeError, "Error 1 occurred"));
    }
    if flags[1] {
        return Err(Raised::new(FailureKind::Exception, "std::exception"));
    }
    Ok(())
}

/// Shows the general-first ordering being refused, then the correct one at work.
pub fn run<W: Write>(out: &mut W) -> Result<(), DemoError> {
    let wrong = vec![
        Clause::Catch(FailureKind::Exception),
        Clause::Catch(FailureKind::RuntimeError),
        Clause::CatchAll,
    ];
    if let Err(err) = CatchChain::new(wrong) {
        writeln!(out, "Rejected handler order: {err}")?;
    }

    let chain = CatchChain::new(vec![
        Clause::Catch(FailureKind::RuntimeError),
        Clause::Catch(FailureKind::Exception),
        Clause::CatchAll,
    ])?;
    if let Err(raised) = throw_some_exception(&DEFAULT_FLAGS) {
        chain.report(&raised, out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runtime_first() -> CatchChain {
        CatchChain::new(vec![
            Clause::Catch(FailureKind::RuntimeError),
            Clause::Catch(FailureKind::Exception),
            Clause::CatchAll,
        ])
        .expect("specific before general is valid")
    }

    #[test]
    fn test_most_specific_handler_wins() {
        let chain = runtime_first();

        let raised = throw_some_exception(&[true, false]).unwrap_err();
        assert_eq!(chain.describe(&raised), "Caught runtime_error: Error 1 occurred");

        let raised = throw_some_exception(&[false, true]).unwrap_err();
        assert_eq!(chain.describe(&raised), "Caught exception: std::exception");

        let raised = Raised::new(FailureKind::OverflowError, "too big");
        assert_eq!(chain.dispatch(&raised), Some((0, Clause::Catch(FailureKind::RuntimeError))));

        let raised = Raised::new(FailureKind::DomainError, "bad domain");
        assert_eq!(chain.dispatch(&raised), Some((1, Clause::Catch(FailureKind::Exception))));
    }

    #[test]
    fn test_general_first_is_rejected() {
        let err = CatchChain::new(vec![
            Clause::Catch(FailureKind::Exception),
            Clause::Catch(FailureKind::RuntimeError),
        ])
        .unwrap_err();

        match err {
            DemoError::ShadowedHandler { earlier, later } => {
                assert_eq!(earlier, "exception");
                assert_eq!(later, "runtime_error");
            }
            other => panic!("Expected ShadowedHandler, got {other:?}"),
        }
    }

    #[test]
    fn test_catch_all_must_be_last() {
        let clauses = [Clause::CatchAll, Clause::Catch(FailureKind::LogicError)];
        assert_eq!(
            find_shadowed(&clauses),
            Some((Clause::CatchAll, Clause::Catch(FailureKind::LogicError)))
        );

        let clauses = [Clause::Catch(FailureKind::LogicError), Clause::CatchAll];
        assert_eq!(find_shadowed(&clauses), None);
    }

    #[test]
    fn test_siblings_in_any_order() {
        let clauses = [
            Clause::Catch(FailureKind::UnderflowError),
            Clause::Catch(FailureKind::LengthError),
            Clause::Catch(FailureKind::OverflowError),
        ];
        assert_eq!(find_shadowed(&clauses), None);
    }

    #[test]
    fn test_duplicate_clause_is_shadowed() {
        let clauses = [
            Clause::Catch(FailureKind::RangeError),
            Clause::Catch(FailureKind::RangeError),
        ];
        assert!(find_shadowed(&clauses).is_some());
    }

    #[test]
    fn test_unhandled_without_catch_all() {
        let chain = CatchChain::new(vec![Clause::Catch(FailureKind::LogicError)]).unwrap();
        let raised = Raised::new(FailureKind::RangeError, "nope");
        assert_eq!(chain.dispatch(&raised), None);
        assert_eq!(chain.describe(&raised), "Unhandled range_error: nope");
    }

    #[test]
    fn test_catch_all_description() {
        let chain = CatchChain::new(vec![Clause::CatchAll]).unwrap();
        let raised = Raised::new(FailureKind::BadAlloc, "oom");
        assert_eq!(chain.describe(&raised), "Caught unknown exception");
    }

    #[test]
    fn test_run_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Rejected handler order: Handler `runtime_error` can never run: `exception` is listed first and catches it\n\
             Caught runtime_error: Error 1 occurred\n"
        );
    }
}
