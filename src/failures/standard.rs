use std::{fmt, io::Write};

use strum::{Display, EnumIter, EnumString};

use crate::{
    DemoError,
    failures::catch_order::{CatchChain, Clause},
};

/// The standard failure hierarchy.
///
/// Every kind except [`FailureKind::Exception`] has exactly one parent; a
/// handler for a kind also handles all of its descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum FailureKind {
    Exception,

    BadAlloc,

    LogicError,
    InvalidArgument,
    DomainError,
    LengthError,
    OutOfRange,

    RuntimeError,
    RangeError,
    OverflowError,
    UnderflowError,

    /// User-defined failure deriving straight from the root.
    #[strum(serialize = "myException")]
    CustomException,
}

impl FailureKind {
    /// The kind this one specializes, `None` for the root.
    pub fn parent(self) -> Option<FailureKind> {
        use FailureKind::*;

        match self {
            Exception => None,
            BadAlloc | LogicError | RuntimeError | CustomException => Some(Exception),
            InvalidArgument | DomainError | LengthError | OutOfRange => Some(LogicError),
            RangeError | OverflowError | UnderflowError => Some(RuntimeError),
        }
    }

    /// Ancestors from the direct parent up to the root.
    pub fn ancestors(self) -> impl Iterator<Item = FailureKind> {
        std::iter::successors(self.parent(), |kind| kind.parent())
    }

    /// True if `self` is `other` or descends from it.
    pub fn is_a(self, other: FailureKind) -> bool {
        self == other || self.ancestors().any(|kind| kind == other)
    }
}

/// A raised failure: its kind plus the message it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raised {
    pub kind: FailureKind,
    pub message: String,
}

impl Raised {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Raised {}

/// Kinds `might_throw` checks, in the order it checks them.
pub const CHECK_ORDER: [(FailureKind, &str); 9] = [
    (FailureKind::RuntimeError, "Runtime error occurred"),
    (FailureKind::OutOfRange, "Out of range error occurred"),
    (FailureKind::InvalidArgument, "Invalid argument error occurred"),
    (FailureKind::LogicError, "Logic error occurred"),
    (FailureKind::DomainError, "Domain error occurred"),
    (FailureKind::LengthError, "Length error occurred"),
    (FailureKind::OverflowError, "Overflow error occurred"),
    (FailureKind::RangeError, "Range error occurred"),
    (FailureKind::UnderflowError, "Underflow error occurred"),
];

/// Raises the first kind whose flag is set, in [`CHECK_ORDER`].
pub fn might_throw(flags: &[bool; 9]) -> Result<(), Raised> {
    match flags
        .iter()
        .zip(CHECK_ORDER)
        .find(|(set, _)| **set)
    {
        Some((_, (kind, message))) => Err(Raised::new(kind, message)),
        None => Ok(()),
    }
}

/// Only the runtime flag is set by default.
pub const DEFAULT_FLAGS: [bool; 9] = [true, false, false, false, false, false, false, false, false];

/// More bytes than any allocator can hand out.
pub const IMPOSSIBLE_ALLOCATION: usize = usize::MAX;

/// Asks for `bytes` up front, turning an allocation failure into `bad_alloc`.
pub fn can_go_wrong(bytes: usize) -> Result<Vec<u8>, Raised> {
    let mut memory = Vec::new();
    memory
        .try_reserve_exact(bytes)
        .map_err(|_| Raised::new(FailureKind::BadAlloc, "std::bad_alloc"))?;
    Ok(memory)
}

/// Handlers for the standard kinds, most specific first.
pub fn standard_chain() -> Result<CatchChain, DemoError> {
    use FailureKind::*;

    CatchChain::new(
        [
            OutOfRange,
            InvalidArgument,
            DomainError,
            LengthError,
            LogicError,
            OverflowError,
            RangeError,
            UnderflowError,
            RuntimeError,
            Exception,
        ]
        .into_iter()
        .map(Clause::Catch)
        .collect(),
    )
}

/// Runs the allocation demo and then `might_throw` through [`standard_chain`].
pub fn run<W: Write>(out: &mut W) -> Result<(), DemoError> {
    let alloc_chain = CatchChain::new(vec![Clause::Catch(FailureKind::Exception)])?;
    if let Err(raised) = can_go_wrong(IMPOSSIBLE_ALLOCATION) {
        alloc_chain.report(&raised, out)?;
    }

    let chain = standard_chain()?;
    if let Err(raised) = might_throw(&DEFAULT_FLAGS) {
        chain.report(&raised, out)?;
    }

    Ok(())
}
