//! Error types used in the library.
//!
//! - Logical outcomes of a solve (satisfiable, unsatisfiable, a resource limit) are [reports](crate::reports::Report), not errors.
//! - Some errors are internally expected, e.g. a BCP conflict is used to control the flow of a solve.
//! - Most errors indicate some invariant of the solver was broken, and are fatal: the context should not be used further.
//!
//! Names of the error enums, for the most part, overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{db::ClauseKey, structures::atom::Atom};

/// The primary error type, wrapping errors from specific parts of the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    BCP(BCPError),
    Build(BuildError),
    ClauseDB(ClauseDBError),
    Invariant(InvariantError),
    Parse(ParseError),
    Simplification(SimplificationError),

    /// There are no more fresh atoms.
    AtomsExhausted,

    /// A value for some named option was out of bounds.
    InvalidConfig(&'static str),

    /// Some action was not permitted in the current state of the context.
    InvalidState,
}

/// Noted errors during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// Resolution reached a literal at the conflict level without a reason, before a unique implication point.
    MissingReason,

    /// Resolution exhausted the trail without finding a unique implication point.
    NoAssertion,

    /// A conflict was analysed without any decision having been made.
    NoDecision,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(ClauseKey),

    /// A watch list refers to a clause which is not in the clause database.
    /// This is unexpected.
    CorruptWatch,
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Noted errors when building a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// An XOR constraint could not be cut, as fresh atoms were exhausted.
    XorCut,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// A key does not refer to any stored clause.
    Missing,

    /// A key refers to a slot since reused by some other clause.
    InvalidKeyToken,

    /// A key refers to a slot outside of the database.
    InvalidKeyIndex,

    /// Some attempt was made to store a clause of fewer than two literals.
    ShortClause,

    /// All possible keys have been used.
    StorageExhausted,

    /// An attempt to remove a clause which is the reason for some assignment.
    LockedClause,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Violations of invariants, detected by [checks](crate::procedures::checks).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvariantError {
    /// Some literal of the reason for an assignment is not false, or is assigned at a higher level.
    TrailCausality(Atom),

    /// The watched literals of some clause are false, while some other literal of the clause is not false.
    Watch(ClauseKey),

    /// Some clause is missing a watch, or watches a literal it does not contain.
    MissingWatch(ClauseKey),
}

impl From<InvariantError> for ErrorKind {
    fn from(e: InvariantError) -> Self {
        ErrorKind::Invariant(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// An item at the given line could not be read as a literal.
    Literal(usize),

    /// A clause was not terminated by zero at the end of input.
    UnterminatedClause,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Violations of the contract between a context and a simplification collaborator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SimplificationError {
    /// After an episode, the named collaborator left a clause or XOR constraint referencing an eliminated atom.
    EliminatedAtomInFormula(&'static str, Atom),

    /// The named collaborator returned a unit fact over an eliminated atom.
    EliminatedAtomAsFact(&'static str, Atom),
}

impl From<SimplificationError> for ErrorKind {
    fn from(e: SimplificationError) -> Self {
        ErrorKind::Simplification(e)
    }
}
