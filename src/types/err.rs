//! Error types used in the library.
//!
//! - Parameter and configuration errors are found before any sampling takes place.
//! - Generation and collaborator errors are found while sampling, and are wrapped in a [SampleFailure] noting the triple and sample at which the error occurred.
//! - Table errors are I/O errors, or rows which do not fit the schema of a table.
//!
//! None of these errors are recoverable within a run.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::instance::InstanceParams;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Parameter(ParameterError),
    Sample(SampleFailure),
    Table(TableError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Parameter(e) => write!(f, "Parameter error: {e}"),
            Self::Sample(e) => write!(f, "{e}"),
            Self::Table(e) => write!(f, "Table error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Parameters which do not describe a random instance.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParameterError {
    /// An instance requires at least one atom.
    NoAtoms,

    /// More atoms were requested than may be represented by a literal.
    AtomsExhausted(u32),

    /// Clauses require at least one literal.
    EmptyClauses,

    /// An instance requires at least one clause.
    NoClauses,

    /// More distinct atoms were requested of a clause than there are atoms.
    ClauseExceedsAtoms { n: u32, k: u32 },
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoAtoms => write!(f, "N must be positive"),
            Self::AtomsExhausted(n) => write!(f, "N={n} exceeds the maximum atom"),
            Self::EmptyClauses => write!(f, "K must be positive"),
            Self::NoClauses => write!(f, "M must be positive"),
            Self::ClauseExceedsAtoms { n, k } => {
                write!(f, "K={k} distinct atoms cannot be chosen from N={n}")
            }
        }
    }
}

impl From<ParameterError> for ErrorKind {
    fn from(e: ParameterError) -> Self {
        ErrorKind::Parameter(e)
    }
}

/// Invalid configurations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A range with a step of zero, named.
    ZeroStep(&'static str),

    /// A range with no elements, named.
    EmptyRange(&'static str),

    /// A value outside the bounds of the named option.
    OutOfBounds(&'static str),

    /// A table without any columns.
    EmptySchema,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroStep(name) => write!(f, "the step of {name} must be positive"),
            Self::EmptyRange(name) => write!(f, "the range of {name} is empty"),
            Self::OutOfBounds(name) => write!(f, "{name} is out of bounds"),
            Self::EmptySchema => write!(f, "a table requires at least one column"),
        }
    }
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Noted errors during generation of an instance.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GenerationError {
    /// Too many draws were made without choosing enough distinct atoms for a clause.
    DrawsExhausted { draws: u64 },
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DrawsExhausted { draws } => {
                write!(f, "no clause of distinct atoms after {draws} draws")
            }
        }
    }
}

/// Errors during parsing of DIMACS input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification.
    ProblemSpecification,

    /// A clause was found before the problem specification, at the given line.
    MissingProblem(usize),

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// A literal could not be read, at the given line.
    Literal(usize),

    /// A literal with an atom outside those specified, at the given line.
    UnknownAtom { line: usize, atom: u32 },

    /// The input ended within a clause.
    Unterminated,

    /// The count of clauses differs from the problem specification.
    ClauseCount { expected: usize, found: usize },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProblemSpecification => write!(f, "malformed problem specification"),
            Self::MissingProblem(line) => write!(f, "clause before problem at line {line}"),
            Self::Line(line) => write!(f, "unreadable line {line}"),
            Self::Literal(line) => write!(f, "unreadable literal at line {line}"),
            Self::UnknownAtom { line, atom } => write!(f, "unknown atom {atom} at line {line}"),
            Self::Unterminated => write!(f, "unterminated clause"),
            Self::ClauseCount { expected, found } => {
                write!(f, "expected {expected} clauses, found {found}")
            }
        }
    }
}

/// Errors from a [collaborator](crate::metrics::Collaborator).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CollaboratorError {
    /// The wire form of an instance was rejected.
    Parse(ParseError),

    /// The wire form of an instance could not be written.
    Serialize(std::io::ErrorKind),

    /// A different count of metrics than named by the collaborator.
    MetricCount { expected: usize, found: usize },

    /// Some failure particular to the collaborator.
    Other(String),
}

impl std::fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::Serialize(e) => write!(f, "serialization error: {e}"),
            Self::MetricCount { expected, found } => {
                write!(f, "expected {expected} metrics, found {found}")
            }
            Self::Other(e) => write!(f, "{e}"),
        }
    }
}

impl From<ParseError> for CollaboratorError {
    fn from(e: ParseError) -> Self {
        CollaboratorError::Parse(e)
    }
}

/// Errors found when taking a single sample.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SampleError {
    Generation(GenerationError),
    Collaborator(CollaboratorError),
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generation(e) => write!(f, "generation failed: {e}"),
            Self::Collaborator(e) => write!(f, "collaborator failed: {e}"),
        }
    }
}

impl From<GenerationError> for SampleError {
    fn from(e: GenerationError) -> Self {
        SampleError::Generation(e)
    }
}

impl From<CollaboratorError> for SampleError {
    fn from(e: CollaboratorError) -> Self {
        SampleError::Collaborator(e)
    }
}

/// A sample error, together with the triple and (zero-based) index of the sample.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SampleFailure {
    pub params: InstanceParams,
    pub index: usize,
    pub error: SampleError,
}

impl std::fmt::Display for SampleFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sample {} of {}: {}", self.index, self.params, self.error)
    }
}

impl From<SampleFailure> for ErrorKind {
    fn from(e: SampleFailure) -> Self {
        ErrorKind::Sample(e)
    }
}

/// Errors when writing a table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TableError {
    /// Some I/O error when opening, writing, or flushing a file.
    Io(std::io::ErrorKind),

    /// A row with a different count of values than the table has columns.
    ColumnCount { expected: usize, found: usize },

    /// A row was written after the table was closed.
    Closed,
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{e}"),
            Self::ColumnCount { expected, found } => {
                write!(f, "expected {expected} values, found {found}")
            }
            Self::Closed => write!(f, "the table is closed"),
        }
    }
}

impl From<std::io::Error> for TableError {
    fn from(e: std::io::Error) -> Self {
        TableError::Io(e.kind())
    }
}

impl From<TableError> for ErrorKind {
    fn from(e: TableError) -> Self {
        ErrorKind::Table(e)
    }
}
