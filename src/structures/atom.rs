/*!
(The representation of) an atom (aka. a 'variable').

Atoms of an instance with *n* atoms are the integers `1..=n`.
As in the DIMACS format, `0` is not an atom, and is instead used to mark the end of a clause.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom, so that any atom may be paired with a polarity as an [IntLiteral](crate::structures::literal::IntLiteral).
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
