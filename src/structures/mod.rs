/*!
Abstract elements of a random formula and their representation.

- An [atom](atom) is a 'variable', an integer in `[1, n]`.
- A [literal] is an atom paired with a polarity.
- A [clause] is a collection of literals, interpreted as their disjunction.
- An [instance] is a collection of clauses over a fixed count of atoms, interpreted as their conjunction.
*/

pub mod atom;
pub mod clause;
pub mod instance;
pub mod literal;
