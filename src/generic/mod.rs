//! Generic structures, not particular to random formulas.

pub mod random;
