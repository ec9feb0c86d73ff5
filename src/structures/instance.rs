/*!
Instances, aka. formulas in conjunctive normal form, together with the parameters they were generated from.

An instance is built by the [generator](crate::generator) and is never mutated.

The wire form of an instance is DIMACS:
```rust
# use ksat_sweep::generator::generate;
# use ksat_sweep::generic::random::MinimalPCG32;
# use ksat_sweep::structures::instance::InstanceParams;
# use rand::SeedableRng;
let mut rng = MinimalPCG32::from_seed(3_u64.to_le_bytes());
let instance = generate(InstanceParams::new(5, 2, 3).unwrap(), &mut rng).unwrap();

let dimacs = instance.as_dimacs();
let mut lines = dimacs.lines();

assert_eq!(lines.next(), Some("p cnf 5 3"));
assert_eq!(lines.filter(|line| line.ends_with(" 0")).count(), 3);
```
*/

use std::io::Write;

use crate::{
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{CClause, Clause},
    },
    types::err::ParameterError,
};

/// A triple of parameters for a random instance.
///
/// - *n*, the count of atoms.
/// - *k*, the count of (distinct) atoms in each clause.
/// - *m*, the count of clauses.
///
/// A triple may only be built through [new](InstanceParams::new), which ensures all parameters are positive and *k* ≤ *n*.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InstanceParams {
    n: Atom,
    k: u32,
    m: u32,
}

impl InstanceParams {
    pub fn new(n: u32, k: u32, m: u32) -> Result<Self, ParameterError> {
        if n == 0 {
            return Err(ParameterError::NoAtoms);
        }
        if n > ATOM_MAX {
            return Err(ParameterError::AtomsExhausted(n));
        }
        if k == 0 {
            return Err(ParameterError::EmptyClauses);
        }
        if m == 0 {
            return Err(ParameterError::NoClauses);
        }
        if k > n {
            return Err(ParameterError::ClauseExceedsAtoms { n, k });
        }

        Ok(InstanceParams { n, k, m })
    }

    /// The count of atoms.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// The count of literals in each clause.
    pub fn k(&self) -> u32 {
        self.k
    }

    /// The count of clauses.
    pub fn m(&self) -> u32 {
        self.m
    }
}

impl std::fmt::Display for InstanceParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "N={} K={} M={}", self.n, self.k, self.m)
    }
}

/// A formula in conjunctive normal form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    params: InstanceParams,
    clauses: Vec<CClause>,
}

impl Instance {
    /// Pairs the parameters of an instance with clauses generated from those parameters.
    pub(crate) fn from_parts(params: InstanceParams, clauses: Vec<CClause>) -> Self {
        debug_assert_eq!(clauses.len(), params.m as usize);
        Instance { params, clauses }
    }

    /// The parameters the instance was generated from.
    pub fn params(&self) -> InstanceParams {
        self.params
    }

    /// The count of atoms declared by the instance.
    ///
    /// Not every atom need occur in some clause.
    pub fn atom_count(&self) -> u32 {
        self.params.n
    }

    /// The clauses of the instance, in the order generated.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// Writes the instance in DIMACS form.
    ///
    /// A problem line `p cnf n m` followed by one line per clause, each terminated by `0`.
    pub fn write_dimacs(&self, mut writer: impl Write) -> std::io::Result<()> {
        writeln!(writer, "p cnf {} {}", self.params.n, self.clauses.len())?;
        for clause in &self.clauses {
            writeln!(writer, "{}", clause.as_dimacs(true))?;
        }
        Ok(())
    }

    /// The instance as a DIMACS string.
    pub fn as_dimacs(&self) -> String {
        let mut the_string = format!("p cnf {} {}\n", self.params.n, self.clauses.len());
        for clause in &self.clauses {
            the_string.push_str(&clause.as_dimacs(true));
            the_string.push('\n');
        }
        the_string
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_preconditions() {
        assert_eq!(InstanceParams::new(0, 1, 1), Err(ParameterError::NoAtoms));
        assert_eq!(InstanceParams::new(3, 0, 1), Err(ParameterError::EmptyClauses));
        assert_eq!(InstanceParams::new(3, 1, 0), Err(ParameterError::NoClauses));
        assert_eq!(
            InstanceParams::new(3, 4, 1),
            Err(ParameterError::ClauseExceedsAtoms { n: 3, k: 4 })
        );
        assert!(InstanceParams::new(3, 3, 1).is_ok());
    }

    #[test]
    fn dimacs_forms_agree() {
        let params = InstanceParams::new(4, 2, 2).unwrap();
        let instance = Instance::from_parts(params, vec![vec![1, -4], vec![-2, 3]]);

        assert_eq!(instance.as_dimacs(), "p cnf 4 2\n1 -4 0\n-2 3 0\n");

        let mut buffer = Vec::new();
        assert!(instance.write_dimacs(&mut buffer).is_ok());
        assert_eq!(String::from_utf8(buffer).unwrap(), instance.as_dimacs());
    }
}
