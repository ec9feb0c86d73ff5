/*!
Generation of random k-SAT instances.

Each of the *m* clauses of an instance is generated independently, in two steps:
1. *k* distinct atoms are chosen, uniformly, by rejection --- an atom is drawn from `[1, n]` and kept only if it has not already been chosen for the clause.
2. Each chosen atom is paired with a polarity, by a fair coin flip.

Clauses are kept in the order generated and literals in the order chosen.
No attempt is made to canonicalise an instance, and so an atom may appear in any number of clauses, with any polarity.

The expected count of draws for a clause is small when *k* is much smaller than *n*, though as *k* approaches *n* the count approaches that of the coupon collector, roughly *n* ln *n*.
To avoid an unbounded loop, the draws for a single clause are capped by [draw_limit].

```rust
# use ksat_sweep::generator::generate;
# use ksat_sweep::generic::random::MinimalPCG32;
# use ksat_sweep::structures::clause::Clause;
# use ksat_sweep::structures::instance::InstanceParams;
# use rand::SeedableRng;
let params = InstanceParams::new(10, 4, 30).unwrap();
let mut rng = MinimalPCG32::from_seed(5_u64.to_le_bytes());

let instance = generate(params, &mut rng).unwrap();

for clause in instance.clauses() {
    assert_eq!(clause.size(), 4);
    assert!(clause.atoms().all(|atom| 1 <= atom && atom <= 10));
}
```
*/

use rand::Rng;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::CClause,
        instance::{Instance, InstanceParams},
        literal::{CLiteral, Literal},
    },
    types::err::GenerationError,
};

/// The minimum count of draws permitted for a single clause.
const MINIMUM_DRAW_LIMIT: u64 = 1024;

/// The count of draws permitted for each (atom, literal) pair of the parameters.
const DRAWS_PER_PAIR: u64 = 64;

/// The maximum count of draws made when choosing the atoms of a single clause.
///
/// Far above the expected count of draws, even when *k* = *n*.
pub fn draw_limit(params: InstanceParams) -> u64 {
    let pairs = (params.n() as u64).saturating_mul(params.k() as u64);
    DRAWS_PER_PAIR.saturating_mul(pairs).max(MINIMUM_DRAW_LIMIT)
}

/// Generates a random instance from a triple of parameters, using the given source of randomness.
///
/// The same parameters and a source in the same state always produce the same instance.
pub fn generate(params: InstanceParams, rng: &mut impl Rng) -> Result<Instance, GenerationError> {
    let limit = draw_limit(params);

    let mut clauses: Vec<CClause> = Vec::with_capacity(params.m() as usize);
    let mut atoms: Vec<Atom> = Vec::with_capacity(params.k() as usize);

    for _ in 0..params.m() {
        choose_distinct_atoms(params, limit, rng, &mut atoms)?;

        let clause = atoms
            .iter()
            .map(|atom| CLiteral::new(*atom, rng.gen::<bool>()))
            .collect::<CClause>();

        clauses.push(clause);
    }

    log::trace!(target: targets::GENERATION, "Generated {} clauses for {params}", clauses.len());

    Ok(Instance::from_parts(params, clauses))
}

/// Fills `atoms` with *k* distinct atoms from `[1, n]`, in the order drawn.
fn choose_distinct_atoms(
    params: InstanceParams,
    limit: u64,
    rng: &mut impl Rng,
    atoms: &mut Vec<Atom>,
) -> Result<(), GenerationError> {
    atoms.clear();

    let mut draws: u64 = 0;
    while atoms.len() < params.k() as usize {
        if draws == limit {
            log::error!(target: targets::GENERATION, "Draw limit of {limit} reached for {params}");
            return Err(GenerationError::DrawsExhausted { draws });
        }
        draws += 1;

        let candidate: Atom = rng.gen_range(1..=params.n());
        if !atoms.contains(&candidate) {
            atoms.push(candidate);
        }
    }

    Ok(())
}
