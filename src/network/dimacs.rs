use std::io::BufRead;

use crate::{
    misc::log::targets::{self},
    network::{Network, Signal},
    structures::atom::Atom,
    types::err::{self},
};

impl Network {
    /// Reads a DIMACS formula into a fresh network.
    ///
    /// The problem line is required, and an input is made for each atom it declares.
    /// Each clause is then built as a disjunction, and the output of the network is set to the conjunction of every clause.
    ///
    /// ```rust
    /// # use ksat_sweep::network::Network;
    /// # use ksat_sweep::types::err::ParseError;
    /// let network = Network::read_dimacs("c a comment\np cnf 3 1\n1 -3 0\n".as_bytes());
    /// assert!(network.is_ok());
    ///
    /// let unknown = Network::read_dimacs("p cnf 3 1\n1 -4 0\n".as_bytes());
    /// assert_eq!(unknown.err(), Some(ParseError::UnknownAtom { line: 2, atom: 4 }));
    /// ```
    pub fn read_dimacs(mut reader: impl BufRead) -> Result<Network, err::ParseError> {
        let mut network = Network::default();

        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: Vec<Signal> = Vec::default();
        let mut clause_signals: Vec<Signal> = Vec::default();

        let mut line_counter = 0;
        let mut expected_clauses: Option<usize> = None;

        // first phase, read until the formula begins
        'preamble_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'preamble_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter)),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue,

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace().skip(1);

                    if problem_details.next() != Some("cnf") {
                        return Err(err::ParseError::ProblemSpecification);
                    }

                    let atom_count: Atom = match problem_details.next().map(str::parse) {
                        Some(Ok(count)) => count,
                        _ => return Err(err::ParseError::ProblemSpecification),
                    };

                    let clause_count: usize = match problem_details.next().map(str::parse) {
                        Some(Ok(count)) => count,
                        _ => return Err(err::ParseError::ProblemSpecification),
                    };

                    for _ in 0..atom_count {
                        network.create_input();
                    }
                    expected_clauses = Some(clause_count);
                    clause_signals.reserve(clause_count);

                    break 'preamble_loop;
                }

                _ => return Err(err::ParseError::MissingProblem(line_counter)),
            }
        }

        let expected_clauses = match expected_clauses {
            Some(count) => count,
            None => return Err(err::ParseError::ProblemSpecification),
        };

        // second phase, read until the formula ends
        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter)),
            }

            match buffer.trim_start().chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') | None => {}
                Some('p') => return Err(err::ParseError::ProblemSpecification),
                _ => {
                    for item in buffer.split_whitespace() {
                        match item {
                            "0" => {
                                let clause = network.create_nary_or(&clause_buffer);
                                clause_signals.push(clause);
                                clause_buffer.clear();
                            }

                            _ => {
                                let literal = match item.parse::<i64>() {
                                    Ok(int) => int,
                                    Err(_) => return Err(err::ParseError::Literal(line_counter)),
                                };

                                let atom = match Atom::try_from(literal.unsigned_abs()) {
                                    Ok(atom) => atom,
                                    Err(_) => return Err(err::ParseError::Literal(line_counter)),
                                };

                                let signal = match network.input(atom) {
                                    Some(signal) => signal,
                                    None => {
                                        return Err(err::ParseError::UnknownAtom {
                                            line: line_counter,
                                            atom,
                                        })
                                    }
                                };

                                match literal.is_positive() {
                                    true => clause_buffer.push(signal),
                                    false => clause_buffer.push(!signal),
                                }
                            }
                        }
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            return Err(err::ParseError::Unterminated);
        }

        if clause_signals.len() != expected_clauses {
            return Err(err::ParseError::ClauseCount {
                expected: expected_clauses,
                found: clause_signals.len(),
            });
        }

        let output = network.create_nary_and(&clause_signals);
        network.set_output(output);

        log::trace!(target: targets::NETWORK,
            "Read {} clauses to a network of {} gates",
            clause_signals.len(),
            network.gate_count()
        );

        Ok(network)
    }
}
