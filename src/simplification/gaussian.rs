/*!
Gaussian elimination over XOR constraints.

The XOR constraints of a formula are a system of linear equations over GF(2), with a row for each constraint and a column for each atom.
Each row is packed into words of 64 bits, so adding one row to another is a word-wise exclusive-or.

The system is reduced to reduced row echelon form, and each row of the result is examined:
- A row without atoms and with odd parity is the equation 0 = 1, and so the formula is unsatisfiable.
- A row over a single atom is a unit fact.
- A row over two atoms is an equivalence, added to the formula as an XOR constraint, so [replacement](super::replacement) may use the equivalence during the next episode.

The constraints of the formula are otherwise left as they are, as the rows of a reduced system are typically longer.

Systems with more cells than [MAX_CELLS] are skipped.
*/

use std::collections::HashSet;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        xor::XorClause,
    },
    types::err::ErrorKind,
};

use super::{Formula, Outcome, Simplifier};

/// The maximum number of cells (rows × columns) of a system.
pub const MAX_CELLS: usize = 1 << 26;

/// A row of a system: a bit for each column, and a parity.
#[derive(Clone, Debug)]
struct Row {
    bits: Vec<u64>,
    parity: bool,
}

impl Row {
    fn has(&self, column: usize) -> bool {
        self.bits[column / 64] & (1_u64 << (column % 64)) != 0
    }

    fn add(&mut self, other: &Row) {
        for (word, other_word) in self.bits.iter_mut().zip(&other.bits) {
            *word ^= other_word;
        }
        self.parity ^= other.parity;
    }

    fn columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter().enumerate().flat_map(|(index, word)| {
            (0..64)
                .filter(move |bit| word & (1_u64 << bit) != 0)
                .map(move |bit| index * 64 + bit)
        })
    }
}

/// Reduces `rows` to reduced row echelon form over `column_count` columns, returning the rank of the system.
fn eliminate(rows: &mut [Row], column_count: usize) -> usize {
    let mut rank = 0;
    for column in 0..column_count {
        let Some(pivot) = (rank..rows.len()).find(|index| rows[*index].has(column)) else {
            continue;
        };
        rows.swap(rank, pivot);

        let pivot_row = rows[rank].clone();
        for (index, row) in rows.iter_mut().enumerate() {
            if index != rank && row.has(column) {
                row.add(&pivot_row);
            }
        }

        rank += 1;
        if rank == rows.len() {
            break;
        }
    }
    rank
}

/// Gaussian elimination.
#[derive(Default)]
pub struct Gaussian {}

impl Simplifier for Gaussian {
    fn name(&self) -> &'static str {
        "gaussian"
    }

    fn simplify(&mut self, formula: &mut Formula) -> Result<Outcome, ErrorKind> {
        let mut outcome = Outcome::default();
        if formula.xors.is_empty() {
            return Ok(outcome);
        }

        let mut atoms = formula
            .xors
            .iter()
            .flat_map(|xor| xor.atoms().iter().copied())
            .collect::<Vec<Atom>>();
        atoms.sort_unstable();
        atoms.dedup();

        let word_count = atoms.len().div_ceil(64);
        if formula.xors.len() * word_count * 64 > MAX_CELLS {
            log::info!(target: targets::GAUSSIAN, "Skipped a system of {} rows over {} columns", formula.xors.len(), atoms.len());
            return Ok(outcome);
        }

        let mut rows = Vec::with_capacity(formula.xors.len());
        for xor in &formula.xors {
            let mut row = Row {
                bits: vec![0; word_count],
                parity: xor.parity(),
            };
            for atom in xor.atoms() {
                // Every atom of a constraint is a column.
                if let Ok(column) = atoms.binary_search(atom) {
                    row.bits[column / 64] |= 1_u64 << (column % 64);
                }
            }
            rows.push(row);
        }

        let rank = eliminate(&mut rows, atoms.len());

        let known = formula.xors.iter().cloned().collect::<HashSet<_>>();
        let mut equivalences = Vec::default();

        for row in &rows {
            let row_atoms = row.columns().map(|column| atoms[column]).collect::<Vec<_>>();
            match row_atoms.as_slice() {
                [] if row.parity => {
                    log::info!(target: targets::GAUSSIAN, "Derived 0 = 1");
                    outcome.unsatisfiable = true;
                    return Ok(outcome);
                }

                [] => {}

                [atom] => outcome.units.push(CLiteral::new(*atom, row.parity)),

                [_, _] => {
                    let xor = XorClause::from_atoms(row_atoms, row.parity);
                    if !known.contains(&xor) {
                        equivalences.push(xor);
                    }
                }

                _ => {}
            }
        }

        log::info!(
            target: targets::GAUSSIAN,
            "Rank {rank} of {} rows, with {} units and {} equivalences",
            rows.len(),
            outcome.units.len(),
            equivalences.len()
        );
        formula.xors.extend(equivalences);

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(columns: &[usize], parity: bool) -> Row {
        let mut bits = vec![0; 2];
        for column in columns {
            bits[column / 64] |= 1_u64 << (column % 64);
        }
        Row { bits, parity }
    }

    #[test]
    fn echelon_form() {
        let mut rows = vec![
            row(&[0, 1, 70], true),
            row(&[1, 70], false),
            row(&[0, 70], true),
        ];
        let rank = eliminate(&mut rows, 128);
        assert_eq!(rank, 3);

        assert_eq!(rows[0].columns().collect::<Vec<_>>(), vec![0]);
        assert!(rows[0].parity);
        assert_eq!(rows[1].columns().collect::<Vec<_>>(), vec![1]);
        assert!(!rows[1].parity);
        assert_eq!(rows[2].columns().collect::<Vec<_>>(), vec![70]);
        assert!(!rows[2].parity);
    }

    #[test]
    fn units() {
        let mut formula = Formula::new(3, &[]);
        formula.xors.push(XorClause::from_atoms(vec![0, 1, 2], true));
        formula.xors.push(XorClause::from_atoms(vec![1, 2], false));

        let outcome = Gaussian::default().simplify(&mut formula).expect("simplify");
        assert!(!outcome.unsatisfiable);
        assert_eq!(outcome.units, vec![CLiteral::new(0, true)]);
        assert_eq!(formula.xors.len(), 2);
    }

    #[test]
    fn inconsistent_system() {
        let mut formula = Formula::new(3, &[]);
        formula.xors.push(XorClause::from_atoms(vec![0, 1], true));
        formula.xors.push(XorClause::from_atoms(vec![1, 2], true));
        formula.xors.push(XorClause::from_atoms(vec![0, 2], true));

        let outcome = Gaussian::default().simplify(&mut formula).expect("simplify");
        assert!(outcome.unsatisfiable);
    }

    #[test]
    fn derived_equivalence() {
        let mut formula = Formula::new(4, &[]);
        formula.xors.push(XorClause::from_atoms(vec![0, 1, 2], false));
        formula.xors.push(XorClause::from_atoms(vec![1, 2, 3], true));

        let outcome = Gaussian::default().simplify(&mut formula).expect("simplify");
        assert!(outcome.units.is_empty());
        assert_eq!(formula.xors.len(), 3);
        assert!(formula.xors.contains(&XorClause::from_atoms(vec![0, 3], true)));
    }
}
