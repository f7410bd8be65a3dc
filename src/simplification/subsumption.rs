/*!
Subsumption of clauses, and strengthening by self-subsuming resolution.

A clause *C* subsumes a clause *D* if every literal of *C* is a literal of *D*, in which case *D* is redundant.
And, if every literal of *C* is a literal of *D* except for a single literal *l* whose negation is in *D*, resolution on *l* gives *D* without ¬*l*, which subsumes *D*.
So, ¬*l* is removed from *D*.

Candidates for each clause *C* are found through occurrence lists, restricted to the atom of *C* with the fewest occurrences.

A learnt clause which subsumes an original clause takes the place of the original clause, and so becomes original.
Without this, the clause could later be removed during a reduction of the clause database.

Each comparison of a pair of clauses is a check, and the count of checks is bounded by a [budget](Subsumption::budget).
*/

use std::collections::VecDeque;

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::ClauseSource,
        literal::{CLiteral, Literal},
    },
    types::err::ErrorKind,
};

use super::{Formula, Outcome, Simplifier};

/// Subsumption, with a budget of checks for each call.
pub struct Subsumption {
    /// The count of checks permitted during a call.
    pub budget: usize,
}

impl Default for Subsumption {
    fn default() -> Self {
        Subsumption { budget: 2_000_000 }
    }
}

/// The relation of one clause to another.
#[derive(Debug, PartialEq, Eq)]
enum Relation {
    Subsumes,

    /// The literal may be removed from the other clause.
    Strengthens(CLiteral),

    Unrelated,
}

/// The relation of `c` to `d`, given both clauses are sorted.
fn relation(c: &[CLiteral], d: &[CLiteral]) -> Relation {
    if c.len() > d.len() {
        return Relation::Unrelated;
    }

    let mut flipped = None;
    let mut others = d.iter().peekable();

    for literal in c {
        while others.next_if(|other| other.atom() < literal.atom()).is_some() {}

        match others.next() {
            Some(other) if other == literal => {}

            Some(other) if other.atom() == literal.atom() && flipped.is_none() => {
                flipped = Some(*other)
            }

            _ => return Relation::Unrelated,
        }
    }

    match flipped {
        None => Relation::Subsumes,
        Some(literal) => Relation::Strengthens(literal),
    }
}

impl Simplifier for Subsumption {
    fn name(&self) -> &'static str {
        "subsumption"
    }

    fn simplify(&mut self, formula: &mut Formula) -> Result<Outcome, ErrorKind> {
        let mut outcome = Outcome::default();
        let mut budget = self.budget;
        let atom_count = formula.atom_count();

        let clauses = &mut formula.clauses;
        let mut alive = vec![true; clauses.len()];

        let mut occurrences: Vec<Vec<usize>> = vec![Vec::default(); atom_count * 2];
        for (index, clause) in clauses.iter().enumerate() {
            for literal in &clause.literals {
                occurrences[literal.index()].push(index);
            }
        }

        let mut order = (0..clauses.len()).collect::<Vec<_>>();
        order.sort_by_key(|index| clauses[*index].literals.len());
        let mut queue = VecDeque::from(order);

        let mut strengthened = 0;

        'clause_loop: while let Some(c_index) = queue.pop_front() {
            if !alive[c_index] {
                continue;
            }

            let Some(pivot) = clauses[c_index].literals.iter().min_by_key(|literal| {
                occurrences[literal.index()].len() + occurrences[(-**literal).index()].len()
            }) else {
                continue;
            };

            let candidates = occurrences[pivot.index()]
                .iter()
                .chain(occurrences[(-*pivot).index()].iter())
                .copied()
                .filter(|d_index| *d_index != c_index)
                .collect::<Vec<_>>();

            for d_index in candidates {
                if !alive[d_index] {
                    continue;
                }
                if budget == 0 {
                    log::info!(target: targets::SUBSUMPTION, "Budget exhausted");
                    break 'clause_loop;
                }
                budget -= 1;

                match relation(&clauses[c_index].literals, &clauses[d_index].literals) {
                    Relation::Unrelated => {}

                    Relation::Subsumes => {
                        alive[d_index] = false;
                        outcome.eliminated_clauses += 1;

                        if clauses[c_index].source.is_learnt() && !clauses[d_index].source.is_learnt() {
                            clauses[c_index].source = ClauseSource::Original;
                        }
                    }

                    Relation::Strengthens(literal) => {
                        strengthened += 1;
                        let d_clause = &mut clauses[d_index];
                        d_clause.literals.retain(|other| *other != literal);

                        if d_clause.literals.len() == 1 {
                            outcome.units.push(d_clause.literals[0]);
                            alive[d_index] = false;
                            outcome.eliminated_clauses += 1;
                        } else {
                            queue.push_back(d_index);
                        }
                    }
                }
            }
        }

        let mut index = 0;
        clauses.retain(|_| {
            index += 1;
            alive[index - 1]
        });

        log::info!(
            target: targets::SUBSUMPTION,
            "Removed {} clauses and strengthened {strengthened} using {} checks",
            outcome.eliminated_clauses,
            self.budget - budget
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplification::FormulaClause;

    fn lit(int: isize) -> CLiteral {
        CLiteral::from_int(int).expect("literal")
    }

    fn clause(ints: &[isize]) -> Vec<CLiteral> {
        let mut literals = ints.iter().map(|int| lit(*int)).collect::<Vec<_>>();
        literals.sort_unstable();
        literals
    }

    #[test]
    fn relations() {
        assert_eq!(relation(&clause(&[1, 3]), &clause(&[1, 2, 3])), Relation::Subsumes);
        assert_eq!(
            relation(&clause(&[1, 3]), &clause(&[1, 2, -3])),
            Relation::Strengthens(lit(-3))
        );
        assert_eq!(relation(&clause(&[-1, 3]), &clause(&[1, 2, -3])), Relation::Unrelated);
        assert_eq!(relation(&clause(&[1, 4]), &clause(&[1, 2, 3])), Relation::Unrelated);
        assert_eq!(relation(&clause(&[1, 2, 3]), &clause(&[1, 3])), Relation::Unrelated);
    }

    #[test]
    fn strengthening() {
        let mut formula = Formula::new(3, &[]);
        formula.push_clause(FormulaClause::original(clause(&[1, 2])));
        formula.push_clause(FormulaClause::original(clause(&[-1, 2, 3])));

        let outcome = Subsumption::default().simplify(&mut formula).expect("simplify");
        assert_eq!(outcome.eliminated_clauses, 0);
        assert_eq!(formula.clauses[1].literals, clause(&[2, 3]));
    }

    #[test]
    fn strengthening_to_unit() {
        let mut formula = Formula::new(2, &[]);
        formula.push_clause(FormulaClause::original(clause(&[1, 2])));
        formula.push_clause(FormulaClause::original(clause(&[1, -2])));

        let outcome = Subsumption::default().simplify(&mut formula).expect("simplify");
        assert_eq!(outcome.units, vec![lit(1)]);
        assert_eq!(formula.clauses.len(), 1);
    }

    #[test]
    fn learnt_promotion() {
        let mut formula = Formula::new(3, &[]);
        formula.push_clause(FormulaClause::original(clause(&[1, 2, 3])));
        let mut learnt = FormulaClause::original(clause(&[1, 2]));
        learnt.source = ClauseSource::Resolution;
        formula.push_clause(learnt);

        let outcome = Subsumption::default().simplify(&mut formula).expect("simplify");
        assert_eq!(outcome.eliminated_clauses, 1);
        assert_eq!(formula.clauses.len(), 1);
        assert_eq!(formula.clauses[0].source, ClauseSource::Original);
    }

    #[test]
    fn exhausted_budget() {
        let mut formula = Formula::new(3, &[]);
        formula.push_clause(FormulaClause::original(clause(&[1, 2])));
        formula.push_clause(FormulaClause::original(clause(&[1, 2, 3])));

        let mut subsumption = Subsumption { budget: 0 };
        let outcome = subsumption.simplify(&mut formula).expect("simplify");
        assert_eq!(outcome.eliminated_clauses, 0);
        assert_eq!(formula.clauses.len(), 2);
    }
}
