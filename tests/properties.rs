//! Solves small random formulas, and compares each result with an exhaustive search.

use marten_sat::{
    config::Config,
    context::Context,
    generic::minimal_pcg::MinimalPCG32,
    reports::Report,
    structures::literal::{CLiteral, Literal},
};

use rand::{Rng, SeedableRng};

const ATOMS: usize = 8;

fn random_literal(rng: &mut MinimalPCG32) -> CLiteral {
    CLiteral::new(rng.gen_range(0..ATOMS) as u32, rng.gen_bool(0.5))
}

/// A formula over atoms 0..ATOMS.
#[derive(Debug)]
struct Formula {
    clauses: Vec<Vec<CLiteral>>,
    xors: Vec<Vec<CLiteral>>,
}

impl Formula {
    fn random(rng: &mut MinimalPCG32, clause_count: usize, xor_count: usize) -> Self {
        let clauses = (0..clause_count)
            .map(|_| {
                let width = rng.gen_range(1..=3);
                (0..width).map(|_| random_literal(rng)).collect()
            })
            .collect();

        let xors = (0..xor_count)
            .map(|_| {
                let width = rng.gen_range(1..=5);
                (0..width).map(|_| random_literal(rng)).collect()
            })
            .collect();

        Formula { clauses, xors }
    }

    fn satisfied_by(&self, value: impl Fn(CLiteral) -> bool) -> bool {
        self.clauses.iter().all(|clause| clause.iter().any(|l| value(*l)))
            && self
                .xors
                .iter()
                .all(|xor| xor.iter().filter(|l| value(**l)).count() % 2 == 1)
    }

    fn brute_force(&self) -> bool {
        (0..1_u32 << ATOMS).any(|assignment| {
            self.satisfied_by(|literal| ((assignment >> literal.atom()) & 1 == 1) == literal.polarity())
        })
    }

    fn solve(&self, config: Config) -> (Report, Vec<Option<bool>>) {
        let mut ctx = Context::from_config(config);
        let _ = ctx.fresh_or_max_literals(ATOMS);

        for clause in &self.clauses {
            assert!(ctx.add_clause(clause.clone()).is_ok());
        }
        for xor in &self.xors {
            assert!(ctx.add_xor(xor.clone()).is_ok());
        }

        let report = ctx.solve().expect("solve");
        (report, ctx.model())
    }
}

fn checked_config(simplify: bool) -> Config {
    let mut config = Config::default();
    config.invariant_checks.value = true;
    config.simplification.enabled.value = simplify;
    config.simplification.interval.value = 1;
    config
}

fn compare(formula: &Formula, config: Config) {
    let (report, model) = formula.solve(config);

    match report {
        Report::Satisfiable => {
            let value = |literal: CLiteral| model[literal.atom() as usize] == Some(literal.polarity());
            assert!(formula.satisfied_by(value), "{formula:?} with {model:?}");
        }

        Report::Unsatisfiable => assert!(!formula.brute_force(), "{formula:?}"),

        other => panic!("Unexpected report {other} for {formula:?}"),
    }
}

mod properties {

    use super::*;

    #[test]
    fn clauses() {
        let mut rng = MinimalPCG32::from_seed(11_u64.to_le_bytes());
        for _ in 0..200 {
            let formula = Formula::random(&mut rng, 30, 0);
            compare(&formula, checked_config(true));
            compare(&formula, checked_config(false));
        }
    }

    #[test]
    fn clauses_and_xors() {
        let mut rng = MinimalPCG32::from_seed(29_u64.to_le_bytes());
        for _ in 0..200 {
            let formula = Formula::random(&mut rng, 12, 4);
            compare(&formula, checked_config(true));
            compare(&formula, checked_config(false));
        }
    }

    #[test]
    fn agreement_with_and_without_simplification() {
        let mut rng = MinimalPCG32::from_seed(3_u64.to_le_bytes());
        for _ in 0..100 {
            let formula = Formula::random(&mut rng, 20, 3);
            let (with, _) = formula.solve(checked_config(true));
            let (without, _) = formula.solve(checked_config(false));
            assert_eq!(with, without, "{formula:?}");
            assert_eq!(with == Report::Satisfiable, formula.brute_force());
        }
    }
}
