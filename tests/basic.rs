use marten_sat::{builder::ClauseOk, config::Config, context::Context, reports::Report};

mod basic {

    use marten_sat::structures::{clause::Clause, literal::Literal};

    use super::*;

    #[test]
    fn one_literal() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_literal();

        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(p));

        assert!(ctx.solve().is_ok());

        assert_eq!(ctx.report(), Report::Satisfiable)
    }

    #[test]
    fn conflict() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());

        assert!(ctx.solve().is_ok());
        assert!(matches!(ctx.report(), Report::Unsatisfiable))
    }

    #[test]
    fn unit_conjunct() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(vec![p, q]));

        assert!(ctx.add_clause(-p).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert_eq!(ctx.value_of(p.atom()), Some(false));
        assert_eq!(ctx.value_of(q.atom()), Some(true));
    }

    #[test]
    fn duplicates() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r] = *ctx.fresh_or_max_literals(3).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, p, q, q, r]).is_ok());

        assert_eq!(3, ctx.atom_db.count());

        let database = ctx.clause_db.all_clauses().collect::<Vec<_>>();
        assert_eq!(database.len(), 1);

        let the_clause_dimacs = database[0].as_dimacs(true);
        assert_eq!(
            the_clause_dimacs.split_whitespace().count(),
            "1 2 3 0".split_whitespace().count()
        );
    }

    #[test]
    fn tautology_skip() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert_eq!(ctx.add_clause(vec![p, -q, -p]), Ok(ClauseOk::Tautology));
        assert!(ctx.clause_db.all_clauses().next().is_none());
    }

    #[test]
    fn incremental() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r] = *ctx.fresh_or_max_literals(3).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, q, r]).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        assert!(ctx.add_clause(-p).is_ok());
        assert!(ctx.add_clause(-q).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(r.atom()), Some(true));

        assert!(ctx.add_clause(-r).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));

        // Once unsatisfiable, always unsatisfiable.
        let s = ctx.fresh_or_max_literal();
        assert_eq!(ctx.add_clause(s), Ok(ClauseOk::Unsatisfiable));
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn empty_formula() {
        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.add_clause(Vec::default()), Ok(ClauseOk::Unsatisfiable));
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }
}

mod assumptions {

    use marten_sat::structures::literal::Literal;

    use super::*;

    #[test]
    fn direct() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![-p, q]).is_ok());
        assert!(ctx.add_clause(vec![-q]).is_ok());

        assert_eq!(ctx.solve_given(vec![p], None), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.failed_assumption(), Some(p));
        assert!(matches!(ctx.report(), Report::Unsatisfiable));

        // The formula itself remains satisfiable.
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.failed_assumption(), None);
        assert_eq!(ctx.value_of(p.atom()), Some(false));
    }

    #[test]
    fn small_chain() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r, s, t] = *ctx.fresh_or_max_literals(5).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![-p, q]).is_ok());
        assert!(ctx.add_clause(vec![-q, r]).is_ok());
        assert!(ctx.add_clause(vec![-r, s]).is_ok());
        assert!(ctx.add_clause(vec![-s, t]).is_ok());
        assert!(ctx.add_clause(vec![-t]).is_ok());

        assert_eq!(ctx.solve_given(vec![p], None), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.failed_assumption(), Some(p));
    }

    #[test]
    fn respected_when_satisfiable() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r] = *ctx.fresh_or_max_literals(3).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, q, r]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());

        assert_eq!(ctx.solve_given(vec![-p, -r], None), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(p.atom()), Some(false));
        assert_eq!(ctx.value_of(q.atom()), Some(true));
        assert_eq!(ctx.value_of(r.atom()), Some(false));

        assert_eq!(ctx.solve_given(vec![p], None), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(p.atom()), Some(true));
        assert_eq!(ctx.value_of(q.atom()), Some(false));
    }

    #[test]
    fn over_replaced_atoms() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r] = *ctx.fresh_or_max_literals(3).as_slice() else {
            panic!("Insufficient literals");
        };

        // p and q are equivalent, and so q is replaced by p during the first episode.
        assert!(ctx.add_clause(vec![-p, q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![q, r]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.replaced_atom_count(), 1);

        assert_eq!(ctx.solve_given(vec![-q, -r], None), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.failed_assumption(), Some(-r));

        assert_eq!(ctx.solve_given(vec![-q], None), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(p.atom()), Some(false));
        assert_eq!(ctx.value_of(q.atom()), Some(false));
        assert_eq!(ctx.value_of(r.atom()), Some(true));
    }
}
