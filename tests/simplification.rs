use marten_sat::{config::Config, context::Context, reports::Report};

fn config_with(replacement: bool, subsumption: bool, xor_subsumption: bool, gaussian: bool) -> Config {
    let mut config = Config::default();
    config.invariant_checks.value = true;
    config.simplification.replacement.value = replacement;
    config.simplification.subsumption.value = subsumption;
    config.simplification.xor_subsumption.value = xor_subsumption;
    config.simplification.gaussian.value = gaussian;
    config
}

mod replacement {

    use marten_sat::structures::literal::Literal;

    use super::*;

    #[test]
    fn equivalence_chain() {
        let mut ctx = Context::from_config(config_with(true, false, false, false));

        let [p, q, r, s] = *ctx.fresh_or_max_literals(4).as_slice() else {
            panic!("Insufficient literals");
        };

        // p ↔ q, q ↔ ¬r
        assert!(ctx.add_clause(vec![-p, q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![q, r]).is_ok());
        assert!(ctx.add_clause(vec![-q, -r]).is_ok());
        assert!(ctx.add_clause(vec![s, p, q]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.replaced_atom_count(), 2);

        let p_value = ctx.value_of(p.atom());
        assert!(p_value.is_some());
        assert_eq!(ctx.value_of(q.atom()), p_value);
        assert_eq!(ctx.value_of(r.atom()), p_value.map(|value| !value));
    }

    #[test]
    fn clauses_added_after_replacement() {
        let mut ctx = Context::from_config(config_with(true, false, false, false));

        let [p, q, r] = *ctx.fresh_or_max_literals(3).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![-p, q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![p, r]).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.replaced_atom_count(), 1);

        // Mentions only the replaced atom.
        assert!(ctx.add_clause(-q).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(p.atom()), Some(false));
        assert_eq!(ctx.value_of(q.atom()), Some(false));
        assert_eq!(ctx.value_of(r.atom()), Some(true));

        assert!(ctx.add_clause(vec![q, -r]).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn equivalences_are_dumped() {
        let mut ctx = Context::from_config(config_with(true, false, false, false));

        let [p, q, r] = *ctx.fresh_or_max_literals(3).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![-p, q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![q, r]).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        let mut dump = Vec::default();
        assert!(ctx.dump_learnts(&mut dump, usize::MAX).is_ok());
        let dump = String::from_utf8(dump).expect("utf8");

        let equivalences = dump
            .lines()
            .skip_while(|line| *line != "c equivalences")
            .skip(2)
            .take_while(|line| !line.starts_with('c'))
            .collect::<Vec<_>>();
        assert_eq!(equivalences, vec!["-1 2 0", "1 -2 0"]);
    }
}

mod subsumption {

    use super::*;

    #[test]
    fn subsumed_clauses_removed() {
        let mut ctx = Context::from_config(config_with(false, true, false, false));

        let [p, q, r, s] = *ctx.fresh_or_max_literals(4).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![p, q, r]).is_ok());
        assert!(ctx.add_clause(vec![p, q, -s]).is_ok());
        assert!(ctx.add_clause(vec![-p, r, s]).is_ok());
        assert_eq!(ctx.clause_db.original_count(), 4);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.clause_db.original_count(), 2);
        assert_eq!(ctx.eliminated_clause_count(), 2);
    }

    #[test]
    fn strengthening_derives_facts() {
        let mut ctx = Context::from_config(config_with(false, true, false, false));

        let [p, q, r] = *ctx.fresh_or_max_literals(3).as_slice() else {
            panic!("Insufficient literals");
        };

        // (p ∨ q) and (p ∨ ¬q) strengthen to p.
        assert!(ctx.add_clause(vec![p, q, r]).is_ok());
        assert!(ctx.add_clause(vec![p, -q, r]).is_ok());
        assert!(ctx.add_clause(vec![p, -r]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(ctx.level_zero_facts().contains(&p));
    }

    #[test]
    fn budget_bounds_checks() {
        let mut config = config_with(false, true, false, false);
        config.simplification.subsumption_budget.value = 0;
        let mut ctx = Context::from_config(config);

        let [p, q, r, s] = *ctx.fresh_or_max_literals(4).as_slice() else {
            panic!("Insufficient literals");
        };

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![p, q, r]).is_ok());
        assert!(ctx.add_clause(vec![p, q, s]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        let stats = &ctx.simplification_stats()[1];
        assert_eq!(stats.name, "subsumption");
        assert_eq!(stats.calls, 1);
        assert_eq!(stats.eliminated_clauses, 0);
        assert_eq!(ctx.clause_db.original_count(), 3);

        // The budget is read at each episode.
        ctx.config.simplification.subsumption_budget.value = 100;
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.simplification_stats()[1].calls, 2);
        assert_eq!(ctx.simplification_stats()[1].eliminated_clauses, 2);
        assert_eq!(ctx.clause_db.original_count(), 1);
    }
}

mod collaborators {

    use super::*;

    #[test]
    fn stats_for_each_collaborator() {
        let mut ctx = Context::from_config(Config::default());

        let literals = ctx.fresh_or_max_literals(4);
        assert!(ctx.add_clause(vec![literals[0], literals[1]]).is_ok());
        assert!(ctx.add_xor(literals.clone()).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        let stats = ctx.simplification_stats();
        assert_eq!(stats.len(), 4);
        assert!(stats.iter().all(|stats| stats.calls == 1));
        assert_eq!(ctx.counters.episodes, 1);
    }

    #[test]
    fn disabled_collaborators_are_not_called() {
        let mut ctx = Context::from_config(config_with(false, true, false, true));

        let literals = ctx.fresh_or_max_literals(3);
        assert!(ctx.add_clause(vec![literals[0], literals[1], literals[2]]).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        let calls = ctx
            .simplification_stats()
            .iter()
            .map(|stats| stats.calls)
            .collect::<Vec<_>>();
        assert_eq!(calls, vec![0, 1, 0, 1]);
    }

    #[test]
    fn no_episodes_when_disabled() {
        let mut config = Config::default();
        config.simplification.enabled.value = false;
        let mut ctx = Context::from_config(config);

        let literals = ctx.fresh_or_max_literals(3);
        assert!(ctx.add_clause(vec![literals[0], literals[1], literals[2]]).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.counters.episodes, 0);
    }
}
