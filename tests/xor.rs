use marten_sat::{
    builder::ClauseOk,
    config::Config,
    context::Context,
    reports::Report,
    structures::literal::{CLiteral, Literal},
};

fn parity_of(ctx: &Context, literals: &[CLiteral]) -> bool {
    literals
        .iter()
        .filter(|literal| ctx.value_of(literal.atom()) == Some(literal.polarity()))
        .count()
        % 2
        == 1
}

fn without_simplification() -> Config {
    let mut config = Config::default();
    config.simplification.enabled.value = false;
    config
}

mod xor {

    use super::*;

    #[test]
    fn contradictory_pair() {
        for config in [Config::default(), without_simplification()] {
            let mut ctx = Context::from_config(config);

            let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
                panic!("Insufficient literals");
            };

            assert_eq!(ctx.add_xor(vec![p, q]), Ok(ClauseOk::Added));
            assert_eq!(ctx.add_xor(vec![-p, q]), Ok(ClauseOk::Added));
            assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        }
    }

    #[test]
    fn long_constraint() {
        for config in [Config::default(), without_simplification()] {
            let mut ctx = Context::from_config(config);
            let literals = ctx.fresh_or_max_literals(20);

            assert_eq!(ctx.add_xor(literals.clone()), Ok(ClauseOk::Added));
            for pair in literals[..18].chunks(2) {
                assert!(ctx.add_clause(vec![-pair[0], -pair[1]]).is_ok());
            }

            assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
            assert!(parity_of(&ctx, &literals));
        }
    }

    #[test]
    fn negated_literals() {
        let mut ctx = Context::from_config(Config::default());

        let [p, q, r] = *ctx.fresh_or_max_literals(3).as_slice() else {
            panic!("Insufficient literals");
        };

        // ¬p ⊕ q ⊕ ¬r, so p ⊕ q ⊕ r is also true.
        let constraint = vec![-p, q, -r];
        assert!(ctx.add_xor(constraint.clone()).is_ok());
        assert!(ctx.add_clause(-q).is_ok());
        assert!(ctx.add_clause(r).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(parity_of(&ctx, &constraint));
        assert_eq!(ctx.value_of(p.atom()), Some(false));
    }

    #[test]
    fn system_with_unique_solution() {
        for config in [Config::default(), without_simplification()] {
            let mut ctx = Context::from_config(config);

            let [a, b, c, d] = *ctx.fresh_or_max_literals(4).as_slice() else {
                panic!("Insufficient literals");
            };

            // a ⊕ b ⊕ c = 1, b ⊕ c = 0, c ⊕ d = 1, a ⊕ d = 0
            assert!(ctx.add_xor(vec![a, b, c]).is_ok());
            assert!(ctx.add_xor(vec![-b, c]).is_ok());
            assert!(ctx.add_xor(vec![c, d]).is_ok());
            assert!(ctx.add_xor(vec![-a, d]).is_ok());

            assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
            assert_eq!(ctx.value_of(a.atom()), Some(true));
            assert_eq!(ctx.value_of(b.atom()), Some(false));
            assert_eq!(ctx.value_of(c.atom()), Some(false));
            assert_eq!(ctx.value_of(d.atom()), Some(true));
        }
    }

    #[test]
    fn inconsistent_system() {
        for config in [Config::default(), without_simplification()] {
            let mut ctx = Context::from_config(config);
            let literals = ctx.fresh_or_max_literals(6);

            // The sum of the three constraints is 0 = 1.
            assert!(ctx.add_xor(vec![literals[0], literals[1], literals[2], literals[3]]).is_ok());
            assert!(ctx.add_xor(vec![literals[2], literals[3], literals[4], literals[5]]).is_ok());
            assert!(ctx.add_xor(vec![literals[0], literals[1], literals[4], literals[5]]).is_ok());

            assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        }
    }

    #[test]
    fn gaussian_derives_facts() {
        let mut config = Config::default();
        config.simplification.xor_subsumption.value = false;
        config.simplification.replacement.value = false;
        let mut ctx = Context::from_config(config);
        let literals = ctx.fresh_or_max_literals(4);

        assert!(ctx.add_xor(vec![literals[0], literals[1], literals[2], literals[3]]).is_ok());
        assert!(ctx.add_xor(vec![literals[1], literals[2], -literals[3]]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(ctx.level_zero_facts().contains(&literals[0]));
        assert_eq!(ctx.simplification_stats()[3].units, 1);
    }
}
