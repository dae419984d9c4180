mod or_test {
    use crate::formulas::{EncodedFormula, ToFormula};
    use crate::util::test_util::{string_vars, vars, F};

    #[test]
    fn test_type() {
        let ff = F::new();
        assert!(ff.OR1.is_or());
        assert!(ff.OR1.is_nary_operator());
        assert!(!ff.OR1.is_and());
        assert!(!ff.OR1.is_binary_operator());
        assert!(!ff.OR1.is_constant());
        assert!(!ff.OR1.is_not());
    }

    #[test]
    fn test_creator() {
        let ff = F::new();
        let f = &ff.f;
        assert_eq!(f.or(Vec::<EncodedFormula>::new()), ff.FALSE);
        assert_eq!(f.or(&[ff.TRUE]), ff.TRUE);
        assert_eq!(f.or(&[ff.FALSE]), ff.FALSE);
        assert_eq!(f.or(&[ff.TRUE, ff.FALSE]), ff.TRUE);
        assert_eq!(f.or(&[ff.A, ff.FALSE]), ff.A);
        assert_eq!(f.or(&[ff.A, ff.NA, ff.TRUE]), ff.TRUE);
        assert_eq!(f.or(&[ff.NX]), ff.NX);
        assert_eq!(f.or(&[ff.X, ff.Y]), ff.OR1);
        assert_eq!(f.or(&[ff.AND1, ff.AND2]), ff.OR3);
    }

    #[test]
    fn test_flattening() {
        let ff = F::new();
        let f = &ff.f;
        let nested = f.or(&[ff.OR1, f.or(&[ff.A, ff.OR2])]);
        assert_eq!(nested.operands(f), vec![ff.X, ff.Y, ff.A, ff.NX, f.not(ff.Y)]);
        assert_eq!(nested, "x | y | a | ~x | ~y".to_formula(f));
    }

    #[test]
    fn test_variables() {
        let ff = F::new();
        let f = &ff.f;
        assert_eq!(ff.OR3.variables(f), vars("a b", f));
        assert_eq!(ff.OR1.string_variables(f), string_vars("x y"));
    }

    #[test]
    fn test_to_string() {
        let ff = F::new();
        let f = &ff.f;
        assert_eq!(ff.OR1.to_string(f), "x ∨ y");
        assert_eq!(ff.OR3.to_string(f), "a ∧ b ∨ ¬a ∧ ¬b");
        assert_eq!(ff.EXCLUDED_MIDDLE.to_string(f), "P ∨ ¬P");
    }
}
