mod config {
    use crate::core::tolerance::Tolerance;
    use crate::core::ulp;
    use core::cmp::Ordering;

    #[test]
    fn defaults_match_free_functions() {
        let t = Tolerance::default();
        println!("{t:?}");
        assert_eq!(t.rel_tol, 1e-9);
        assert_eq!(t.abs_tol, 0.0);
        assert_eq!(t.zero_tol, 1e-9);
        assert_eq!(t.max_ulps, 4);

        assert!(t.near(0.1 + 0.2, 0.3));
        assert!(t.near_zero(1e-15));
        assert!(t.within_ulps(1.0, ulp::add(1.0, 4)));
        assert!(!t.within_ulps(1.0, ulp::add(1.0, 5)));
        assert_eq!(t.compare(1.0, 2.0), Ordering::Less);
        assert!(t.is_integer(3.0000000001));
        assert_eq!(t.to_zero(-1e-15), 0.0);
        assert_eq!(t.to_int(2.9999999999), 3.0);
    }

    #[test]
    fn builders_override_one_field() {
        let t = Tolerance::default().with_max_ulps(10).with_zero_tol(1e-3);
        assert_eq!(t.max_ulps, 10);
        assert_eq!(t.zero_tol, 1e-3);
        assert_eq!(t.rel_tol, 1e-9);
        assert!(t.within_ulps(1.0, ulp::add(1.0, 10)));
        assert!(t.near_zero(5e-4));

        let loose = Tolerance::default().with_rel_tol(1e-2).with_abs_tol(0.5);
        assert!(loose.near(1.0, 1.001));
        assert!(loose.near(0.0, 0.4));
        assert!(!loose.near(f64::NAN, f64::NAN));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loads_partial_config() {
        let t: Tolerance = serde_json::from_str(r#"{ "max_ulps": 16 }"#).unwrap();
        assert_eq!(t, Tolerance::default().with_max_ulps(16));

        let json = serde_json::to_string(&t).unwrap();
        let back: Tolerance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
