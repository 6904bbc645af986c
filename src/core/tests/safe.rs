mod fallbacks {
    use crate::core::safe::*;
    use test_case::test_case;

    #[test]
    fn div_cases() {
        assert_eq!(div(6.0, 3.0, None, 0.0), Some(2.0));
        assert_eq!(div(1.0, 2.0, None, 0.0), Some(0.5));
        assert_eq!(div(1.0, 0.0, None, 0.0), None);
        assert_eq!(div(1.0, -0.0, None, 0.0), None);
        assert_eq!(div(1.0, 0.0, Some(0.0), 0.0), Some(0.0));
        assert_eq!(div(1.0, 0.0, Some(99.0), 0.0), Some(99.0));
    }

    #[test]
    fn div_zero_tolerance() {
        assert_eq!(div(1.0, 1e-15, None, 1e-10), None);
        let r = div(1.0, 1e-15, None, 0.0).unwrap();
        assert!((r - 1e15).abs() < 1e14);
        assert!(div(1.0, f64::NAN, None, 0.0).unwrap().is_nan());
    }

    #[test]
    fn div_or_zero_cases() {
        assert_eq!(div_or_zero(6.0, 3.0, 0.0), 2.0);
        assert_eq!(div_or_zero(1.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn div_or_inf_cases() {
        assert_eq!(div_or_inf(6.0, 3.0, 0.0), 2.0);
        assert_eq!(div_or_inf(1.0, 0.0, 0.0), f64::INFINITY);
        assert_eq!(div_or_inf(-1.0, 0.0, 0.0), f64::NEG_INFINITY);
        assert!(div_or_inf(0.0, 0.0, 0.0).is_nan());
    }

    #[test_case(7.0, 3.0, 1.0; "positive")]
    #[test_case(10.0, 4.0, 2.0; "even")]
    #[test_case(-7.0, 3.0, 2.0; "negative dividend")]
    #[test_case(7.0, -3.0, -2.0; "negative divisor")]
    #[test_case(-7.0, -3.0, -1.0; "both negative")]
    fn modulo_is_floored(a: f64, b: f64, expected: f64) {
        assert_eq!(modulo(a, b, None, 0.0), Some(expected));
    }

    #[test]
    fn modulo_by_zero() {
        assert_eq!(modulo(7.0, 0.0, None, 0.0), None);
        assert_eq!(modulo(7.0, 0.0, Some(0.0), 0.0), Some(0.0));
        assert_eq!(modulo(6.0, -3.0, None, 0.0).map(f64::is_sign_negative), Some(true));
    }

    #[test]
    fn sqrt_cases() {
        assert_eq!(sqrt(4.0, None), Some(2.0));
        assert_eq!(sqrt(0.0, None), Some(0.0));
        assert_eq!(sqrt(9.0, None), Some(3.0));
        assert_eq!(sqrt(-1.0, None), None);
        assert_eq!(sqrt(-1.0, Some(0.0)), Some(0.0));
    }

    #[test]
    fn log_cases() {
        assert!((log(core::f64::consts::E, None, None).unwrap() - 1.0).abs() < 1e-10);
        assert!(log(1.0, None, None).unwrap().abs() < 1e-10);
        assert_eq!(log(100.0, Some(10.0), None), Some(2.0));
        assert_eq!(log(8.0, Some(2.0), None), Some(3.0));
    }

    #[test]
    fn log_refuses_bad_inputs() {
        assert_eq!(log(0.0, None, None), None);
        assert_eq!(log(-1.0, None, None), None);
        assert_eq!(log(-1.0, None, Some(0.0)), Some(0.0));
        assert_eq!(log(f64::NAN, None, None), None);
        assert_eq!(log(8.0, Some(1.0), None), None);
        assert_eq!(log(8.0, Some(-2.0), Some(-1.0)), Some(-1.0));
    }

    #[test]
    fn pow_cases() {
        assert_eq!(pow(2.0, 3.0, None), Some(8.0));
        assert_eq!(pow(10.0, 2.0, None), Some(100.0));
        assert_eq!(pow(0.0, 0.0, None), Some(1.0));
        assert_eq!(pow(-2.0, 3.0, None), Some(-8.0));
    }

    #[test]
    fn pow_refuses_undefined_results() {
        assert_eq!(pow(-1.0, 0.5, None), None);
        assert_eq!(pow(-1.0, 0.5, Some(0.0)), Some(0.0));
        assert_eq!(pow(0.0, -1.0, None), None);
        assert_eq!(pow(10.0, 400.0, None), Some(f64::INFINITY));
        assert!(pow(f64::NAN, 2.0, None).unwrap().is_nan());
    }
}
