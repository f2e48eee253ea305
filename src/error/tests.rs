use super::*;

#[test]
fn test_display_formatting() {
    let err = Error::UnknownPrimitivePolynomial { power: 30 };
    assert!(err.to_string().contains("GF(2^30)"));

    let err = Error::IncompatibleBaseOperation { operation: "F2m add" };
    assert!(err.to_string().contains("F2m add"));

    let err = Error::DivisionByZero {
        context: "F2m inverse",
    };
    assert!(err.to_string().contains("F2m inverse"));
}

#[test]
fn test_param_shorthand() {
    let err = Error::param("test", "invalid value");
    match err {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "test");
            assert_eq!(reason, "invalid value");
        }
        _ => panic!("Expected Parameter error"),
    }
}

#[test]
fn test_validation_functions() {
    assert!(validate::parameter(true, "test", "should pass").is_ok());
    let err = validate::parameter(false, "test", "should fail").unwrap_err();
    match err {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "test");
            assert_eq!(reason, "should fail");
        }
        _ => panic!("Expected Parameter error"),
    }

    assert!(validate::on_curve(true, "add").is_ok());
    let err = validate::on_curve(false, "add").unwrap_err();
    assert_eq!(err, Error::InvalidPoint { context: "add" });
}
