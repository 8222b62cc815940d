use super::*;

fn values(cna: Option<&str>, mutation: Option<&str>) -> ProfileValues {
    let mut v = ProfileValues::default();
    if let Some(c) = cna {
        v.set(GeneticProfileKind::CopyNumber, c);
    }
    if let Some(m) = mutation {
        v.set(GeneticProfileKind::Mutation, m);
    }
    v
}

#[test]
fn test_copy_number_homozygous_calls_only() {
    for (raw, expected) in [
        ("2", true),
        ("-2", true),
        ("+2", true),
        (" 2 ", true),
        ("1", false),
        ("-1", false),
        ("0", false),
        ("3", false),
    ] {
        assert_eq!(
            is_copy_number_altered(&values(Some(raw), None)).unwrap(),
            expected,
            "value {raw:?}"
        );
    }
}

#[test]
fn test_copy_number_out_of_range_integer_not_altered() {
    for raw in ["3000000000", "-3000000000", "99999999999999999999999", "+12345678901234567890"] {
        assert!(
            !is_copy_number_altered(&values(Some(raw), None)).unwrap(),
            "value {raw:?}"
        );
    }
    assert!(is_copy_number_altered(&values(Some("--2"), None)).is_err());
    assert!(is_copy_number_altered(&values(Some("+"), None)).is_err());
}

#[test]
fn test_copy_number_missing_is_not_altered() {
    assert!(!is_copy_number_altered(&values(None, Some("MUT1"))).unwrap());
    assert!(!is_copy_number_altered(&values(Some("NaN"), None)).unwrap());
    assert!(!is_copy_number_altered(&values(Some(""), None)).unwrap());
}

#[test]
fn test_copy_number_non_integer_is_malformed() {
    for raw in ["amp", "2.0", "NA"] {
        let err = is_copy_number_altered(&values(Some(raw), None)).unwrap_err();
        match err {
            AlterationError::MalformedValue { kind, value } => {
                assert_eq!(kind, GeneticProfileKind::CopyNumber);
                assert_eq!(value, raw);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn test_mutation_rules() {
    assert!(is_mutated(&values(None, Some("MUT1"))));
    assert!(is_mutated(&values(None, Some("R273H,R248Q"))));
    assert!(is_mutated(&values(None, Some("1"))));
    assert!(!is_mutated(&values(None, Some("NaN"))));
    assert!(!is_mutated(&values(None, Some("0"))));
    assert!(!is_mutated(&values(None, Some("0.0"))));
    assert!(!is_mutated(&values(None, Some(""))));
    assert!(!is_mutated(&values(Some("2"), None)));
}

#[test]
fn test_classify_reports_both_predicates() {
    let both = classify(Some(&values(Some("-2"), Some("G12D")))).unwrap();
    assert!(both.copy_number && both.mutated);
    assert!(both.both());

    let none = classify(None).unwrap();
    assert_eq!(none, Alteration::default());
}
