//! Semantics of the canonical two-case variant, and its C rendering.
//!
//! The sum type makes the inactive case's payload unreachable by
//! construction; accessors return `None` for the wrong case instead of
//! reinterpreting memory.

use enumc_core::ast::{EnumDef, EnumVariant, RustType, VariantPayload};
use enumc_core::{lower_enum, CPrinter};

enum Variant {
    A(String, i32),
    B(i64),
}

impl Variant {
    fn text(&self) -> Option<&str> {
        match self {
            Variant::A(text, _) => Some(text),
            Variant::B(_) => None,
        }
    }

    fn number(&self) -> Option<i32> {
        match self {
            Variant::A(_, number) => Some(*number),
            Variant::B(_) => None,
        }
    }

    fn value(&self) -> Option<i64> {
        match self {
            Variant::B(value) => Some(*value),
            Variant::A(..) => None,
        }
    }
}

#[test]
fn case_a_fields_read_back_exactly() {
    let v = Variant::A("abc".to_string(), 12);
    assert_eq!(v.text(), Some("abc"));
    assert_eq!(v.number(), Some(12));
}

#[test]
fn case_b_round_trips_any_value() {
    for n in [0, 12, -1, i64::MIN, i64::MAX] {
        let v = Variant::B(n);
        assert_eq!(v.value(), Some(n));
    }
}

#[test]
fn inactive_case_is_not_readable() {
    let a = Variant::A("abc".to_string(), 12);
    assert_eq!(a.value(), None);

    let b = Variant::B(7);
    assert_eq!(b.text(), None);
    assert_eq!(b.number(), None);
}

#[test]
#[should_panic(expected = "expected case A")]
fn demanding_the_wrong_case_fails_loudly() {
    let v = Variant::B(7);
    let _ = v.text().expect("expected case A");
}

#[test]
fn lowering_the_same_shape_matches_the_c_layout() {
    let def = EnumDef {
        name: "Variant".to_string(),
        variants: vec![
            EnumVariant {
                name: "A".to_string(),
                payload: VariantPayload::Tuple(vec![RustType::Str, RustType::I32]),
            },
            EnumVariant {
                name: "B".to_string(),
                payload: VariantPayload::Tuple(vec![RustType::I64]),
            },
        ],
    };
    let output = CPrinter::new().print_file(&[lower_enum(&def)]);
    assert!(output.contains("enum VariantTag"));
    assert!(output.contains("VARIANT_A"));
    assert!(output.contains("VARIANT_B"));
    assert!(output.contains("char *t_0;"));
    assert!(output.contains("int t_1;"));
    assert!(output.contains("long long b;"));
}
