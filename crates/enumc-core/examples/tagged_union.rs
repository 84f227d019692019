//! End-to-end demonstration of a two-case tagged union.
//!
//! Builds a `Variant` value in its text-carrying case, checks both fields,
//! round-trips the integer case, then prints the C declarations the library
//! generates for the same shape. The process exits 0 only if every check
//! holds.

use enumc_core::ast::{EnumDef, EnumVariant, RustType, VariantPayload};
use enumc_core::{lower_enum, CPrinter};

enum Variant {
    A(String, i32),
    B(i64),
}

fn main() {
    let value = Variant::A("abc".to_string(), 12);
    match &value {
        Variant::A(text, number) => {
            assert_eq!(text, "abc");
            assert_eq!(*number, 12);
        }
        Variant::B(_) => unreachable!("constructed as case A"),
    }

    let echo = Variant::B(i64::MIN);
    match echo {
        Variant::B(n) => assert_eq!(n, i64::MIN),
        Variant::A(..) => unreachable!("constructed as case B"),
    }

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
    print!("{}", CPrinter::new().print_file(&[lower_enum(&def)]));
}
