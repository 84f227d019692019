//! C code printer for tagged-union declarations

use crate::cdecl::{CMemberPayload, CTaggedUnion};
use itertools::Itertools;

/// Formatting configuration for the printer
#[derive(Debug, Clone)]
pub struct PrinterConfig {
    /// Spaces per indentation level
    pub indent_width: usize,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

/// Renders C declarations as source text
#[derive(Debug, Clone)]
pub struct CPrinter {
    config: PrinterConfig,
}

impl CPrinter {
    pub fn new() -> Self {
        Self {
            config: PrinterConfig::default(),
        }
    }

    pub fn with_config(config: PrinterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Generate indentation string for the given level
    fn indent(&self, level: usize) -> String {
        " ".repeat(self.config.indent_width * level)
    }

    /// Emit a complete C file: includes, the `empty` typedef when a unit
    /// variant needs it, then every declaration in input order.
    pub fn print_file(&self, decls: &[CTaggedUnion]) -> String {
        let mut output = String::new();

        let needs_empty = decls.iter().any(CTaggedUnion::has_empty_member);
        let types: Vec<_> = decls.iter().flat_map(|d| d.payload_types()).collect();

        let mut includes = Vec::new();
        if types.iter().any(|t| t.needs_stdbool()) {
            includes.push("#include <stdbool.h>");
        }
        if types.iter().any(|t| t.needs_stddef()) {
            includes.push("#include <stddef.h>");
        }
        // The empty typedef is spelled uint8_t
        if needs_empty || types.iter().any(|t| t.needs_stdint()) {
            includes.push("#include <stdint.h>");
        }

        if !includes.is_empty() {
            output.push_str(&includes.join("\n"));
            output.push_str("\n\n");
        }

        if needs_empty {
            output.push_str("typedef uint8_t empty;\n\n");
        }

        output.push_str(&decls.iter().map(|d| self.print_decl(d)).join("\n"));
        output
    }

    /// Emit the tag enum and wrapper struct for one tagged union
    pub fn print_decl(&self, decl: &CTaggedUnion) -> String {
        let mut output = String::new();

        output.push_str(&format!("enum {} {{\n", decl.tag.name));
        for enumerator in &decl.tag.enumerators {
            output.push_str(&format!("{}{},\n", self.indent(1), enumerator));
        }
        output.push_str("};\n\n");

        output.push_str(&format!("struct {} {{\n", decl.name));
        output.push_str(&format!(
            "{}enum {} variant;\n",
            self.indent(1),
            decl.tag.name
        ));
        output.push_str(&format!("{}union {{\n", self.indent(1)));
        for member in &decl.members {
            match &member.payload {
                CMemberPayload::Empty => {
                    output.push_str(&format!("{}empty {};\n", self.indent(2), member.name));
                }
                CMemberPayload::Single(ty) => {
                    output.push_str(&format!("{}{};\n", self.indent(2), ty.declare(&member.name)));
                }
                CMemberPayload::Struct(fields) => {
                    output.push_str(&format!("{}struct {{\n", self.indent(2)));
                    for field in fields {
                        output.push_str(&format!(
                            "{}{};\n",
                            self.indent(3),
                            field.ty.declare(&field.name)
                        ));
                    }
                    output.push_str(&format!("{}}} {};\n", self.indent(2), member.name));
                }
            }
        }
        output.push_str(&format!("{}}};\n", self.indent(1)));
        output.push_str("};\n");
        output
    }
}

impl Default for CPrinter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{EnumDef, EnumVariant, RustType, VariantPayload};
    use crate::lower::lower_enum;
    use pretty_assertions::assert_eq;

    fn lower(name: &str, variants: Vec<(&str, VariantPayload)>) -> CTaggedUnion {
        lower_enum(&EnumDef {
            name: name.to_string(),
            variants: variants
                .into_iter()
                .map(|(n, payload)| EnumVariant {
                    name: n.to_string(),
                    payload,
                })
                .collect(),
        })
    }

    #[test]
    fn prints_tuple_and_single_members() {
        let decl = lower(
            "Variant",
            vec![
                ("A", VariantPayload::Tuple(vec![RustType::Str, RustType::I32])),
                ("B", VariantPayload::Tuple(vec![RustType::I64])),
            ],
        );
        let output = CPrinter::new().print_file(&[decl]);
        assert_eq!(
            output,
            "\
enum VariantTag {
    VARIANT_A,
    VARIANT_B,
};

struct Variant {
    enum VariantTag variant;
    union {
        struct {
            char *t_0;
            int t_1;
        } a;
        long long b;
    };
};
"
        );
    }

    #[test]
    fn unit_variants_pull_in_the_empty_typedef() {
        let decl = lower(
            "Named",
            vec![
                (
                    "A",
                    VariantPayload::Struct(vec![
                        crate::ast::Field {
                            name: "x".to_string(),
                            ty: RustType::Str,
                        },
                        crate::ast::Field {
                            name: "y".to_string(),
                            ty: RustType::I32,
                        },
                    ]),
                ),
                ("B", VariantPayload::Unit),
            ],
        );
        let output = CPrinter::new().print_file(&[decl]);
        assert!(output.starts_with("#include <stdint.h>\n\ntypedef uint8_t empty;\n"));
        assert!(output.contains("        } a;\n"));
        assert!(output.contains("        empty b;\n"));
    }

    #[test]
    fn includes_follow_the_types_used() {
        let decl = lower(
            "Flags",
            vec![(
                "All",
                VariantPayload::Tuple(vec![RustType::Bool, RustType::Usize, RustType::U8]),
            )],
        );
        let output = CPrinter::new().print_file(&[decl]);
        assert!(output.contains("#include <stdbool.h>"));
        assert!(output.contains("#include <stddef.h>"));
        assert!(output.contains("#include <stdint.h>"));
    }

    #[test]
    fn no_includes_for_plain_types() {
        let decl = lower(
            "Sum",
            vec![
                ("A", VariantPayload::Tuple(vec![RustType::Str])),
                ("B", VariantPayload::Tuple(vec![RustType::I32])),
            ],
        );
        let output = CPrinter::new().print_file(&[decl]);
        assert!(!output.contains("#include"));
        assert!(output.starts_with("enum SumTag {"));
        assert!(output.contains("        char *a;\n"));
        assert!(output.contains("        int b;\n"));
    }

    #[test]
    fn multiple_declarations_are_blank_line_separated() {
        let first = lower("Sum", vec![("A", VariantPayload::Tuple(vec![RustType::I32]))]);
        let second = lower("Mode", vec![("On", VariantPayload::Unit)]);
        let output = CPrinter::new().print_file(&[first, second]);
        assert!(output.contains("};\n\nenum ModeTag"));
    }

    #[test]
    fn custom_indent_width() {
        let decl = lower("Sum", vec![("A", VariantPayload::Tuple(vec![RustType::I32]))]);
        let printer = CPrinter::with_config(PrinterConfig { indent_width: 2 });
        let output = printer.print_decl(&decl);
        assert!(output.contains("\n  SUM_A,\n"));
        assert!(output.contains("\n  enum SumTag variant;\n"));
    }
}
