//! Swift source emitter.

use std::fmt::Write as _;

use super::{IdentifierRecord, Parameter, ParameterType};

pub const DEFAULT_ENUM_NAME: &str = "L10n";

/// Table name Xcode uses when no `table:` argument is given.
pub const DEFAULT_TABLE: &str = "Localizable";

const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwiftOptions {
    /// Namespace enum holding the accessors.
    pub enum_name: String,
    /// String table, i.e. the catalog file stem. `Localizable` is implicit.
    pub table: Option<String>,
}

impl Default for SwiftOptions {
    fn default() -> Self {
        Self {
            enum_name: DEFAULT_ENUM_NAME.to_string(),
            table: None,
        }
    }
}

impl SwiftOptions {
    /// Options for a catalog file stem; `Localizable` maps to no table.
    pub fn for_table(enum_name: impl Into<String>, stem: &str) -> Self {
        Self {
            enum_name: enum_name.into(),
            table: (stem != DEFAULT_TABLE).then(|| stem.to_string()),
        }
    }
}

fn swift_type(ty: ParameterType) -> &'static str {
    match ty {
        ParameterType::Text => "String",
        ParameterType::Integer => "Int",
        ParameterType::Float => "Double",
        ParameterType::Character => "Character",
        ParameterType::Pointer => "UnsafeRawPointer",
    }
}

/// Expression passing `param` to `String(format:)`.
fn format_argument(param: &Parameter) -> String {
    match param.ty {
        // %c takes the scalar value, Character is not a CVarArg
        ParameterType::Character => format!(
            "{}.unicodeScalars.first.map {{ Int32($0.value) }} ?? 0",
            param.name
        ),
        _ => param.name.clone(),
    }
}

/// Escape `text` for use inside a Swift string literal.
pub fn escape_string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            _ => out.push(c),
        }
    }
    out
}

pub struct SwiftEmitter {
    options: SwiftOptions,
}

impl SwiftEmitter {
    pub fn new(options: SwiftOptions) -> Self {
        Self { options }
    }

    fn localized(&self, key: &str) -> String {
        match &self.options.table {
            Some(table) => format!(
                "String(localized: \"{}\", table: \"{}\")",
                escape_string_literal(key),
                escape_string_literal(table)
            ),
            None => format!("String(localized: \"{}\")", escape_string_literal(key)),
        }
    }

    fn render_accessor(&self, out: &mut String, record: &IdentifierRecord) {
        let _ = writeln!(out, "{INDENT}/// {}", escape_string_literal(&record.key));

        if record.parameters.is_empty() {
            let _ = writeln!(
                out,
                "{INDENT}public static var {}: String {{",
                record.identifier
            );
            let _ = writeln!(out, "{INDENT}{INDENT}{}", self.localized(&record.key));
        } else {
            let signature = record
                .parameters
                .iter()
                .map(|p| format!("_ {}: {}", p.name, swift_type(p.ty)))
                .collect::<Vec<_>>()
                .join(", ");
            let arguments = record
                .parameters
                .iter()
                .map(format_argument)
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(
                out,
                "{INDENT}public static func {}({}) -> String {{",
                record.identifier, signature
            );
            let _ = writeln!(
                out,
                "{INDENT}{INDENT}String(format: {}, {})",
                self.localized(&record.key),
                arguments
            );
        }

        let _ = writeln!(out, "{INDENT}}}");
    }

    /// Render a complete Swift source file.
    pub fn render(&self, records: &[IdentifierRecord]) -> String {
        let mut out = String::new();
        out.push_str("// Generated by lingo. Do not edit.\n\n");
        out.push_str("import Foundation\n\n");
        let _ = writeln!(out, "public enum {} {{", self.options.enum_name);

        for (i, record) in records.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.render_accessor(&mut out, record);
        }

        out.push_str("}\n");
        out
    }
}
