//! printf-style format specifiers and the parameters they imply.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::LocalizationGroup;

/// `%%`, or a specifier with optional position, flags, width, precision and
/// length modifier. Only the second form captures a conversion character.
static SPECIFIER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"%(?:%|(?:\d+\$)?[-+#0]*(?:\d+|\*)?(?:\.(?:\d+|\*))?(?:hh|h|ll|l|q|z|t|j|L)?([@dDiuUxXoOfFeEgGaAcCsSp]))",
    )
    .unwrap()
});

/// Semantic type of a placeholder argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterType {
    Text,
    Integer,
    Float,
    Character,
    Pointer,
}

impl ParameterType {
    fn from_conversion(conversion: char) -> Option<Self> {
        match conversion {
            '@' | 's' | 'S' => Some(ParameterType::Text),
            'd' | 'D' | 'i' | 'u' | 'U' | 'x' | 'X' | 'o' | 'O' => Some(ParameterType::Integer),
            'f' | 'F' | 'e' | 'E' | 'g' | 'G' | 'a' | 'A' => Some(ParameterType::Float),
            'c' | 'C' => Some(ParameterType::Character),
            'p' => Some(ParameterType::Pointer),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterType::Text => write!(f, "string"),
            ParameterType::Integer => write!(f, "integer"),
            ParameterType::Float => write!(f, "float"),
            ParameterType::Character => write!(f, "character"),
            ParameterType::Pointer => write!(f, "pointer"),
        }
    }
}

/// A specifier found in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub specifier: String,
    pub ty: ParameterType,
}

/// One accessor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// `param1`, `param2`, ...
    pub name: String,
    pub ty: ParameterType,
}

/// Specifiers in `text`, left to right. `%%` is skipped.
pub fn scan(text: &str) -> Vec<Placeholder> {
    SPECIFIER_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let conversion = caps.get(1)?.as_str().chars().next()?;
            Some(Placeholder {
                specifier: caps.get(0)?.as_str().to_string(),
                ty: ParameterType::from_conversion(conversion)?,
            })
        })
        .collect()
}

/// Parameters for the accessor of `key`.
///
/// The key is scanned first. Only if it has no specifier are the group's
/// text localizations scanned, in language-code order, and the first one
/// containing any specifier decides the parameters. Sources are never merged.
pub fn derive_parameters(key: &str, group: &LocalizationGroup) -> Vec<Parameter> {
    let mut placeholders = scan(key);

    if placeholders.is_empty() {
        placeholders = group
            .localizations()
            .filter_map(|(_, unit)| unit.string_unit())
            .map(|unit| scan(&unit.value))
            .find(|found| !found.is_empty())
            .unwrap_or_default();
    }

    placeholders
        .into_iter()
        .enumerate()
        .map(|(i, placeholder)| Parameter {
            name: format!("param{}", i + 1),
            ty: placeholder.ty,
        })
        .collect()
}
