//! Accessor generation for catalog keys.
//!
//! ## Module Structure
//!
//! - `identifier`: key -> accessor name
//! - `placeholder`: format specifiers -> typed parameters
//! - `swift`: Swift source emitter

pub mod identifier;
pub mod placeholder;
pub mod swift;

use std::collections::HashMap;

use tracing::warn;

pub use identifier::{IdentifierRules, derive_identifier};
pub use placeholder::{Parameter, ParameterType, derive_parameters};
pub use swift::{SwiftEmitter, SwiftOptions};

use crate::{
    catalog::Catalog,
    issues::{IdentifierCollisionIssue, Issue},
};

/// Everything the emitter needs for one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierRecord {
    pub key: String,
    pub identifier: String,
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Synthesis {
    pub records: Vec<IdentifierRecord>,
    pub issues: Vec<Issue>,
}

/// Derive accessors for every key of `catalog`, in key order.
///
/// When a derived name is already taken, the later key gets the lowest free
/// numeric suffix (`name2`, `name3`, ...) and an `IdentifierCollision` issue
/// is recorded.
pub fn synthesize(catalog: &Catalog, rules: &IdentifierRules) -> Synthesis {
    let mut synthesis = Synthesis::default();
    let mut owners: HashMap<String, String> = HashMap::new();

    for (key, group) in catalog.strings() {
        let derived = derive_identifier(key, rules);

        let identifier = if let Some(owner) = owners.get(&derived) {
            let renamed = (2..)
                .map(|n| format!("{}{}", derived, n))
                .find(|candidate| !owners.contains_key(candidate))
                .unwrap_or_else(|| derived.clone());
            warn!(key = %key, derived = %derived, renamed = %renamed, "identifier collision");
            synthesis.issues.push(
                IdentifierCollisionIssue {
                    key: key.clone(),
                    derived: derived.clone(),
                    renamed: renamed.clone(),
                    conflicts_with: owner.clone(),
                }
                .into(),
            );
            renamed
        } else {
            derived
        };

        owners.insert(identifier.clone(), key.clone());
        synthesis.records.push(IdentifierRecord {
            key: key.clone(),
            identifier,
            parameters: derive_parameters(key, group),
        });
    }

    synthesis
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog(keys: &[&str]) -> Catalog {
        let mut catalog = Catalog::new("en");
        for key in keys {
            catalog.insert_key(*key, None);
        }
        catalog
    }

    #[test]
    fn test_records_follow_key_order() {
        let synthesis = synthesize(
            &catalog(&["Welcome", "%@ liked your post", "Account Deletion/Hi!"]),
            &IdentifierRules::swift(),
        );
        let names: Vec<&str> = synthesis
            .records
            .iter()
            .map(|r| r.identifier.as_str())
            .collect();
        assert_eq!(names, vec!["likedYourPost", "accountDeletionHi", "welcome"]);
        assert_eq!(synthesis.records[0].parameters.len(), 1);
        assert!(synthesis.issues.is_empty());
    }

    #[test]
    fn test_collisions_get_numeric_suffix() {
        let synthesis = synthesize(
            &catalog(&["Sign in", "Sign-in", "sign in!", "sign in 2"]),
            &IdentifierRules::swift(),
        );
        let names: Vec<(&str, &str)> = synthesis
            .records
            .iter()
            .map(|r| (r.key.as_str(), r.identifier.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![
                ("Sign in", "signIn"),
                ("Sign-in", "signIn2"),
                // derives "signIn2", which "Sign-in" already holds
                ("sign in 2", "signIn22"),
                ("sign in!", "signIn3"),
            ]
        );
        assert_eq!(synthesis.issues.len(), 3);
        let Issue::IdentifierCollision(first) = &synthesis.issues[0] else {
            panic!("expected collision issue");
        };
        assert_eq!(first.conflicts_with, "Sign in");
        assert_eq!(first.renamed, "signIn2");
    }
}
