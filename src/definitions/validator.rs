//! Definition set validation.
//!
//! Checks run in a fixed order: missing codes, duplicate codes, duplicate
//! names, then code length. The registry fails on the first violation found;
//! [`DefinitionValidator::validate`] collects all of them.

use super::CustomEntityDefinition;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Required length of every definition code, in characters.
pub const DEFINITION_CODE_LENGTH: usize = 6;

/// Category of a definition set violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    MissingCode,
    DuplicateCode,
    DuplicateName,
    InvalidCodeLength,
}

/// A single problem found in a definition set.
#[derive(Debug, Clone)]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: String,
    /// The offending definition (first of its group for duplicates)
    pub definition: Arc<dyn CustomEntityDefinition>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// All violations found in a definition set, in check order.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Check if the definition set has no violations
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get the number of violations
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Check if the report has no violations
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations of one kind
    pub fn of_kind(&self, kind: ViolationKind) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.kind == kind)
    }
}

/// Validator for custom entity definition sets.
pub struct DefinitionValidator;

type Group<'a> = (&'a str, Vec<&'a Arc<dyn CustomEntityDefinition>>);

impl DefinitionValidator {
    /// Run every check and report all violations.
    pub fn validate(definitions: &[Arc<dyn CustomEntityDefinition>]) -> ValidationReport {
        let mut report = ValidationReport::default();
        report.violations.extend(Self::missing_codes(definitions));
        report.violations.extend(Self::duplicate_codes(definitions));
        report.violations.extend(Self::duplicate_names(definitions));
        report
            .violations
            .extend(Self::invalid_code_lengths(definitions));
        report
    }

    /// The first violation in check order, if any.
    pub fn first_violation(definitions: &[Arc<dyn CustomEntityDefinition>]) -> Option<Violation> {
        Self::missing_codes(definitions)
            .into_iter()
            .next()
            .or_else(|| Self::duplicate_codes(definitions).into_iter().next())
            .or_else(|| Self::duplicate_names(definitions).into_iter().next())
            .or_else(|| Self::invalid_code_lengths(definitions).into_iter().next())
    }

    fn missing_codes(definitions: &[Arc<dyn CustomEntityDefinition>]) -> Vec<Violation> {
        definitions
            .iter()
            .filter(|d| is_blank(d.custom_entity_definition_code()))
            .map(|d| Violation {
                kind: ViolationKind::MissingCode,
                message: format!(
                    "{} does not have a definition code specified.",
                    d.type_name()
                ),
                definition: Arc::clone(d),
            })
            .collect()
    }

    fn duplicate_codes(definitions: &[Arc<dyn CustomEntityDefinition>]) -> Vec<Violation> {
        duplicate_groups(definitions, |d| d.custom_entity_definition_code())
            .into_iter()
            .map(|(code, group)| Violation {
                kind: ViolationKind::DuplicateCode,
                message: format!("Duplicate custom entity definition code: {}", code),
                definition: Arc::clone(group[0]),
            })
            .collect()
    }

    fn duplicate_names(definitions: &[Arc<dyn CustomEntityDefinition>]) -> Vec<Violation> {
        duplicate_groups(definitions, |d| d.name())
            .into_iter()
            .map(|(name, group)| Violation {
                kind: ViolationKind::DuplicateName,
                message: format!("Duplicate custom entity definition name: {}", name),
                definition: Arc::clone(group[0]),
            })
            .collect()
    }

    fn invalid_code_lengths(definitions: &[Arc<dyn CustomEntityDefinition>]) -> Vec<Violation> {
        definitions
            .iter()
            .filter(|d| {
                let code = d.custom_entity_definition_code();
                !is_blank(code) && code.chars().count() != DEFINITION_CODE_LENGTH
            })
            .map(|d| Violation {
                kind: ViolationKind::InvalidCodeLength,
                message: format!(
                    "{} has a definition code that is not {len} characters in length. \
                     All custom entity definition codes must be {len} characters.",
                    d.type_name(),
                    len = DEFINITION_CODE_LENGTH
                ),
                definition: Arc::clone(d),
            })
            .collect()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Group definitions by key, keeping groups in order of first appearance, and
/// return only groups with more than one member. Definitions without a code are
/// left to the missing code check.
fn duplicate_groups<'a, F>(
    definitions: &'a [Arc<dyn CustomEntityDefinition>],
    key: F,
) -> Vec<Group<'a>>
where
    F: Fn(&'a Arc<dyn CustomEntityDefinition>) -> &'a str,
{
    let mut groups: Vec<Group<'a>> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for definition in definitions
        .iter()
        .filter(|d| !is_blank(d.custom_entity_definition_code()))
    {
        let k = key(definition);
        match index.get(k).copied() {
            Some(i) => groups[i].1.push(definition),
            None => {
                index.insert(k, groups.len());
                groups.push((k, vec![definition]));
            }
        }
    }

    groups.retain(|(_, members)| members.len() > 1);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct TestDefinition {
        code: &'static str,
        name: &'static str,
    }

    impl CustomEntityDefinition for TestDefinition {
        fn custom_entity_definition_code(&self) -> &str {
            self.code
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    fn def(code: &'static str, name: &'static str) -> Arc<dyn CustomEntityDefinition> {
        Arc::new(TestDefinition { code, name })
    }

    // ==================== Clean Set Tests ====================

    #[test]
    fn test_validate_empty_set() {
        let report = DefinitionValidator::validate(&[]);
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_validate_clean_set() {
        let definitions = vec![def("BLOGPT", "Blog Post"), def("AUTHOR", "Author")];
        let report = DefinitionValidator::validate(&definitions);
        assert!(report.is_valid());
        assert!(DefinitionValidator::first_violation(&definitions).is_none());
    }

    // ==================== Missing Code Tests ====================

    #[test]
    fn test_missing_code_empty() {
        let definitions = vec![def("", "Blog Post")];
        let violation = DefinitionValidator::first_violation(&definitions).expect("violation");
        assert_eq!(violation.kind, ViolationKind::MissingCode);
        assert_eq!(
            violation.message,
            "TestDefinition does not have a definition code specified."
        );
    }

    #[test]
    fn test_missing_code_whitespace() {
        let definitions = vec![def("      ", "Blog Post")];
        let violation = DefinitionValidator::first_violation(&definitions).expect("violation");
        assert_eq!(violation.kind, ViolationKind::MissingCode);
    }

    #[test]
    fn test_missing_code_wins_over_duplicates() {
        let definitions = vec![
            def("BLOGPT", "Blog Post"),
            def("BLOGPT", "Blog Post"),
            def(" ", "Author"),
        ];
        let violation = DefinitionValidator::first_violation(&definitions).expect("violation");
        assert_eq!(violation.kind, ViolationKind::MissingCode);
        assert_eq!(violation.definition.name(), "Author");
    }

    // ==================== Duplicate Tests ====================

    #[test]
    fn test_duplicate_code_names_code() {
        let definitions = vec![def("BLOGPT", "Blog Post"), def("BLOGPT", "Article")];
        let violation = DefinitionValidator::first_violation(&definitions).expect("violation");
        assert_eq!(violation.kind, ViolationKind::DuplicateCode);
        assert!(violation.message.contains("BLOGPT"));
        assert_eq!(violation.definition.name(), "Blog Post");
    }

    #[test]
    fn test_duplicate_code_reports_first_group_by_appearance() {
        let definitions = vec![
            def("AAAAAA", "A1"),
            def("BBBBBB", "B1"),
            def("BBBBBB", "B2"),
            def("AAAAAA", "A2"),
        ];
        let violation = DefinitionValidator::first_violation(&definitions).expect("violation");
        assert!(violation.message.ends_with("AAAAAA"));
        assert_eq!(violation.definition.name(), "A1");
    }

    #[test]
    fn test_duplicate_code_is_case_sensitive() {
        let definitions = vec![def("BLOGPT", "Blog Post"), def("blogpt", "Article")];
        assert!(DefinitionValidator::validate(&definitions).is_valid());
    }

    #[test]
    fn test_duplicate_name() {
        let definitions = vec![def("BLOGPT", "Post"), def("NEWSPT", "Post")];
        let violation = DefinitionValidator::first_violation(&definitions).expect("violation");
        assert_eq!(violation.kind, ViolationKind::DuplicateName);
        assert_eq!(
            violation.message,
            "Duplicate custom entity definition name: Post"
        );
    }

    #[test]
    fn test_duplicate_code_wins_over_duplicate_name() {
        let definitions = vec![
            def("NEWSPT", "Post"),
            def("BLOGPT", "Post"),
            def("BLOGPT", "Article"),
        ];
        let violation = DefinitionValidator::first_violation(&definitions).expect("violation");
        assert_eq!(violation.kind, ViolationKind::DuplicateCode);
    }

    // ==================== Code Length Tests ====================

    #[test]
    fn test_code_too_short() {
        let definitions = vec![def("ABC", "Blog Post")];
        let violation = DefinitionValidator::first_violation(&definitions).expect("violation");
        assert_eq!(violation.kind, ViolationKind::InvalidCodeLength);
        assert!(violation.message.starts_with("TestDefinition has a definition code"));
    }

    #[test]
    fn test_code_too_long() {
        let definitions = vec![def("TOOLONGCODE", "Blog Post")];
        let violation = DefinitionValidator::first_violation(&definitions).expect("violation");
        assert_eq!(violation.kind, ViolationKind::InvalidCodeLength);
    }

    #[test]
    fn test_code_length_counts_characters() {
        let definitions = vec![def("ÉVÉNEM", "Événement")];
        assert!(DefinitionValidator::validate(&definitions).is_valid());
    }

    #[test]
    fn test_duplicate_name_wins_over_code_length() {
        let definitions = vec![def("ABC", "Post"), def("BLOGPT", "Post")];
        let violation = DefinitionValidator::first_violation(&definitions).expect("violation");
        assert_eq!(violation.kind, ViolationKind::DuplicateName);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_lists_every_violation_in_check_order() {
        let definitions = vec![
            def("", "Empty"),
            def("BLOGPT", "Post"),
            def("BLOGPT", "Article"),
            def("NEWSPT", "Post"),
            def("ABC", "Short"),
        ];
        let report = DefinitionValidator::validate(&definitions);

        let kinds: Vec<_> = report.violations.iter().map(|v| v.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ViolationKind::MissingCode,
                ViolationKind::DuplicateCode,
                ViolationKind::DuplicateName,
                ViolationKind::InvalidCodeLength,
            ]
        );
        assert_eq!(report.of_kind(ViolationKind::DuplicateName).count(), 1);
    }

    #[test]
    fn test_report_blank_codes_are_only_missing() {
        let definitions = vec![def("", "One"), def("", "Two")];
        let report = DefinitionValidator::validate(&definitions);
        assert_eq!(report.len(), 2);
        assert!(report
            .violations
            .iter()
            .all(|v| v.kind == ViolationKind::MissingCode));
    }

    #[test]
    fn test_violation_display_is_message() {
        let definitions = vec![def("ABC", "Short")];
        let violation = DefinitionValidator::first_violation(&definitions).expect("violation");
        assert_eq!(violation.to_string(), violation.message);
    }
}
