//! Regex filters applied to a report before counting and gate evaluation.
//!
//! Filters mirror the upstream recorder configuration: include rules keep
//! only matching issues (when any are present), exclude rules then drop
//! matches. Patterns are compiled once at engine construction; an invalid
//! pattern is a configuration error, not an evaluation-time failure.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::errors::{HeimdallError, Result};
use crate::core::issues::{Issue, Report};

/// A single filter rule from the evaluation policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "pattern", rename_all = "snake_case")]
pub enum FilterRule {
    /// Drop issues whose file name matches the pattern
    ExcludeFile(String),
    /// Drop issues whose category matches the pattern
    ExcludeCategory(String),
    /// Drop issues whose message matches the pattern
    ExcludeMessage(String),
    /// Keep only issues whose file name matches the pattern
    IncludeFile(String),
    /// Keep only issues whose category matches the pattern
    IncludeCategory(String),
    /// Keep only issues whose message matches the pattern
    IncludeMessage(String),
}

impl FilterRule {
    /// The regex pattern carried by this rule.
    pub fn pattern(&self) -> &str {
        match self {
            Self::ExcludeFile(p)
            | Self::ExcludeCategory(p)
            | Self::ExcludeMessage(p)
            | Self::IncludeFile(p)
            | Self::IncludeCategory(p)
            | Self::IncludeMessage(p) => p,
        }
    }

    /// Whether this is an include rule (as opposed to an exclude rule).
    pub fn is_include(&self) -> bool {
        matches!(
            self,
            Self::IncludeFile(_) | Self::IncludeCategory(_) | Self::IncludeMessage(_)
        )
    }

    fn field(&self) -> FilterField {
        match self {
            Self::ExcludeFile(_) | Self::IncludeFile(_) => FilterField::File,
            Self::ExcludeCategory(_) | Self::IncludeCategory(_) => FilterField::Category,
            Self::ExcludeMessage(_) | Self::IncludeMessage(_) => FilterField::Message,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum FilterField {
    File,
    Category,
    Message,
}

#[derive(Debug)]
struct CompiledRule {
    field: FilterField,
    regex: Regex,
}

impl CompiledRule {
    fn matches(&self, issue: &Issue) -> bool {
        let value = match self.field {
            FilterField::File => &issue.file_name,
            FilterField::Category => &issue.category,
            FilterField::Message => &issue.message,
        };
        self.regex.is_match(value)
    }
}

/// A set of filter rules with their patterns compiled.
#[derive(Debug, Default)]
pub struct FilterSet {
    includes: Vec<CompiledRule>,
    excludes: Vec<CompiledRule>,
}

impl FilterSet {
    /// Compile all rules in the set.
    ///
    /// Fails with a configuration error naming the offending pattern when a
    /// regex does not compile.
    pub fn compile(rules: &[FilterRule]) -> Result<Self> {
        let mut includes = Vec::new();
        let mut excludes = Vec::new();

        for rule in rules {
            let regex = Regex::new(rule.pattern()).map_err(|err| {
                HeimdallError::config_field(
                    format!("Invalid filter pattern '{}': {err}", rule.pattern()),
                    "filters",
                )
            })?;
            let compiled = CompiledRule {
                field: rule.field(),
                regex,
            };
            if rule.is_include() {
                includes.push(compiled);
            } else {
                excludes.push(compiled);
            }
        }

        Ok(Self { includes, excludes })
    }

    /// Number of compiled rules.
    pub fn len(&self) -> usize {
        self.includes.len() + self.excludes.len()
    }

    /// Whether the set contains no rules.
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }

    /// A copy of `report` with the filter rules applied.
    ///
    /// The report's message logs are carried over unchanged.
    pub fn apply(&self, report: &Report) -> Report {
        let mut filtered = Report::new();
        for message in report.info_messages() {
            filtered.log_info(message.clone());
        }
        for message in report.error_messages() {
            filtered.log_error(message.clone());
        }

        filtered.extend(
            report
                .issues()
                .iter()
                .filter(|issue| self.keeps(issue))
                .cloned(),
        );
        filtered
    }

    fn keeps(&self, issue: &Issue) -> bool {
        if !self.includes.is_empty() && !self.includes.iter().any(|rule| rule.matches(issue)) {
            return false;
        }
        !self.excludes.iter().any(|rule| rule.matches(issue))
    }
}
