//! Descriptor file parsing
//!
//! One provider per line:
//!
//! ```text
//! # comment
//! fast=pkg.FastCache
//! pkg.SlowCache                         # local name from a provider marker
//! lazy=pkg.LazyCache<pkg.FastCache>     # wrapper with its value type
//! ```
//!
//! Everything after `#` is dropped, blank lines are ignored, and both sides
//! of `=` are trimmed. A line with no `=` has an empty local name.

use std::fmt;

use extreg_domain::constants::{DESCRIPTOR_ASSIGN, DESCRIPTOR_COMMENT};
use extreg_domain::ports::Resource;

/// Reference to a type, with at most one generic argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReference {
    /// Qualified type name
    pub name: String,
    /// Generic argument, for wrapper lines
    pub argument: Option<String>,
}

impl TypeReference {
    /// Parse `pkg.Type` or `pkg.Wrapper<pkg.Value>`
    ///
    /// Text that is not a well-formed single-argument application is taken
    /// as a plain name and left for the catalog to reject.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let generic = text
            .strip_suffix('>')
            .and_then(|head| head.split_once('<'))
            .map(|(name, argument)| (name.trim(), argument.trim()))
            .filter(|(name, argument)| {
                !name.is_empty() && !argument.is_empty() && !argument.contains(['<', '>', ','])
            });
        match generic {
            Some((name, argument)) => Self {
                name: name.to_string(),
                argument: Some(argument.to_string()),
            },
            None => Self {
                name: text.to_string(),
                argument: None,
            },
        }
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.argument {
            Some(argument) => write!(f, "{}<{}>", self.name, argument),
            None => f.write_str(&self.name),
        }
    }
}

/// One parsed descriptor line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorEntry {
    /// Local name, empty if the line had none
    pub local_name: String,
    /// Referenced type
    pub reference: TypeReference,
    /// Resource the line came from
    pub location: String,
    /// One-based line number
    pub line: usize,
}

/// Parse every entry of a descriptor resource
pub fn parse_descriptor(resource: &Resource) -> Vec<DescriptorEntry> {
    resource
        .content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            parse_line(line).map(|(local_name, reference)| DescriptorEntry {
                local_name,
                reference,
                location: resource.location.clone(),
                line: index + 1,
            })
        })
        .collect()
}

/// Parse one line into its local name and type reference
///
/// Returns `None` for blank lines, comments, and lines with no type.
pub fn parse_line(line: &str) -> Option<(String, TypeReference)> {
    let line = line
        .split_once(DESCRIPTOR_COMMENT)
        .map_or(line, |(content, _)| content);
    let (local_name, reference) = match line.split_once(DESCRIPTOR_ASSIGN) {
        Some((name, reference)) => (name.trim(), reference.trim()),
        None => ("", line.trim()),
    };
    if reference.is_empty() {
        return None;
    }
    Some((local_name.to_string(), TypeReference::parse(reference)))
}
