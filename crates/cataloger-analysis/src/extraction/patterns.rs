//! Declarative route-pattern tables.
//!
//! Each framework or language owns a table of [`PatternSpec`] rows: a regex,
//! the file extensions it is valid for, and a [`FieldMap`] saying which capture
//! groups hold the verb and the path. Tables are compiled once into
//! [`RoutePattern`]s and applied with [`match_routes`].

use std::collections::HashSet;

use regex::{Captures, Regex, RegexBuilder};

/// Where the HTTP verb of a match comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodSource {
    /// The verb is captured in this group.
    Group(usize),
    /// This group holds a comma-joined list of verbs; only the first is used.
    FirstListed(usize),
    /// No verb syntax at all; the route is a GET.
    Implicit,
}

/// Capture-group layout of one pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMap {
    pub method: MethodSource,
    pub path: usize,
}

impl FieldMap {
    /// `(verb)…(path)`
    pub const VERB_THEN_PATH: FieldMap = FieldMap {
        method: MethodSource::Group(1),
        path: 2,
    };
    /// `(path)…(verb)`
    pub const PATH_THEN_VERB: FieldMap = FieldMap {
        method: MethodSource::Group(2),
        path: 1,
    };
    /// `(path)…methods=[(list)]`
    pub const PATH_THEN_METHOD_LIST: FieldMap = FieldMap {
        method: MethodSource::FirstListed(2),
        path: 1,
    };
    /// `(path)` only.
    pub const PATH_ONLY: FieldMap = FieldMap {
        method: MethodSource::Implicit,
        path: 1,
    };
    /// `@(owner).(verb)((path))`
    pub const OWNER_VERB_PATH: FieldMap = FieldMap {
        method: MethodSource::Group(2),
        path: 3,
    };

    /// Resolve a match into `(method, path)`. `None` if a group is missing or empty.
    pub fn resolve(&self, caps: &Captures<'_>) -> Option<(String, String)> {
        let path = caps.get(self.path)?.as_str().trim();
        if path.is_empty() {
            return None;
        }

        let method = match self.method {
            MethodSource::Group(i) => normalize_verb(caps.get(i)?.as_str())?,
            MethodSource::FirstListed(i) => normalize_verb(first_listed(caps.get(i)?.as_str())?)?,
            MethodSource::Implicit => "GET".to_string(),
        };
        Some((method, path.to_string()))
    }
}

/// One row of a pattern table, as written in source.
#[derive(Debug, Clone, Copy)]
pub struct PatternSpec {
    pub regex: &'static str,
    pub extensions: &'static [&'static str],
    pub fields: FieldMap,
}

/// A compiled table row.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    pub regex: Regex,
    pub extensions: &'static [&'static str],
    pub fields: FieldMap,
}

impl RoutePattern {
    fn applies_to(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}

/// Compile a table case-insensitively with per-line anchors.
///
/// A row can opt back into case-sensitive matching with a leading `(?-i)`.
/// Rows that fail to compile are logged and dropped.
pub fn compile_table(specs: &[PatternSpec]) -> Vec<RoutePattern> {
    specs
        .iter()
        .filter_map(|spec| {
            match RegexBuilder::new(spec.regex)
                .case_insensitive(true)
                .multi_line(true)
                .build()
            {
                Ok(regex) => Some(RoutePattern {
                    regex,
                    extensions: spec.extensions,
                    fields: spec.fields,
                }),
                Err(e) => {
                    tracing::error!(pattern = spec.regex, error = %e, "invalid route pattern");
                    None
                }
            }
        })
        .collect()
}

/// A single route declaration found in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'t> {
    pub method: String,
    pub path: String,
    /// Byte offset of the start of the declaration.
    pub start: usize,
    /// Full matched text.
    pub text: &'t str,
}

/// Apply every row valid for `extension`, in table order.
///
/// A match starting where an earlier row already matched is skipped, so two
/// overlapping rows never count one declaration twice.
pub fn match_routes<'t>(
    patterns: &[RoutePattern],
    content: &'t str,
    extension: &str,
) -> Vec<RouteMatch<'t>> {
    let mut claimed = HashSet::new();
    let mut matches = Vec::new();

    for pattern in patterns.iter().filter(|p| p.applies_to(extension)) {
        for caps in pattern.regex.captures_iter(content) {
            let Some(whole) = caps.get(0) else { continue };
            if claimed.contains(&whole.start()) {
                continue;
            }
            if let Some((method, path)) = pattern.fields.resolve(&caps) {
                claimed.insert(whole.start());
                matches.push(RouteMatch {
                    method,
                    path,
                    start: whole.start(),
                    text: whole.as_str(),
                });
            }
        }
    }
    matches
}

/// Uppercase a captured verb; the generic `route` verb means GET.
fn normalize_verb(raw: &str) -> Option<String> {
    let verb = raw.trim().trim_matches(|c| c == '\'' || c == '"');
    if verb.is_empty() {
        None
    } else if verb.eq_ignore_ascii_case("route") {
        Some("GET".to_string())
    } else {
        Some(verb.to_ascii_uppercase())
    }
}

/// First entry of `'GET', 'POST'` style lists.
fn first_listed(list: &str) -> Option<&str> {
    list.split(',')
        .map(|item| item.trim().trim_matches(|c| c == '\'' || c == '"').trim())
        .find(|item| !item.is_empty())
}
