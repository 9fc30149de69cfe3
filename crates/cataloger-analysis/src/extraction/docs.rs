//! Doc association: link a route declaration to the documentation block that
//! immediately precedes it.
//!
//! Two block conventions are recognised, tried in order: triple-quoted strings
//! (`"""…"""` / `'''…'''`) and `/** … */` comments. Only text before the
//! offset is inspected.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum length, in characters, of a derived description.
pub const DESCRIPTION_LIMIT: usize = 200;

const TRIPLE_QUOTES: [&str; 2] = ["\"\"\"", "'''"];

static TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"@(\w+)").ok());

static CLASS_DECL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(?:@\w+(?:\([^)]*\))?\s+)*(?:export\s+)?(?:(?:public|abstract|final|open|data|default)\s+)*class\s+\w+",
    )
    .ok()
});

static PY_CLASS_HEADER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*class\s+\w+[^:\n]*:").ok());

/// Documentation derived from one block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Docs {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

impl Docs {
    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.description.is_none() && self.tags.is_empty()
    }

    fn from_block(text: &str) -> Self {
        let text = text.trim();
        let summary = text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string);
        let description = Some(truncate_chars(text, DESCRIPTION_LIMIT)).filter(|d| !d.is_empty());

        let mut tags: Vec<String> = Vec::new();
        if let Some(re) = TAG.as_ref() {
            for caps in re.captures_iter(text) {
                let tag = &caps[1];
                if !tags.iter().any(|t| t == tag) {
                    tags.push(tag.to_string());
                }
            }
        }

        Self {
            summary,
            description,
            tags,
        }
    }
}

/// Find the documentation block ending right before `offset`.
///
/// Whitespace between the block and the offset is allowed. Returns empty
/// [`Docs`] when no block ends there or `offset` is not a valid position.
pub fn find_docs(content: &str, offset: usize) -> Docs {
    let Some(before) = content.get(..offset) else {
        return Docs::default();
    };
    trailing_block(before)
        .map(|block| Docs::from_block(&block))
        .unwrap_or_default()
}

/// Text of the triple-quoted or `/** */` block that ends `text`.
fn trailing_block(text: &str) -> Option<String> {
    let text = text.trim_end();

    for quote in TRIPLE_QUOTES {
        if let Some(head) = text.strip_suffix(quote) {
            let open = head.rfind(quote)?;
            return Some(head[open + quote.len()..].to_string());
        }
    }

    let head = text.strip_suffix("*/")?;
    let open = head.rfind("/**")?;
    let body = &head[open + 3..];
    if body.contains("*/") {
        return None;
    }
    Some(strip_comment_stars(body))
}

/// Text of a triple-quoted or `/** */` block that starts `text`.
fn leading_block(text: &str) -> Option<String> {
    let text = text.trim_start();

    for quote in TRIPLE_QUOTES {
        if let Some(rest) = text.strip_prefix(quote) {
            let close = rest.find(quote)?;
            return Some(rest[..close].to_string());
        }
    }

    let rest = text.strip_prefix("/**")?;
    let close = rest.find("*/")?;
    Some(strip_comment_stars(&rest[..close]))
}

/// Drop the leading `*` (and indentation around it) from each comment line.
fn strip_comment_stars(body: &str) -> String {
    body.lines()
        .map(|line| {
            let line = line.trim_start();
            line.strip_prefix('*').map(str::trim_start).unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn block_description(block: &str) -> Option<String> {
    Some(truncate_chars(block.trim(), DESCRIPTION_LIMIT)).filter(|d| !d.is_empty())
}

/// Description from a block at the very start of the file.
pub fn file_description(content: &str) -> Option<String> {
    leading_block(content).and_then(|block| block_description(&block))
}

/// Description of the first documented class in the file.
///
/// Python classes carry a docstring right after the `class X:` header; other
/// languages put a `/** */` block right before the declaration and its
/// annotations.
pub fn class_description(content: &str) -> Option<String> {
    if let Some(re) = PY_CLASS_HEADER.as_ref() {
        for header in re.find_iter(content) {
            let block = leading_block(&content[header.end()..]);
            if let Some(description) = block.and_then(|b| block_description(&b)) {
                return Some(description);
            }
        }
    }

    let re = CLASS_DECL.as_ref()?;
    re.find_iter(content).find_map(|decl| {
        trailing_block(&content[..decl.start()]).and_then(|b| block_description(&b))
    })
}

/// First `limit` characters of `text`.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
