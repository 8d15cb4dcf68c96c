//! Convention-based extraction of props declarations.
//!
//! This is not a parser. Declarations are located with patterns and their
//! bodies are cut out by counting `{}`/`()` depth over raw text. Delimiters
//! inside string literals or comments are counted like any other, so a stray
//! brace in a comment can end a capture early or push it to end of file. The
//! result is then whatever text was accumulated; nothing here ever fails.

use regex::Regex;
use std::sync::LazyLock;

use super::model::{insert_variant, PropField, PropSchema, VariantField};

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bexport\s+(?:declare\s+)?(interface|type)\s+([A-Za-z_$][\w$]*)").unwrap()
});

static FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?:readonly\s+)?([A-Za-z_$][\w$]*)(\?)?\s*:(.*)$").unwrap()
});

static VARIANT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"([A-Za-z_$][\w$]*)\??\s*:\s*\|?\s*((?:"[^"\n]*"|'[^'\n]*')(?:\s*\|\s*(?:"[^"\n]*"|'[^'\n]*'))+)"#,
    )
    .unwrap()
});

static STRING_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"\n]*)"|'([^'\n]*)'"#).unwrap());

/// Which declarations to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode<'a> {
    /// Only `<symbol><suffix>`.
    Targeted(&'a str),
    /// Every declaration whose name ends with the suffix.
    Untargeted,
}

/// Shape of a located declaration, which decides where its body ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Interface,
    TypeAlias,
}

/// Extracts props schemas from source text.
#[derive(Debug, Clone)]
pub struct PropsExtractor {
    suffix: String,
    filter_variants: bool,
}

impl Default for PropsExtractor {
    fn default() -> Self {
        Self::new("Props")
    }
}

impl PropsExtractor {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            filter_variants: true,
        }
    }

    /// Attach every string-union candidate in the file to every schema,
    /// instead of only those naming one of the schema's own fields.
    pub fn with_variant_filter(mut self, enabled: bool) -> Self {
        self.filter_variants = enabled;
        self
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Whether `name` is a props declaration name under the given mode.
    fn matches(&self, name: &str, mode: ExtractMode<'_>) -> bool {
        match mode {
            ExtractMode::Targeted(symbol) => {
                name.len() == symbol.len() + self.suffix.len()
                    && name.starts_with(symbol)
                    && name.ends_with(&self.suffix)
            }
            ExtractMode::Untargeted => name.len() > self.suffix.len() && name.ends_with(&self.suffix),
        }
    }

    /// Extract the props schemas declared in `source`, in source order.
    pub fn extract(&self, source: &str, mode: ExtractMode<'_>) -> Vec<PropSchema> {
        let candidates = scan_variants(source);
        let mut schemas = Vec::new();

        for caps in DECLARATION.captures_iter(source) {
            let name = &caps[2];
            if !self.matches(name, mode) {
                continue;
            }

            let kind = if &caps[1] == "interface" {
                DeclKind::Interface
            } else {
                DeclKind::TypeAlias
            };
            let body_start = caps.get(0).map_or(0, |m| m.end());
            let body = capture_body(source, body_start, kind);

            let owner = &name[..name.len() - self.suffix.len()];
            let mut schema = PropSchema::new(owner);
            if let Some(block) = first_top_level_block(body) {
                schema.fields = parse_fields(block);
            }

            for variant in &candidates {
                if !self.filter_variants || schema.has_field(&variant.name) {
                    schema.insert_variant(variant.clone());
                }
            }

            tracing::trace!(
                schema = %name,
                fields = schema.fields.len(),
                variants = schema.variants.len(),
                "extracted props declaration"
            );
            schemas.push(schema);
        }

        schemas
    }
}

/// Cut a declaration body out of `source`, starting at byte offset `start`.
///
/// `{` and `(` raise one shared depth counter, `}` and `)` lower it. An
/// interface body ends where the depth returns to zero after having gone
/// positive. A type alias ends at the first `;` seen at depth zero. Either
/// runs to end of input when that point never comes.
pub fn capture_body(source: &str, start: usize, kind: DeclKind) -> &str {
    let rest = &source[start.min(source.len())..];
    let mut depth: i32 = 0;
    let mut opened = false;

    for (i, byte) in rest.bytes().enumerate() {
        match byte {
            b'{' | b'(' => {
                depth += 1;
                opened = true;
            }
            b'}' | b')' => {
                depth -= 1;
                if kind == DeclKind::Interface && opened && depth <= 0 {
                    return &rest[..=i];
                }
            }
            b';' if kind == DeclKind::TypeAlias && depth <= 0 => {
                return &rest[..i];
            }
            _ => {}
        }
    }

    rest
}

/// Contents of the first top-level `{...}` block in `body`, braces excluded.
///
/// Anything outside that block (an `extends` clause, the other side of an
/// intersection) is ignored.
pub fn first_top_level_block(body: &str) -> Option<&str> {
    let open = body.find('{')?;
    let inner = &body[open + 1..];
    let mut depth: i32 = 1;

    for (i, byte) in inner.bytes().enumerate() {
        match byte {
            b'{' | b'(' => depth += 1,
            b'}' | b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&inner[..i]);
                }
            }
            _ => {}
        }
    }

    Some(inner)
}

/// Split a field block on `;` and newlines that sit at nesting depth zero.
fn split_segments(block: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;

    for (i, byte) in block.bytes().enumerate() {
        match byte {
            b'{' | b'(' | b'[' => depth += 1,
            b'}' | b')' | b']' => depth -= 1,
            b';' | b'\n' if depth <= 0 => {
                segments.push(&block[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&block[start..]);

    segments
}

fn is_comment(segment: &str) -> bool {
    segment.starts_with("//") || segment.starts_with("/*") || segment.starts_with('*')
}

/// Parse the immediate fields of a block, in declaration order.
///
/// A segment starting with `|` continues the previous one, so a union broken
/// over lines with leading pipes stays a single field.
pub fn parse_fields(block: &str) -> Vec<PropField> {
    let mut joined: Vec<String> = Vec::new();

    for segment in split_segments(block).into_iter().map(str::trim) {
        if segment.is_empty() || is_comment(segment) {
            continue;
        }
        match joined.last_mut() {
            Some(previous) if segment.starts_with('|') => {
                previous.push(' ');
                previous.push_str(segment);
            }
            _ => joined.push(segment.to_string()),
        }
    }

    joined.iter().filter_map(|s| parse_field(s)).collect()
}

/// Parse one `name[?]: type` segment.
pub fn parse_field(segment: &str) -> Option<PropField> {
    let caps = FIELD.captures(segment.trim())?;
    Some(PropField {
        name: caps[1].to_string(),
        optional: caps.get(2).is_some(),
        declared_type: normalize_type(&caps[3]),
    })
}

fn normalize_type(raw: &str) -> String {
    let trimmed = raw
        .trim()
        .trim_end_matches(&[',', ';'][..])
        .trim_end()
        .trim_start_matches('|')
        .trim_start();
    if trimmed.contains('\n') {
        trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        trimmed.to_string()
    }
}

/// Every `name: "a" | "b" ...` union of two or more string literals in
/// `source`, in order of appearance. A repeated name keeps its first position
/// and its last alternatives.
pub fn scan_variants(source: &str) -> Vec<VariantField> {
    let mut variants = Vec::new();

    for caps in VARIANT.captures_iter(source) {
        let alternatives = STRING_LITERAL
            .captures_iter(&caps[2])
            .filter_map(|lit| lit.get(1).or_else(|| lit.get(2)))
            .map(|m| m.as_str().to_string())
            .collect();
        insert_variant(
            &mut variants,
            VariantField {
                name: caps[1].to_string(),
                alternatives,
            },
        );
    }

    variants
}
