//! Per-component documentation blocks.

use std::collections::BTreeMap;

use dskit_core::{ExtractedGroup, PropField, PropSchema};

/// Render one component group as a markdown block.
///
/// The block always carries a heading and a usage snippet (import line plus
/// example). Props and Variants sections appear only when there is something
/// to list. `examples` maps group names to hand-written usage examples; groups
/// without an entry get an empty element built from their first symbol.
pub fn render_component_block(
    group: &ExtractedGroup,
    import_path: &str,
    examples: &BTreeMap<String, String>,
) -> String {
    let mut md = String::new();

    md.push_str(&format!("### {}\n\n", group.name()));
    render_usage(&mut md, group, import_path, examples);

    let with_fields: Vec<&PropSchema> = group.schemas.iter().filter(|s| !s.fields.is_empty()).collect();
    let label_owner = with_fields.len() > 1;
    for schema in &with_fields {
        if label_owner {
            md.push_str(&format!("**{} props:**\n", schema.owner_name));
        } else {
            md.push_str("**Props:**\n");
        }
        for field in schema.resolved_fields() {
            md.push_str(&render_prop_line(field));
        }
        md.push('\n');
    }

    let variants = group.variants();
    if !variants.is_empty() {
        md.push_str("**Variants:**\n");
        for variant in &variants {
            let quoted: Vec<String> = variant.alternatives.iter().map(|a| format!("\"{}\"", a)).collect();
            md.push_str(&format!("- `{}`: {}\n", variant.name, quoted.join(" | ")));
        }
        md.push('\n');
    }

    md
}

fn render_usage(md: &mut String, group: &ExtractedGroup, import_path: &str, examples: &BTreeMap<String, String>) {
    let imported = if group.symbols.is_empty() {
        group.name().to_string()
    } else {
        group.symbols.join(", ")
    };

    md.push_str("```tsx\n");
    md.push_str(&format!(
        "import {{ {} }} from \"{}/{}\";\n\n",
        imported,
        import_path,
        group.name()
    ));
    match examples.get(group.name()) {
        Some(example) => md.push_str(example.trim_end()),
        None => {
            let tag = group.symbols.first().map(String::as_str).unwrap_or(group.name());
            md.push_str(&format!("<{0}>...</{0}>", tag));
        }
    }
    md.push_str("\n```\n\n");
}

/// One Props line: name with optional marker, declared type, requirement tag.
pub fn render_prop_line(field: &PropField) -> String {
    let marker = if field.optional { "?" } else { "" };
    let tag = if field.optional { "optional" } else { "required" };
    if field.declared_type.is_empty() {
        format!("- `{}{}` ({})\n", field.name, marker, tag)
    } else {
        format!("- `{}{}`: `{}` ({})\n", field.name, marker, field.declared_type, tag)
    }
}
