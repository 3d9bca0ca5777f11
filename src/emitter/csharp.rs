//! C# source templates.
//!
//! All generated files share one layout: an auto-generated header, the
//! namespace, and members of `public static partial class Emoji`.

use std::fmt::Write;

use emoji_forge_registry::{EmojiRecord, ParseResult};

/// Escape `text` for a C# regular string literal.
pub fn string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// `// <auto-generated>` banner naming the registry revision.
pub fn header(result: &ParseResult) -> String {
    let version = result
        .version()
        .map_or_else(|| "unknown".to_string(), |v| v.to_string());
    let date = result.date().map_or_else(
        || "unknown date".to_string(),
        |d| format!("{} GMT", d.format("%Y-%m-%d %H:%M:%S")),
    );
    format!(
        "// <auto-generated>\n\
         //     Generated by emoji-forge from emoji-test.txt version {version} ({date}).\n\
         //     Changes to this file will be lost when it is regenerated.\n\
         // </auto-generated>\n\n"
    )
}

/// Wrap `body` (already indented for class members) in namespace and class.
pub fn wrap_in_class(header: &str, namespace: &str, body: &str) -> String {
    let mut out = String::with_capacity(header.len() + body.len() + 128);
    out.push_str(header);
    let _ = write!(
        out,
        "using System.Collections.Generic;\n\nnamespace {namespace}\n{{\n\tpublic static partial class Emoji\n\t{{\n{body}\t}}\n}}\n"
    );
    out
}

/// One `SingleEmoji` field.
pub fn single_emoji(identifier: &str, record: &EmojiRecord) -> String {
    let search_terms = record
        .search_terms
        .iter()
        .map(|term| string_literal(term))
        .collect::<Vec<_>>()
        .join(", ");
    let skin_tones = record
        .skin_tones
        .iter()
        .map(|tone| format!("SkinTone.{}", tone.identifier()))
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    let _ = writeln!(out, "\t\t/* {} {} */", record.rendered, record.name.replace("*/", "* /"));
    let _ = writeln!(
        out,
        "\t\tpublic static readonly SingleEmoji {identifier} = new SingleEmoji("
    );
    let _ = writeln!(
        out,
        "\t\t\tsequence: new UnicodeSequence({}),",
        string_literal(&record.code_point_string())
    );
    let _ = writeln!(out, "\t\t\tname: {},", string_literal(&record.name));
    let _ = writeln!(
        out,
        "\t\t\tgroup: {},",
        string_literal(record.group.registry_name())
    );
    let _ = writeln!(out, "\t\t\tsubgroup: {},", string_literal(&record.subgroup));
    let _ = writeln!(out, "\t\t\tsearchTerms: new[] {{ {search_terms} }},");
    let _ = writeln!(out, "\t\t\tskinTones: new[] {{ {skin_tones} }},");
    let _ = writeln!(out, "\t\t\tsortOrder: {}", record.index);
    let _ = writeln!(out, "\t\t);\n");
    out
}

/// A read-only list of previously declared emoji, at `indent` tab stops.
pub fn emoji_list(indent: usize, name: &str, members: &[&str]) -> String {
    let tabs = "\t".repeat(indent);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{tabs}public static readonly IReadOnlyList<SingleEmoji> {name} = new SingleEmoji[] {{"
    );
    for member in members {
        let _ = writeln!(out, "{tabs}\t{member},");
    }
    let _ = writeln!(out, "{tabs}}};\n");
    out
}

/// A nested `public static class` holding `lists`.
pub fn nested_class(name: &str, lists: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\t\tpublic static partial class {name}\n\t\t{{");
    for list in lists {
        out.push_str(list);
    }
    let _ = writeln!(out, "\t\t}}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("plain"), "\"plain\"");
        assert_eq!(string_literal("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(string_literal("Japanese “vacancy”"), "\"Japanese “vacancy”\"");
    }

    #[test]
    fn test_emoji_list_layout() {
        let list = emoji_list(2, "Flags", &["ChequeredFlag", "TriangularFlag"]);
        assert_eq!(
            list,
            "\t\tpublic static readonly IReadOnlyList<SingleEmoji> Flags = new SingleEmoji[] {\n\
             \t\t\tChequeredFlag,\n\
             \t\t\tTriangularFlag,\n\
             \t\t};\n\n"
        );
    }

    #[test]
    fn test_wrap_in_class() {
        let file = wrap_in_class("// h\n", "NeoSmart.Unicode", "\t\tBODY\n");
        assert_eq!(
            file,
            "// h\nusing System.Collections.Generic;\n\nnamespace NeoSmart.Unicode\n{\n\tpublic static partial class Emoji\n\t{\n\t\tBODY\n\t}\n}\n"
        );
    }
}
