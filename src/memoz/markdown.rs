//! # Markdown Renderer
//!
//! Transforms raw memo text into an HTML fragment for preview display.
//! This is a deliberately small, line-oriented transform, not a compliant
//! Markdown parser: it supports exactly seven constructs (h1-h3 headings,
//! bold, italic, inline code, list items, list runs, paragraphs) and applies
//! them as a fixed-order substitution pipeline. Nested emphasis, escapes,
//! fenced code blocks and links are out of scope; malformed markers produce
//! whatever the ordered rules produce, stable across calls.
//!
//! The output is never stored and never round-tripped back to source.

/// Renders memo text as an HTML fragment.
///
/// Block rules, per line:
/// - `# ` / `## ` / `### ` prefixes become `<h1>`-`<h3>`.
/// - `- ` prefixes become `<li>`; each maximal run of consecutive list
///   items is wrapped in a single `<ul>`.
/// - Blank lines are paragraph breaks and emit nothing themselves.
/// - Every other line becomes its own `<p>`.
///
/// Inline spans are substituted in order: `**bold**`, then `*italic*`,
/// then `` `code` ``, each non-greedy. Bold runs first so its asterisks
/// are consumed before the italic pass. No HTML escaping is performed.
pub fn render(text: &str) -> String {
    let mut blocks: Vec<String> = Vec::new();
    let mut items: Vec<String> = Vec::new();

    for line in text.lines() {
        if let Some(item) = line.strip_prefix("- ") {
            items.push(format!("<li>{}</li>", inline(item)));
            continue;
        }
        flush_list(&mut blocks, &mut items);

        if line.is_empty() {
            continue;
        }

        // Longest heading marker first so "### " is not consumed as "# ".
        let block = if let Some(rest) = line.strip_prefix("### ") {
            format!("<h3>{}</h3>", inline(rest))
        } else if let Some(rest) = line.strip_prefix("## ") {
            format!("<h2>{}</h2>", inline(rest))
        } else if let Some(rest) = line.strip_prefix("# ") {
            format!("<h1>{}</h1>", inline(rest))
        } else {
            format!("<p>{}</p>", inline(line))
        };
        blocks.push(block);
    }
    flush_list(&mut blocks, &mut items);

    blocks.join("\n")
}

fn flush_list(blocks: &mut Vec<String>, items: &mut Vec<String>) {
    if !items.is_empty() {
        blocks.push(format!("<ul>{}</ul>", items.join("")));
        items.clear();
    }
}

fn inline(text: &str) -> String {
    let bold = wrap_spans(text, "**", "strong");
    let italic = wrap_spans(&bold, "*", "em");
    wrap_spans(&italic, "`", "code")
}

/// Replaces each non-greedy `{delim}text{delim}` pair with `<tag>text</tag>`.
/// An unmatched trailing delimiter is left untouched.
fn wrap_spans(text: &str, delim: &str, tag: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(delim) {
        let after = &rest[open + delim.len()..];
        let Some(close) = after.find(delim) else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push_str(&format!("<{tag}>{}</{tag}>", &after[..close]));
        rest = &after[close + delim.len()..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_by_level() {
        assert_eq!(render("# One"), "<h1>One</h1>");
        assert_eq!(render("## Two"), "<h2>Two</h2>");
        assert_eq!(render("### Three"), "<h3>Three</h3>");
    }

    #[test]
    fn heading_marker_requires_trailing_space() {
        assert_eq!(render("#NoSpace"), "<p>#NoSpace</p>");
    }

    #[test]
    fn renders_inline_spans() {
        assert_eq!(
            render("**bold** and *italic* and `code`"),
            "<p><strong>bold</strong> and <em>italic</em> and <code>code</code></p>"
        );
    }

    #[test]
    fn bold_consumes_asterisks_before_italic() {
        assert_eq!(render("**x**"), "<p><strong>x</strong></p>");
        assert_eq!(render("*x*"), "<p><em>x</em></p>");
    }

    #[test]
    fn wraps_list_run_in_single_ul() {
        assert_eq!(
            render("- a\n- b\n- c"),
            "<ul><li>a</li><li>b</li><li>c</li></ul>"
        );
    }

    #[test]
    fn separate_list_runs_get_separate_uls() {
        let html = render("- a\n\ntext\n\n- b");
        assert_eq!(html, "<ul><li>a</li></ul>\n<p>text</p>\n<ul><li>b</li></ul>");
    }

    #[test]
    fn plain_lines_become_paragraphs() {
        assert_eq!(render("one\ntwo"), "<p>one</p>\n<p>two</p>");
    }

    #[test]
    fn blank_lines_emit_nothing() {
        assert_eq!(render("a\n\n\nb"), "<p>a</p>\n<p>b</p>");
        assert_eq!(render(""), "");
    }

    #[test]
    fn inline_spans_apply_inside_headings_and_items() {
        assert_eq!(render("# A **b**"), "<h1>A <strong>b</strong></h1>");
        assert_eq!(render("- `x`"), "<ul><li><code>x</code></li></ul>");
    }

    #[test]
    fn unmatched_markers_pass_through() {
        assert_eq!(render("**dangling"), "<p>**dangling</p>");
        assert_eq!(render("`open"), "<p>`open</p>");
    }

    #[test]
    fn output_is_stable_for_pathological_input() {
        let input = "***x*** and **open";
        assert_eq!(render(input), render(input));
    }

    #[test]
    fn sample_document_renders_expected_fragments() {
        let html = render("# Title\n\n**bold** and *italic* and `code`\n\n- item1\n- item2");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p><strong>bold</strong> and <em>italic</em> and <code>code</code></p>"));
        assert!(html.contains("<ul><li>item1</li><li>item2</li></ul>"));
    }
}
