//! Markdown processing for essays written in Markdown.
//!
//! Uses pulldown-cmark for CommonMark parsing. Only prose reaches the
//! analyzer: code, headings, and front matter are dropped, and block ends
//! are turned into sentence ends so that an unpunctuated list item does not
//! run into the next paragraph.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning plain prose text.
///
/// Removes code blocks, inline code, headings, YAML front matter, and HTML.
/// Keeps link text, emphasis text, blockquotes, list items, and table cells.
/// Each paragraph, list item, and table row that does not already end in
/// `.`, `!`, or `?` is closed with a period.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut result = String::with_capacity(text.len() / 2);
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. }) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_)) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => {
                result.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                result.push(' ');
            }
            Event::End(TagEnd::TableCell) if skip_depth == 0 => {
                result.push(' ');
            }

            Event::End(TagEnd::Paragraph | TagEnd::Item | TagEnd::TableRow | TagEnd::TableHead)
                if skip_depth == 0 =>
            {
                close_sentence(&mut result);
            }

            _ => {}
        }
    }

    result.trim_end().to_string()
}

/// Terminate the text collected so far, unless it is empty or already terminated.
fn close_sentence(result: &mut String) {
    let trimmed_len = result.trim_end().len();
    result.truncate(trimmed_len);
    match result.chars().last() {
        None => return,
        Some('.' | '!' | '?') => {}
        Some(_) => result.push('.'),
    }
    result.push(' ');
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };

    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}
