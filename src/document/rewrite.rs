//! The paragraph rewrite pass.
//!
//! Word splits a logical sentence into several runs whenever formatting or
//! editing history changes, so a keyword can straddle run boundaries. The
//! rewrite therefore matches against the paragraph's concatenated text and,
//! on any hit, collapses the paragraph to a single run carrying the fully
//! substituted text. This is deliberately lossy: only the first run's
//! character formatting survives the collapse, and a page or column break
//! inside a matched paragraph comes back as a plain line break.

use docx_rs::{
    BreakType, DocumentChild, Docx, Paragraph, ParagraphChild, Run, RunChild, RunProperty,
    TableCellContent, TableChild, TableRowChild,
};

use crate::desensitize::substitute;

/// Concatenate the visible text of every run in the paragraph, in order.
pub fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            push_run_text(run, &mut text);
        }
    }
    text
}

fn push_run_text(run: &Run, text: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

/// Rewrite one paragraph in place. Returns whether any keyword matched.
///
/// On a match the paragraph's runs are replaced by a single run holding the
/// substituted text, formatted like the first original run. Without a match
/// the paragraph is left untouched, run boundaries included.
pub fn rewrite_paragraph(
    paragraph: &mut Paragraph,
    keywords: &[String],
    replacement: &str,
) -> bool {
    let full_text = paragraph_text(paragraph);
    let (new_text, matched) = substitute(&full_text, keywords, replacement);
    if !matched {
        return false;
    }

    let property = paragraph
        .children
        .iter()
        .find_map(|child| match child {
            ParagraphChild::Run(run) => Some(capture_formatting(&run.run_property)),
            _ => None,
        })
        .unwrap_or_else(RunProperty::new);

    let run = build_run(&new_text, property);
    paragraph.children = vec![ParagraphChild::Run(Box::new(run))];
    true
}

/// Build the replacement run, turning the tab and newline characters the
/// concatenation produced back into `<w:tab/>` and `<w:br/>` elements
/// instead of leaving them as literal text.
fn build_run(text: &str, property: RunProperty) -> Run {
    let mut run = Run::new();
    run.run_property = property;
    let mut buffer = String::new();
    for ch in text.chars() {
        match ch {
            '\t' | '\n' => {
                if !buffer.is_empty() {
                    run = run.add_text(std::mem::take(&mut buffer));
                }
                run = match ch {
                    '\t' => run.add_tab(),
                    _ => run.add_break(BreakType::TextWrapping),
                };
            }
            _ => buffer.push(ch),
        }
    }
    if !buffer.is_empty() {
        run = run.add_text(buffer);
    }
    run
}

/// Copy the attributes the collapse preserves: font, size, bold, italic,
/// underline, and color. An attribute unset on the source run stays unset on
/// the new one rather than becoming an explicit override.
fn capture_formatting(source: &RunProperty) -> RunProperty {
    let mut property = RunProperty::new();
    property.fonts = source.fonts.clone();
    property.sz = source.sz.clone();
    property.sz_cs = source.sz_cs.clone();
    property.bold = source.bold.clone();
    property.bold_cs = source.bold_cs.clone();
    property.italic = source.italic.clone();
    property.italic_cs = source.italic_cs.clone();
    property.underline = source.underline.clone();
    property.color = source.color.clone();
    property
}

/// Apply the rewrite to every top-level paragraph and every paragraph in
/// every table cell, in document order. Returns the number of paragraphs
/// rewritten.
pub fn rewrite_document(docx: &mut Docx, keywords: &[String], replacement: &str) -> usize {
    let mut rewritten = 0;
    for child in &mut docx.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => {
                if rewrite_paragraph(paragraph, keywords, replacement) {
                    rewritten += 1;
                }
            }
            DocumentChild::Table(table) => {
                for table_child in &mut table.rows {
                    let TableChild::TableRow(row) = table_child;
                    for row_child in &mut row.cells {
                        let TableRowChild::TableCell(cell) = row_child;
                        for content in &mut cell.children {
                            if let TableCellContent::Paragraph(paragraph) = content {
                                if rewrite_paragraph(paragraph, keywords, replacement) {
                                    rewritten += 1;
                                }
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }
    rewritten
}
