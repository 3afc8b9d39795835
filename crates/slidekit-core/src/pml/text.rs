//! Slide titles, slide text and speaker notes.

use super::shapes::SlideShape;
use crate::util::strings::single_line;
use crate::xml::{XmlDocument, A, P};
use indextree::NodeId;

pub const UNTITLED: &str = "Untitled";

/// Title placeholder text, else the first shape with text, else `Untitled`.
pub fn slide_title(shapes: &[SlideShape]) -> String {
    shapes
        .iter()
        .find(|s| s.is_title() && !s.text.trim().is_empty())
        .or_else(|| shapes.iter().find(|s| !s.text.trim().is_empty()))
        .map(|s| single_line(&s.text))
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// All non-empty shape texts in document order.
pub fn slide_text(shapes: &[SlideShape]) -> String {
    shapes
        .iter()
        .map(|s| s.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text of the first body placeholder of a notes slide that has any.
pub fn notes_text(doc: &XmlDocument) -> String {
    let Some(root) = doc.root() else {
        return String::new();
    };
    doc.descendants_named(root, &P::sp())
        .filter(|&sp| is_body_placeholder(doc, sp))
        .filter_map(|sp| doc.first_child(sp, &P::txBody()))
        .map(|body| notes_body(doc, body))
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

fn is_body_placeholder(doc: &XmlDocument, sp: NodeId) -> bool {
    doc.element_children(sp)
        .next()
        .and_then(|nv| doc.first_child(nv, &P::nvPr()))
        .and_then(|nv_pr| doc.first_child(nv_pr, &P::ph()))
        .and_then(|ph| doc.attr(ph, "type"))
        == Some("body")
}

fn notes_body(doc: &XmlDocument, body: NodeId) -> String {
    doc.elements_by_name(body, &A::p())
        .map(|p| notes_paragraph(doc, p))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run texts joined by single spaces; whitespace-only pieces are dropped.
fn notes_paragraph(doc: &XmlDocument, paragraph: NodeId) -> String {
    let runs: Vec<NodeId> = doc.elements_by_name(paragraph, &A::r()).collect();
    let pieces: Vec<String> = if runs.is_empty() {
        doc.descendants_named(paragraph, &A::t())
            .map(|t| doc.text_content(t))
            .collect()
    } else {
        runs.iter()
            .filter_map(|&r| doc.first_child(r, &A::t()))
            .map(|t| doc.text_content(t))
            .collect()
    };

    pieces
        .iter()
        .map(|piece| piece.trim())
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
