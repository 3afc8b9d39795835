//! Shape tree snapshot of one slide.

use crate::util::strings::truncate_preview;
use crate::xml::namespaces::graphic_data;
use crate::xml::{XmlDocument, A, P};
use indexmap::IndexMap;
use indextree::NodeId;
use serde::{Deserialize, Serialize};

/// Longest text preview kept per shape, in characters.
pub const PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    TextBox,
    Picture,
    AutoShape,
    Placeholder,
    Group,
    Table,
    Chart,
    SmartArt,
    Connector,
    GraphicFrame,
    Media,
    Unknown,
}

impl ShapeKind {
    /// Noun used in generated descriptions.
    pub fn noun(&self) -> &'static str {
        match self {
            Self::TextBox => "text box",
            Self::Picture => "picture",
            Self::AutoShape => "shape",
            Self::Placeholder => "placeholder",
            Self::Group => "group",
            Self::Table => "table",
            Self::Chart => "chart",
            Self::SmartArt => "SmartArt graphic",
            Self::Connector => "connector",
            Self::GraphicFrame => "graphic frame",
            Self::Media => "media clip",
            Self::Unknown => "element",
        }
    }
}

/// Per-shape lookup entry used when describing effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub text: String,
}

/// A shape with its full text, as read from `p:spTree`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideShape {
    pub id: String,
    pub name: String,
    pub kind: ShapeKind,
    /// `p:ph@type`; `obj` when a placeholder omits it.
    pub placeholder: Option<String>,
    pub text: String,
}

impl SlideShape {
    pub fn is_title(&self) -> bool {
        matches!(self.placeholder.as_deref(), Some("title" | "ctrTitle"))
    }

    pub fn summary(&self) -> ShapeSummary {
        ShapeSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            kind: self.kind,
            text: truncate_preview(&self.text, PREVIEW_CHARS),
        }
    }
}

/// Shapes of a slide (or layout) in document order, group members after
/// their group. Shapes without `p:cNvPr@id` are skipped.
pub fn collect_shapes(doc: &XmlDocument) -> Vec<SlideShape> {
    let mut shapes = Vec::new();
    let tree = doc
        .root()
        .and_then(|root| doc.first_child(root, &P::cSld()))
        .and_then(|c_sld| doc.first_child(c_sld, &P::spTree()));
    if let Some(tree) = tree {
        collect_into(doc, tree, &mut shapes);
    }
    shapes
}

fn collect_into(doc: &XmlDocument, container: NodeId, shapes: &mut Vec<SlideShape>) {
    for node in doc.element_children(container) {
        let Some(kind) = shape_kind(doc, node) else {
            continue;
        };
        let non_visual = doc.element_children(node).next();
        let c_nv_pr = non_visual.and_then(|nv| doc.first_child(nv, &P::cNvPr()));

        if let Some(id) = c_nv_pr.and_then(|c| doc.attr(c, "id")) {
            shapes.push(SlideShape {
                id: id.to_string(),
                name: c_nv_pr
                    .and_then(|c| doc.attr(c, "name"))
                    .unwrap_or_default()
                    .to_string(),
                kind,
                placeholder: placeholder_type(doc, non_visual),
                text: doc
                    .first_child(node, &P::txBody())
                    .map(|body| text_body(doc, body))
                    .unwrap_or_default(),
            });
        }

        if kind == ShapeKind::Group {
            collect_into(doc, node, shapes);
        }
    }
}

/// `None` for elements of the shape tree that are not shapes (`nvGrpSpPr`,
/// `grpSpPr`, extension lists).
fn shape_kind(doc: &XmlDocument, node: NodeId) -> Option<ShapeKind> {
    let name = doc.name(node)?;
    if name.namespace.as_deref() != Some(P::NS) {
        return None;
    }
    let non_visual = doc.element_children(node).next();

    let kind = match name.local_name.as_str() {
        "sp" => {
            if placeholder_type(doc, non_visual).is_some() {
                ShapeKind::Placeholder
            } else if non_visual
                .and_then(|nv| doc.first_child(nv, &P::cNvSpPr()))
                .and_then(|c| doc.attr(c, "txBox"))
                .map(|v| v == "1" || v == "true")
                .unwrap_or(false)
            {
                ShapeKind::TextBox
            } else {
                ShapeKind::AutoShape
            }
        }
        "pic" => {
            let nv_pr = non_visual.and_then(|nv| doc.first_child(nv, &P::nvPr()));
            let is_media = nv_pr
                .map(|nv| {
                    doc.first_child(nv, &A::videoFile()).is_some()
                        || doc.first_child(nv, &A::audioFile()).is_some()
                })
                .unwrap_or(false);
            if is_media {
                ShapeKind::Media
            } else {
                ShapeKind::Picture
            }
        }
        "graphicFrame" => {
            let uri = doc
                .first_descendant(node, &A::graphicData())
                .and_then(|data| doc.attr(data, "uri"));
            match uri {
                Some(graphic_data::TABLE) => ShapeKind::Table,
                Some(graphic_data::CHART) => ShapeKind::Chart,
                Some(graphic_data::DIAGRAM) => ShapeKind::SmartArt,
                _ => ShapeKind::GraphicFrame,
            }
        }
        "grpSp" => ShapeKind::Group,
        "cxnSp" => ShapeKind::Connector,
        "contentPart" => ShapeKind::Unknown,
        _ => return None,
    };
    Some(kind)
}

fn placeholder_type(doc: &XmlDocument, non_visual: Option<NodeId>) -> Option<String> {
    let nv_pr = doc.first_child(non_visual?, &P::nvPr())?;
    let ph = doc.first_child(nv_pr, &P::ph())?;
    Some(doc.attr(ph, "type").unwrap_or("obj").to_string())
}

/// Paragraph texts of a `p:txBody`, joined with newlines and trimmed.
pub fn text_body(doc: &XmlDocument, body: NodeId) -> String {
    doc.elements_by_name(body, &A::p())
        .map(|p| paragraph_text(doc, p))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

pub fn paragraph_text(doc: &XmlDocument, paragraph: NodeId) -> String {
    let mut text = String::new();
    for child in doc.element_children(paragraph) {
        if doc.is(child, &A::r()) || doc.is(child, &A::fld()) {
            if let Some(t) = doc.first_child(child, &A::t()) {
                text.push_str(&doc.text_content(t));
            }
        } else if doc.is(child, &A::br()) {
            text.push('\n');
        }
    }
    text
}

/// Lookup table keyed by shape id, in document order.
pub fn shape_table(shapes: &[SlideShape]) -> IndexMap<String, ShapeSummary> {
    shapes
        .iter()
        .map(|shape| (shape.id.clone(), shape.summary()))
        .collect()
}
