use crate::xml::{XmlDocument, PR};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TargetMode {
    #[default]
    Internal,
    External,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    pub target: String,
    #[serde(default)]
    pub target_mode: TargetMode,
}

impl Relationship {
    /// Matches on the last path segment of the type URI so transitional
    /// and strict relationship namespaces are treated alike.
    pub fn is_type(&self, suffix: &str) -> bool {
        self.rel_type.rsplit('/').next() == Some(suffix.trim_start_matches('/'))
    }

    pub fn is_external(&self) -> bool {
        self.target_mode == TargetMode::External
    }

    /// Reads every `Relationship` element of a parsed `.rels` part, in
    /// document order. Entries without `Id` or `Target` are dropped.
    pub fn parse_all(doc: &XmlDocument) -> Vec<Relationship> {
        let root = match doc.root() {
            Some(root) if doc.is(root, &PR::Relationships()) => root,
            _ => return Vec::new(),
        };

        doc.elements_by_name(root, &PR::Relationship())
            .filter_map(|node| {
                let id = doc.attr(node, "Id")?;
                let target = doc.attr(node, "Target")?;
                let rel_type = doc.attr(node, "Type").unwrap_or_default();
                let target_mode = match doc.attr(node, "TargetMode") {
                    Some("External") => TargetMode::External,
                    _ => TargetMode::Internal,
                };
                Some(Relationship {
                    id: id.to_string(),
                    rel_type: rel_type.to_string(),
                    target: target.to_string(),
                    target_mode,
                })
            })
            .collect()
    }
}

pub mod relationship_types {
    pub const OFFICE_DOCUMENT: &str = "officeDocument";
    pub const SLIDE_LAYOUT: &str = "slideLayout";
    pub const SLIDE_MASTER: &str = "slideMaster";
    pub const NOTES_SLIDE: &str = "notesSlide";
}

/// `ppt/slides/slide1.xml` → `ppt/slides/_rels/slide1.xml.rels`
pub fn rels_path_for(part_path: &str) -> String {
    let part_path = part_path.trim_start_matches('/');
    match part_path.rfind('/') {
        Some(idx) => format!(
            "{}/_rels/{}.rels",
            &part_path[..idx],
            &part_path[idx + 1..]
        ),
        None => format!("_rels/{}.rels", part_path),
    }
}

/// Resolves a relationship target against the part that declares it.
/// Absolute targets (`/ppt/...`) are package-rooted.
pub fn resolve_target(source_part: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return normalize_segments(absolute.split('/'));
    }

    let source_part = source_part.trim_start_matches('/');
    let base = match source_part.rfind('/') {
        Some(idx) => &source_part[..idx],
        None => "",
    };

    normalize_segments(base.split('/').chain(target.split('/')))
}

fn normalize_segments<'a>(segments: impl Iterator<Item = &'a str>) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for segment in segments {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }
    parts.join("/")
}
