//! Layout and master animation inheritance.

use super::types::AnimationEffect;
use super::walker::TimingTreeWalker;
use crate::error::Result;
use crate::package::{relationship_types, OoxmlPackage};
use crate::pml::shapes::{collect_shapes, shape_table, ShapeSummary};
use crate::pml::PmlDocument;
use crate::xml::{parser, scan, P};
use indexmap::IndexMap;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Which layouts and masters define animations, keyed by part path. Built
/// once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutAnimationIndex {
    layouts: BTreeMap<String, bool>,
    masters: BTreeMap<String, bool>,
}

impl LayoutAnimationIndex {
    /// Parts that cannot be read are left out, so they count as not
    /// animated.
    pub fn build(doc: &PmlDocument) -> Self {
        let scan_all = |parts: Vec<&str>| -> BTreeMap<String, bool> {
            parts
                .into_iter()
                .filter_map(|path| {
                    scan_part(doc.package(), path).map(|animated| (path.to_string(), animated))
                })
                .collect()
        };
        let index = Self {
            layouts: scan_all(doc.layout_parts()),
            masters: scan_all(doc.master_parts()),
        };
        debug!(
            layouts = index.layouts.len(),
            masters = index.masters.len(),
            "layout animation index built"
        );
        index
    }

    pub fn is_layout_animated(&self, part_path: &str) -> bool {
        self.layouts.get(part_path).copied().unwrap_or(false)
    }

    pub fn is_master_animated(&self, part_path: &str) -> bool {
        self.masters.get(part_path).copied().unwrap_or(false)
    }

    pub fn layouts(&self) -> &BTreeMap<String, bool> {
        &self.layouts
    }

    pub fn masters(&self) -> &BTreeMap<String, bool> {
        &self.masters
    }
}

/// `None` when the part could not be read.
fn scan_part(package: &OoxmlPackage, path: &str) -> Option<bool> {
    let bytes = package.get_part(path)?;
    match scan::contains_element(bytes, P::NS, "timing") {
        Ok(false) => return Some(false),
        Ok(true) => {}
        Err(err) => {
            warn!(part = path, error = %err, "skipping unreadable template part");
            return None;
        }
    }
    match parser::parse_bytes(bytes) {
        Ok(doc) => Some(TimingTreeWalker::has_any_effect(&doc)),
        Err(err) => {
            warn!(part = path, error = %err, "skipping unparsable template part");
            None
        }
    }
}

/// Label suffix: `ppt/slideLayouts/slideLayout3.xml` → `3`; file stem when
/// there is no numeric suffix. Not unique across parts.
pub fn part_identifier(path: &str) -> String {
    let file = path.rsplit('/').next().unwrap_or(path);
    let stem = file.strip_suffix(".xml").unwrap_or(file);
    let digits = stem.len() - stem.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        stem.to_string()
    } else {
        stem[stem.len() - digits..].to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRef {
    pub id: String,
    pub part_path: String,
}

impl TemplateRef {
    fn from_path(part_path: String) -> Self {
        Self {
            id: part_identifier(&part_path),
            part_path,
        }
    }
}

/// Slide → layout → master, as far as relationships resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateChain {
    pub layout: Option<TemplateRef>,
    pub master: Option<TemplateRef>,
}

impl TemplateChain {
    pub fn resolve(doc: &PmlDocument, slide_part: &str) -> Self {
        let layout = related(
            slide_part,
            relationship_types::SLIDE_LAYOUT,
            doc.layout_of(slide_part),
        )
        .map(TemplateRef::from_path);
        let master = layout
            .as_ref()
            .and_then(|l| {
                related(
                    &l.part_path,
                    relationship_types::SLIDE_MASTER,
                    doc.master_of(&l.part_path),
                )
            })
            .map(TemplateRef::from_path);
        Self { layout, master }
    }

    pub fn layout_label(&self) -> Option<String> {
        self.layout.as_ref().map(|l| format!("layout_{}", l.id))
    }

    pub fn master_label(&self) -> Option<String> {
        self.master.as_ref().map(|m| format!("master_{}", m.id))
    }
}

fn related(source: &str, rel_type: &str, lookup: Result<Option<String>>) -> Option<String> {
    match lookup {
        Ok(Some(path)) => Some(path),
        Ok(None) => {
            debug!(part = source, rel_type, "no relationship of this type");
            None
        }
        Err(err) => {
            debug!(part = source, error = %err, "relationship part unreadable");
            None
        }
    }
}

/// Effects a slide displays, plus where they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedAnimations {
    pub effects: Vec<AnimationEffect>,
    pub direct_animations: bool,
    pub layout_animations: bool,
    pub master_animations: bool,
    /// Direct effects exist or a template is flagged. May be true while
    /// `effects` is empty when a flagged template yields nothing.
    pub has_animations: bool,
    /// Shapes of the template that supplied inherited effects.
    pub template_shapes: IndexMap<String, ShapeSummary>,
}

/// Applies precedence: direct effects, else the flagged layout, else the
/// flagged master.
pub fn resolve(
    package: &OoxmlPackage,
    index: &LayoutAnimationIndex,
    chain: &TemplateChain,
    direct: Vec<AnimationEffect>,
) -> ResolvedAnimations {
    let layout_animations = chain
        .layout
        .as_ref()
        .map(|l| index.is_layout_animated(&l.part_path))
        .unwrap_or(false);
    let master_animations = chain
        .master
        .as_ref()
        .map(|m| index.is_master_animated(&m.part_path))
        .unwrap_or(false);
    let direct_animations = !direct.is_empty();

    let (effects, template_shapes) = if direct_animations {
        (direct, IndexMap::new())
    } else if layout_animations {
        inherited(package, chain.layout.as_ref(), chain.layout_label())
    } else if master_animations {
        inherited(package, chain.master.as_ref(), chain.master_label())
    } else {
        (Vec::new(), IndexMap::new())
    };

    ResolvedAnimations {
        effects,
        direct_animations,
        layout_animations,
        master_animations,
        has_animations: direct_animations || layout_animations || master_animations,
        template_shapes,
    }
}

fn inherited(
    package: &OoxmlPackage,
    template: Option<&TemplateRef>,
    label: Option<String>,
) -> (Vec<AnimationEffect>, IndexMap<String, ShapeSummary>) {
    let (Some(template), Some(label)) = (template, label) else {
        return (Vec::new(), IndexMap::new());
    };
    let doc = match package.get_xml_part(&template.part_path) {
        Ok(doc) => doc,
        Err(err) => {
            warn!(part = %template.part_path, error = %err, "template part unreadable");
            return (Vec::new(), IndexMap::new());
        }
    };

    let mut effects = super::extract_effects(&doc);
    for effect in &mut effects {
        effect.inherited_from = Some(label.clone());
    }
    if effects.is_empty() {
        debug!(template = %label, "flagged template yielded no effects");
    }
    (effects, shape_table(&collect_shapes(&doc)))
}
