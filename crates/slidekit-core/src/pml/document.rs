use crate::error::{Result, SlidekitError};
use crate::package::relationships::resolve_target;
use crate::package::{relationship_types, OoxmlPackage};
use crate::xml::{P, R};
use std::path::Path;
use tracing::debug;

const DEFAULT_PRESENTATION_PART: &str = "ppt/presentation.xml";
const LAYOUT_DIR: &str = "ppt/slideLayouts/";
const MASTER_DIR: &str = "ppt/slideMasters/";

/// A slide by 1-based position in `p:sldIdLst`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideRef {
    pub number: usize,
    pub part_path: String,
}

#[derive(Debug)]
pub struct PmlDocument {
    package: OoxmlPackage,
    presentation_part: String,
}

impl PmlDocument {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let package = OoxmlPackage::open(bytes)?;
        let main_document = package
            .relationships("")?
            .into_iter()
            .find(|rel| rel.is_type(relationship_types::OFFICE_DOCUMENT));
        let presentation_part = match main_document {
            Some(rel) if rel.is_external() => {
                return Err(SlidekitError::InvalidRelationship {
                    message: format!("main document '{}' is outside the package", rel.target),
                })
            }
            Some(rel) => resolve_target("", &rel.target),
            None => DEFAULT_PRESENTATION_PART.to_string(),
        };

        if !package.has_part(&presentation_part) {
            return Err(SlidekitError::MissingPart {
                part_path: presentation_part,
                document_type: "PresentationML".to_string(),
            });
        }

        Ok(Self {
            package,
            presentation_part,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn package(&self) -> &OoxmlPackage {
        &self.package
    }

    pub fn presentation_part(&self) -> &str {
        &self.presentation_part
    }

    /// Slides in presentation order. A `p:sldId` whose relationship does
    /// not resolve still takes up its ordinal.
    pub fn slides(&self) -> Result<Vec<SlideRef>> {
        let doc = self.package.get_xml_part(&self.presentation_part)?;
        let root = doc.root().ok_or_else(|| SlidekitError::InvalidPackage {
            message: "presentation part has no root element".to_string(),
        })?;
        let relationships = self.package.relationships(&self.presentation_part)?;

        let Some(id_list) = doc.first_child(root, &P::sldIdLst()) else {
            debug!("presentation has no slide list");
            return Ok(Vec::new());
        };

        let mut slides = Vec::new();
        for (position, sld_id) in doc.elements_by_name(id_list, &P::sldId()).enumerate() {
            let number = position + 1;
            let target = doc.attr_ns(sld_id, &R::id()).and_then(|rid| {
                relationships
                    .iter()
                    .find(|rel| rel.id == rid && !rel.is_external())
            });
            match target {
                Some(rel) => slides.push(SlideRef {
                    number,
                    part_path: resolve_target(&self.presentation_part, &rel.target),
                }),
                None => debug!(slide = number, "slide id has no resolvable relationship"),
            }
        }
        Ok(slides)
    }

    /// Every slide layout part, in part-name order.
    pub fn layout_parts(&self) -> Vec<&str> {
        self.parts_in(LAYOUT_DIR)
    }

    /// Every slide master part, in part-name order.
    pub fn master_parts(&self) -> Vec<&str> {
        self.parts_in(MASTER_DIR)
    }

    fn parts_in(&self, dir: &str) -> Vec<&str> {
        self.package
            .part_names()
            .filter(|path| {
                path.strip_prefix(dir)
                    .map(|rest| !rest.contains('/') && rest.ends_with(".xml"))
                    .unwrap_or(false)
            })
            .collect()
    }

    pub fn layout_of(&self, slide_part: &str) -> Result<Option<String>> {
        self.package
            .related_part(slide_part, relationship_types::SLIDE_LAYOUT)
    }

    pub fn master_of(&self, layout_part: &str) -> Result<Option<String>> {
        self.package
            .related_part(layout_part, relationship_types::SLIDE_MASTER)
    }

    pub fn notes_of(&self, slide_part: &str) -> Result<Option<String>> {
        self.package
            .related_part(slide_part, relationship_types::NOTES_SLIDE)
    }
}
