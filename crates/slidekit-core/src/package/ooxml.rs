use crate::error::{Result, SlidekitError};
use crate::xml::XmlDocument;
use std::collections::BTreeMap;
use std::io::{Cursor, Read};
use tracing::debug;
use zip::read::ZipArchive;

use super::relationships::{rels_path_for, resolve_target, Relationship};

/// Read-only view of an OOXML ZIP container.
///
/// Every entry is read into memory on open; parts are keyed by their
/// package path without a leading slash.
#[derive(Debug)]
pub struct OoxmlPackage {
    parts: BTreeMap<String, Vec<u8>>,
}

impl OoxmlPackage {
    pub fn open(bytes: &[u8]) -> Result<Self> {
        let cursor = Cursor::new(bytes);
        let mut archive = ZipArchive::new(cursor)?;

        let mut parts = BTreeMap::new();
        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            if file.is_dir() {
                continue;
            }
            let name = file.name().trim_start_matches('/').to_string();
            let mut content = Vec::new();
            file.read_to_end(&mut content)?;
            parts.insert(name, content);
        }

        if parts.is_empty() {
            return Err(SlidekitError::InvalidPackage {
                message: "archive contains no parts".to_string(),
            });
        }

        Ok(Self { parts })
    }

    pub fn has_part(&self, path: &str) -> bool {
        self.parts.contains_key(path.trim_start_matches('/'))
    }

    pub fn get_part(&self, path: &str) -> Option<&[u8]> {
        self.parts
            .get(path.trim_start_matches('/'))
            .map(|v| v.as_slice())
    }

    pub fn get_xml_part(&self, path: &str) -> Result<XmlDocument> {
        let bytes = self.get_part(path).ok_or_else(|| SlidekitError::MissingPart {
            part_path: path.to_string(),
            document_type: "OOXML".to_string(),
        })?;
        crate::xml::parser::parse_bytes(bytes)
    }

    /// Part names in sorted order.
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(|k| k.as_str())
    }

    /// Relationships declared by `source_part` (empty string for the
    /// package root). A missing `.rels` part yields no relationships.
    pub fn relationships(&self, source_part: &str) -> Result<Vec<Relationship>> {
        let rels_path = rels_path_for(source_part);
        if !self.has_part(&rels_path) {
            debug!(part = source_part, "no relationship part");
            return Ok(Vec::new());
        }
        let doc = self.get_xml_part(&rels_path)?;
        Ok(Relationship::parse_all(&doc))
    }

    /// First internal relationship of the given type, resolved to a part path.
    pub fn related_part(&self, source_part: &str, rel_type: &str) -> Result<Option<String>> {
        Ok(self
            .relationships(source_part)?
            .into_iter()
            .find(|rel| !rel.is_external() && rel.is_type(rel_type))
            .map(|rel| resolve_target(source_part, &rel.target)))
    }
}
