//! Streaming pre-scan for parts that may be large but rarely relevant.

use crate::error::{Result, SlidekitError};
use quick_xml::events::Event;
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;

/// Reports whether `bytes` contains an element `{namespace}local_name`
/// without building a tree.
pub fn contains_element(bytes: &[u8], namespace: &str, local_name: &str) -> Result<bool> {
    if memchr::memmem::find(bytes, local_name.as_bytes()).is_none() {
        return Ok(false);
    }

    let mut reader = NsReader::from_reader(bytes);
    let mut buf = Vec::new();
    loop {
        let event = reader
            .read_resolved_event_into(&mut buf)
            .map_err(|e| SlidekitError::XmlParse {
                message: e.to_string(),
                location: "pre-scan".to_string(),
            })?;
        match event {
            (ResolveResult::Bound(ns), Event::Start(e) | Event::Empty(e)) => {
                if ns.as_ref() == namespace.as_bytes()
                    && e.local_name().as_ref() == local_name.as_bytes()
                {
                    return Ok(true);
                }
            }
            (_, Event::Eof) => return Ok(false),
            _ => {}
        }
        buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::namespaces::P;

    #[test]
    fn finds_timing_element() {
        let xml = br#"<p:sldLayout xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:timing/></p:sldLayout>"#;
        assert!(contains_element(xml, P::NS, "timing").unwrap());
    }

    #[test]
    fn ignores_name_in_other_namespace() {
        let xml = br#"<x:root xmlns:x="urn:other"><x:timing/></x:root>"#;
        assert!(!contains_element(xml, P::NS, "timing").unwrap());
    }

    #[test]
    fn short_circuits_when_bytes_absent() {
        assert!(!contains_element(b"not even xml <", P::NS, "timing").unwrap());
    }

    #[test]
    fn malformed_xml_is_an_error() {
        let broken = br#"<p:a xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"></p:b><p:timing/>"#;
        assert!(contains_element(broken, P::NS, "timing").is_err());
    }
}
