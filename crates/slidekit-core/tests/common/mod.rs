//! In-memory `.pptx` fixtures for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};

pub const NS: &str = concat!(
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#
);

const REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_TYPE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

struct SlideSpec {
    xml: String,
    layout: usize,
    notes: Option<String>,
}

/// Assembles a minimal presentation package: one master, any number of
/// layouts, and slides that point at a layout.
pub struct PptxBuilder {
    slides: Vec<SlideSpec>,
    layouts: Vec<String>,
    master: String,
    overrides: Vec<(String, Vec<u8>)>,
}

impl Default for PptxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PptxBuilder {
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            layouts: Vec::new(),
            master: master_xml(""),
            overrides: Vec::new(),
        }
    }

    /// Adds a layout; layouts are numbered from 1 in insertion order.
    pub fn layout(mut self, xml: String) -> Self {
        self.layouts.push(xml);
        self
    }

    pub fn master(mut self, xml: String) -> Self {
        self.master = xml;
        self
    }

    /// Adds a slide using layout 1.
    pub fn slide(self, xml: String) -> Self {
        self.slide_with_layout(xml, 1)
    }

    pub fn slide_with_layout(mut self, xml: String, layout: usize) -> Self {
        self.slides.push(SlideSpec {
            xml,
            layout,
            notes: None,
        });
        self
    }

    pub fn slide_with_notes(mut self, xml: String, notes: String) -> Self {
        self.slides.push(SlideSpec {
            xml,
            layout: 1,
            notes: Some(notes),
        });
        self
    }

    /// Replaces or adds a raw part after generation.
    pub fn part(mut self, path: &str, bytes: &[u8]) -> Self {
        self.overrides.push((path.to_string(), bytes.to_vec()));
        self
    }

    pub fn build(mut self) -> Vec<u8> {
        if self.layouts.is_empty() {
            self.layouts.push(layout_xml(""));
        }

        let mut parts: Vec<(String, Vec<u8>)> = Vec::new();
        let mut add = |path: &str, content: String| parts.push((path.to_string(), content.into_bytes()));

        add("[Content_Types].xml", content_types(&self.slides, self.layouts.len()));
        add(
            "_rels/.rels",
            rels(&[("rId1", "officeDocument", "ppt/presentation.xml")]),
        );

        let sld_ids: String = (1..=self.slides.len())
            .map(|i| format!(r#"<p:sldId id="{}" r:id="rId{}"/>"#, 255 + i, i + 1))
            .collect();
        add(
            "ppt/presentation.xml",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:presentation {NS}><p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst><p:sldIdLst>{sld_ids}</p:sldIdLst></p:presentation>"#
            ),
        );

        let mut presentation_rels = vec![(
            "rId1".to_string(),
            "slideMaster",
            "slideMasters/slideMaster1.xml".to_string(),
        )];
        for i in 1..=self.slides.len() {
            presentation_rels.push((format!("rId{}", i + 1), "slide", format!("slides/slide{}.xml", i)));
        }
        add(
            "ppt/_rels/presentation.xml.rels",
            rels(
                &presentation_rels
                    .iter()
                    .map(|(id, ty, target)| (id.as_str(), *ty, target.as_str()))
                    .collect::<Vec<_>>(),
            ),
        );

        add("ppt/slideMasters/slideMaster1.xml", self.master.clone());
        let master_rels: Vec<(String, String)> = (1..=self.layouts.len())
            .map(|i| (format!("rId{}", i), format!("../slideLayouts/slideLayout{}.xml", i)))
            .collect();
        add(
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            rels(
                &master_rels
                    .iter()
                    .map(|(id, target)| (id.as_str(), "slideLayout", target.as_str()))
                    .collect::<Vec<_>>(),
            ),
        );

        for (i, layout) in self.layouts.iter().enumerate() {
            let n = i + 1;
            add(&format!("ppt/slideLayouts/slideLayout{}.xml", n), layout.clone());
            add(
                &format!("ppt/slideLayouts/_rels/slideLayout{}.xml.rels", n),
                rels(&[("rId1", "slideMaster", "../slideMasters/slideMaster1.xml")]),
            );
        }

        for (i, slide) in self.slides.iter().enumerate() {
            let n = i + 1;
            add(&format!("ppt/slides/slide{}.xml", n), slide.xml.clone());
            let layout_target = format!("../slideLayouts/slideLayout{}.xml", slide.layout);
            let notes_target = format!("../notesSlides/notesSlide{}.xml", n);
            let mut slide_rels = vec![("rId1", "slideLayout", layout_target.as_str())];
            if let Some(notes) = &slide.notes {
                slide_rels.push(("rId2", "notesSlide", notes_target.as_str()));
                add(&format!("ppt/notesSlides/notesSlide{}.xml", n), notes.clone());
            }
            add(&format!("ppt/slides/_rels/slide{}.xml.rels", n), rels(&slide_rels));
        }

        for (path, bytes) in self.overrides {
            parts.retain(|(existing, _)| existing != &path);
            parts.push((path, bytes));
        }

        zip_parts(&parts)
    }
}

/// A zip archive holding exactly the given parts.
pub fn raw_package(parts: &[(&str, &[u8])]) -> Vec<u8> {
    let owned: Vec<(String, Vec<u8>)> = parts
        .iter()
        .map(|(path, bytes)| (path.to_string(), bytes.to_vec()))
        .collect();
    zip_parts(&owned)
}

fn zip_parts(parts: &[(String, Vec<u8>)]) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut writer = ZipWriter::new(&mut buffer);
        for (path, bytes) in parts {
            writer
                .start_file(path.as_str(), SimpleFileOptions::default())
                .unwrap();
            writer.write_all(bytes).unwrap();
        }
        writer.finish().unwrap();
    }
    buffer.into_inner()
}

fn rels(entries: &[(&str, &str, &str)]) -> String {
    let body: String = entries
        .iter()
        .map(|(id, ty, target)| {
            format!(r#"<Relationship Id="{id}" Type="{REL_TYPE}/{ty}" Target="{target}"/>"#)
        })
        .collect();
    format!(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="{REL_NS}">{body}</Relationships>"#)
}

fn content_types(slides: &[SlideSpec], layouts: usize) -> String {
    let mut overrides = String::from(
        r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#,
    );
    for i in 1..=slides.len() {
        overrides.push_str(&format!(
            r#"<Override PartName="/ppt/slides/slide{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
        ));
    }
    for i in 1..=layouts {
        overrides.push_str(&format!(
            r#"<Override PartName="/ppt/slideLayouts/slideLayout{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#
        ));
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/>{overrides}</Types>"#
    )
}

// ---------------------------------------------------------------------------
// Part XML
// ---------------------------------------------------------------------------

const GROUP_PROPS: &str = r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>"#;

pub fn slide_xml(shapes: &str, extra: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sld {NS}><p:cSld><p:spTree>{GROUP_PROPS}{shapes}</p:spTree></p:cSld>{extra}</p:sld>"#
    )
}

pub fn layout_xml(extra: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sldLayout {NS}><p:cSld name="Layout"><p:spTree>{GROUP_PROPS}{}</p:spTree></p:cSld>{extra}</p:sldLayout>"#,
        title_shape("2", "Click to edit Master title style")
    )
}

pub fn master_xml(extra: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sldMaster {NS}><p:cSld><p:spTree>{GROUP_PROPS}</p:spTree></p:cSld>{extra}</p:sldMaster>"#
    )
}

pub fn notes_xml(paragraphs: &[&str]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<a:p><a:r><a:t>{}</a:t></a:r></a:p>", p))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:notes {NS}><p:cSld><p:spTree>{GROUP_PROPS}<p:sp><p:nvSpPr><p:cNvPr id="3" name="Notes Placeholder 2"/><p:cNvSpPr/><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr><p:txBody><a:bodyPr/>{body}</p:txBody></p:sp></p:spTree></p:cSld></p:notes>"#
    )
}

pub fn title_shape(id: &str, text: &str) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Title {id}"/><p:cNvSpPr/><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:txBody><a:bodyPr/><a:p><a:r><a:t>{text}</a:t></a:r></a:p></p:txBody></p:sp>"#
    )
}

pub fn text_box(id: &str, text: &str) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="TextBox {id}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:txBody><a:bodyPr/><a:p><a:r><a:t>{text}</a:t></a:r></a:p></p:txBody></p:sp>"#
    )
}

/// Timing tree as saved by presentation software: a `tmRoot` wrapping one
/// main sequence whose click groups are given.
pub fn main_sequence(click_groups: &[String]) -> String {
    let groups: String = click_groups
        .iter()
        .enumerate()
        .map(|(i, effects)| {
            format!(
                r#"<p:par><p:cTn id="{}" fill="hold"><p:stCondLst><p:cond delay="indefinite"/></p:stCondLst><p:childTnLst><p:par><p:cTn id="{}" fill="hold"><p:stCondLst><p:cond delay="0"/></p:stCondLst><p:childTnLst>{effects}</p:childTnLst></p:cTn></p:par></p:childTnLst></p:cTn></p:par>"#,
                900 + i * 2,
                901 + i * 2
            )
        })
        .collect();
    format!(
        r#"<p:timing><p:tnLst><p:par><p:cTn id="1" dur="indefinite" restart="never" nodeType="tmRoot"><p:childTnLst><p:seq concurrent="1" nextAc="seek"><p:cTn id="2" dur="indefinite" nodeType="mainSeq"><p:childTnLst>{groups}</p:childTnLst></p:cTn><p:prevCondLst><p:cond evt="onPrev" delay="0"><p:tgtEl><p:sldTgt/></p:tgtEl></p:cond></p:prevCondLst><p:nextCondLst><p:cond evt="onNext" delay="0"><p:tgtEl><p:sldTgt/></p:tgtEl></p:cond></p:nextCondLst></p:seq></p:childTnLst></p:cTn></p:par></p:tnLst></p:timing>"#
    )
}

/// Fade entrance on click, as saved by presentation software.
pub fn fade_in(ctn_id: u32, spid: &str, dur: &str) -> String {
    format!(
        r#"<p:par><p:cTn id="{ctn_id}" presetID="10" presetClass="entr" presetSubtype="0" fill="hold" nodeType="clickEffect" dur="{dur}"><p:stCondLst><p:cond delay="0"/></p:stCondLst><p:childTnLst><p:set><p:cBhvr><p:cTn id="{a}" dur="1" fill="hold"><p:stCondLst><p:cond delay="0"/></p:stCondLst></p:cTn><p:tgtEl><p:spTgt spid="{spid}"/></p:tgtEl><p:attrNameLst><p:attrName>style.visibility</p:attrName></p:attrNameLst></p:cBhvr><p:to><p:strVal val="visible"/></p:to></p:set><p:animEffect transition="in" filter="fade"><p:cBhvr><p:cTn id="{b}" dur="500"/><p:tgtEl><p:spTgt spid="{spid}"/></p:tgtEl></p:cBhvr></p:animEffect></p:childTnLst></p:cTn></p:par>"#,
        a = ctn_id * 10 + 1,
        b = ctn_id * 10 + 2,
    )
}

/// Color-change emphasis with extra effect-level attributes.
pub fn color_pulse(ctn_id: u32, spid: &str, node_type: &str, attrs: &str) -> String {
    format!(
        r#"<p:par><p:cTn id="{ctn_id}" presetID="1" presetClass="emph" presetSubtype="2" fill="hold" nodeType="{node_type}" {attrs}><p:stCondLst><p:cond delay="0"/></p:stCondLst><p:childTnLst><p:animClr clrSpc="rgb" dir="cw"><p:cBhvr><p:cTn id="{a}" dur="2000" fill="hold"/><p:tgtEl><p:spTgt spid="{spid}"/></p:tgtEl><p:attrNameLst><p:attrName>fillcolor</p:attrName></p:attrNameLst></p:cBhvr><p:to><a:srgbClr val="FF0000"/></p:to></p:animClr></p:childTnLst></p:cTn></p:par>"#,
        a = ctn_id * 10 + 1,
    )
}
