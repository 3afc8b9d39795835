mod common;

use common::*;
use pretty_assertions::assert_eq;
use slidekit_core::{
    ExtractorSettings, PmlDocument, PmlExtractor, SlideSelection, SlidekitError,
};

fn three_slides() -> Vec<u8> {
    PptxBuilder::new()
        .slide_with_notes(
            slide_xml(
                &format!("{}{}", title_shape("2", "Welcome"), text_box("3", "Agenda")),
                r#"<p:transition spd="med" advTm="3000"><p:fade/></p:transition>"#,
            ),
            notes_xml(&["Greet the room.", "  ", "Introduce the agenda."]),
        )
        .slide(slide_xml(&text_box("3", "Second slide body"), ""))
        .slide(slide_xml(
            &title_shape("2", "Closing"),
            &main_sequence(&[fade_in(5, "2", "1000")]),
        ))
        .build()
}

#[test]
fn extracts_titles_text_and_notes() {
    let doc = PmlDocument::from_bytes(&three_slides()).unwrap();
    let content = PmlExtractor::extract(&doc, None).unwrap();

    assert_eq!(content.slide_count, 3);
    let numbers: Vec<usize> = content.slides.iter().map(|s| s.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    let first = &content.slides[0];
    assert_eq!(first.title, "Welcome");
    assert_eq!(first.text, "Welcome\nAgenda");
    assert_eq!(first.notes, "Greet the room.\nIntroduce the agenda.");
    assert_eq!(first.image_path, None);

    // No title placeholder: the first text wins.
    assert_eq!(content.slides[1].title, "Second slide body");
    assert_eq!(content.slides[1].notes, "");
}

#[test]
fn transition_is_described() {
    let doc = PmlDocument::from_bytes(&three_slides()).unwrap();
    let records = PmlExtractor::extract_animations(&doc, None).unwrap();

    assert_eq!(
        records["slide_1"].transition,
        "fade (speed: med), advances after 3000 ms"
    );
    assert_eq!(records["slide_2"].transition, "None");
}

#[test]
fn animation_records_are_keyed_by_slide() {
    let doc = PmlDocument::from_bytes(&three_slides()).unwrap();
    let records = PmlExtractor::extract_animations(&doc, None).unwrap();

    let keys: Vec<&str> = records.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["slide_1", "slide_2", "slide_3"]);
    assert_eq!(records["slide_3"].slide_number, 3);
    assert_eq!(records["slide_3"].title, "Closing");
    assert_eq!(records["slide_3"].animation_count, 1);
    assert!(records["slide_3"].shapes.contains_key("2"));
    assert!(!records["slide_2"].has_animations);
}

#[test]
fn selection_limits_slides() {
    let doc = PmlDocument::from_bytes(&three_slides()).unwrap();
    let settings = ExtractorSettings::new().with_slides(SlideSelection::parse("1,3"));
    let content = PmlExtractor::extract(&doc, Some(&settings)).unwrap();

    assert_eq!(content.slide_count, 3);
    let numbers: Vec<usize> = content.slides.iter().map(|s| s.number).collect();
    assert_eq!(numbers, vec![1, 3]);
}

#[test]
fn selection_outside_range_yields_nothing() {
    let doc = PmlDocument::from_bytes(&three_slides()).unwrap();
    let settings = ExtractorSettings::new().with_slides(SlideSelection::parse("7-9"));
    let content = PmlExtractor::extract(&doc, Some(&settings)).unwrap();

    assert_eq!(content.slide_count, 3);
    assert!(content.slides.is_empty());
}

#[test]
fn unusable_selection_processes_every_slide() {
    let doc = PmlDocument::from_bytes(&three_slides()).unwrap();
    let settings = ExtractorSettings::new().with_slides(SlideSelection::parse("abc"));
    let content = PmlExtractor::extract(&doc, Some(&settings)).unwrap();

    assert_eq!(content.slides.len(), 3);
    assert_eq!(PmlExtractor::extract_animations(&doc, Some(&settings)).unwrap().len(), 3);
}

#[test]
fn disabled_facets_are_skipped() {
    let doc = PmlDocument::from_bytes(&three_slides()).unwrap();
    let settings = ExtractorSettings {
        extract_notes: false,
        extract_animations: false,
        ..ExtractorSettings::default()
    };
    let content = PmlExtractor::extract(&doc, Some(&settings)).unwrap();

    assert_eq!(content.slides[0].notes, "");
    assert!(content.slides.iter().all(|s| s.animation_sequence.is_none()));
    assert!(content.animation_records().is_empty());
}

#[test]
fn unreadable_slide_degrades_to_empty_record() {
    let bytes = PptxBuilder::new()
        .slide(slide_xml(&text_box("3", "Fine"), ""))
        .slide(slide_xml(&text_box("3", "Broken"), ""))
        .part("ppt/slides/slide2.xml", b"<p:sld><unclosed>")
        .build();
    let doc = PmlDocument::from_bytes(&bytes).unwrap();
    let content = PmlExtractor::extract(&doc, None).unwrap();

    assert_eq!(content.slides.len(), 2);
    assert_eq!(content.slides[0].title, "Fine");

    let broken = &content.slides[1];
    assert_eq!(broken.number, 2);
    assert_eq!(broken.text, "");
    let record = broken.animation_sequence.as_ref().unwrap();
    assert!(!record.has_animations);
    assert!(record.animation_details.is_empty());
    assert_eq!(record.transition, "None");
}

#[test]
fn content_serializes_with_camel_case_keys() {
    let doc = PmlDocument::from_bytes(&three_slides()).unwrap();
    let content = PmlExtractor::extract(&doc, None).unwrap();
    let json = serde_json::to_value(&content).unwrap();

    let record = &json["slides"][2]["animationSequence"];
    assert_eq!(record["slideNumber"], 3);
    assert_eq!(record["hasAnimations"], true);
    assert_eq!(record["animationDetails"][0]["effectType"], "entrance");
    assert_eq!(record["animationDetails"][0]["durationMs"], 1000);
    assert!(record["animationDetails"][0]["description"]
        .as_str()
        .unwrap()
        .contains("taking 1.0 seconds to complete"));
}

// ============================================================================
// Container failures
// ============================================================================

#[test]
fn non_zip_input_is_rejected() {
    let err = PmlDocument::from_bytes(b"plain text, not a package").unwrap_err();
    assert!(matches!(err, SlidekitError::Zip(_)));
}

#[test]
fn package_without_presentation_is_rejected() {
    let bytes = raw_package(&[("docProps/app.xml", b"<Properties/>".as_slice())]);

    let err = PmlDocument::from_bytes(&bytes).unwrap_err();
    match err {
        SlidekitError::MissingPart { part_path, .. } => {
            assert_eq!(part_path, "ppt/presentation.xml")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_is_io_error() {
    let err = PmlDocument::from_file("/nonexistent/deck.pptx").unwrap_err();
    assert!(matches!(err, SlidekitError::Io(_)));
}

#[test]
fn external_main_document_is_rejected() {
    let rels = br#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="https://example.com/deck.xml" TargetMode="External"/></Relationships>"#;
    let bytes = raw_package(&[("_rels/.rels", rels.as_slice())]);

    let err = PmlDocument::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, SlidekitError::InvalidRelationship { .. }));
}

#[test]
fn template_parts_and_relationships() {
    let bytes = PptxBuilder::new()
        .layout(layout_xml(""))
        .layout(layout_xml(""))
        .slide_with_layout(slide_xml("", ""), 2)
        .build();
    let doc = PmlDocument::from_bytes(&bytes).unwrap();

    assert_eq!(
        doc.layout_parts(),
        vec![
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/slideLayouts/slideLayout2.xml"
        ]
    );
    assert_eq!(doc.master_parts(), vec!["ppt/slideMasters/slideMaster1.xml"]);

    let slide = &doc.slides().unwrap()[0];
    let layout = doc.layout_of(&slide.part_path).unwrap();
    assert_eq!(layout.as_deref(), Some("ppt/slideLayouts/slideLayout2.xml"));
    assert_eq!(
        doc.master_of("ppt/slideLayouts/slideLayout2.xml").unwrap().as_deref(),
        Some("ppt/slideMasters/slideMaster1.xml")
    );
    assert_eq!(doc.notes_of(&slide.part_path).unwrap(), None);
}
