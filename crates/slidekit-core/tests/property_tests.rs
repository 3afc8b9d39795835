mod common;

use common::*;
use proptest::prelude::*;
use slidekit_core::{PmlDocument, PmlExtractor};

fn effect_ids(bytes: &[u8]) -> Vec<String> {
    let doc = PmlDocument::from_bytes(bytes).unwrap();
    let records = PmlExtractor::extract_animations(&doc, None).unwrap();
    records["slide_1"]
        .animation_details
        .iter()
        .map(|d| d.effect.effect_id.clone())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn output_order_matches_document_order(
        ids in Just((10u32..22).collect::<Vec<_>>()).prop_shuffle(),
        per_group in 1usize..4,
    ) {
        let groups: Vec<String> = ids
            .chunks(per_group)
            .map(|chunk| chunk.iter().map(|&id| fade_in(id, "4", "500")).collect())
            .collect();
        let bytes = PptxBuilder::new()
            .slide(slide_xml(&text_box("4", "Item"), &main_sequence(&groups)))
            .build();

        let expected: Vec<String> = ids.iter().map(u32::to_string).collect();
        prop_assert_eq!(effect_ids(&bytes), expected);
    }

    #[test]
    fn every_effect_has_identifiers(count in 0usize..8, spid in "[1-9][0-9]{0,2}") {
        let effects: Vec<String> = (0..count)
            .map(|i| color_pulse(20 + i as u32, &spid, "clickEffect", ""))
            .collect();
        let bytes = PptxBuilder::new()
            .slide(slide_xml("", &main_sequence(&effects)))
            .build();
        let doc = PmlDocument::from_bytes(&bytes).unwrap();
        let records = PmlExtractor::extract_animations(&doc, None).unwrap();
        let record = &records["slide_1"];

        prop_assert_eq!(record.animation_count, count);
        prop_assert_eq!(record.has_animations, count > 0);
        for detail in &record.animation_details {
            prop_assert!(!detail.effect.sequence_id.is_empty());
            prop_assert!(!detail.effect.effect_id.is_empty());
            prop_assert_eq!(&detail.effect.target_shape_id, &spid);
            prop_assert!(detail.description.ends_with('.'));
        }
    }
}
