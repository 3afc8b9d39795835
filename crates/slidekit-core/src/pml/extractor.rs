use super::document::{PmlDocument, SlideRef};
use super::result::{PresentationContent, SlideAnimationRecord, SlideContent};
use super::settings::ExtractorSettings;
use super::shapes::{collect_shapes, shape_table, SlideShape};
use super::text::{notes_text, slide_text, slide_title};
use super::transition::describe_transition;
use crate::animation::{
    self, describe_effect, inheritance, summarize, AnimationDetail, LayoutAnimationIndex,
    TemplateChain,
};
use crate::error::Result;
use crate::util::strings::truncate_preview;
use crate::xml::XmlDocument;
use indexmap::IndexMap;
use tracing::{debug, info, warn};

/// Extracts slide text, notes and animation timelines from a presentation.
pub struct PmlExtractor;

impl PmlExtractor {
    /// Every enabled facet for the selected slides. Fails only when the
    /// presentation part itself cannot be read.
    pub fn extract(
        doc: &PmlDocument,
        settings: Option<&ExtractorSettings>,
    ) -> Result<PresentationContent> {
        let default_settings = ExtractorSettings::default();
        let settings = settings.unwrap_or(&default_settings);

        let slides = doc.slides()?;
        info!(slides = slides.len(), "extracting presentation");

        let index = settings
            .extract_animations
            .then(|| LayoutAnimationIndex::build(doc));

        if settings.slides.as_ref().is_some_and(|s| s.is_empty()) {
            warn!("slide selection is empty, processing all slides");
        }
        let selected: Vec<&SlideRef> = slides.iter().filter(|s| settings.includes(s.number)).collect();
        if selected.is_empty() && !slides.is_empty() {
            warn!("slide selection matched no slides");
        }

        let content = selected
            .into_iter()
            .map(|slide| Self::extract_slide(doc, slide, settings, index.as_ref()))
            .collect();

        Ok(PresentationContent {
            slide_count: slides.len(),
            slides: content,
        })
    }

    /// Animation records keyed `slide_<n>`, in slide order.
    pub fn extract_animations(
        doc: &PmlDocument,
        settings: Option<&ExtractorSettings>,
    ) -> Result<IndexMap<String, SlideAnimationRecord>> {
        let mut settings = settings.cloned().unwrap_or_default();
        settings.extract_animations = true;
        settings.extract_notes = false;
        Ok(Self::extract(doc, Some(&settings))?.animation_records())
    }

    fn extract_slide(
        doc: &PmlDocument,
        slide: &SlideRef,
        settings: &ExtractorSettings,
        index: Option<&LayoutAnimationIndex>,
    ) -> SlideContent {
        let xml = match doc.package().get_xml_part(&slide.part_path) {
            Ok(xml) => xml,
            Err(err) => {
                warn!(slide = slide.number, part = %slide.part_path, error = %err, "slide unreadable");
                let mut content = SlideContent::empty(slide.number);
                content.animation_sequence =
                    index.map(|_| SlideAnimationRecord::empty(slide.number));
                return content;
            }
        };

        let shapes = collect_shapes(&xml);
        let title = slide_title(&shapes);
        let notes = if settings.extract_notes {
            Self::slide_notes(doc, slide)
        } else {
            String::new()
        };
        let animation_sequence =
            index.map(|index| Self::animation_record(doc, slide, &xml, &shapes, &title, index));

        info!(
            slide = slide.number,
            title = %truncate_preview(&title, 50),
            animations = animation_sequence.as_ref().map(|r| r.animation_count).unwrap_or(0),
            "processed slide"
        );

        SlideContent {
            number: slide.number,
            text: slide_text(&shapes),
            title,
            notes,
            animation_sequence,
            image_path: None,
        }
    }

    fn slide_notes(doc: &PmlDocument, slide: &SlideRef) -> String {
        let notes_part = match doc.notes_of(&slide.part_path) {
            Ok(Some(part)) => part,
            Ok(None) => {
                debug!(slide = slide.number, "slide has no notes");
                return String::new();
            }
            Err(err) => {
                warn!(slide = slide.number, error = %err, "slide relationships unreadable");
                return String::new();
            }
        };
        match doc.package().get_xml_part(&notes_part) {
            Ok(notes) => notes_text(&notes),
            Err(err) => {
                warn!(slide = slide.number, part = %notes_part, error = %err, "notes unreadable");
                String::new()
            }
        }
    }

    fn animation_record(
        doc: &PmlDocument,
        slide: &SlideRef,
        xml: &XmlDocument,
        shapes: &[SlideShape],
        title: &str,
        index: &LayoutAnimationIndex,
    ) -> SlideAnimationRecord {
        let raw = animation::extract_raw(xml);
        let direct = animation::extract_effects(xml);
        let chain = TemplateChain::resolve(doc, &slide.part_path);
        let resolved = inheritance::resolve(doc.package(), index, &chain, direct);

        let table = shape_table(shapes);
        let details: Vec<AnimationDetail> = resolved
            .effects
            .iter()
            .map(|effect| {
                let lookup = if effect.inherited_from.is_some() {
                    &resolved.template_shapes
                } else {
                    &table
                };
                AnimationDetail {
                    effect: effect.clone(),
                    description: describe_effect(effect, lookup),
                }
            })
            .collect();

        SlideAnimationRecord {
            slide_number: slide.number,
            title: title.to_string(),
            animations: raw,
            animation_summary: summarize(&resolved.effects),
            animation_count: details.len(),
            animation_details: details,
            shapes: table,
            transition: describe_transition(xml),
            has_animations: resolved.has_animations,
            layout_animations: resolved.layout_animations,
            master_animations: resolved.master_animations,
            direct_animations: resolved.direct_animations,
        }
    }
}
