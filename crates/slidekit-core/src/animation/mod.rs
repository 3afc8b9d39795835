//! Animation timeline extraction and normalization.
//!
//! [`walker`] finds effect containers, [`classify`] and [`timing`] turn
//! each into an [`AnimationEffect`], [`inheritance`] supplies layout or
//! master effects for slides without their own, and [`describe`] renders
//! the result as text.

pub mod classify;
pub mod describe;
pub mod inheritance;
pub mod timing;
pub mod types;
pub mod walker;

pub use describe::{describe_effect, summarize};
pub use inheritance::{LayoutAnimationIndex, ResolvedAnimations, TemplateChain};
pub use types::{
    AnimationDetail, AnimationEffect, BuildLevel, EffectDirection, EffectDuration, EffectType,
    RawEffect, StartCondition,
};
pub use walker::{TimingNode, TimingTreeWalker};

use crate::xml::{XmlDocument, P};

/// Normalized effects of one part, in playback order.
pub fn extract_effects(doc: &XmlDocument) -> Vec<AnimationEffect> {
    TimingTreeWalker::new(doc)
        .map(|node| normalize(doc, &node))
        .collect()
}

/// Effects of one part with attribute values as stored.
pub fn extract_raw(doc: &XmlDocument) -> Vec<RawEffect> {
    TimingTreeWalker::new(doc)
        .map(|node| raw_effect(doc, &node))
        .collect()
}

pub fn normalize(doc: &XmlDocument, node: &TimingNode) -> AnimationEffect {
    let classification = classify::classify(doc, node.container);
    let timing = timing::resolve(doc, node.container);
    let (target_shape_id, build_level) = classify::resolve_target(doc, node.target);

    AnimationEffect {
        sequence_id: node.sequence_id.clone(),
        effect_id: node.effect_id.clone(),
        sequence_index: node.sequence_index,
        effect_index: node.effect_index,
        target_shape_id,
        effect_type: classification.effect_type,
        effect_subtype: classification.effect_subtype,
        effect_direction: classification.effect_direction,
        start_condition: timing.start_condition,
        delay_ms: timing.delay_ms,
        duration_ms: timing.duration_ms,
        build_level,
        node_type: timing.node_type,
        repeat_count: timing.repeat_count,
        auto_reverse: timing.auto_reverse,
        inherited_from: None,
    }
}

fn raw_effect(doc: &XmlDocument, node: &TimingNode) -> RawEffect {
    let (shape_id, _) = classify::resolve_target(doc, node.target);
    let effect_type = doc
        .first_descendant(node.container, &P::animEffect())
        .and_then(|e| doc.attr(e, "transition").or_else(|| doc.attr(e, "type")))
        .unwrap_or("unknown");
    let cond = doc.first_descendant(node.container, &P::cond());
    let cond_attr = |name: &str, default: &str| {
        cond.and_then(|c| doc.attr(c, name))
            .unwrap_or(default)
            .to_string()
    };

    RawEffect {
        sequence_id: node.sequence_id.clone(),
        effect_id: node.effect_id.clone(),
        shape_id,
        effect_type: effect_type.to_string(),
        trigger: cond_attr("evt", "unknown"),
        delay: cond_attr("delay", "0"),
        duration: doc
            .attr(node.container, "dur")
            .unwrap_or("unknown")
            .to_string(),
    }
}
