//! Start condition, delay, duration and repeat settings of one effect.

use super::types::{EffectDuration, StartCondition};
use crate::xml::{XmlDocument, P};
use indextree::NodeId;
use tracing::debug;

pub const INDEFINITE: &str = "indefinite";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingInfo {
    pub start_condition: StartCondition,
    pub delay_ms: u64,
    pub duration_ms: EffectDuration,
    pub repeat_count: String,
    pub auto_reverse: bool,
    pub node_type: String,
}

/// Resolves timing for an effect container. Each field falls back to its
/// own default independently.
pub fn resolve(doc: &XmlDocument, container: NodeId) -> TimingInfo {
    let conditions: Vec<NodeId> = doc
        .first_child(container, &P::stCondLst())
        .map(|list| doc.elements_by_name(list, &P::cond()).collect())
        .unwrap_or_default();

    let node_type = doc.attr(container, "nodeType");

    TimingInfo {
        start_condition: start_condition(doc, &conditions, node_type),
        delay_ms: conditions
            .first()
            .and_then(|&cond| doc.attr(cond, "delay"))
            .map(parse_delay)
            .unwrap_or(0),
        duration_ms: duration(doc, container),
        repeat_count: doc.attr(container, "repeatCount").unwrap_or("1").to_string(),
        auto_reverse: matches!(doc.attr(container, "autoRev"), Some("1" | "true")),
        node_type: node_type.unwrap_or("mainSeq").to_string(),
    }
}

fn start_condition(
    doc: &XmlDocument,
    conditions: &[NodeId],
    node_type: Option<&str>,
) -> StartCondition {
    let event = |names: &[&str]| {
        conditions
            .iter()
            .any(|&c| doc.attr(c, "evt").map(|e| names.contains(&e)).unwrap_or(false))
    };

    if event(&["onBegin", "begin"]) {
        return StartCondition::WithPrevious;
    }
    if event(&["onClick", "click"]) {
        return StartCondition::OnClick;
    }
    if conditions
        .iter()
        .any(|&c| doc.attr(c, "delay") == Some(INDEFINITE))
    {
        return StartCondition::OnClick;
    }
    let follows_previous = conditions.iter().any(|&c| {
        doc.first_child(c, &P::tn()).map_or(false, |tn| {
            doc.attr(tn, "val") == Some(INDEFINITE) || doc.attr(c, "evt") == Some("onEnd")
        })
    });
    if follows_previous {
        return StartCondition::AfterPrevious;
    }

    match node_type {
        Some("withEffect") => StartCondition::WithPrevious,
        Some("afterEffect") => StartCondition::AfterPrevious,
        _ => StartCondition::OnClick,
    }
}

/// Numeric delay in milliseconds; anything else is zero.
pub fn parse_delay(value: &str) -> u64 {
    match value.trim().parse::<u64>() {
        Ok(ms) => ms,
        Err(_) => {
            if value != INDEFINITE {
                debug!(value, "non-numeric delay");
            }
            0
        }
    }
}

/// Numeric duration in milliseconds; anything else is `Unknown`.
pub fn parse_duration(value: &str) -> EffectDuration {
    value
        .trim()
        .parse::<u64>()
        .map(EffectDuration::Millis)
        .unwrap_or(EffectDuration::Unknown)
}

/// The container's own `dur`, else the longest numeric behavior duration.
fn duration(doc: &XmlDocument, container: NodeId) -> EffectDuration {
    if let Some(dur) = doc.attr(container, "dur") {
        return parse_duration(dur);
    }

    let behavior_ctn = P::cTn();
    doc.first_child(container, &P::childTnLst())
        .into_iter()
        .flat_map(|list| doc.descendants_named(list, &behavior_ctn))
        .filter_map(|ctn| doc.attr(ctn, "dur")?.trim().parse::<u64>().ok())
        .max()
        .map(EffectDuration::Millis)
        .unwrap_or(EffectDuration::Unknown)
}
