//! Natural-language rendering of effects and per-slide summaries.
//!
//! Output is deterministic: the same effect and shape table always give
//! the same text.

use super::timing::INDEFINITE;
use super::types::{AnimationEffect, EffectDirection, EffectDuration, EffectType, StartCondition};
use crate::pml::shapes::ShapeSummary;
use crate::util::single_line;
use indexmap::IndexMap;
use std::collections::BTreeSet;

pub const NO_ANIMATIONS: &str = "This slide has no animations.";

/// Describes one effect: an optional inheritance marker, the timing
/// sentence, then the subject/action sentence.
pub fn describe_effect(effect: &AnimationEffect, shapes: &IndexMap<String, ShapeSummary>) -> String {
    let mut sentences = vec![timing_sentence(effect)];

    let mut action = format!("{} {}", subject(effect, shapes), action_phrase(effect));
    if let Some(direction) = effect.effect_direction.as_ref().and_then(direction_clause) {
        action.push(' ');
        action.push_str(&direction);
    }
    action.push('.');
    sentences.push(action);

    let body = sentences.join(" ");
    match &effect.inherited_from {
        Some(source) => format!("(Inherited from {}) {}", source, body),
        None => body,
    }
}

fn subject(effect: &AnimationEffect, shapes: &IndexMap<String, ShapeSummary>) -> String {
    let mut subject = match shapes.get(&effect.target_shape_id) {
        Some(shape) if !shape.text.is_empty() => {
            format!(
                "The {} containing \"{}\"",
                shape.kind.noun(),
                single_line(&shape.text)
            )
        }
        Some(shape) if !shape.name.is_empty() => {
            format!("The {} \"{}\"", shape.kind.noun(), shape.name)
        }
        Some(shape) => format!("The {}", shape.kind.noun()),
        None if effect.target_shape_id == "unknown" => "An unidentified element".to_string(),
        None => format!("The element with ID {}", effect.target_shape_id),
    };

    if let Some(level) = effect.build_level {
        let (start, end) = (level.start + 1, level.end + 1);
        if start == end {
            subject.push_str(&format!(" (paragraph {})", start));
        } else {
            subject.push_str(&format!(" (paragraphs {}-{})", start, end));
        }
    }
    subject
}

fn action_phrase(effect: &AnimationEffect) -> String {
    let subtype = effect.effect_subtype.as_deref();
    let fixed = match (&effect.effect_type, subtype) {
        (EffectType::Entrance, None | Some("appear")) => "appears",
        (EffectType::Entrance, Some("fade")) => "fades into view",
        (EffectType::Entrance, Some("fly")) => "flies in",
        (EffectType::Entrance, Some("wipe")) => "wipes into view",
        (EffectType::Entrance, Some("zoom")) => "zooms into view",
        (EffectType::Entrance, Some("dissolve")) => "dissolves into view",
        (EffectType::Entrance, Some("split")) => "splits into view",
        (EffectType::Entrance, Some("wheel")) => "wheels into view",
        (EffectType::Entrance, Some("bounce")) => "bounces into view",
        (EffectType::Entrance, Some("stretch")) => "stretches into view",
        (EffectType::Exit, None | Some("appear")) => "disappears",
        (EffectType::Exit, Some("fade")) => "fades out of view",
        (EffectType::Exit, Some("fly")) => "flies out",
        (EffectType::Exit, Some("wipe")) => "wipes out of view",
        (EffectType::Exit, Some("zoom")) => "zooms out of view",
        (EffectType::Exit, Some("dissolve")) => "dissolves out of view",
        (EffectType::Emphasis, None) => "is emphasized",
        (EffectType::Emphasis, Some("color")) => "changes color",
        (EffectType::Emphasis, Some("fontColor")) => "changes font color",
        (EffectType::Emphasis, Some("grow-shrink")) => "grows or shrinks",
        (EffectType::Emphasis, Some("spin")) => "spins",
        (EffectType::Emphasis, Some("transparency")) => "changes transparency",
        (EffectType::Motion, _) => "moves along a motion path",
        (EffectType::Entrance, Some(other)) => return format!("enters with a {} effect", other),
        (EffectType::Exit, Some(other)) => return format!("exits with a {} effect", other),
        (EffectType::Emphasis, Some(other)) => {
            return format!("is emphasized with a {} effect", other)
        }
        (EffectType::Other(kind), Some(other)) => {
            return format!("plays a {} animation ({})", kind, other)
        }
        (EffectType::Other(kind), None) => return format!("plays a {} animation", kind),
    };
    fixed.to_string()
}

fn direction_clause(direction: &EffectDirection) -> Option<String> {
    match direction {
        EffectDirection::Named(name) => Some(named_direction(name)),
        EffectDirection::Color(value) => Some(color_clause(value)),
        EffectDirection::Scale { x, y } => Some(scale_clause(x, y)),
        EffectDirection::CustomPath => Some("following a custom path".to_string()),
    }
}

fn named_direction(name: &str) -> String {
    let phrase = match name {
        "fromTop" => "from the top",
        "fromBottom" => "from the bottom",
        "fromLeft" => "from the left",
        "fromRight" => "from the right",
        "fromTopLeft" => "from the top left",
        "fromTopRight" => "from the top right",
        "fromBottomLeft" => "from the bottom left",
        "fromBottomRight" => "from the bottom right",
        "up" => "upward",
        "down" => "downward",
        "left" => "to the left",
        "right" => "to the right",
        "in" => "inward",
        "out" => "outward",
        "horizontal" => "horizontally",
        "vertical" => "vertically",
        "inHorizontal" => "inward horizontally",
        "outHorizontal" => "outward horizontally",
        "inVertical" => "inward vertically",
        "outVertical" => "outward vertically",
        other => return format!("in the \"{}\" direction", other),
    };
    phrase.to_string()
}

fn color_clause(value: &str) -> String {
    let is_hex = value.len() == 6 && value.chars().all(|c| c.is_ascii_hexdigit());
    if is_hex {
        format!("to #{}", value.to_ascii_uppercase())
    } else {
        format!("to the {} color", value)
    }
}

fn scale_clause(x: &str, y: &str) -> String {
    match (scale_ratio(x), scale_ratio(y)) {
        (Some(rx), Some(ry)) => format!(
            "to {} times its width and {} times its height",
            format_ratio(rx),
            format_ratio(ry)
        ),
        _ => format!("with scale factors {} and {}", x, y),
    }
}

/// Parts-per-100000 to a decimal ratio.
pub fn scale_ratio(raw: &str) -> Option<f64> {
    raw.trim().parse::<i64>().ok().map(|v| v as f64 / 100_000.0)
}

fn format_ratio(ratio: f64) -> String {
    let text = format!("{:.2}", ratio);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn timing_sentence(effect: &AnimationEffect) -> String {
    let mut clauses = vec![match effect.start_condition {
        StartCondition::OnClick => "This animation starts when the presenter clicks".to_string(),
        StartCondition::WithPrevious => {
            "This animation starts together with the previous animation".to_string()
        }
        StartCondition::AfterPrevious => {
            "This animation starts after the previous animation finishes".to_string()
        }
    }];

    if effect.delay_ms > 0 {
        clauses.push(format!("after a delay of {}", format_delay(effect.delay_ms)));
    }
    match effect.duration_ms {
        EffectDuration::Millis(0) => clauses.push("completing instantly".to_string()),
        EffectDuration::Millis(ms) => {
            clauses.push(format!("taking {} to complete", format_duration(ms)))
        }
        EffectDuration::Unknown => {}
    }
    if let Some(repeat) = repeat_clause(&effect.repeat_count) {
        clauses.push(repeat);
    }
    if effect.auto_reverse {
        clauses.push("then reversing back to its original state".to_string());
    }

    format!("{}.", clauses.join(", "))
}

/// Whole milliseconds below one second, else seconds with one decimal.
pub fn format_delay(ms: u64) -> String {
    if ms >= 1000 {
        format_seconds(ms)
    } else {
        format!("{} milliseconds", ms)
    }
}

/// Seconds with one decimal.
pub fn format_duration(ms: u64) -> String {
    format_seconds(ms)
}

fn format_seconds(ms: u64) -> String {
    format!("{:.1} seconds", ms as f64 / 1000.0)
}

fn repeat_clause(repeat: &str) -> Option<String> {
    if repeat == INDEFINITE {
        return Some("repeating continuously".to_string());
    }
    // Stored in thousandths of a repetition.
    let times = match repeat.parse::<u64>() {
        Ok(n) => n as f64 / 1000.0,
        Err(_) => return Some(format!("repeating {} times", repeat)),
    };
    (times > 1.0).then(|| format!("repeating {} times", times))
}

/// Narrative summary over a slide's effect list.
pub fn summarize(effects: &[AnimationEffect]) -> String {
    let total = effects.len();
    if total == 0 {
        return NO_ANIMATIONS.to_string();
    }

    let inherited = effects.iter().filter(|e| e.inherited_from.is_some()).count();
    let direct = total - inherited;
    let sources: BTreeSet<&str> = effects
        .iter()
        .filter_map(|e| e.inherited_from.as_deref())
        .collect();
    let source_list = sources.into_iter().collect::<Vec<_>>().join(", ");

    let mut sentences = vec![format!(
        "This slide has {} animation{}.",
        total,
        plural(total)
    )];

    sentences.push(if inherited == 0 {
        if total == 1 {
            "It is defined directly on the slide.".to_string()
        } else {
            "All of them are defined directly on the slide.".to_string()
        }
    } else if direct == 0 {
        if total == 1 {
            format!("It is inherited from {}.", source_list)
        } else {
            format!("All of them are inherited from {}.", source_list)
        }
    } else {
        format!(
            "{} {} defined directly on the slide and {} {} inherited from {}.",
            direct,
            if direct == 1 { "is" } else { "are" },
            inherited,
            if inherited == 1 { "is" } else { "are" },
            source_list
        )
    });

    let sequences: BTreeSet<(Option<&str>, usize)> = effects
        .iter()
        .map(|e| (e.inherited_from.as_deref(), e.sequence_index))
        .collect();
    sentences.push(if sequences.len() > 1 {
        format!(
            "The animations are organized into {} independent sequences.",
            sequences.len()
        )
    } else if total == 1 {
        "It plays as part of a single timeline.".to_string()
    } else {
        "They play as a single timeline.".to_string()
    });

    let clicks = effects
        .iter()
        .filter(|e| e.start_condition == StartCondition::OnClick)
        .count();
    if clicks > 0 {
        sentences.push(format!(
            "The presenter advances through {} with {} click{}.",
            if total == 1 { "it" } else { "them" },
            clicks,
            plural(clicks)
        ));
    }

    sentences.join(" ")
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
