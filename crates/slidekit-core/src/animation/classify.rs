//! Effect classification: type, subtype and direction of one effect container.

use super::types::{BuildLevel, EffectDirection, EffectType};
use crate::xml::{XmlDocument, A, P};
use indextree::NodeId;
use tracing::debug;

/// Unit scale in `p:animScale` (parts per 100000).
pub const SCALE_UNIT: &str = "100000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub effect_type: EffectType,
    pub effect_subtype: Option<String>,
    pub effect_direction: Option<EffectDirection>,
}

impl Classification {
    fn appear() -> Self {
        Self {
            effect_type: EffectType::Entrance,
            effect_subtype: None,
            effect_direction: None,
        }
    }
}

/// The behavior element that decides classification. Variants are listed
/// in precedence order.
enum Behavior {
    Effect(NodeId),
    Color(NodeId),
    Motion(NodeId),
    Scale(NodeId),
    Unrecognized,
}

impl Behavior {
    fn detect(doc: &XmlDocument, container: NodeId) -> Self {
        if let Some(node) = doc.first_descendant(container, &P::animEffect()) {
            Self::Effect(node)
        } else if let Some(node) = doc.first_descendant(container, &P::animClr()) {
            Self::Color(node)
        } else if let Some(node) = doc.first_descendant(container, &P::animMotion()) {
            Self::Motion(node)
        } else if let Some(node) = doc.first_descendant(container, &P::animScale()) {
            Self::Scale(node)
        } else {
            Self::Unrecognized
        }
    }
}

/// Preset attributes PowerPoint writes on the effect `p:cTn`.
#[derive(Debug, Default)]
struct Preset {
    class: Option<EffectType>,
    id: Option<u32>,
    subtype: Option<u32>,
}

impl Preset {
    fn read(doc: &XmlDocument, container: NodeId) -> Self {
        Self {
            class: doc
                .attr(container, "presetClass")
                .and_then(EffectType::from_preset_class),
            id: doc.attr(container, "presetID").and_then(|v| v.parse().ok()),
            subtype: doc.attr(container, "presetSubtype").and_then(|v| v.parse().ok()),
        }
    }

    fn subtype_name(&self) -> Option<&'static str> {
        let class = self.class.as_ref()?;
        preset_name(class, self.id?)
    }

    fn direction(&self) -> Option<EffectDirection> {
        // Only the directional entrance/exit presets encode a compass point.
        match (self.class.as_ref()?, self.id?) {
            (EffectType::Entrance | EffectType::Exit, 2 | 7 | 12) => {
                compass_direction(self.subtype?).map(|d| EffectDirection::Named(d.to_string()))
            }
            _ => None,
        }
    }
}

fn preset_name(class: &EffectType, id: u32) -> Option<&'static str> {
    let name = match (class, id) {
        (EffectType::Entrance | EffectType::Exit, id) => match id {
            1 => "appear",
            2 => "fly",
            3 => "blinds",
            4 => "box",
            5 => "checkerboard",
            6 => "circle",
            7 => "crawl",
            8 => "diamond",
            9 => "dissolve",
            10 => "fade",
            12 => "peek",
            13 => "plus",
            14 => "randomBars",
            16 => "split",
            17 => "stretch",
            18 => "strips",
            21 => "wheel",
            22 => "wipe",
            23 => "zoom",
            26 => "bounce",
            _ => return None,
        },
        (EffectType::Emphasis, id) => match id {
            1 => "color",
            3 => "fontColor",
            6 => "grow-shrink",
            8 => "spin",
            9 => "transparency",
            _ => return None,
        },
        (EffectType::Motion, _) => "path",
        (EffectType::Other(_), _) => return None,
    };
    Some(name)
}

fn compass_direction(subtype: u32) -> Option<&'static str> {
    Some(match subtype {
        1 => "fromTop",
        2 => "fromRight",
        3 => "fromTopRight",
        4 => "fromBottom",
        6 => "fromBottomRight",
        8 => "fromLeft",
        9 => "fromTopLeft",
        12 => "fromBottomLeft",
        _ => return None,
    })
}

/// Classifies one effect container (`p:cTn`). First matching behavior wins.
pub fn classify(doc: &XmlDocument, container: NodeId) -> Classification {
    let preset = Preset::read(doc, container);

    match Behavior::detect(doc, container) {
        Behavior::Effect(node) => {
            let effect_type = match doc.attr(node, "transition") {
                Some(transition) => EffectType::from_transition(transition),
                None => preset
                    .class
                    .clone()
                    .unwrap_or_else(|| EffectType::Other("unknown".to_string())),
            };
            let (subtype, direction) = match doc.attr(node, "filter").and_then(parse_filter) {
                Some((name, param)) => (Some(name), param.map(EffectDirection::Named)),
                None => (
                    preset.subtype_name().map(str::to_string),
                    preset.direction(),
                ),
            };
            Classification {
                effect_type,
                effect_subtype: subtype,
                effect_direction: direction,
            }
        }
        Behavior::Color(node) => Classification {
            effect_type: EffectType::Emphasis,
            effect_subtype: Some("color".to_string()),
            effect_direction: destination_color(doc, node).map(EffectDirection::Color),
        },
        Behavior::Motion(node) => Classification {
            effect_type: EffectType::Motion,
            effect_subtype: Some("path".to_string()),
            effect_direction: doc
                .attr(node, "path")
                .filter(|path| !path.trim().is_empty())
                .map(|_| EffectDirection::CustomPath),
        },
        Behavior::Scale(node) => Classification {
            effect_type: EffectType::Emphasis,
            effect_subtype: Some("grow-shrink".to_string()),
            effect_direction: scale_factors(doc, node),
        },
        Behavior::Unrecognized => match preset.class.clone() {
            Some(effect_type) => Classification {
                effect_subtype: preset.subtype_name().map(str::to_string),
                effect_direction: preset.direction(),
                effect_type,
            },
            None => Classification::appear(),
        },
    }
}

/// Splits `name` or `name(param)`.
pub fn parse_filter(filter: &str) -> Option<(String, Option<String>)> {
    let filter = filter.trim();
    if filter.is_empty() {
        return None;
    }
    match filter.split_once('(') {
        Some((name, rest)) => {
            let param = rest.trim_end_matches(')').trim();
            let param = (!param.is_empty()).then(|| param.to_string());
            Some((name.trim().to_string(), param))
        }
        None => Some((filter.to_string(), None)),
    }
}

fn destination_color(doc: &XmlDocument, anim_clr: NodeId) -> Option<String> {
    let to = doc.first_child(anim_clr, &P::to())?;
    [A::srgbClr(), A::schemeClr(), A::prstClr()]
        .iter()
        .find_map(|name| doc.first_child(to, name))
        .and_then(|color| doc.attr(color, "val"))
        .map(str::to_string)
}

fn scale_factors(doc: &XmlDocument, anim_scale: NodeId) -> Option<EffectDirection> {
    let node = doc
        .first_child(anim_scale, &P::by())
        .or_else(|| doc.first_child(anim_scale, &P::to()))?;
    let x = doc.attr(node, "x").unwrap_or(SCALE_UNIT);
    let y = doc.attr(node, "y").unwrap_or(SCALE_UNIT);
    Some(EffectDirection::Scale {
        x: x.to_string(),
        y: y.to_string(),
    })
}

/// Shape id and paragraph range named by a `p:tgtEl`.
pub fn resolve_target(doc: &XmlDocument, target: NodeId) -> (String, Option<BuildLevel>) {
    let Some(sp_tgt) = doc.first_child(target, &P::spTgt()) else {
        debug!("target element is not a shape target");
        return ("unknown".to_string(), None);
    };
    let shape_id = doc.attr(sp_tgt, "spid").unwrap_or("unknown").to_string();

    let build_level = doc
        .first_child(sp_tgt, &P::txEl())
        .and_then(|tx| doc.first_child(tx, &P::pRg()))
        .and_then(|range| {
            let start = doc.attr(range, "st")?.parse().ok()?;
            let end = doc.attr(range, "end")?.parse().ok()?;
            Some(BuildLevel { start, end })
        });

    (shape_id, build_level)
}
