use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Broad effect family. `Other` keeps a literal transition token the
/// classifier could not map.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EffectType {
    Entrance,
    Exit,
    Emphasis,
    Motion,
    Other(String),
}

impl EffectType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Entrance => "entrance",
            Self::Exit => "exit",
            Self::Emphasis => "emphasis",
            Self::Motion => "motion",
            Self::Other(value) => value,
        }
    }

    /// Maps an `animEffect@transition` value (`in` / `out`); anything else
    /// is kept literally.
    pub fn from_transition(value: &str) -> Self {
        match value {
            "in" => Self::Entrance,
            "out" => Self::Exit,
            other => Self::parse(other),
        }
    }

    /// Maps a `cTn@presetClass` value. Empty strings carry no class.
    pub fn from_preset_class(value: &str) -> Option<Self> {
        match value {
            "" => None,
            "entr" => Some(Self::Entrance),
            "exit" => Some(Self::Exit),
            "emph" => Some(Self::Emphasis),
            "path" => Some(Self::Motion),
            other => Some(Self::Other(other.to_string())),
        }
    }

    fn parse(value: &str) -> Self {
        match value {
            "entrance" => Self::Entrance,
            "exit" => Self::Exit,
            "emphasis" => Self::Emphasis,
            "motion" => Self::Motion,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for EffectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EffectType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EffectType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

/// Direction modifier. Serialized as the compact token form
/// (`fromBottom`, `to_color_FF0000`, `scale_x150000_y150000`, `custom_path`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectDirection {
    Named(String),
    /// Destination color value as stored (hex or scheme name).
    Color(String),
    /// Raw parts-per-100000 scale factors.
    Scale { x: String, y: String },
    CustomPath,
}

impl EffectDirection {
    pub fn token(&self) -> String {
        match self {
            Self::Named(name) => name.clone(),
            Self::Color(value) => format!("to_color_{}", value),
            Self::Scale { x, y } => format!("scale_x{}_y{}", x, y),
            Self::CustomPath => "custom_path".to_string(),
        }
    }

    pub fn from_token(token: &str) -> Self {
        if token == "custom_path" {
            return Self::CustomPath;
        }
        if let Some(color) = token.strip_prefix("to_color_") {
            return Self::Color(color.to_string());
        }
        if let Some(rest) = token.strip_prefix("scale_x") {
            if let Some((x, y)) = rest.split_once("_y") {
                return Self::Scale {
                    x: x.to_string(),
                    y: y.to_string(),
                };
            }
        }
        Self::Named(token.to_string())
    }
}

impl Serialize for EffectDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.token())
    }
}

impl<'de> Deserialize<'de> for EffectDirection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Self::from_token(&token))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StartCondition {
    #[default]
    OnClick,
    WithPrevious,
    AfterPrevious,
}

/// Effect duration. `Unknown` is distinct from a zero-length effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectDuration {
    Millis(u64),
    #[default]
    Unknown,
}

impl EffectDuration {
    pub fn millis(&self) -> Option<u64> {
        match self {
            Self::Millis(ms) => Some(*ms),
            Self::Unknown => None,
        }
    }
}

impl Serialize for EffectDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Millis(ms) => serializer.serialize_u64(*ms),
            Self::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

impl<'de> Deserialize<'de> for EffectDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Millis(u64),
            Token(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Millis(ms) => Self::Millis(ms),
            Repr::Token(token) => token.parse().map(Self::Millis).unwrap_or(Self::Unknown),
        })
    }
}

/// Zero-based paragraph range, as stored in `p:pRg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildLevel {
    pub start: u32,
    pub end: u32,
}

impl BuildLevel {
    pub fn token(&self) -> String {
        format!("paragraph_{}-{}", self.start, self.end)
    }

    pub fn from_token(token: &str) -> Option<Self> {
        let (start, end) = token.strip_prefix("paragraph_")?.split_once('-')?;
        Some(Self {
            start: start.parse().ok()?,
            end: end.parse().ok()?,
        })
    }
}

impl Serialize for BuildLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.token())
    }
}

impl<'de> Deserialize<'de> for BuildLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Self::from_token(&token)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid build level '{}'", token)))
    }
}

/// One normalized animation effect on a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationEffect {
    pub sequence_id: String,
    pub effect_id: String,
    /// Zero-based position of the owning sequence in the timing tree.
    pub sequence_index: usize,
    /// Zero-based position of the effect within its sequence.
    pub effect_index: usize,
    pub target_shape_id: String,
    pub effect_type: EffectType,
    pub effect_subtype: Option<String>,
    pub effect_direction: Option<EffectDirection>,
    pub start_condition: StartCondition,
    pub delay_ms: u64,
    pub duration_ms: EffectDuration,
    pub build_level: Option<BuildLevel>,
    pub node_type: String,
    pub repeat_count: String,
    pub auto_reverse: bool,
    pub inherited_from: Option<String>,
}

/// Attribute values as found in the timing tree, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEffect {
    pub sequence_id: String,
    pub effect_id: String,
    pub shape_id: String,
    pub effect_type: String,
    pub trigger: String,
    pub delay: String,
    pub duration: String,
}

/// An effect with its rendered description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationDetail {
    #[serde(flatten)]
    pub effect: AnimationEffect,
    pub description: String,
}
