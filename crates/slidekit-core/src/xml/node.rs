use super::xname::{XAttribute, XName};

/// Payload of one arena node. Comments and processing instructions are
/// dropped at parse time; CDATA arrives as text.
#[derive(Clone, Debug)]
pub enum XmlNodeData {
    Element {
        name: XName,
        attributes: Vec<XAttribute>,
    },
    Text(String),
}

impl XmlNodeData {
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element { .. })
    }

    pub fn name(&self) -> Option<&XName> {
        match self {
            Self::Element { name, .. } => Some(name),
            Self::Text(_) => None,
        }
    }

    pub fn attributes(&self) -> &[XAttribute] {
        match self {
            Self::Element { attributes, .. } => attributes,
            Self::Text(_) => &[],
        }
    }

    /// Value of the attribute matching `pred`.
    pub fn attribute_where(&self, pred: impl Fn(&XName) -> bool) -> Option<&str> {
        self.attributes()
            .iter()
            .find(|attr| pred(&attr.name))
            .map(|attr| attr.value.as_str())
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element { .. } => None,
        }
    }
}
