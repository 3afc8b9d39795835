use super::namespaces::prefix_for;
use std::fmt;

/// Namespace-resolved element or attribute name. Prefixes are gone by the
/// time a name is built, so `p:cTn` and `x:cTn` bound to the same URI are
/// equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct XName {
    pub namespace: Option<String>,
    pub local_name: String,
}

impl XName {
    /// An empty `namespace` means no namespace.
    pub fn new(namespace: &str, local_name: &str) -> Self {
        Self {
            namespace: (!namespace.is_empty()).then(|| namespace.to_string()),
            local_name: local_name.to_string(),
        }
    }

    pub fn local(local_name: &str) -> Self {
        Self::new("", local_name)
    }

    pub fn is_unqualified(&self, local_name: &str) -> bool {
        self.namespace.is_none() && self.local_name == local_name
    }
}

/// `p:cTn` for registered namespaces, Clark notation (`{uri}name`)
/// otherwise.
impl fmt::Display for XName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namespace.as_deref() {
            Some(ns) => match prefix_for(ns) {
                Some(prefix) => write!(f, "{}:", prefix)?,
                None => write!(f, "{{{}}}", ns)?,
            },
            None => {}
        }
        f.write_str(&self.local_name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XAttribute {
    pub name: XName,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PML: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

    #[test]
    fn registered_namespaces_display_with_prefix() {
        assert_eq!(XName::new(PML, "cTn").to_string(), "p:cTn");
        assert_eq!(XName::local("spid").to_string(), "spid");
    }

    #[test]
    fn unregistered_namespaces_display_in_clark_notation() {
        assert_eq!(XName::new("urn:x", "item").to_string(), "{urn:x}item");
    }

    #[test]
    fn empty_namespace_is_unqualified() {
        let name = XName::new("", "spid");
        assert_eq!(name, XName::local("spid"));
        assert!(name.is_unqualified("spid"));
        assert!(!XName::new(PML, "spid").is_unqualified("spid"));
    }
}
