#![allow(non_snake_case)]

use super::xname::XName;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Conventional prefixes of the vocabularies a presentation uses.
static PREFIXES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("a", A::NS),
        ("p", P::NS),
        ("r", R::NS),
        ("p14", P14::NS),
        ("mc", MC::NS),
    ])
});

pub fn namespace_uri(prefix: &str) -> Option<&'static str> {
    PREFIXES.get(prefix).copied()
}

pub fn prefix_for(uri: &str) -> Option<&'static str> {
    PREFIXES
        .iter()
        .find(|(_, &ns)| ns == uri)
        .map(|(&prefix, _)| prefix)
}

pub mod P {
    use super::XName;
    pub const NS: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

    pub fn presentation() -> XName { XName::new(NS, "presentation") }
    pub fn sldIdLst() -> XName { XName::new(NS, "sldIdLst") }
    pub fn sldId() -> XName { XName::new(NS, "sldId") }
    pub fn sld() -> XName { XName::new(NS, "sld") }
    pub fn cSld() -> XName { XName::new(NS, "cSld") }
    pub fn spTree() -> XName { XName::new(NS, "spTree") }
    pub fn sp() -> XName { XName::new(NS, "sp") }
    pub fn pic() -> XName { XName::new(NS, "pic") }
    pub fn graphicFrame() -> XName { XName::new(NS, "graphicFrame") }
    pub fn grpSp() -> XName { XName::new(NS, "grpSp") }
    pub fn cxnSp() -> XName { XName::new(NS, "cxnSp") }
    pub fn cNvPr() -> XName { XName::new(NS, "cNvPr") }
    pub fn cNvSpPr() -> XName { XName::new(NS, "cNvSpPr") }
    pub fn nvPr() -> XName { XName::new(NS, "nvPr") }
    pub fn ph() -> XName { XName::new(NS, "ph") }
    pub fn txBody() -> XName { XName::new(NS, "txBody") }

    // Timing tree
    pub fn timing() -> XName { XName::new(NS, "timing") }
    pub fn tnLst() -> XName { XName::new(NS, "tnLst") }
    pub fn par() -> XName { XName::new(NS, "par") }
    pub fn seq() -> XName { XName::new(NS, "seq") }
    pub fn excl() -> XName { XName::new(NS, "excl") }
    pub fn cTn() -> XName { XName::new(NS, "cTn") }
    pub fn childTnLst() -> XName { XName::new(NS, "childTnLst") }
    pub fn stCondLst() -> XName { XName::new(NS, "stCondLst") }
    pub fn cond() -> XName { XName::new(NS, "cond") }
    pub fn tn() -> XName { XName::new(NS, "tn") }
    pub fn tgtEl() -> XName { XName::new(NS, "tgtEl") }
    pub fn spTgt() -> XName { XName::new(NS, "spTgt") }
    pub fn txEl() -> XName { XName::new(NS, "txEl") }
    pub fn pRg() -> XName { XName::new(NS, "pRg") }
    pub fn cBhvr() -> XName { XName::new(NS, "cBhvr") }
    pub fn animEffect() -> XName { XName::new(NS, "animEffect") }
    pub fn animClr() -> XName { XName::new(NS, "animClr") }
    pub fn animMotion() -> XName { XName::new(NS, "animMotion") }
    pub fn animScale() -> XName { XName::new(NS, "animScale") }
    pub fn to() -> XName { XName::new(NS, "to") }
    pub fn by() -> XName { XName::new(NS, "by") }

    pub fn transition() -> XName { XName::new(NS, "transition") }
}

pub mod A {
    use super::XName;
    pub const NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

    pub fn p() -> XName { XName::new(NS, "p") }
    pub fn r() -> XName { XName::new(NS, "r") }
    pub fn t() -> XName { XName::new(NS, "t") }
    pub fn fld() -> XName { XName::new(NS, "fld") }
    pub fn br() -> XName { XName::new(NS, "br") }
    pub fn graphic() -> XName { XName::new(NS, "graphic") }
    pub fn graphicData() -> XName { XName::new(NS, "graphicData") }
    pub fn srgbClr() -> XName { XName::new(NS, "srgbClr") }
    pub fn schemeClr() -> XName { XName::new(NS, "schemeClr") }
    pub fn prstClr() -> XName { XName::new(NS, "prstClr") }
    pub fn videoFile() -> XName { XName::new(NS, "videoFile") }
    pub fn audioFile() -> XName { XName::new(NS, "audioFile") }
}

pub mod R {
    use super::XName;
    pub const NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

    pub fn id() -> XName { XName::new(NS, "id") }
}

pub mod P14 {
    use super::XName;
    pub const NS: &str = "http://schemas.microsoft.com/office/powerpoint/2010/main";

    pub fn dur() -> XName { XName::new(NS, "dur") }
}

pub mod MC {
    pub const NS: &str = "http://schemas.openxmlformats.org/markup-compatibility/2006";
}

/// Package relationship parts (`_rels/*.rels`).
pub mod PR {
    use super::XName;
    pub const NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

    pub fn Relationships() -> XName { XName::new(NS, "Relationships") }
    pub fn Relationship() -> XName { XName::new(NS, "Relationship") }
}

/// Graphic frame payload URIs (`a:graphicData@uri`).
pub mod graphic_data {
    pub const TABLE: &str = "http://schemas.openxmlformats.org/drawingml/2006/table";
    pub const CHART: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";
    pub const DIAGRAM: &str = "http://schemas.openxmlformats.org/drawingml/2006/diagram";
}
