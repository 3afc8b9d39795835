use crate::xml::{XmlDocument, P, P14};

pub const NO_TRANSITION: &str = "None";

/// Short descriptor of the slide transition, e.g.
/// `fade (speed: med) (duration: 700 ms), advances after 3000 ms`.
pub fn describe_transition(doc: &XmlDocument) -> String {
    let Some(transition) = doc
        .root()
        .and_then(|root| doc.first_descendant(root, &P::transition()))
    else {
        return NO_TRANSITION.to_string();
    };

    let effect = doc
        .element_children(transition)
        .filter_map(|child| doc.name(child))
        .map(|name| name.local_name.as_str())
        .find(|local| !matches!(*local, "sndAc" | "extLst"))
        .unwrap_or("cut");

    let mut descriptor = effect.to_string();
    if let Some(speed) = doc.attr(transition, "spd") {
        descriptor.push_str(&format!(" (speed: {})", speed));
    }
    let duration = doc
        .attr_ns(transition, &P14::dur())
        .or_else(|| doc.attr(transition, "dur"))
        .and_then(|d| d.trim().parse::<u64>().ok());
    if let Some(ms) = duration {
        descriptor.push_str(&format!(" (duration: {} ms)", ms));
    }
    if let Some(advance) = doc
        .attr(transition, "advTm")
        .and_then(|t| t.trim().parse::<u64>().ok())
    {
        descriptor.push_str(&format!(", advances after {} ms", advance));
    }
    descriptor
}
