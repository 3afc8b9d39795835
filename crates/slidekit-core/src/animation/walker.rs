//! Walks the `p:timing` tree of a slide, layout or master part.
//!
//! Shape of a saved timing tree:
//!
//! ```text
//! p:timing/p:tnLst/p:par            (cTn nodeType="tmRoot")
//!   p:childTnLst/p:seq              (cTn nodeType="mainSeq")   <- sequence
//!     p:childTnLst/p:par            click group
//!       p:childTnLst/p:par          with/after group
//!         p:childTnLst/p:par        (cTn presetClass=...)      <- effect
//! ```
//!
//! Trees without a `tmRoot` wrapper treat each top-level `p:par` as a
//! sequence. Grouping levels between a sequence and its effects are
//! flattened in document order.

use crate::xml::{XmlDocument, P};
use indextree::NodeId;
use tracing::debug;

/// One effect container found in the timing tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingNode {
    pub sequence_index: usize,
    pub effect_index: usize,
    pub sequence_id: String,
    pub effect_id: String,
    /// The effect's `p:cTn`.
    pub container: NodeId,
    /// The effect's `p:tgtEl`.
    pub target: NodeId,
}

struct SequenceCursor {
    index: usize,
    id: String,
    pending: Vec<NodeId>,
    next_effect: usize,
}

/// Lazy, document-ordered iterator over the effects of one part.
pub struct TimingTreeWalker<'a> {
    doc: &'a XmlDocument,
    sequences: std::iter::Enumerate<std::vec::IntoIter<NodeId>>,
    current: Option<SequenceCursor>,
}

impl<'a> TimingTreeWalker<'a> {
    pub fn new(doc: &'a XmlDocument) -> Self {
        Self {
            doc,
            sequences: find_sequences(doc).into_iter().enumerate(),
            current: None,
        }
    }

    /// True when the part yields at least one effect.
    pub fn has_any_effect(doc: &XmlDocument) -> bool {
        TimingTreeWalker::new(doc).next().is_some()
    }

    fn open_sequence(&self, index: usize, node: NodeId) -> Option<SequenceCursor> {
        let doc = self.doc;
        let Some(ctn) = doc.first_child(node, &P::cTn()) else {
            debug!(sequence = index, "sequence has no cTn");
            return None;
        };
        let id = doc
            .attr(ctn, "id")
            .map(str::to_string)
            .unwrap_or_else(|| format!("unknown_{}", index));
        let Some(child_list) = doc.first_child(ctn, &P::childTnLst()) else {
            debug!(sequence = index, "sequence has no childTnLst");
            return None;
        };

        let mut pending: Vec<NodeId> = time_containers(doc, child_list).collect();
        pending.reverse();
        Some(SequenceCursor {
            index,
            id,
            pending,
            next_effect: 0,
        })
    }

    /// Pops containers until one is an effect with a target, expanding
    /// grouping containers in place.
    fn next_in_sequence(doc: &XmlDocument, cursor: &mut SequenceCursor) -> Option<TimingNode> {
        while let Some(node) = cursor.pending.pop() {
            let Some(ctn) = doc.first_child(node, &P::cTn()) else {
                debug!(sequence = cursor.index, "time container without cTn skipped");
                continue;
            };

            if !is_effect_container(doc, ctn) {
                if let Some(child_list) = doc.first_child(ctn, &P::childTnLst()) {
                    let children: Vec<NodeId> = time_containers(doc, child_list).collect();
                    cursor.pending.extend(children.into_iter().rev());
                }
                continue;
            }

            let effect_index = cursor.next_effect;
            cursor.next_effect += 1;

            let Some(target) = find_target(doc, node, ctn) else {
                debug!(
                    sequence = cursor.index,
                    effect = effect_index,
                    "effect has no target element"
                );
                continue;
            };

            let effect_id = doc
                .attr(ctn, "id")
                .map(str::to_string)
                .unwrap_or_else(|| format!("unknown_effect_{}", effect_index));

            return Some(TimingNode {
                sequence_index: cursor.index,
                effect_index,
                sequence_id: cursor.id.clone(),
                effect_id,
                container: ctn,
                target,
            });
        }
        None
    }
}

impl Iterator for TimingTreeWalker<'_> {
    type Item = TimingNode;

    fn next(&mut self) -> Option<TimingNode> {
        loop {
            if let Some(cursor) = self.current.as_mut() {
                if let Some(node) = Self::next_in_sequence(self.doc, cursor) {
                    return Some(node);
                }
                self.current = None;
            }

            let (index, node) = self.sequences.next()?;
            self.current = self.open_sequence(index, node);
        }
    }
}

/// Top-level sequence containers in document order.
fn find_sequences(doc: &XmlDocument) -> Vec<NodeId> {
    let Some(root) = doc.root() else {
        return Vec::new();
    };
    let Some(timing) = doc.first_descendant(root, &P::timing()) else {
        debug!("part has no timing tree");
        return Vec::new();
    };
    let Some(tn_list) = doc.first_child(timing, &P::tnLst()) else {
        debug!("timing tree has no tnLst");
        return Vec::new();
    };

    let mut sequences = Vec::new();
    for par in doc.elements_by_name(tn_list, &P::par()) {
        let root_child_list = doc
            .first_child(par, &P::cTn())
            .filter(|&ctn| doc.attr(ctn, "nodeType") == Some("tmRoot"))
            .and_then(|ctn| doc.first_child(ctn, &P::childTnLst()));

        match root_child_list {
            Some(list) => sequences.extend(time_containers(doc, list)),
            None => sequences.push(par),
        }
    }
    sequences
}

fn is_time_container(doc: &XmlDocument, node: NodeId) -> bool {
    doc.is(node, &P::par()) || doc.is(node, &P::seq()) || doc.is(node, &P::excl())
}

/// `p:par`, `p:seq` and `p:excl` children; media nodes such as `p:audio`
/// are skipped.
fn time_containers(doc: &XmlDocument, list: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    doc.element_children(list).filter(move |&child| {
        let keep = is_time_container(doc, child);
        if !keep {
            if let Some(name) = doc.name(child) {
                debug!(element = %name, "skipping non-container timing node");
            }
        }
        keep
    })
}

/// An effect carries a preset class, an `*Effect` node type, no children,
/// or behavior children. Anything else is a grouping level.
fn is_effect_container(doc: &XmlDocument, ctn: NodeId) -> bool {
    if doc.attr(ctn, "presetClass").is_some() {
        return true;
    }
    if doc
        .attr(ctn, "nodeType")
        .map(|t| t.ends_with("Effect"))
        .unwrap_or(false)
    {
        return true;
    }
    match doc.first_child(ctn, &P::childTnLst()) {
        None => true,
        Some(list) => doc
            .element_children(list)
            .any(|child| !is_time_container(doc, child)),
    }
}

/// Behavior targets win over trigger targets inside `p:stCondLst`.
fn find_target(doc: &XmlDocument, node: NodeId, ctn: NodeId) -> Option<NodeId> {
    doc.first_child(ctn, &P::childTnLst())
        .and_then(|list| doc.first_descendant(list, &P::tgtEl()))
        .or_else(|| doc.first_descendant(node, &P::tgtEl()))
}
