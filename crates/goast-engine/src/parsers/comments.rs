//! Comment grouping and attachment.
//!
//! Comments are extras in the tree-sitter grammar, so they float between
//! tokens instead of hanging off declarations. This module rebuilds Go's
//! comment groups and hands each group out at most once: as the doc of the
//! declaration, spec or field that starts on the next line, as the line
//! comment of the spec or field it trails, or finally as a free group of the
//! file.

use tree_sitter::Node;

use crate::ast::{Comment, CommentGroup, Span};

#[derive(Debug)]
struct Slot {
    group: CommentGroup,
    start_row: usize,
    end_row: usize,
    start_byte: usize,
    end_byte: usize,
    /// Started on the same line as a preceding token.
    trailing: bool,
    taken: bool,
}

/// Comment groups of one file, in source order.
#[derive(Debug, Default)]
pub struct CommentIndex {
    slots: Vec<Slot>,
}

impl CommentIndex {
    /// Group every comment under `root`. `base` shifts byte offsets into
    /// positions.
    pub fn build(root: Node, source: &[u8], base: u32) -> Self {
        let mut leaves = Vec::new();
        collect_leaves(root, &mut leaves);

        let mut slots: Vec<Slot> = Vec::new();
        let mut last_code_row: Option<usize> = None;
        // The previous significant leaf was a comment, so a group may grow.
        let mut open = false;

        for leaf in leaves {
            if leaf.kind() != "comment" {
                // Automatic-semicolon newlines and empty tokens are layout.
                if leaf.kind() == "\n" || leaf.start_byte() == leaf.end_byte() {
                    continue;
                }
                last_code_row = Some(leaf.end_position().row);
                open = false;
                continue;
            }

            let start_row = leaf.start_position().row;
            let end_row = leaf.end_position().row;
            let comment = Comment {
                span: Span::new(base + leaf.start_byte() as u32, base + leaf.end_byte() as u32),
                text: String::from_utf8_lossy(&source[leaf.byte_range()]).into_owned(),
            };

            if let Some(slot) = slots.last_mut().filter(|s| open && extends(s, start_row)) {
                slot.group.span.end = comment.span.end;
                slot.group.list.push(comment);
                slot.end_row = end_row;
                slot.end_byte = leaf.end_byte();
                continue;
            }

            slots.push(Slot {
                group: CommentGroup {
                    span: comment.span,
                    list: vec![comment],
                },
                start_row,
                end_row,
                start_byte: leaf.start_byte(),
                end_byte: leaf.end_byte(),
                trailing: last_code_row == Some(start_row),
                taken: false,
            });
            open = true;
        }

        Self { slots }
    }

    /// Take the group ending on the line right before `node` starts.
    pub fn take_doc(&mut self, node: Node) -> Option<CommentGroup> {
        let row = node.start_position().row;
        let start = node.start_byte();
        // Slots are disjoint and in source order: those ending before `start`
        // form a prefix, and only its tail can reach the previous line.
        let hi = self.slots.partition_point(|s| s.end_byte <= start);
        let lo = self.slots[..hi]
            .iter()
            .rposition(|s| s.end_row + 1 < row)
            .map_or(0, |i| i + 1);
        self.take_in(lo..hi, |s| !s.trailing && s.end_row + 1 == row)
    }

    /// Take the trailing group on the line where `node` ends.
    pub fn take_line_comment(&mut self, node: Node) -> Option<CommentGroup> {
        let row = node.end_position().row;
        let end = node.end_byte();
        let lo = self.slots.partition_point(|s| s.start_byte < end);
        let hi = lo + self.slots[lo..].iter().take_while(|s| s.start_row == row).count();
        self.take_in(lo..hi, |s| s.trailing)
    }

    /// Groups nobody claimed, in source order.
    pub fn into_remaining(self) -> Vec<CommentGroup> {
        self.slots
            .into_iter()
            .filter(|s| !s.taken)
            .map(|s| s.group)
            .collect()
    }

    fn take_in(
        &mut self,
        range: std::ops::Range<usize>,
        pred: impl Fn(&Slot) -> bool,
    ) -> Option<CommentGroup> {
        let slot = self.slots[range].iter_mut().find(|s| !s.taken && pred(s))?;
        slot.taken = true;
        Some(slot.group.clone())
    }
}

/// A group grows by comments at most one line below it; a trailing group only
/// along its own line.
fn extends(slot: &Slot, start_row: usize) -> bool {
    if slot.trailing {
        start_row == slot.end_row
    } else {
        start_row <= slot.end_row + 1
    }
}

fn collect_leaves<'t>(node: Node<'t>, out: &mut Vec<Node<'t>>) {
    if node.child_count() == 0 || node.kind() == "comment" {
        out.push(node);
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_leaves(child, out);
    }
}
