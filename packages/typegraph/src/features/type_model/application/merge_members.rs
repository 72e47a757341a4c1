//! Member merging
//!
//! Depth-first post-order merge over resolved heritage edges. Each distinct
//! target is merged first, in declaration order, and applied into the
//! accumulator by name; the declaration's own members are applied last.
//!
//! Every invocation owns its memo. A declaration is recorded with an empty
//! set before its targets are visited, so a cycle reaching it again reads
//! that partial set instead of recursing.

use indexmap::IndexMap;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::features::type_model::domain::{DeclId, Declaration, Member, TypeBatch};

/// Member name to the member that wins the merge
pub type MergedMembers<'a> = IndexMap<&'a str, &'a Member>;

type Memo<'a> = FxHashMap<DeclId, MergedMembers<'a>>;

/// Merged members of one declaration
///
/// Unknown ids yield an empty set.
pub fn merged_members(batch: &TypeBatch, id: DeclId) -> MergedMembers<'_> {
    let mut memo = Memo::default();
    merge(batch, id, &mut memo)
}

impl TypeBatch {
    /// Merged members of one declaration
    pub fn merged_members(&self, id: DeclId) -> MergedMembers<'_> {
        merged_members(self, id)
    }

    /// Merged members of every declaration, in batch order
    ///
    /// Computed in parallel; each declaration gets its own memo.
    pub fn merged_members_all(&self) -> Vec<MergedMembers<'_>> {
        (0..self.len())
            .into_par_iter()
            .map(|index| merged_members(self, DeclId(index)))
            .collect()
    }
}

/// One declaration on the merge stack
struct Frame<'a> {
    decl: &'a Declaration,
    targets: Vec<DeclId>,
    next: usize,
    merged: MergedMembers<'a>,
}

impl<'a> Frame<'a> {
    fn enter(decl: &'a Declaration) -> Self {
        Self {
            decl,
            targets: decl.heritage_targets(),
            next: 0,
            merged: MergedMembers::new(),
        }
    }

    /// Apply own members over the inherited ones
    fn finish(&mut self) -> MergedMembers<'a> {
        let decl = self.decl;
        let mut merged = std::mem::take(&mut self.merged);
        for member in &decl.members {
            merged.insert(member.name.as_str(), member);
        }
        merged
    }
}

/// Post-order walk with an explicit stack, so chain depth is bounded by
/// the heap rather than the thread stack.
fn merge<'a>(batch: &'a TypeBatch, root: DeclId, memo: &mut Memo<'a>) -> MergedMembers<'a> {
    let Some(decl) = batch.get(root) else {
        return MergedMembers::new();
    };

    memo.insert(root, MergedMembers::new());
    let mut stack = vec![Frame::enter(decl)];

    while let Some(frame) = stack.last_mut() {
        if let Some(&target) = frame.targets.get(frame.next) {
            frame.next += 1;
            if let Some(known) = memo.get(&target) {
                apply(&mut frame.merged, known);
            } else if let Some(base) = batch.get(target) {
                memo.insert(target, MergedMembers::new());
                stack.push(Frame::enter(base));
            }
            continue;
        }

        let id = frame.decl.id;
        let merged = frame.finish();
        memo.insert(id, merged.clone());
        stack.pop();

        match stack.last_mut() {
            Some(parent) => apply(&mut parent.merged, &merged),
            None => return merged,
        }
    }

    MergedMembers::new()
}

fn apply<'a>(into: &mut MergedMembers<'a>, from: &MergedMembers<'a>) {
    for (name, member) in from {
        into.insert(name, member);
    }
}
