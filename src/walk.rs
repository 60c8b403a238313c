//! Pre-order, depth-first traversal over a forest of folders.
//!
//! Roots are visited in order. A folder is yielded before anything it
//! contains, its files come next, then each subfolder in order. The walk is
//! iterative so deep trees cannot exhaust the call stack, and it keeps the
//! chain of open folders so callers can rebuild the root-to-node trail of the
//! node they just received.

use crate::model::{Folder, NodeRef};
use std::collections::HashSet;

/// A node handed out by [`Walk`], with its distance from the root (roots are 0).
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    pub node: NodeRef<'a>,
    pub depth: usize,
}

pub struct Walk<'a> {
    stack: Vec<Visit<'a>>,
    trail: Vec<&'a Folder>,
    depth: usize,
    seen_folders: Option<HashSet<&'a str>>,
}

impl<'a> Walk<'a> {
    pub fn new(roots: &'a [Folder]) -> Self {
        let stack = roots.iter().rev().map(|f| Visit { node: NodeRef::Folder(f), depth: 0 }).collect();
        Walk { stack, trail: Vec::new(), depth: 0, seen_folders: None }
    }

    /// Stop yielding a folder whose id was already yielded. Its contents are still walked.
    pub fn skip_repeated_folders(mut self) -> Self {
        self.seen_folders = Some(HashSet::new());
        self
    }

    /// Folders enclosing the most recently yielded node, outermost first.
    pub fn ancestors(&self) -> &[&'a Folder] {
        &self.trail[..self.depth.min(self.trail.len())]
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Visit<'a>> {
        loop {
            let visit = self.stack.pop()?;
            self.trail.truncate(visit.depth);
            self.depth = visit.depth;
            if let NodeRef::Folder(folder) = visit.node {
                let repeated = match self.seen_folders.as_mut() {
                    Some(seen) => !seen.insert(folder.id.as_str()),
                    None => false,
                };
                self.trail.push(folder);
                let child_depth = visit.depth + 1;
                // Stack pops in reverse: push subfolders first so files surface before them.
                for sub in folder.subfolders.iter().rev() {
                    self.stack.push(Visit { node: NodeRef::Folder(sub), depth: child_depth });
                }
                for file in folder.content.iter().rev() {
                    self.stack.push(Visit { node: NodeRef::File(file), depth: child_depth });
                }
                if repeated {
                    tracing::warn!(id = %folder.id, "folder id repeated, not yielded again");
                    continue;
                }
            }
            return Some(visit);
        }
    }
}
