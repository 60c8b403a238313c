//! Lookups over a forest snapshot.
//!
//! Both contracts run on [`Walk`]: "where is this node" returns the
//! breadcrumb trail, "what is this node" returns the folder itself. Absence is
//! `None`, never an error. When ids repeat, the first node in pre-order wins.

use crate::error::{LocatorError, Result};
use crate::model::{Folder, NodeRef, PathEntry};
use crate::walk::Walk;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Root-to-node trail; matches files and folders.
    Path,
    /// The folder value; matches folders only.
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located<'a> {
    Path(Vec<PathEntry>),
    Folder(&'a Folder),
}

/// Borrowed view of one forest, valid for a single round of queries.
#[derive(Debug, Clone, Copy)]
pub struct Locator<'a> {
    roots: &'a [Folder],
}

impl<'a> Locator<'a> {
    pub fn new(roots: &'a [Folder]) -> Self { Locator { roots } }

    pub fn locate(&self, id: &str, strategy: Strategy) -> Option<Located<'a>> {
        match strategy {
            Strategy::Path => self.path_to(id).map(Located::Path),
            Strategy::Value => self.folder(id).map(Located::Folder),
        }
    }

    pub fn path_to(&self, id: &str) -> Option<Vec<PathEntry>> {
        let mut walk = Walk::new(self.roots);
        while let Some(visit) = walk.next() {
            if visit.node.id() == id {
                let mut path: Vec<PathEntry> = walk.ancestors().iter().map(|f| f.entry()).collect();
                path.push(visit.node.entry());
                debug!(id, depth = visit.depth, "path found");
                return Some(path);
            }
        }
        debug!(id, "no node with id");
        None
    }

    pub fn folder(&self, id: &str) -> Option<&'a Folder> {
        let found = Walk::new(self.roots)
            .skip_repeated_folders()
            .filter_map(|v| v.node.as_folder())
            .find(|f| f.id == id);
        debug!(id, found = found.is_some(), "folder lookup");
        found
    }

    /// File or folder with the given id.
    pub fn node(&self, id: &str) -> Option<NodeRef<'a>> {
        Walk::new(self.roots).map(|v| v.node).find(|n| n.id() == id)
    }

    /// Id of the folder directly containing `id`; `None` for roots and unknown ids.
    pub fn parent_of(&self, id: &str) -> Option<&'a str> {
        let mut walk = Walk::new(self.roots);
        while let Some(visit) = walk.next() {
            if visit.node.id() == id {
                return walk.ancestors().last().map(|f| f.id.as_str());
            }
        }
        None
    }
}

pub fn find_path(roots: &[Folder], target_id: &str) -> Option<Vec<PathEntry>> {
    Locator::new(roots).path_to(target_id)
}

pub fn find_folder_by_id<'a>(roots: &'a [Folder], folder_id: &str) -> Option<&'a Folder> {
    Locator::new(roots).folder(folder_id)
}

/// Ids carried by more than one node, each listed once, in the order the repeat is met.
pub fn duplicate_ids(roots: &[Folder]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut reported: HashSet<&str> = HashSet::new();
    let mut dups = Vec::new();
    for visit in Walk::new(roots) {
        let id = visit.node.id();
        if !seen.insert(id) && reported.insert(id) {
            tracing::warn!(id, "duplicate id");
            dups.push(id.to_string());
        }
    }
    dups
}

pub fn ensure_unique_ids(roots: &[Folder]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for visit in Walk::new(roots) {
        let id = visit.node.id();
        if !seen.insert(id) {
            return Err(LocatorError::DuplicateId { id: id.to_string() });
        }
    }
    Ok(())
}
