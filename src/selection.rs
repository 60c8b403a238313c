//! Priming a destination-folder picker from a folder id.

use crate::locate::Locator;
use crate::model::{Folder, PathEntry};

/// Callbacks a picker wants fed when a folder gets selected. Each one is optional.
#[derive(Default)]
pub struct SelectionHooks<'h> {
    pub set_selected_folder: Option<Box<dyn FnMut(&Folder) + 'h>>,
    pub set_parent_id: Option<Box<dyn FnMut(Option<&str>) + 'h>>,
    pub set_subfolders: Option<Box<dyn FnMut(&[Folder]) + 'h>>,
    pub set_breadcrumbs: Option<Box<dyn FnMut(&[PathEntry]) + 'h>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    pub folder: &'a Folder,
    pub parent_id: Option<&'a str>,
    pub breadcrumbs: Vec<PathEntry>,
}

/// Looks up `folder_id` and pushes the result through every present hook, in
/// field order. Nothing is called when the folder does not exist.
pub fn prime_selection<'a>(roots: &'a [Folder], folder_id: &str, hooks: &mut SelectionHooks<'_>) -> Option<Selection<'a>> {
    let locator = Locator::new(roots);
    let folder = locator.folder(folder_id)?;
    let breadcrumbs = locator.path_to(folder_id)?;
    let parent_id = locator.parent_of(folder_id);

    if let Some(cb) = hooks.set_selected_folder.as_mut() { cb(folder); }
    if let Some(cb) = hooks.set_parent_id.as_mut() { cb(parent_id); }
    if let Some(cb) = hooks.set_subfolders.as_mut() { cb(&folder.subfolders); }
    if let Some(cb) = hooks.set_breadcrumbs.as_mut() { cb(&breadcrumbs); }

    Some(Selection { folder, parent_id, breadcrumbs })
}
