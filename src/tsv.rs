use crate::error::{LocatorError, Result};
use crate::model::{Folder, NodeRef, PathEntry};
use crate::walk::Walk;
use regex::Regex;

pub const MAX_FILTER_LEN: usize = 256;

/// One line per node: `kind\tid\tdisplay\tparent_id`, display indented by depth.
pub fn flatten_to_tsv(roots: &[Folder], filter: Option<&str>) -> Result<Vec<String>> {
    let matcher = filter.map(build_fuzzy).transpose()?;
    let mut lines = Vec::new();
    let mut walk = Walk::new(roots);
    while let Some(visit) = walk.next() {
        let (kind, glyph) = match visit.node { NodeRef::Folder(_) => ("folder", "▸"), NodeRef::File(_) => ("file", " ") };
        let display = format!("{}{} {}", "  ".repeat(visit.depth), glyph, visit.node.name());
        let parent_id = walk.ancestors().last().map(|f| f.id.as_str()).unwrap_or("");
        let hay = format!("{} {}", visit.node.name(), visit.node.id());
        if matcher.as_ref().map(|re| re.is_match(&hay)).unwrap_or(true) {
            lines.push(format!("{}\t{}\t{}\t{}", kind, visit.node.id(), display, parent_id));
        }
    }
    Ok(lines)
}

pub fn path_to_tsv(path: &[PathEntry]) -> Vec<String> {
    path.iter().map(|e| format!("{}\t{}", e.id, e.name)).collect()
}

pub fn path_to_text(path: &[PathEntry]) -> String {
    path.iter().map(|e| e.name.as_str()).collect::<Vec<_>>().join(" / ")
}

fn build_fuzzy(q: &str) -> Result<Regex> {
    if q.chars().count() > MAX_FILTER_LEN {
        return Err(LocatorError::FilterTooLong { max: MAX_FILTER_LEN });
    }
    // subsequence match: q chars appear in order, ignoring other chars
    let mut pat = String::from("(?i)");
    for ch in q.chars() {
        pat.push_str(".*");
        pat.push_str(&regex::escape(&ch.to_string()));
    }
    Ok(Regex::new(&pat)?)
}
