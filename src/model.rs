use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct File {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Folder {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub content: Vec<File>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub subfolders: Vec<Folder>,
}

/// One step of a root-to-node trail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathEntry {
    pub id: String,
    pub name: String,
}

/// Ordered root folders, serialized as a bare array.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Forest {
    pub roots: Vec<Folder>,
}

impl File {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        File { id: id.into(), title: title.into() }
    }

    pub fn entry(&self) -> PathEntry {
        PathEntry { id: self.id.clone(), name: self.title.clone() }
    }
}

impl Folder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Folder { id: id.into(), name: name.into(), content: Vec::new(), subfolders: Vec::new() }
    }

    pub fn with_file(mut self, file: File) -> Self {
        self.content.push(file);
        self
    }

    pub fn with_subfolder(mut self, folder: Folder) -> Self {
        self.subfolders.push(folder);
        self
    }

    pub fn entry(&self) -> PathEntry {
        PathEntry { id: self.id.clone(), name: self.name.clone() }
    }
}

// Deep chains would recurse once per level in the derived drop glue.
impl Drop for Folder {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.subfolders);
        while let Some(mut f) = pending.pop() {
            pending.append(&mut f.subfolders);
        }
    }
}

impl From<Vec<Folder>> for Forest {
    fn from(roots: Vec<Folder>) -> Self { Forest { roots } }
}

/// A borrowed file or folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef<'a> {
    Folder(&'a Folder),
    File(&'a File),
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> &'a str {
        match self { NodeRef::Folder(f) => &f.id, NodeRef::File(f) => &f.id }
    }

    /// Display label: folder name or file title.
    pub fn name(&self) -> &'a str {
        match self { NodeRef::Folder(f) => &f.name, NodeRef::File(f) => &f.title }
    }

    pub fn entry(&self) -> PathEntry {
        PathEntry { id: self.id().to_string(), name: self.name().to_string() }
    }

    pub fn as_folder(&self) -> Option<&'a Folder> {
        match self { NodeRef::Folder(f) => Some(f), NodeRef::File(_) => None }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Seq(Vec<Item<T>>),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Item<T> {
    Good(T),
    Bad(IgnoredAny),
}

// Partially loaded data: a non-sequence reads as empty, undecodable elements are dropped.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Seq(items) => {
            let total = items.len();
            let kept: Vec<T> = items.into_iter().filter_map(|i| match i { Item::Good(v) => Some(v), Item::Bad(_) => None }).collect();
            if kept.len() < total {
                tracing::warn!(dropped = total - kept.len(), "undecodable child entries skipped");
            }
            Ok(kept)
        }
        Lenient::Other(_) => {
            tracing::warn!("non-sequence children field treated as empty");
            Ok(Vec::new())
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_children_are_empty() {
        let f: Folder = serde_json::from_str(r#"{"id":"f1","name":"Root","subfolders":null}"#).unwrap();
        assert!(f.content.is_empty());
        assert!(f.subfolders.is_empty());
    }

    #[test]
    fn scalar_children_are_empty() {
        let f: Folder = serde_json::from_str(r#"{"id":"f1","content":7,"subfolders":"nope"}"#).unwrap();
        assert_eq!(f.name, "");
        assert!(f.content.is_empty());
        assert!(f.subfolders.is_empty());
    }

    #[test]
    fn nested_children_decode() {
        let forest: Forest = serde_json::from_str(r#"[
            {"id":"f1","name":"Root","content":[{"id":"d1","title":"Doc1"}],
             "subfolders":[{"id":"f2","name":"Sub","content":[],"subfolders":[]}]}
        ]"#).unwrap();
        assert_eq!(forest.roots.len(), 1);
        assert_eq!(forest.roots[0].content[0], File::new("d1", "Doc1"));
        assert_eq!(forest.roots[0].subfolders[0].name, "Sub");
    }

    #[test]
    fn bad_children_do_not_take_their_siblings_down() {
        let forest: Forest = serde_json::from_str(r#"[
            {"id":"f1","name":"Root",
             "content":[{"id":"d1","title":"Doc1"},{"id":"d2","title":null},{"title":"no id"},42],
             "subfolders":[{"id":"f2","name":"Sub"},{"id":"f3","name":null},{"name":"orphan"}]}
        ]"#).unwrap();
        let root = &forest.roots[0];
        assert_eq!(root.content, vec![File::new("d1", "Doc1"), File::new("d2", "")]);
        let subs: Vec<(&str, &str)> = root.subfolders.iter().map(|f| (f.id.as_str(), f.name.as_str())).collect();
        assert_eq!(subs, vec![("f2", "Sub"), ("f3", "")]);
    }

    #[test]
    fn file_entry_uses_title() {
        assert_eq!(File::new("d1", "Doc1").entry(), PathEntry { id: "d1".into(), name: "Doc1".into() });
    }
}
