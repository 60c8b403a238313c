//! Locate files and folders by id in a nested folder tree.
//!
//! The tree is a forest: an ordered list of root [`Folder`]s, each holding
//! files (`content`) and further folders (`subfolders`). [`find_path`] rebuilds
//! the breadcrumb trail from a root down to a node, [`find_folder_by_id`]
//! returns the folder itself. Lookups are pure and never fail: a missing id is
//! `None`.

pub mod error;
pub mod history;
pub mod io;
pub mod locate;
pub mod model;
pub mod selection;
pub mod state;
pub mod tsv;
pub mod walk;


pub use error::{LocatorError, Result};
pub use history::{NavigationHistory, Route};
pub use locate::{duplicate_ids, ensure_unique_ids, find_folder_by_id, find_path, Located, Locator, Strategy};
pub use model::{File, Folder, Forest, NodeRef, PathEntry};
pub use selection::{prime_selection, Selection, SelectionHooks};
