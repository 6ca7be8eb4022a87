//! Name catalogues.
//!
//! The catalogue is the core's only input besides document text. It answers one question: which
//! names apply to a given document? It is owned by the host's configuration layer; the core
//! borrows a read-only view per scan.

use crate::document::DocumentId;
use crate::names::{NameLists, NamedEntity};
use std::collections::BTreeMap;

/// Source of the ordered name list that applies to a document.
pub trait Catalogue {
    /// Names applicable to `document`, in catalogue order.
    ///
    /// Must return an empty slice (never fail) when no configuration applies.
    fn names(&self, document: &DocumentId) -> &[NamedEntity];
}

impl Catalogue for [NamedEntity] {
    fn names(&self, _document: &DocumentId) -> &[NamedEntity] {
        self
    }
}

impl Catalogue for Vec<NamedEntity> {
    fn names(&self, _document: &DocumentId) -> &[NamedEntity] {
        self.as_slice()
    }
}

/// Name lists keyed by project root.
///
/// A document belongs to the project whose root is the longest prefix of its id. Documents
/// outside every registered root fall back to the project registered under the empty root
/// `""`, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectCatalogue {
    projects: BTreeMap<String, Vec<NamedEntity>>,
}

impl ProjectCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` if no project is registered.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Register (or replace) a project's name list. Returns the previous list, if any.
    pub fn insert_project(
        &mut self,
        root: impl Into<String>,
        names: Vec<NamedEntity>,
    ) -> Option<Vec<NamedEntity>> {
        self.projects.insert(root.into(), names)
    }

    /// Register (or replace) a project from its decoded `names` configuration section.
    pub fn insert_name_lists(
        &mut self,
        root: impl Into<String>,
        lists: &NameLists,
    ) -> Option<Vec<NamedEntity>> {
        self.insert_project(root, lists.to_entities())
    }

    /// Remove a project. Returns its name list, if it was registered.
    pub fn remove_project(&mut self, root: &str) -> Option<Vec<NamedEntity>> {
        self.projects.remove(root)
    }

    /// Replace every project at once (e.g. after a configuration reload).
    pub fn replace_all<I>(&mut self, projects: I)
    where
        I: IntoIterator<Item = (String, Vec<NamedEntity>)>,
    {
        self.projects = projects.into_iter().collect();
    }

    /// The name list registered for `root`.
    pub fn project(&self, root: &str) -> Option<&[NamedEntity]> {
        self.projects.get(root).map(Vec::as_slice)
    }

    /// Iterate registered project roots in sorted order.
    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }

    /// Root of the project `document` belongs to.
    pub fn project_root_for(&self, document: &DocumentId) -> Option<&str> {
        let id = document.as_str();
        self.projects
            .keys()
            .filter(|root| !root.is_empty() && id.starts_with(root.as_str()))
            .max_by_key(|root| root.len())
            .or_else(|| self.projects.keys().find(|root| root.is_empty()))
            .map(String::as_str)
    }
}

impl Catalogue for ProjectCatalogue {
    fn names(&self, document: &DocumentId) -> &[NamedEntity] {
        self.project_root_for(document)
            .and_then(|root| self.project(root))
            .unwrap_or(&[])
    }
}

impl FromIterator<(String, Vec<NamedEntity>)> for ProjectCatalogue {
    fn from_iter<I: IntoIterator<Item = (String, Vec<NamedEntity>)>>(iter: I) -> Self {
        Self {
            projects: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists(character: &[&str], invalid: &[&str]) -> NameLists {
        NameLists {
            character: character.iter().map(|s| s.to_string()).collect(),
            invalid: invalid.iter().map(|s| s.to_string()).collect(),
            ..NameLists::default()
        }
    }

    #[test]
    fn test_longest_prefix_wins() {
        let mut catalogue = ProjectCatalogue::new();
        catalogue.insert_name_lists("/books", &lists(&["Outer"], &[]));
        catalogue.insert_name_lists("/books/saga", &lists(&["Inner"], &[]));

        let doc = DocumentId::new("/books/saga/ch1.proze");
        assert_eq!(catalogue.project_root_for(&doc), Some("/books/saga"));
        assert_eq!(catalogue.names(&doc), &[NamedEntity::character("Inner")]);

        let doc = DocumentId::new("/books/other/ch1.proze");
        assert_eq!(catalogue.names(&doc), &[NamedEntity::character("Outer")]);
    }

    #[test]
    fn test_default_project_and_missing_configuration() {
        let mut catalogue = ProjectCatalogue::new();
        let doc = DocumentId::new("/elsewhere/notes.proze");
        assert!(catalogue.names(&doc).is_empty());

        catalogue.insert_name_lists("", &lists(&[], &["Gary"]));
        assert_eq!(catalogue.project_root_for(&doc), Some(""));
        assert_eq!(catalogue.names(&doc), &[NamedEntity::invalid("Gary")]);
    }

    #[test]
    fn test_replace_all_drops_old_projects() {
        let mut catalogue: ProjectCatalogue =
            [("/a".to_string(), vec![NamedEntity::place("shop")])]
                .into_iter()
                .collect();
        assert_eq!(catalogue.len(), 1);

        catalogue.replace_all([("/b".to_string(), vec![NamedEntity::thing("lance")])]);
        assert_eq!(catalogue.roots().collect::<Vec<_>>(), vec!["/b"]);
        assert!(catalogue.names(&DocumentId::new("/a/x")).is_empty());
        assert_eq!(catalogue.remove_project("/b").map(|v| v.len()), Some(1));
        assert!(catalogue.is_empty());
    }

    #[test]
    fn test_vec_catalogue_applies_everywhere() {
        let names = vec![NamedEntity::character("Jessica")];
        assert_eq!(names.names(&DocumentId::new("x")), names.as_slice());
        assert_eq!(names.names(&DocumentId::new("y")).len(), 1);
    }
}
