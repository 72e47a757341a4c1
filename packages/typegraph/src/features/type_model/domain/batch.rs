//! The scan batch
//!
//! All declarations of one scan, in file order then in-file order. The batch
//! is the resolution universe for heritage names and is immutable once built.

use std::ops::Index;

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::declaration::{DeclId, Declaration};

/// Declaration name to every id carrying it, in batch order
pub(crate) type NameIndex = FxHashMap<String, Vec<DeclId>>;

/// Declarations of one scan with resolved heritage
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TypeBatch {
    declarations: Vec<Declaration>,
    #[serde(skip)]
    names: NameIndex,
}

impl TypeBatch {
    /// Build the name index of declarations numbered by position
    pub(crate) fn index_names(declarations: &[Declaration]) -> NameIndex {
        let mut names = NameIndex::default();
        for decl in declarations {
            names.entry(decl.name.clone()).or_default().push(decl.id);
        }
        names
    }

    /// Wrap declarations whose heritage references are already resolved
    /// against `names`
    pub(crate) fn from_resolved(declarations: Vec<Declaration>, names: NameIndex) -> Self {
        debug_assert!(declarations
            .iter()
            .enumerate()
            .all(|(index, decl)| decl.id.index() == index));
        Self {
            declarations,
            names,
        }
    }

    pub fn get(&self, id: DeclId) -> Option<&Declaration> {
        self.declarations.get(id.index())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Ids of every declaration with this exact name, in batch order
    pub fn ids_named(&self, name: &str) -> &[DeclId] {
        self.names.get(name).map_or(&[], Vec::as_slice)
    }

    /// Every declaration with this exact name, in batch order
    pub fn by_name<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Declaration> + 'a {
        self.ids_named(name).iter().map(move |id| &self[*id])
    }

    /// First declaration with this exact name
    pub fn first_named(&self, name: &str) -> Option<&Declaration> {
        self.ids_named(name).first().map(|id| &self[*id])
    }
}

impl Index<DeclId> for TypeBatch {
    type Output = Declaration;

    fn index(&self, id: DeclId) -> &Self::Output {
        &self.declarations[id.index()]
    }
}

impl<'a> IntoIterator for &'a TypeBatch {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}
