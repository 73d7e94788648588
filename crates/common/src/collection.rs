//! Name-indexed metadata collections

use crate::model::{Method, Type, XsdType};
use crate::{EngineError, Result};
use indexmap::IndexMap;
use serde::Serialize;

/// Anything that can be looked up by name inside a collection
pub trait Named {
    /// Human readable kind, used in error messages
    const KIND: &'static str;

    fn name(&self) -> &str;
}

/// Insertion-ordered collection with unique names
///
/// Adding an item whose name is already present is rejected with
/// [`EngineError::DuplicateName`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NamedCollection<T> {
    items: IndexMap<String, T>,
}

/// Methods exposed by a service
pub type MethodCollection = NamedCollection<Method>;

/// Complex types exposed by a service
pub type TypeCollection = NamedCollection<Type>;

impl<T> Default for NamedCollection<T> {
    fn default() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }
}

impl<T: Named> NamedCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection, failing on the first duplicate name
    pub fn try_from_items<I: IntoIterator<Item = T>>(items: I) -> Result<Self> {
        let mut collection = Self::new();
        for item in items {
            collection.add(item)?;
        }
        Ok(collection)
    }

    pub fn add(&mut self, item: T) -> Result<()> {
        if self.items.contains_key(item.name()) {
            return Err(EngineError::DuplicateName {
                kind: T::KIND,
                name: item.name().to_string(),
            });
        }
        self.items.insert(item.name().to_string(), item);
        Ok(())
    }

    pub fn fetch_by_name(&self, name: &str) -> Result<&T> {
        self.items.get(name).ok_or_else(|| EngineError::NotFound {
            kind: T::KIND,
            name: name.to_string(),
        })
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.items.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }
}

impl<'a, T> IntoIterator for &'a NamedCollection<T> {
    type Item = &'a T;
    type IntoIter = indexmap::map::Values<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}

/// Lookup table used to resolve bare type names to their scalar base type
///
/// Unlike [`NamedCollection`], later entries replace earlier ones with the
/// same name: the catalog is seeded from several sources and the most
/// specific definition wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct XsdTypeCollection {
    types: IndexMap<String, XsdType>,
}

impl XsdTypeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, xsd_type: XsdType) {
        self.types.insert(xsd_type.name.clone(), xsd_type);
    }

    pub fn get(&self, name: &str) -> Option<&XsdType> {
        self.types.get(name)
    }

    /// Exact-name lookup; unknown names come back unresolved
    ///
    /// # Examples
    /// ```
    /// use extsoap_engine_common::{XsdType, XsdTypeCollection};
    ///
    /// let catalog: XsdTypeCollection =
    ///     [XsdType::create("simpleType").with_base_type("string")].into_iter().collect();
    ///
    /// assert_eq!(catalog.resolve("simpleType").effective_type(), "string");
    /// assert_eq!(catalog.resolve("Other"), XsdType::create("Other"));
    /// ```
    pub fn resolve(&self, name: &str) -> XsdType {
        self.types
            .get(name)
            .cloned()
            .unwrap_or_else(|| XsdType::create(name))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &XsdType> {
        self.types.values()
    }
}

impl FromIterator<XsdType> for XsdTypeCollection {
    fn from_iter<I: IntoIterator<Item = XsdType>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl Extend<XsdType> for XsdTypeCollection {
    fn extend<I: IntoIterator<Item = XsdType>>(&mut self, iter: I) {
        for xsd_type in iter {
            self.insert(xsd_type);
        }
    }
}
