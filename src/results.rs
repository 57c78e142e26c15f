use std::collections::HashMap;
use std::fmt;

/// Outcome of looking up one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLink {
    Found(String),
    /// No link on the page, or every attempt failed.
    NotFound,
}

impl DetailLink {
    pub fn url(&self) -> Option<&str> {
        match self {
            DetailLink::Found(url) => Some(url),
            DetailLink::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, DetailLink::Found(_))
    }
}

impl fmt::Display for DetailLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailLink::Found(url) => f.write_str(url),
            DetailLink::NotFound => f.write_str("None"),
        }
    }
}

/// Identifier -> result mapping that remembers insertion order.
///
/// Re-inserting an identifier overwrites its result but keeps its original row.
#[derive(Debug, Default, Clone)]
pub struct ResultTable {
    entries: Vec<(String, DetailLink)>,
    index: HashMap<String, usize>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous result when the identifier was already present.
    pub fn insert(&mut self, identifier: String, link: DetailLink) -> Option<DetailLink> {
        match self.index.get(&identifier) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, link)),
            None => {
                self.index.insert(identifier.clone(), self.entries.len());
                self.entries.push((identifier, link));
                None
            }
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&DetailLink> {
        self.index.get(identifier).map(|&pos| &self.entries[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DetailLink)> {
        self.entries.iter().map(|(id, link)| (id.as_str(), link))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn found_count(&self) -> usize {
        self.entries.iter().filter(|(_, link)| link.is_found()).count()
    }
}
