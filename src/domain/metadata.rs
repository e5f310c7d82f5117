// SPDX-License-Identifier: MPL-2.0
//! Hierarchical metadata as the decoder produces it.
//!
//! A [`MetadataTree`] maps section names to tag entries. Both levels
//! preserve insertion order and keep names unique within their parent,
//! so the presenter can render them without resorting. A tree lives for
//! exactly one decode attempt; nothing caches it.

// =============================================================================
// TagValue
// =============================================================================

/// A single decoded tag value.
///
/// Closed union of the value kinds the decoder can emit. The presenter
/// applies exactly one formatting rule per kind and never interprets
/// tag semantics.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    /// Free-form text (camera model, date strings, rational displays).
    Text(String),
    /// A plain numeric value.
    Number(f64),
    /// An uninterpreted byte sequence (maker notes, version blobs).
    Bytes(Vec<u8>),
}

// =============================================================================
// Section
// =============================================================================

/// One named group of tags, in decoder order.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    name: String,
    tags: Vec<(String, TagValue)>,
}

impl Section {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tags: Vec::new(),
        }
    }

    /// Returns the section's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterates tags in insertion order.
    pub fn tags(&self) -> impl Iterator<Item = (&str, &TagValue)> {
        self.tags.iter().map(|(tag, value)| (tag.as_str(), value))
    }

    /// Looks up a tag by name.
    pub fn get(&self, tag: &str) -> Option<&TagValue> {
        self.tags
            .iter()
            .find(|(name, _)| name == tag)
            .map(|(_, value)| value)
    }

    /// Number of tags in this section.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    // Upsert: an existing tag keeps its position, only the value changes.
    fn set(&mut self, tag: &str, value: TagValue) {
        match self.tags.iter_mut().find(|(name, _)| name == tag) {
            Some(entry) => entry.1 = value,
            None => self.tags.push((tag.to_string(), value)),
        }
    }
}

// =============================================================================
// MetadataTree
// =============================================================================

/// Ordered section → tag → value structure for one decode attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataTree {
    sections: Vec<Section>,
}

impl MetadataTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tag value, creating the section on first use.
    ///
    /// Re-inserting an existing section or tag name keeps its original
    /// position; only the value is replaced.
    pub fn insert(&mut self, section: &str, tag: &str, value: TagValue) {
        match self.sections.iter_mut().find(|s| s.name == section) {
            Some(existing) => existing.set(tag, value),
            None => {
                let mut created = Section::new(section);
                created.set(tag, value);
                self.sections.push(created);
            }
        }
    }

    /// Iterates sections in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Looks up a section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
