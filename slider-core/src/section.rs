use crate::link::fragment_id;

/// One top-level content block of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub index: usize,
    pub label: String,
}

/// Ordered, non-empty, immutable list of sections built once at startup.
#[derive(Clone, Debug)]
pub struct SectionCatalog {
    sections: Vec<Section>,
}

impl SectionCatalog {
    /// Build a catalog from `(id, label)` pairs in page order.
    /// Returns `None` when there is nothing to navigate between.
    pub fn from_entries<I, S, L>(entries: I) -> Option<Self>
    where
        I: IntoIterator<Item = (S, L)>,
        S: Into<String>,
        L: Into<String>,
    {
        let sections: Vec<Section> = entries
            .into_iter()
            .enumerate()
            .map(|(index, (id, label))| Section {
                id: id.into(),
                index,
                label: label.into(),
            })
            .collect();
        if sections.is_empty() {
            return None;
        }
        Some(SectionCatalog { sections })
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    // never true; a catalog cannot be built empty
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.sections.len() - 1
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Exact identifier lookup. With duplicate ids the first one wins.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Resolve a nav identifier, a label or a raw `#fragment` to an index.
    ///
    /// Identifiers are matched exactly first; labels are a case-insensitive
    /// fallback so "Projects" finds the section labelled "projects".
    pub fn resolve(&self, identifier: &str) -> Option<usize> {
        let wanted = fragment_id(identifier);
        let wanted = wanted.trim();
        if wanted.is_empty() {
            return None;
        }
        self.index_of(wanted).or_else(|| {
            self.sections
                .iter()
                .position(|s| s.label.eq_ignore_ascii_case(wanted))
        })
    }
}

impl std::ops::Index<usize> for SectionCatalog {
    type Output = Section;

    fn index(&self, index: usize) -> &Section {
        &self.sections[index]
    }
}
