use smallvec::SmallVec;

use crate::SelectOption;

/// Key-unique mapping from option key to option, in insertion order.
///
/// Re-inserting an existing key replaces the entry where it stands, so the
/// display order only changes when a key is removed and added again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MultiSelection {
    entries: SmallVec<[SelectOption; 4]>,
}

impl MultiSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, option: SelectOption) {
        match self.entries.iter_mut().find(|o| o.key == option.key) {
            Some(slot) => *slot = option,
            None => self.entries.push(option),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<SelectOption> {
        let idx = self.entries.iter().position(|o| o.key == key)?;
        Some(self.entries.remove(idx))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&SelectOption> {
        self.entries.iter().find(|o| o.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|o| o.key.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|o| o.label.as_str())
    }

    /// Labels joined with `,`; `None` when nothing is selected.
    pub fn display_text(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(self.labels().collect::<Vec<_>>().join(","))
    }
}

/// Later duplicates replace earlier ones.
impl FromIterator<SelectOption> for MultiSelection {
    fn from_iter<I: IntoIterator<Item = SelectOption>>(iter: I) -> Self {
        let mut selection = MultiSelection::new();
        for option in iter {
            selection.insert(option);
        }
        selection
    }
}

impl<'a> IntoIterator for &'a MultiSelection {
    type Item = &'a SelectOption;
    type IntoIter = std::slice::Iter<'a, SelectOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(key: &str, label: &str) -> SelectOption {
        SelectOption::new(key, label)
    }

    #[test]
    fn reinsert_keeps_position() {
        let mut sel: MultiSelection = [opt("a", "Apple"), opt("b", "Banana")].into_iter().collect();
        sel.insert(opt("a", "Apricot"));
        assert_eq!(sel.labels().collect::<Vec<_>>(), vec!["Apricot", "Banana"]);
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn remove_then_add_moves_to_end() {
        let mut sel: MultiSelection = [opt("a", "Apple"), opt("b", "Banana")].into_iter().collect();
        assert_eq!(sel.remove("a"), Some(opt("a", "Apple")));
        assert_eq!(sel.remove("a"), None);
        sel.insert(opt("a", "Apple"));
        assert_eq!(sel.display_text().as_deref(), Some("Banana,Apple"));
    }

    #[test]
    fn empty_has_no_display_text() {
        assert_eq!(MultiSelection::new().display_text(), None);
    }

    #[test]
    fn duplicate_keys_last_wins() {
        let sel: MultiSelection = [opt("a", "One"), opt("a", "Two")].into_iter().collect();
        assert_eq!(sel.len(), 1);
        assert_eq!(sel.get("a").map(|o| o.label.as_str()), Some("Two"));
    }
}
