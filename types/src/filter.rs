//! Case-insensitive substring filtering over an [`ItemList`].

use crate::ItemList;

/// Whether `item` contains `needle` ignoring case.
///
/// `needle` must already be lowercased; filtering lowercases the term once per pass.
#[must_use]
pub fn matches_term(item: &str, needle: &str) -> bool {
    needle.is_empty() || item.to_lowercase().contains(needle)
}

/// Select the items whose lowercase form contains the lowercase `term`.
///
/// Original list order is preserved. An empty term matches every item.
#[must_use]
pub fn filter_items(items: ItemList, term: &str) -> Vec<&'static str> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| matches_term(item, &needle))
        .collect()
}

/// Output of one completed filter pass.
///
/// Records the term it was computed for, which can lag the term currently in
/// the input field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    term: String,
    items: Vec<&'static str>,
}

impl ResultSet {
    #[must_use]
    pub fn compute(items: ItemList, term: &str) -> Self {
        Self {
            term: term.to_string(),
            items: filter_items(items, term),
        }
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn items(&self) -> &[&'static str] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> ItemList {
        ItemList::fruits()
    }

    #[test]
    fn empty_term_returns_full_list_in_order() {
        let results = filter_items(fruits(), "");
        assert_eq!(results, fruits().as_slice());
    }

    #[test]
    fn cherry_matches_case_insensitively_in_catalog_order() {
        let results = filter_items(fruits(), "cherry");
        assert_eq!(
            results,
            vec![
                "Cherry",
                "Acerola Cherry",
                "Rainier Cherry",
                "Bing Cherry",
                "Sour Cherry",
            ]
        );
        assert_eq!(filter_items(fruits(), "CHERRY"), results);
    }

    #[test]
    fn mangos_matches_only_mangosteen() {
        assert_eq!(filter_items(fruits(), "Mangos"), vec!["Mangosteen"]);
    }

    #[test]
    fn unmatched_term_yields_nothing() {
        assert!(filter_items(fruits(), "zzz").is_empty());
    }

    #[test]
    fn whitespace_is_part_of_the_term() {
        let results = filter_items(fruits(), " pear");
        assert_eq!(results, vec!["Bosc Pear", "Anjou Pear", "Bartlett Pear"]);
    }

    #[test]
    fn punctuation_matches_literally() {
        assert_eq!(
            filter_items(fruits(), "(red)"),
            vec!["Currant (Red)"]
        );
        assert_eq!(filter_items(fruits(), "'s h"), vec!["Buddha's Hand Citron"]);
    }

    #[test]
    fn every_result_contains_term_and_nothing_is_missed() {
        for term in ["an", "Berry", "o", "LIME", "fruit"] {
            let needle = term.to_lowercase();
            let results = filter_items(fruits(), term);
            let expected: Vec<_> = fruits()
                .iter()
                .filter(|item| item.to_lowercase().contains(&needle))
                .collect();
            assert_eq!(results, expected, "term {term:?}");
        }
    }

    #[test]
    fn result_set_remembers_its_term() {
        let set = ResultSet::compute(fruits(), "kiwi");
        assert_eq!(set.term(), "kiwi");
        assert_eq!(set.items(), &["Kiwi"]);
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }

    #[test]
    fn default_result_set_is_empty() {
        let set = ResultSet::default();
        assert!(set.is_empty());
        assert_eq!(set.term(), "");
    }
}
