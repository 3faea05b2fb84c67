//! The fixed item catalog searched by the input widget.

use std::ops::Index;

/// Built-in fruit catalog, in display order.
pub const FRUITS: &[&str] = &[
    "Apple",
    "Banana",
    "Orange",
    "Grape",
    "Strawberry",
    "Blueberry",
    "Raspberry",
    "Mango",
    "Pineapple",
    "Watermelon",
    "Kiwi",
    "Peach",
    "Pear",
    "Plum",
    "Cherry",
    "Lemon",
    "Lime",
    "Avocado",
    "Tomato",
    "Coconut",
    "Papaya",
    "Guava",
    "Pomegranate",
    "Blackberry",
    "Cranberry",
    "Mandarin Orange",
    "Clementine",
    "Tangerine",
    "Grapefruit",
    "Cantaloupe",
    "Honeydew Melon",
    "Fig",
    "Date",
    "Raisin",
    "Apricot",
    "Nectarine",
    "Lychee",
    "Passion Fruit",
    "Dragon Fruit",
    "Star Fruit",
    "Persimmon",
    "Quince",
    "Elderberry",
    "Gooseberry",
    "Currant (Red)",
    "Currant (Black)",
    "Currant (White)",
    "Boysenberry",
    "Loganberry",
    "Marionberry",
    "Ugli Fruit",
    "Pomelo",
    "Kumquat",
    "Plantain",
    "Breadfruit",
    "Jackfruit",
    "Durian",
    "Mangosteen",
    "Rambutan",
    "Longan",
    "Salak",
    "Cherimoya",
    "Soursop",
    "Feijoa",
    "Tamarind",
    "Acerola Cherry",
    "Cloudberry",
    "Lingonberry",
    "Saskatoon Berry",
    "Huckleberry",
    "Miracle Fruit",
    "Jaboticaba",
    "Akebia",
    "Canistel",
    "Sapodilla",
    "Black Sapote",
    "White Sapote",
    "Buddha's Hand Citron",
    "Yuzu",
    "Ugni",
    "Keitt Mango",
    "Alphonso Mango",
    "Ataulfo Mango",
    "Bosc Pear",
    "Anjou Pear",
    "Bartlett Pear",
    "Gala Apple",
    "Fuji Apple",
    "Honeycrisp Apple",
    "Navel Orange",
    "Valencia Orange",
    "Blood Orange",
    "Concord Grape",
    "Moon Drop Grape",
    "Rainier Cherry",
    "Bing Cherry",
    "Sour Cherry",
    "Key Lime",
    "Persian Lime",
    "Seville Orange",
    "Bergamot Orange",
    "Ugni Blanc Grape",
];

/// Ordered, immutable list of searchable items.
///
/// Fixed at construction and never mutated afterwards; cloning is a pointer copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemList {
    items: &'static [&'static str],
}

impl ItemList {
    #[must_use]
    pub const fn new(items: &'static [&'static str]) -> Self {
        Self { items }
    }

    #[must_use]
    pub const fn fruits() -> Self {
        Self::new(FRUITS)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn as_slice(&self) -> &'static [&'static str] {
        self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.items.iter().copied()
    }
}

impl Default for ItemList {
    fn default() -> Self {
        Self::fruits()
    }
}

impl Index<usize> for ItemList {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        self.items[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fruits_catalog_is_fixed() {
        let items = ItemList::fruits();
        assert_eq!(items.len(), 102);
        assert_eq!(&items[0], "Apple");
        assert_eq!(&items[items.len() - 1], "Ugni Blanc Grape");
    }

    #[test]
    fn catalog_entries_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for item in ItemList::fruits().iter() {
            assert!(seen.insert(item), "duplicate catalog entry: {item}");
        }
    }

    #[test]
    fn default_is_fruits() {
        assert_eq!(ItemList::default(), ItemList::fruits());
    }
}
