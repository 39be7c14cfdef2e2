//! Ordered item collection owned by a character.

use core::fmt;

use crate::item::Item;

/// An ordered sequence of items.
///
/// Insertion order is significant and preserved. Items with the same name
/// may appear any number of times; there is no capacity limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create an empty inventory.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item to the end of the inventory.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// The items, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Iterate over the items in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Number of items held.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the inventory holds no items.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item descriptions, one per line.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_in_order() {
        let mut inv = Inventory::new();
        inv.add(Item::new("a", "first"));
        inv.add(Item::new("b", "second"));
        inv.add(Item::new("a", "duplicate name"));

        let names: Vec<&str> = inv.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "a"]);
        assert_eq!(inv.len(), 3);
    }

    #[test]
    fn empty_inventory_describes_as_empty_string() {
        let inv = Inventory::new();
        assert!(inv.is_empty());
        assert_eq!(inv.describe(), "");
    }

    #[test]
    fn describe_joins_lines() {
        let inv: Inventory = [
            Item::tradeable("Sword", "Sharp", 10),
            Item::untradeable("Amulet", "Old", 3),
        ]
        .into_iter()
        .collect();
        assert_eq!(inv.describe(), "Sword: Sharp - 10\nAmulet: Old - 3");
    }
}
