//! Item model and name resolution.
//!
//! Items come in two shapes: a bare label, or a record carrying a
//! description. Every comparison goes through one lowercase
//! normalization so the two shapes are interchangeable to the player.

use std::fmt;

/// A game item. Duplicates are allowed; items have no identity beyond
/// their name, so removal is positional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// A bare label, e.g. "torch".
    Label(String),
    /// A structured item with an optional description.
    Record {
        name: String,
        description: Option<String>,
    },
}

impl Item {
    pub fn label(name: impl Into<String>) -> Self {
        Item::Label(name.into())
    }

    pub fn record(name: impl Into<String>, description: impl Into<String>) -> Self {
        Item::Record {
            name: name.into(),
            description: Some(description.into()),
        }
    }

    /// The display name, regardless of representation.
    pub fn name(&self) -> &str {
        match self {
            Item::Label(name) => name,
            Item::Record { name, .. } => name,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Item::Label(_) => None,
            Item::Record { description, .. } => description.as_deref(),
        }
    }

    /// The lowercase form used for every lookup.
    pub fn canonical_name(&self) -> String {
        self.name().to_lowercase()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// First case-insensitive match for `name` in `items`, with its
/// position. Stable: earlier items win.
pub fn find_item<'a>(items: &'a [Item], name: &str) -> Option<(usize, &'a Item)> {
    let wanted = name.to_lowercase();
    items
        .iter()
        .enumerate()
        .find(|(_, item)| item.canonical_name() == wanted)
}

/// Whether any item's canonical name appears in `aliases`.
pub fn contains_any(items: &[Item], aliases: &[&str]) -> bool {
    items
        .iter()
        .any(|item| aliases.contains(&item.canonical_name().as_str()))
}

// Name variants accepted for the special items. The Russian forms come
// from the game's first release and still work.
pub const RUSTY_KEY: &[&str] = &["rusty key", "rusty_key", "ржавый ключ"];
pub const TREASURE_KEY: &[&str] = &["treasure key", "treasure_key", "ключ от сокровищ"];
pub const TREASURE_CHEST: &[&str] = &["treasure chest", "treasure_chest"];
pub const SWORD: &[&str] = &["sword", "меч"];
pub const TORCH: &[&str] = &["torch", "факел"];
pub const BRONZE_BOX: &[&str] = &["bronze box", "бронзовая шкатулка"];
pub const COIN: &[&str] = &["coin", "монета"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive_across_shapes() {
        let items = vec![
            Item::label("Torch"),
            Item::record("Bronze Box", "A small tarnished box."),
        ];
        let (index, found) = find_item(&items, "torch").unwrap();
        assert_eq!(index, 0);
        assert_eq!(found.name(), "Torch");

        let (index, found) = find_item(&items, "BRONZE BOX").unwrap();
        assert_eq!(index, 1);
        assert_eq!(found.description(), Some("A small tarnished box."));

        assert!(find_item(&items, "sword").is_none());
    }

    #[test]
    fn first_match_wins_with_duplicates() {
        let items = vec![
            Item::label("coin"),
            Item::record("Coin", "A worn silver coin."),
        ];
        let (index, found) = find_item(&items, "coin").unwrap();
        assert_eq!(index, 0);
        assert_eq!(found, &Item::label("coin"));
    }

    #[test]
    fn alias_sets_cover_both_shapes() {
        let inventory = vec![Item::record("Rusty Key", "Covered in flaking rust.")];
        assert!(contains_any(&inventory, RUSTY_KEY));
        assert!(!contains_any(&inventory, TREASURE_KEY));

        let russian = vec![Item::label("ржавый ключ")];
        assert!(contains_any(&russian, RUSTY_KEY));
    }
}
