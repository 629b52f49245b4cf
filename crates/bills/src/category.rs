//! Fixed expense categories (static reference data).

use serde::{Deserialize, Deserializer, Serialize};

/// Stable category key.
///
/// Bills store this key; the display name is looked up only when rendering or
/// reporting, so renaming a category never breaks grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Food,
    Shopping,
    Entertainment,
    Transport,
    Housing,
    Other,
}

/// Category reference data: stable id, display name and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: &'static str,
    pub icon: &'static str,
}

static CATEGORIES: [Category; 6] = [
    Category::entry(CategoryId::Food, "Food", "🍜"),
    Category::entry(CategoryId::Shopping, "Shopping", "🛍️"),
    Category::entry(CategoryId::Entertainment, "Entertainment", "🎮"),
    Category::entry(CategoryId::Transport, "Transport", "🚗"),
    Category::entry(CategoryId::Housing, "Housing", "🏠"),
    Category::entry(CategoryId::Other, "Other", "📦"),
];

/// Display names written by earlier releases, which stored the Chinese
/// name instead of a stable id.
static LEGACY_NAMES: [(&str, CategoryId); 6] = [
    ("餐饮", CategoryId::Food),
    ("购物", CategoryId::Shopping),
    ("娱乐", CategoryId::Entertainment),
    ("交通", CategoryId::Transport),
    ("住房", CategoryId::Housing),
    ("其他", CategoryId::Other),
];

impl Category {
    const fn entry(id: CategoryId, name: &'static str, icon: &'static str) -> Self {
        Self { id, name, icon }
    }

    /// All categories in listing order.
    pub fn all() -> &'static [Category] {
        &CATEGORIES
    }

    pub fn by_id(id: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.id.as_str() == id)
    }

    pub fn by_name(name: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.name == name)
    }
}

impl CategoryId {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Food => "food",
            CategoryId::Shopping => "shopping",
            CategoryId::Entertainment => "entertainment",
            CategoryId::Transport => "transport",
            CategoryId::Housing => "housing",
            CategoryId::Other => "other",
        }
    }

    pub fn category(&self) -> &'static Category {
        // CATEGORIES is laid out in variant declaration order.
        &CATEGORIES[*self as usize]
    }

    pub fn name(&self) -> &'static str {
        self.category().name
    }

    pub fn icon(&self) -> &'static str {
        self.category().icon
    }

    /// Resolve a lookup key that may be a stable id, a display name or a
    /// legacy display name.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. Empty
    /// or unknown keys resolve to `None`.
    pub fn resolve(key: &str) -> Option<CategoryId> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        CATEGORIES
            .iter()
            .find(|c| c.id.as_str().eq_ignore_ascii_case(key) || c.name.eq_ignore_ascii_case(key))
            .map(|c| c.id)
            .or_else(|| {
                LEGACY_NAMES
                    .iter()
                    .find(|(name, _)| *name == key)
                    .map(|(_, id)| *id)
            })
    }
}

impl core::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Collections written before the switch to stable ids hold display names.
impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        CategoryId::resolve(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown category '{raw}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_exactly_one_entry() {
        for category in Category::all() {
            assert_eq!(category.id.category(), category);
            assert_eq!(
                Category::all().iter().filter(|c| c.id == category.id).count(),
                1
            );
        }
    }

    #[test]
    fn resolve_accepts_ids_and_display_names() {
        assert_eq!(CategoryId::resolve("food"), Some(CategoryId::Food));
        assert_eq!(CategoryId::resolve("Food"), Some(CategoryId::Food));
        assert_eq!(CategoryId::resolve(" TRANSPORT "), Some(CategoryId::Transport));
        assert_eq!(CategoryId::resolve(""), None);
        assert_eq!(CategoryId::resolve("groceries"), None);
    }

    #[test]
    fn lookups_by_id_and_name_are_exact() {
        assert_eq!(Category::by_id("housing").map(|c| c.name), Some("Housing"));
        assert_eq!(
            Category::by_name("Housing").map(|c| c.id),
            Some(CategoryId::Housing)
        );
        assert!(Category::by_id("Housing").is_none());
    }

    #[test]
    fn serializes_stable_id_and_reads_legacy_names() {
        assert_eq!(
            serde_json::to_string(&CategoryId::Shopping).unwrap(),
            "\"shopping\""
        );
        let legacy: CategoryId = serde_json::from_str("\"Shopping\"").unwrap();
        assert_eq!(legacy, CategoryId::Shopping);
        assert!(serde_json::from_str::<CategoryId>("\"pets\"").is_err());
    }

    #[test]
    fn legacy_chinese_names_decode_to_stable_ids() {
        assert_eq!(CategoryId::resolve("餐饮"), Some(CategoryId::Food));
        assert_eq!(CategoryId::resolve(" 住房 "), Some(CategoryId::Housing));
        let legacy: Vec<CategoryId> =
            serde_json::from_str(r#"["购物","娱乐","交通","其他"]"#).unwrap();
        assert_eq!(
            legacy,
            vec![
                CategoryId::Shopping,
                CategoryId::Entertainment,
                CategoryId::Transport,
                CategoryId::Other,
            ]
        );
    }
}
