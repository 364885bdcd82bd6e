use egui::Vec2;
use serde::{Deserialize, Serialize};

/// Category name that disables category filtering
pub const ALL_CATEGORIES: &str = "All";

/// A pre-supplied image asset that can be placed as an element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipartItem {
    pub id: String,
    pub name: String,
    /// URL to the asset (SVG or PNG)
    pub src: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Intrinsic pixel size of the asset, used for aspect-fit scaling
    #[serde(default)]
    pub original_width: Option<f32>,
    #[serde(default)]
    pub original_height: Option<f32>,
}

impl ClipartItem {
    pub fn original_size(&self) -> Option<Vec2> {
        match (self.original_width, self.original_height) {
            (Some(width), Some(height)) if width > 0.0 && height > 0.0 => {
                Some(Vec2::new(width, height))
            }
            _ => None,
        }
    }

    /// Case-insensitive match on the name or any tag
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipartCategory {
    pub name: String,
    pub items: Vec<ClipartItem>,
}

/// Read-only view over the configured clipart categories
pub struct ClipartCatalog<'a> {
    categories: &'a [ClipartCategory],
}

impl<'a> ClipartCatalog<'a> {
    pub fn new(categories: &'a [ClipartCategory]) -> Self {
        Self { categories }
    }

    pub fn category_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.categories.iter().map(|category| category.name.as_str())
    }

    /// Items of `category` (every category for `None` or "All") matching `term`
    pub fn search(&self, category: Option<&str>, term: &str) -> Vec<&'a ClipartItem> {
        self.categories
            .iter()
            .filter(|c| match category {
                None => true,
                Some(name) => name == ALL_CATEGORIES || c.name == name,
            })
            .flat_map(|c| c.items.iter())
            .filter(|item| item.matches(term))
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&'a ClipartItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|item| item.id == id)
    }
}

/// Catalog entry backed by the generated icon service
pub(crate) fn generic_clipart(category: &str, name: &str, seed: &str, tags: &[&str]) -> ClipartItem {
    let mut all_tags = vec![name.to_lowercase()];
    all_tags.extend(tags.iter().map(|t| t.to_string()));
    ClipartItem {
        id: format!("clipart-{}", seed),
        name: name.to_owned(),
        src: format!(
            "https://api.dicebear.com/8.x/icons/svg?seed={}&backgroundColor=transparent",
            seed
        ),
        category: category.to_owned(),
        tags: all_tags,
        original_width: None,
        original_height: None,
    }
}
