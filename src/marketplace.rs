//! Marketplace listings: customer-side browsing and admin moderation.

use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;

use crate::clipart::ALL_CATEGORIES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StickerStatus {
    #[serde(rename = "Pending Approval")]
    Pending,
    Approved,
    Rejected,
    Unlisted,
}

impl StickerStatus {
    pub const ALL: [StickerStatus; 4] = [
        StickerStatus::Pending,
        StickerStatus::Approved,
        StickerStatus::Rejected,
        StickerStatus::Unlisted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StickerStatus::Pending => "Pending Approval",
            StickerStatus::Approved => "Approved",
            StickerStatus::Rejected => "Rejected",
            StickerStatus::Unlisted => "Unlisted",
        }
    }
}

impl fmt::Display for StickerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A listed artist sticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sticker {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub artist_id: String,
    pub artist_name: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub price: f64,
    pub description: String,
    pub status: StickerStatus,
    pub submission_date: NaiveDate,
    #[serde(default)]
    pub approved_date: Option<NaiveDate>,
    pub sales: u32,
}

impl Sticker {
    /// Marks the sticker approved as of `date`
    pub fn approve(&mut self, date: NaiveDate) {
        self.status = StickerStatus::Approved;
        self.approved_date = Some(date);
        info!("✅ Approved sticker {} on {}", self.id, date);
    }

    /// Rejects the sticker; an earlier approval date is kept
    pub fn reject(&mut self) {
        self.status = StickerStatus::Rejected;
        info!("Rejected sticker {}", self.id);
    }

    pub fn unlist(&mut self) {
        self.status = StickerStatus::Unlisted;
        info!("Unlisted sticker {}", self.id);
    }

    /// Category equals `category` or one of the tags does, ignoring case
    pub fn in_category(&self, category: &str) -> bool {
        let category = category.to_lowercase();
        self.category.to_lowercase() == category
            || self.tags.iter().any(|tag| tag.to_lowercase() == category)
    }

    /// Name, artist, category or a tag contains `term`, ignoring case
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.artist_name.to_lowercase().contains(&term)
            || self.category.to_lowercase().contains(&term)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Currently ranked by sales, same as `Popular`
    #[default]
    Relevance,
    Popular,
    Newest,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Relevance,
        SortOrder::Popular,
        SortOrder::Newest,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "Relevance",
            SortOrder::Popular => "Most Popular",
            SortOrder::Newest => "Newest",
            SortOrder::PriceAsc => "Price: Low to High",
            SortOrder::PriceDesc => "Price: High to Low",
        }
    }
}

/// Customer-side category filter and sort
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketplaceQuery {
    /// `None` or "All" shows every category
    pub category: Option<String>,
    pub sort: SortOrder,
}

impl MarketplaceQuery {
    /// Filtered and sorted copy of `stickers`; ties keep their listing order
    pub fn apply<'a>(&self, stickers: &'a [Sticker]) -> Vec<&'a Sticker> {
        let mut result: Vec<&Sticker> = match self.category.as_deref() {
            Some(category) if category != ALL_CATEGORIES => stickers
                .iter()
                .filter(|sticker| sticker.in_category(category))
                .collect(),
            _ => stickers.iter().collect(),
        };

        match self.sort {
            SortOrder::Relevance | SortOrder::Popular => {
                result.sort_by_key(|sticker| Reverse(sticker.sales))
            }
            SortOrder::Newest => result.sort_by_key(|sticker| Reverse(sticker.submission_date)),
            SortOrder::PriceAsc => result.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOrder::PriceDesc => result.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }
        result
    }
}

/// Admin table filter: free-text search plus an optional status
pub fn admin_filter<'a>(
    stickers: &'a [Sticker],
    search: &str,
    status: Option<StickerStatus>,
) -> Vec<&'a Sticker> {
    stickers
        .iter()
        .filter(|sticker| sticker.matches_search(search))
        .filter(|sticker| status.is_none_or(|status| sticker.status == status))
        .collect()
}
