use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed set of item categories offered by the report form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Watch,
    Wallet,
    Phone,
    Jacket,
    Shirt,
    Bag,
    Laptop,
    Cap,
    Card,
    Others,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Watch,
        Category::Wallet,
        Category::Phone,
        Category::Jacket,
        Category::Shirt,
        Category::Bag,
        Category::Laptop,
        Category::Cap,
        Category::Card,
        Category::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Watch => "Watch",
            Category::Wallet => "Wallet",
            Category::Phone => "Phone",
            Category::Jacket => "Jacket",
            Category::Shirt => "Shirt",
            Category::Bag => "Bag",
            Category::Laptop => "Laptop",
            Category::Cap => "Cap",
            Category::Card => "Card",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Which collection an item record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Lost,
    Found,
}

impl ItemKind {
    /// Name of the backing collection / REST path segment.
    pub fn collection(&self) -> &'static str {
        match self {
            ItemKind::Lost => "lost",
            ItemKind::Found => "found",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

/// A lost-or-found record. Created on submission, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub location: String,
    pub contact: String,
    #[serde(rename = "Category")]
    pub category: Category,
    /// Calendar date of submission, ISO `YYYY-MM-DD`.
    pub date: String,
    #[serde(rename = "imageURL", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Registration number of the reporting user.
    pub added_by: String,
}

/// A fully resolved record ready for insertion; the store assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub location: String,
    pub contact: String,
    pub category: Category,
    pub date: String,
    pub image_url: Option<String>,
    pub added_by: String,
}

/// An image file attached to a report form.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Raw report form input, before validation and image resolution.
#[derive(Debug, Clone, Default)]
pub struct ReportForm {
    pub name: String,
    pub description: String,
    pub location: String,
    pub contact: String,
    pub category: String,
    pub image: Option<UploadedImage>,
}
