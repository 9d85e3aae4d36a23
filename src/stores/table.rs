use crate::models::item::{Category, Item, ItemDraft};
use crate::models::user::User;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory rendition of the managed table store the direct-store mode
/// queries: named collections with row-level select/insert primitives.
/// Collections mirror the hosted schema: `users`, `lost`, `found`,
/// `category_defaults`, plus `sessions` for server-issued tokens.
pub struct TableStore {
    users: DashMap<String, User>,
    lost: ItemTable,
    found: ItemTable,
    category_defaults: DashMap<Category, String>,
    sessions: DashMap<String, String>,
}

/// One of the two item collections. Insertion order is retained so fetches
/// can return newest first, matching the upstream `created_at desc` query.
struct ItemTable {
    rows: DashMap<u64, Item>,
    next_id: AtomicU64,
}

impl ItemTable {
    fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    fn insert(&self, draft: &ItemDraft) -> Item {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = Item {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            location: draft.location.clone(),
            contact: draft.contact.clone(),
            category: draft.category,
            date: draft.date.clone(),
            image_url: draft.image_url.clone(),
            added_by: draft.added_by.clone(),
        };
        self.rows.insert(id, item.clone());
        item
    }

    fn select_all_newest_first(&self) -> Vec<Item> {
        let mut items: Vec<Item> = self.rows.iter().map(|e| e.value().clone()).collect();
        items.sort_by(|a, b| b.id.cmp(&a.id));
        items
    }
}

impl TableStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            lost: ItemTable::new(),
            found: ItemTable::new(),
            category_defaults: DashMap::new(),
            sessions: DashMap::new(),
        }
    }

    fn item_table(&self, collection: &str) -> &ItemTable {
        match collection {
            "lost" => &self.lost,
            _ => &self.found,
        }
    }

    // users

    /// Single-row select by registration number.
    pub fn select_user(&self, reg_no: &str) -> Option<User> {
        self.users.get(reg_no).map(|e| e.value().clone())
    }

    /// Unconditional insert. Uniqueness is the caller's existence check;
    /// the store itself enforces nothing.
    pub fn insert_user(&self, user: User) {
        self.users.insert(user.reg_no.clone(), user);
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    // lost / found

    pub fn insert_item(&self, collection: &str, draft: &ItemDraft) -> Item {
        self.item_table(collection).insert(draft)
    }

    pub fn select_items(&self, collection: &str) -> Vec<Item> {
        self.item_table(collection).select_all_newest_first()
    }

    // category_defaults

    pub fn select_category_default(&self, category: Category) -> Option<String> {
        self.category_defaults.get(&category).map(|e| e.value().clone())
    }

    pub fn insert_category_default(&self, category: Category, image_url: String) {
        self.category_defaults.insert(category, image_url);
    }

    pub fn category_default_count(&self) -> usize {
        self.category_defaults.len()
    }

    // sessions

    pub fn insert_session(&self, token: String, reg_no: String) {
        self.sessions.insert(token, reg_no);
    }

    pub fn select_session(&self, token: &str) -> Option<String> {
        self.sessions.get(token).map(|e| e.value().clone())
    }

    pub fn remove_session(&self, token: &str) -> Option<String> {
        self.sessions.remove(token).map(|(_, reg_no)| reg_no)
    }
}

impl Default for TableStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            description: "desc".to_string(),
            location: "Library".to_string(),
            contact: "03001234567".to_string(),
            category: Category::Bag,
            date: "2026-08-23".to_string(),
            image_url: None,
            added_by: "B25ICT0123456".to_string(),
        }
    }

    #[test]
    fn test_items_come_back_newest_first() {
        let store = TableStore::new();
        store.insert_item("lost", &draft("first"));
        store.insert_item("lost", &draft("second"));
        store.insert_item("lost", &draft("third"));

        let items = store.select_items("lost");
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_lost_and_found_are_separate_collections() {
        let store = TableStore::new();
        store.insert_item("lost", &draft("umbrella"));
        store.insert_item("found", &draft("keys"));

        assert_eq!(store.select_items("lost").len(), 1);
        assert_eq!(store.select_items("found").len(), 1);
        assert_eq!(store.select_items("lost")[0].name, "umbrella");
    }

    #[test]
    fn test_user_select_and_insert() {
        let store = TableStore::new();
        assert!(store.select_user("B25ICT0123456").is_none());

        store.insert_user(User {
            reg_no: "B25ICT0123456".to_string(),
            name: "Test".to_string(),
            contact: "0300".to_string(),
            department: "ICT".to_string(),
            password_hash: "hash".to_string(),
        });

        assert!(store.select_user("B25ICT0123456").is_some());
        assert_eq!(store.user_count(), 1);
    }

    #[test]
    fn test_category_default_lookup() {
        let store = TableStore::new();
        assert!(store.select_category_default(Category::Wallet).is_none());

        store.insert_category_default(Category::Wallet, "https://cdn/wallet.jpeg".to_string());
        assert_eq!(
            store.select_category_default(Category::Wallet).unwrap(),
            "https://cdn/wallet.jpeg"
        );
    }

    #[test]
    fn test_session_roundtrip() {
        let store = TableStore::new();
        store.insert_session("tok123".to_string(), "B25ICT0123456".to_string());

        assert_eq!(store.select_session("tok123").unwrap(), "B25ICT0123456");
        assert!(store.remove_session("tok123").is_some());
        assert!(store.select_session("tok123").is_none());
        // Removing again is harmless
        assert!(store.remove_session("tok123").is_none());
    }
}
