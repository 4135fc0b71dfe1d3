use serde::Serialize;

/// A single checklist entry. Ids are assigned by the store and never reused
/// within a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: u64,
    pub title: String,
    pub done: bool,
}

impl Item {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddOutcome {
    pub id: u64,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleOutcome {
    pub id: u64,
    pub changed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteOutcome {
    pub id: u64,
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_items_start_pending() {
        let item = Item::new(7, "Water the plants");
        assert_eq!(item.id, 7);
        assert_eq!(item.title, "Water the plants");
        assert!(!item.done);
    }

    #[test]
    fn item_serializes_with_flat_fields() {
        let item = Item::new(1, "Read a book");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "title": "Read a book", "done": false })
        );
    }
}
