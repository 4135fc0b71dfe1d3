use crate::command::{Command, CommandOutcome};
use crate::model::{AddOutcome, DeleteOutcome, Item, ToggleOutcome};

const SEED_TITLES: [&str; 4] = ["Learn Rust", "Read a book", "Exercise", "Cook dinner"];

/// Owns the ordered item collection and applies the three mutations.
///
/// Ids come from a monotonic counter, so they stay unique even after
/// deletions. Every operation is an O(n) scan over the collection, which is
/// fine at interactive list-editing scale.
#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Vec<Item>,
    next_id: u64,
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a store from existing items, resuming the id counter past the
    /// highest id present.
    pub fn with_items(items: Vec<Item>) -> Self {
        let next_id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        Self { items, next_id }
    }

    /// The fixed starter list shown on launch: four pending items, ids 1-4.
    pub fn seeded() -> Self {
        let items = SEED_TITLES
            .iter()
            .zip(1u64..)
            .map(|(title, id)| Item::new(id, *title))
            .collect();
        Self::with_items(items)
    }

    /// Apply one command and report what happened. This is the single
    /// transition entry point; the collection never changes any other way.
    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::Add { title } => match self.add(&title) {
                Some(outcome) => CommandOutcome::Added(outcome),
                None => CommandOutcome::Rejected,
            },
            Command::Toggle { id } => CommandOutcome::Toggled(self.toggle(id)),
            Command::Delete { id } => CommandOutcome::Deleted(self.delete(id)),
        }
    }

    /// Append a new pending item with the trimmed title. Titles that are
    /// empty after trimming are rejected and the collection is untouched.
    pub fn add(&mut self, title: &str) -> Option<AddOutcome> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Item::new(id, trimmed));
        Some(AddOutcome {
            id,
            title: trimmed.to_string(),
        })
    }

    /// Flip the completion flag of the matching item. Unknown ids are a
    /// no-op reported through `changed`.
    pub fn toggle(&mut self, id: u64) -> ToggleOutcome {
        let changed = match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.done = !item.done;
                true
            }
            None => false,
        };
        ToggleOutcome { id, changed }
    }

    /// Remove the matching item; everything else keeps its relative order.
    pub fn delete(&mut self, id: u64) -> DeleteOutcome {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        DeleteOutcome {
            id,
            deleted: self.items.len() < before,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items not yet completed, in collection order. Recomputed fresh on
    /// every call so the projection can never drift from the collection.
    pub fn pending(&self) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| !item.done)
            .cloned()
            .collect()
    }

    /// Completed items, in collection order. Recomputed fresh on every call.
    pub fn completed(&self) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| item.done)
            .cloned()
            .collect()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn ids(items: &[Item]) -> Vec<u64> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn seeded_store_starts_with_four_pending_items() {
        let store = ItemStore::seeded();
        assert_eq!(store.len(), 4);
        assert_eq!(ids(store.items()), vec![1, 2, 3, 4]);
        assert!(store.items().iter().all(|item| !item.done));
        assert_eq!(store.completed().len(), 0);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n  ")]
    fn blank_titles_are_rejected(#[case] title: &str) {
        let mut store = ItemStore::seeded();
        let before = store.items().to_vec();

        assert_eq!(store.add(title), None);
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn add_trims_and_appends_a_pending_item() {
        let mut store = ItemStore::new();
        let outcome = store.add("  Write tests  ").unwrap();

        assert_eq!(outcome.title, "Write tests");
        assert_eq!(store.len(), 1);
        let item = store.get(outcome.id).unwrap();
        assert_eq!(item.title, "Write tests");
        assert!(!item.done);
    }

    #[test]
    fn ids_stay_unique_after_deletions() {
        let mut store = ItemStore::new();
        let first = store.add("one").unwrap().id;
        let second = store.add("two").unwrap().id;
        store.delete(first);
        let third = store.add("three").unwrap().id;

        assert_ne!(third, first);
        assert_ne!(third, second);
        assert_eq!(ids(store.items()), vec![second, third]);
    }

    #[test]
    fn toggle_twice_restores_the_flag_and_order() {
        let mut store = ItemStore::seeded();
        let before = store.items().to_vec();

        assert!(store.toggle(2).changed);
        assert!(store.get(2).unwrap().done);
        assert_eq!(ids(store.items()), ids(&before));

        assert!(store.toggle(2).changed);
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn toggle_unknown_id_is_a_noop() {
        let mut store = ItemStore::seeded();
        let before = store.items().to_vec();

        let outcome = store.toggle(99);
        assert!(!outcome.changed);
        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn delete_preserves_relative_order_of_the_rest() {
        let mut store = ItemStore::seeded();
        let outcome = store.delete(2);

        assert!(outcome.deleted);
        assert_eq!(ids(store.items()), vec![1, 3, 4]);

        let missing = store.delete(2);
        assert!(!missing.deleted);
        assert_eq!(ids(store.items()), vec![1, 3, 4]);
    }

    #[test]
    fn projections_partition_the_collection_in_order() {
        let mut store = ItemStore::seeded();
        store.toggle(1);
        store.toggle(3);

        let pending = store.pending();
        let completed = store.completed();

        assert_eq!(pending.len() + completed.len(), store.len());
        assert_eq!(ids(&pending), vec![2, 4]);
        assert_eq!(ids(&completed), vec![1, 3]);
        assert!(pending.iter().all(|item| !item.done));
        assert!(completed.iter().all(|item| item.done));
    }

    #[test]
    fn apply_dispatches_and_reports_mutation() {
        let mut store = ItemStore::new();

        let added = store.apply(Command::add("Plan the week"));
        assert!(added.mutated());
        let id = match added {
            CommandOutcome::Added(outcome) => outcome.id,
            other => panic!("expected Added, got {other:?}"),
        };

        assert!(store.apply(Command::Toggle { id }).mutated());
        assert!(!store.apply(Command::Toggle { id: id + 50 }).mutated());
        assert_eq!(store.apply(Command::add("  ")), CommandOutcome::Rejected);
        assert!(store.apply(Command::Delete { id }).mutated());
        assert!(store.is_empty());
    }

    // Walkthrough over the seeded list: add, complete one, delete one,
    // then a blank add that must change nothing.
    #[test]
    fn seeded_walkthrough() {
        let mut store = ItemStore::seeded();

        let added = store.add("Write tests").unwrap();
        assert_eq!(added.id, 5);
        assert_eq!(store.len(), 5);
        assert_eq!(store.pending().len(), 5);

        store.toggle(2);
        assert!(store.get(2).unwrap().done);
        assert_eq!(store.pending().len(), 4);
        assert_eq!(store.completed().len(), 1);

        store.delete(1);
        assert_eq!(store.len(), 4);
        assert_eq!(ids(store.items()), vec![2, 3, 4, 5]);

        assert_eq!(store.add("   "), None);
        assert_eq!(store.len(), 4);
    }
}
