//! Ordered string lists stored as a count key plus indexed entry keys.
//!
//! A list named `Foo` is laid out as `Foo_Count = n` followed by
//! `Foo_0 .. Foo_{n-1}`. Writing is a full overwrite of the count and the
//! first `n` entries.

use super::PreferenceStore;

/// Count key for the tab list.
pub const TABS_COUNT_KEY: &str = "CustomProjectWindow_Count";
/// Entry key prefix for the tab list (`CustomProjectWindow_Path_{i}`).
pub const TABS_ITEM_PREFIX: &str = "CustomProjectWindow_Path_";
/// Count key for the favorites list.
pub const FAVORITES_COUNT_KEY: &str = "CustomProjectWindow_Favorite_Count";
/// Entry key prefix for the favorites list (`CustomProjectWindow_Favorite_{i}`).
pub const FAVORITES_ITEM_PREFIX: &str = "CustomProjectWindow_Favorite_";

/// Writes `items` under `count_key` and `{item_prefix}{i}`.
pub fn write_string_list<S, T>(store: &mut S, count_key: &str, item_prefix: &str, items: &[T])
where
    S: PreferenceStore + ?Sized,
    T: AsRef<str>,
{
    let count = i64::try_from(items.len()).unwrap_or(i64::MAX);
    store.set_int(count_key, count);
    for (i, item) in items.iter().enumerate() {
        store.set_string(&format!("{item_prefix}{i}"), item.as_ref());
    }
}

/// Consecutive missing entries after which a stored count is treated as
/// corrupt and reading stops.
const MAX_MISSING_RUN: usize = 64;

/// Reads a list written by [`write_string_list`].
///
/// A missing, zero or negative count yields an empty list. Entries that are
/// missing or empty are skipped. Reading stops early after
/// [`MAX_MISSING_RUN`] missing entries in a row, so an oversized count
/// costs at most that many lookups past the last real entry.
pub fn read_string_list<S>(store: &S, count_key: &str, item_prefix: &str) -> Vec<String>
where
    S: PreferenceStore + ?Sized,
{
    let count = store.get_int(count_key, 0);
    if count <= 0 {
        return Vec::new();
    }

    let mut items = Vec::new();
    let mut missing_run = 0;
    for i in 0..count {
        let value = store.get_string(&format!("{item_prefix}{i}"), "");
        if value.is_empty() {
            missing_run += 1;
            if missing_run >= MAX_MISSING_RUN {
                tracing::warn!("{count_key} = {count} but entries stop near index {i}");
                break;
            }
            continue;
        }
        missing_run = 0;
        items.push(value);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPreferences;

    #[test]
    fn write_uses_count_and_indexed_keys() {
        let mut store = MemoryPreferences::new();
        write_string_list(&mut store, TABS_COUNT_KEY, TABS_ITEM_PREFIX, &["/a", "/b"]);

        assert_eq!(store.get_int("CustomProjectWindow_Count", -1), 2);
        assert_eq!(store.get_string("CustomProjectWindow_Path_0", ""), "/a");
        assert_eq!(store.get_string("CustomProjectWindow_Path_1", ""), "/b");
    }

    #[test]
    fn round_trip_preserves_order() {
        let mut store = MemoryPreferences::new();
        let items = vec!["/z".to_string(), "/a".to_string(), "/m".to_string()];
        write_string_list(&mut store, FAVORITES_COUNT_KEY, FAVORITES_ITEM_PREFIX, &items);

        let read = read_string_list(&store, FAVORITES_COUNT_KEY, FAVORITES_ITEM_PREFIX);
        assert_eq!(read, items);
    }

    #[test]
    fn missing_count_reads_empty() {
        let store = MemoryPreferences::new();
        assert!(read_string_list(&store, TABS_COUNT_KEY, TABS_ITEM_PREFIX).is_empty());
    }

    #[test]
    fn zero_and_negative_count_read_empty() {
        let mut store = MemoryPreferences::new();
        store.set_string("CustomProjectWindow_Path_0", "/a");

        store.set_int(TABS_COUNT_KEY, 0);
        assert!(read_string_list(&store, TABS_COUNT_KEY, TABS_ITEM_PREFIX).is_empty());

        store.set_int(TABS_COUNT_KEY, -4);
        assert!(read_string_list(&store, TABS_COUNT_KEY, TABS_ITEM_PREFIX).is_empty());
    }

    #[test]
    fn empty_and_missing_entries_are_skipped() {
        let mut store = MemoryPreferences::new();
        store.set_int(TABS_COUNT_KEY, 4);
        store.set_string("CustomProjectWindow_Path_0", "/a");
        store.set_string("CustomProjectWindow_Path_1", "");
        // index 2 missing entirely
        store.set_string("CustomProjectWindow_Path_3", "/d");

        let read = read_string_list(&store, TABS_COUNT_KEY, TABS_ITEM_PREFIX);
        assert_eq!(read, vec!["/a".to_string(), "/d".to_string()]);
    }

    #[test]
    fn oversized_count_stops_after_last_entry() {
        let mut store = MemoryPreferences::new();
        store.set_int(TABS_COUNT_KEY, i64::MAX);
        store.set_string("CustomProjectWindow_Path_0", "/a");
        store.set_string("CustomProjectWindow_Path_1", "/b");

        let read = read_string_list(&store, TABS_COUNT_KEY, TABS_ITEM_PREFIX);
        assert_eq!(read, vec!["/a".to_string(), "/b".to_string()]);
    }

    #[test]
    fn oversized_count_without_entries_reads_empty() {
        let mut store = MemoryPreferences::new();
        store.set_int(FAVORITES_COUNT_KEY, 20_000_000);

        assert!(read_string_list(&store, FAVORITES_COUNT_KEY, FAVORITES_ITEM_PREFIX).is_empty());
    }

    #[test]
    fn shorter_rewrite_is_bounded_by_count() {
        let mut store = MemoryPreferences::new();
        write_string_list(&mut store, TABS_COUNT_KEY, TABS_ITEM_PREFIX, &["/a", "/b", "/c"]);
        write_string_list(&mut store, TABS_COUNT_KEY, TABS_ITEM_PREFIX, &["/x"]);

        let read = read_string_list(&store, TABS_COUNT_KEY, TABS_ITEM_PREFIX);
        assert_eq!(read, vec!["/x".to_string()]);
    }

    #[test]
    fn tabs_and_favorites_do_not_collide() {
        let mut store = MemoryPreferences::new();
        write_string_list(&mut store, TABS_COUNT_KEY, TABS_ITEM_PREFIX, &["/tab"]);
        write_string_list(&mut store, FAVORITES_COUNT_KEY, FAVORITES_ITEM_PREFIX, &["/fav"]);

        assert_eq!(
            read_string_list(&store, TABS_COUNT_KEY, TABS_ITEM_PREFIX),
            vec!["/tab".to_string()]
        );
        assert_eq!(
            read_string_list(&store, FAVORITES_COUNT_KEY, FAVORITES_ITEM_PREFIX),
            vec!["/fav".to_string()]
        );
    }
}
