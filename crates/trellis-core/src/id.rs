//! Stable identifiers for widgets.

use slotmap::{Key, KeyData, new_key_type};

new_key_type! {
    /// A unique identifier for a widget owned by a menu.
    ///
    /// `WidgetId`s are generational handles: they stay valid while the tree
    /// is rearranged by packing and become stale once the widget is removed.
    /// A stale id is never reused for a different widget.
    pub struct WidgetId;
}

impl WidgetId {
    /// The raw 64-bit representation of this id.
    ///
    /// Useful for logging and for embedding the id in user-facing names.
    #[inline]
    pub fn as_raw(self) -> u64 {
        self.data().as_ffi()
    }

    /// Rebuild an id from its raw representation.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        KeyData::from_ffi(raw).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_raw_roundtrip_keeps_identity() {
        let mut map: SlotMap<WidgetId, ()> = SlotMap::with_key();
        let a = map.insert(());
        let b = map.insert(());
        assert_ne!(a.as_raw(), b.as_raw());
        assert_eq!(WidgetId::from_raw(a.as_raw()), a);
    }

    #[test]
    fn test_removed_id_is_not_reused() {
        let mut map: SlotMap<WidgetId, ()> = SlotMap::with_key();
        let a = map.insert(());
        map.remove(a);
        let b = map.insert(());
        assert_ne!(a, b);
        assert!(!map.contains_key(a));
    }
}
