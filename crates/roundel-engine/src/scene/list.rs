use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame
///   allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Returns indices into `items` in paint order (back-to-front).
    ///
    /// This buffer is owned by `DrawList` and reused across frames.
    pub fn indices_in_paint_order(&mut self) -> &[usize] {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        &self.sorted_indices
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::CircleCmd;

    fn disc(radius: f32) -> DrawCmd {
        DrawCmd::Circle(CircleCmd::disc(Vec2::zero(), radius, Color::white()))
    }

    fn radii_in_paint_order(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| {
                let DrawCmd::Circle(c) = &item.cmd;
                c.radius
            })
            .collect()
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn equal_z_preserves_insertion_order() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(0), disc(1.0));
        list.push(ZIndex::new(0), disc(2.0));
        list.push(ZIndex::new(0), disc(3.0));
        assert_eq!(radii_in_paint_order(&mut list), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn lower_z_paints_first() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(5), disc(1.0));
        list.push(ZIndex::new(-1), disc(2.0));
        list.push(ZIndex::new(0), disc(3.0));
        assert_eq!(radii_in_paint_order(&mut list), vec![2.0, 3.0, 1.0]);
    }

    #[test]
    fn push_after_iteration_resorts() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(1), disc(1.0));
        let _ = list.indices_in_paint_order();
        list.push(ZIndex::new(0), disc(2.0));
        assert_eq!(radii_in_paint_order(&mut list), vec![2.0, 1.0]);
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_resets_order_counter() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(0), disc(1.0));
        list.clear();
        assert!(list.is_empty());

        list.push(ZIndex::new(0), disc(9.0));
        assert_eq!(list.items()[0].key.order, 0);
    }
}
