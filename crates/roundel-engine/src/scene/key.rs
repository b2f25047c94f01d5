/// Z-layer of a draw item. Higher layers paint over lower ones.
///
/// Layers are picked at push time (`DrawList::push`); shape payloads carry
/// no z of their own.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

/// Paint-order key: layer first, insertion order as the tie-break.
///
/// Field order is load-bearing: the derived ordering compares `z` before
/// `order`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}
