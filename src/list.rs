// Ordered composition of transforms

use glam::Mat4;

use crate::transform::{SharedTransform, Transform};

/// Direction in which a [`TransformList`] folds its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// First to last: `T0 * T1 * ... * Tn`.
    #[default]
    Direct,
    /// Last to first: `Tn * ... * T1 * T0`.
    Reverse,
}

/// Multiplies the matrices of its children on every query.
///
/// Children are shared, not copied, so mutating one is visible on the next
/// call to [`Transform::matrix`]. An empty list is the identity.
#[derive(Default, Clone)]
pub struct TransformList {
    items: Vec<SharedTransform>,
    order: Order,
}

impl TransformList {
    pub fn new(order: Order) -> Self {
        Self {
            items: Vec::new(),
            order,
        }
    }

    /// Builds a list from existing children.
    pub fn from_items(items: impl IntoIterator<Item = SharedTransform>, order: Order) -> Self {
        Self {
            items: items.into_iter().collect(),
            order,
        }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn set_order(&mut self, order: Order) {
        self.order = order;
    }

    pub fn push(&mut self, transform: SharedTransform) {
        self.items.push(transform);
    }

    /// Inserts a child at `index`, shifting later ones.
    ///
    /// Panics if `index > len`, like [`Vec::insert`].
    pub fn insert(&mut self, index: usize, transform: SharedTransform) {
        self.items.insert(index, transform);
    }

    /// Removes and returns the child at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<SharedTransform> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SharedTransform> {
        self.items.iter()
    }
}

impl Transform for TransformList {
    fn matrix(&self) -> Mat4 {
        let fold = |acc: Mat4, t: &SharedTransform| acc * t.matrix();
        match self.order {
            Order::Direct => self.items.iter().fold(Mat4::IDENTITY, fold),
            Order::Reverse => self.items.iter().rev().fold(Mat4::IDENTITY, fold),
        }
    }
}

impl std::fmt::Debug for TransformList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformList")
            .field("len", &self.items.len())
            .field("order", &self.order)
            .finish()
    }
}
