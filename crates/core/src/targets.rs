//! Drop targets - one fixed bin per category
//!
//! Targets are laid out once and never move. Lookups walk them in registration
//! order and the first box containing the point wins, even when boxes overlap.

use tui_sort_types::{CategoryId, Layout, Point, Rect};

use crate::catalog::Catalog;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DropTarget {
    pub category: CategoryId,
    pub label: String,
    pub bounds: Rect,
}

impl DropTarget {
    pub fn position(&self) -> Point {
        self.bounds.origin
    }

    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    pub fn accepts(&self, category: CategoryId) -> bool {
        self.category == category
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropTargetSet {
    targets: Vec<DropTarget>,
}

impl DropTargetSet {
    /// One target per catalog category, left to right in catalog order.
    pub fn from_catalog(catalog: &Catalog, layout: &Layout) -> Self {
        let targets = catalog
            .categories
            .iter()
            .enumerate()
            .map(|(i, category)| DropTarget {
                category: CategoryId(i as u16),
                label: category.bin_label().to_string(),
                bounds: Rect::new(layout.bin_position(i), layout.bin_size),
            })
            .collect();
        Self { targets }
    }

    /// Use explicitly placed targets, in the given order.
    pub fn from_targets(targets: Vec<DropTarget>) -> Self {
        Self { targets }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DropTarget> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// First target in registration order whose box contains `p`.
    pub fn target_at(&self, p: Point) -> Option<&DropTarget> {
        self.targets.iter().find(|t| t.contains(p))
    }
}
