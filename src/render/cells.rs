//! Reusable cell objects and per-variant configuration.
//!
//! Cells are pooled value objects keyed by their kind: the host hands the
//! renderer a recycled cell, the renderer fills it from the current item,
//! and at frame end the pool reclaims everything. The renderer never owns
//! cell lifetime.

use std::collections::HashMap;

use crate::model::icons::Icon;
use crate::model::SectionItem;

/// Identifies which reusable cell layout a row needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    ImageTitle,
    TitleSwitch,
    TitleStepper,
}

impl CellKind {
    /// Cell layout for an item. No wildcard arm: a new item variant does
    /// not build until it is mapped to a layout.
    pub fn for_item(item: &SectionItem) -> Self {
        match item {
            SectionItem::Image { .. } => CellKind::ImageTitle,
            SectionItem::Toggle { .. } => CellKind::TitleSwitch,
            SectionItem::Stepper { .. } => CellKind::TitleStepper,
        }
    }
}

/// A reusable visual cell.
///
/// `title` is shared by every kind; the remaining fields are the per-kind
/// payload and stay `None` for kinds that do not use them.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub kind: CellKind,
    pub title: String,
    pub icon: Option<Icon>,
    pub switch_on: Option<bool>,
    pub stepper_value: Option<String>,
}

impl Cell {
    fn new(kind: CellKind) -> Self {
        Self {
            kind,
            title: String::new(),
            icon: None,
            switch_on: None,
            stepper_value: None,
        }
    }

    /// Clear content left over from the previous frame. Keeps the title
    /// allocation around for reuse.
    fn reset(&mut self) {
        self.title.clear();
        self.icon = None;
        self.switch_on = None;
        self.stepper_value = None;
    }
}

/// What the renderer needs from whatever hosts the cells.
pub trait CellHost {
    /// Hand out a cleared, reusable cell of the given kind.
    fn dequeue(&mut self, kind: CellKind) -> &mut Cell;
}

/// In-process cell host: reusable cells keyed by kind.
#[derive(Debug, Default)]
pub struct CellPool {
    cells: HashMap<CellKind, Vec<Cell>>,
    in_use: HashMap<CellKind, usize>,
}

impl CellPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every cell available again. Called once per frame, after the
    /// configured cells have been turned into rows.
    pub fn reclaim(&mut self) {
        for used in self.in_use.values_mut() {
            *used = 0;
        }
    }

    /// Total cells allocated across all kinds.
    pub fn len(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CellHost for CellPool {
    fn dequeue(&mut self, kind: CellKind) -> &mut Cell {
        let bucket = self.cells.entry(kind).or_default();
        let used = self.in_use.entry(kind).or_default();

        if *used == bucket.len() {
            bucket.push(Cell::new(kind));
        }

        let cell = &mut bucket[*used];
        *used += 1;
        cell.reset();
        cell
    }
}

/// Fill a dequeued cell from an item.
///
/// The single dispatch site from model variants to cell content. No
/// fallback arm: every item variant gets its own configuration.
pub fn configure(cell: &mut Cell, item: &SectionItem) {
    match item {
        SectionItem::Image { icon, title } => {
            cell.title.push_str(title);
            cell.icon = Some(icon.clone());
        }
        SectionItem::Toggle { title, enabled } => {
            cell.title.push_str(title);
            cell.switch_on = Some(*enabled);
        }
        SectionItem::Stepper { title } => {
            cell.title.push_str(title);
            cell.stepper_value = Some(title.clone());
        }
    }
}
