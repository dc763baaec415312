use serde::Serialize;

use crate::Company;

use super::grid::Cell;

/// Ownership record for one body segment.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "kind")]
pub enum PortfolioSlot {
    Empty,
    Holding { company: Company, cost_basis: i64 },
}

impl PortfolioSlot {
    #[must_use]
    pub fn is_holding(&self) -> bool {
        matches!(self, PortfolioSlot::Holding { .. })
    }
}

/// One cell of the snake together with the position it represents.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub cell: Cell,
    pub slot: PortfolioSlot,
}

/// The snake body and portfolio as a single sequence of cell/slot pairs,
/// index 0 the head. Slots are indexed by distance from the head: plain
/// movement shifts the cells through the pairs and leaves the slots in
/// place, so a position keeps its rank behind the head until a trade
/// inserts or splices a pair. The two sequences share one length and one
/// index space, so they can never drift out of step.
#[derive(Clone, Debug, Default)]
pub struct Body {
    segments: Vec<Segment>,
}

impl Body {
    pub(super) fn spawn(head: Cell, length: usize) -> Self {
        let segments = (0..length as i32)
            .map(|i| Segment {
                cell: Cell::new(head.x - i, head.y),
                slot: PortfolioSlot::Empty,
            })
            .collect();
        Self { segments }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn head(&self) -> Option<Cell> {
        self.segments.first().map(|s| s.cell)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Self-collision probe. The tail is excluded: it vacates its cell on
    /// the same tick the head would enter it.
    #[must_use]
    pub(super) fn would_collide(&self, cell: Cell) -> bool {
        let occupied = self.segments.len().saturating_sub(1);
        self.segments[..occupied].iter().any(|s| s.cell == cell)
    }

    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.iter().any(|s| s.cell == cell)
    }

    pub(super) fn push_front(&mut self, cell: Cell, slot: PortfolioSlot) {
        self.segments.insert(0, Segment { cell, slot });
    }

    /// Plain movement: the head takes `next`, every other cell shifts one
    /// segment tailward and the old tail cell is dropped. Slots stay at
    /// their indices, so holdings are untouched by movement.
    pub(super) fn advance(&mut self, next: Cell) {
        for i in (1..self.segments.len()).rev() {
            self.segments[i].cell = self.segments[i - 1].cell;
        }
        if let Some(head) = self.segments.first_mut() {
            head.cell = next;
        }
    }

    pub(super) fn remove(&mut self, index: usize) -> Segment {
        self.segments.remove(index)
    }

    /// Tail-to-head scan for a holding, never considering the head slot.
    pub(super) fn rfind_holding<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(&Company) -> bool,
    {
        self.segments
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .find(|(_, segment)| match &segment.slot {
                PortfolioSlot::Holding { company, .. } => predicate(company),
                PortfolioSlot::Empty => false,
            })
            .map(|(i, _)| i)
    }

    /// Every held company, head included (the spawner draws sell targets
    /// from this set).
    pub(super) fn holdings(&self) -> Vec<&Company> {
        self.segments
            .iter()
            .filter_map(|s| match &s.slot {
                PortfolioSlot::Holding { company, .. } => Some(company),
                PortfolioSlot::Empty => None,
            })
            .collect()
    }

    /// Sums live value and stored cost basis over all holdings. Returns
    /// `(current_value, current_value - cost_basis)`; the wallet is not
    /// part of current value.
    #[must_use]
    pub(super) fn valuate(&self, live: impl Fn(&Company) -> i64) -> (i64, i64) {
        let mut current = 0;
        let mut cost = 0;
        for segment in &self.segments {
            if let PortfolioSlot::Holding { company, cost_basis } = &segment.slot {
                current += live(company);
                cost += cost_basis;
            }
        }
        (current, current - cost)
    }
}
