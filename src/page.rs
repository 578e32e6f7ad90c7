//! Page selection and animation timing.
//!
//! The render mode is a pure tagged union computed fresh from the snapshot
//! on every call: a dead or fighting adventurer gets a single static battle
//! page, everyone else gets the configured multi-page cycle. The keyframe
//! arithmetic is generic over any page count, not just the ones currently
//! wired up.

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::snapshot::AdventurerSnapshot;

/// One themed screen of the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    /// Vitals, stats and worn equipment.
    Inventory,
    /// Loose items carried in the bag.
    ItemBag,
    /// Dedicated combat/death screen.
    Battle,
}

/// How a snapshot is paginated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Single static battle page (dead, or a beast is engaged).
    BattleOnly,
    /// The configured page cycle with this many pages.
    Normal(usize),
}

impl RenderMode {
    /// Derive the mode from a snapshot. No memory of prior state:
    /// `health == 0` wins over combat, combat wins over the normal cycle.
    pub fn of(snapshot: &AdventurerSnapshot, config: &RenderConfig) -> RenderMode {
        if snapshot.is_dead() || snapshot.in_combat() {
            RenderMode::BattleOnly
        } else {
            RenderMode::Normal(config.pages.len())
        }
    }

    /// Number of pages in this mode. Always at least 1.
    pub fn page_count(&self) -> usize {
        match self {
            RenderMode::BattleOnly => 1,
            RenderMode::Normal(count) => (*count).max(1),
        }
    }

    /// The page kinds to render, in cycle order.
    pub fn page_kinds(&self, config: &RenderConfig) -> Vec<PageKind> {
        match self {
            RenderMode::BattleOnly => vec![PageKind::Battle],
            RenderMode::Normal(_) => {
                if config.pages.is_empty() {
                    vec![PageKind::Inventory]
                } else {
                    config.pages.clone()
                }
            }
        }
    }
}

/// Timing and positioning for a repeating page cycle.
///
/// Each page is shown for `display_ms`, followed by a `transition_ms`
/// slide to the next page; the final transition returns to the first page,
/// so the cycle loops seamlessly. All keyframe output is computed with
/// integer arithmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCycle {
    pub page_count: usize,
    pub display_ms: u32,
    pub transition_ms: u32,
}

impl PageCycle {
    pub fn new(page_count: usize, display_ms: u32, transition_ms: u32) -> Self {
        Self {
            page_count: page_count.max(1),
            display_ms,
            transition_ms,
        }
    }

    /// Cycle timing from a render configuration.
    pub fn for_config(page_count: usize, config: &RenderConfig) -> Self {
        Self::new(page_count, config.display_ms, config.transition_ms)
    }

    /// Full cycle length: `page_count * (display + transition)`.
    pub fn total_ms(&self) -> u64 {
        self.page_count as u64 * (u64::from(self.display_ms) + u64::from(self.transition_ms))
    }

    /// Static horizontal offset of a page's container within the strip.
    pub fn offset_x(&self, page_index: usize, page_width: u32) -> u64 {
        page_index as u64 * u64::from(page_width)
    }

    /// Whether the cycle needs an animation at all.
    pub fn animates(&self) -> bool {
        self.page_count > 1
    }

    /// SMIL `dur` attribute for the cycle.
    pub fn dur_attr(&self) -> String {
        format!("{}ms", self.total_ms())
    }

    /// SMIL `values` attribute: the strip holds each page, slides one page
    /// width left per transition, and slides back to the first page at the
    /// end of the cycle. `2 * page_count + 1` entries.
    pub fn values_attr(&self, page_width: u32) -> String {
        let mut parts = Vec::with_capacity(2 * self.page_count + 1);
        for index in 0..self.page_count {
            let entry = translate_entry(self.offset_x(index, page_width));
            parts.push(entry.clone());
            parts.push(entry);
        }
        parts.push(translate_entry(0));
        parts.join(";")
    }

    /// SMIL `keyTimes` attribute matching [`values_attr`]: each page holds
    /// from `i*(d+t)` to `i*(d+t)+d`, normalized over the total cycle.
    pub fn key_times_attr(&self) -> String {
        let total = self.total_ms();
        let slot = u64::from(self.display_ms) + u64::from(self.transition_ms);
        let mut parts = Vec::with_capacity(2 * self.page_count + 1);
        for index in 0..self.page_count as u64 {
            parts.push(key_time(index * slot, total));
            parts.push(key_time(index * slot + u64::from(self.display_ms), total));
        }
        parts.push(key_time(total, total));
        parts.join(";")
    }
}

/// One `values` entry: a leftward translation of `offset` pixels.
fn translate_entry(offset: u64) -> String {
    if offset == 0 {
        "0 0".to_string()
    } else {
        format!("-{} 0", offset)
    }
}

/// Normalized keyframe time as a decimal fraction with at most four
/// digits, computed by integer division so repeated calls are byte-equal.
fn key_time(elapsed_ms: u64, total_ms: u64) -> String {
    if elapsed_ms == 0 || total_ms == 0 {
        return "0".to_string();
    }
    if elapsed_ms >= total_ms {
        return "1".to_string();
    }
    let scaled = elapsed_ms * 10_000 / total_ms;
    if scaled == 0 {
        return "0".to_string();
    }
    let mut fraction = format!("{:04}", scaled);
    while fraction.ends_with('0') {
        fraction.pop();
    }
    format!("0.{}", fraction)
}
