use std::collections::HashMap;
use std::f64::consts::PI;

use super::types::SectionKey;

/// Arrow angle of an expanded header, in radians.
pub const EXPANDED_RADIANS: f64 = 0.0;
/// Arrow angle of a collapsed header, in radians.
pub const COLLAPSED_RADIANS: f64 = PI;

/// Last known arrow orientation of a header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationRecord {
    pub collapsed: bool,
    pub radians: f64,
}

impl RotationRecord {
    pub fn collapsed() -> Self {
        Self {
            collapsed: true,
            radians: COLLAPSED_RADIANS,
        }
    }

    pub fn expanded() -> Self {
        Self {
            collapsed: false,
            radians: EXPANDED_RADIANS,
        }
    }

    pub fn for_state(collapsed: bool) -> Self {
        if collapsed {
            Self::collapsed()
        } else {
            Self::expanded()
        }
    }
}

/// Presentation cache so a header drawn from scratch shows the arrow it
/// had before, without replaying the rotation.
#[derive(Debug, Clone, Default)]
pub struct RotationCache {
    records: HashMap<SectionKey, RotationRecord>,
}

impl RotationCache {
    pub fn get(&self, key: SectionKey) -> Option<RotationRecord> {
        self.records.get(&key).copied()
    }

    pub fn record(&mut self, key: SectionKey, record: RotationRecord) {
        self.records.insert(key, record);
    }

    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(SectionKey) -> bool,
    {
        self.records.retain(|key, _| f(*key));
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
