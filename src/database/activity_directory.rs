use serde::{Serialize, Serializer};
use std::collections::HashMap;

use crate::models::ActivityRow;

/// In-memory registry of activities keyed by name.
///
/// Rows keep their seed order; `index` maps a name to its slot. Activities are
/// never added or removed after construction, so slots stay valid for the
/// lifetime of the directory.
#[derive(Debug, Clone, Default)]
pub struct ActivityDirectory {
    rows: Vec<ActivityRow>,
    index: HashMap<String, usize>,
}

impl ActivityDirectory {
    /// Builds a directory from seed rows. A later row with an already-seen
    /// name replaces the earlier one in place, keeping names unique.
    pub fn from_rows(rows: impl IntoIterator<Item = ActivityRow>) -> Self {
        let mut directory = Self::default();
        for row in rows {
            match directory.index.get(&row.name) {
                Some(&slot) => directory.rows[slot] = row,
                None => {
                    directory.index.insert(row.name.clone(), directory.rows.len());
                    directory.rows.push(row);
                }
            }
        }
        directory
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ActivityRow> {
        self.index.get(name).map(|&slot| &self.rows[slot])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ActivityRow> {
        let slot = *self.index.get(name)?;
        self.rows.get_mut(slot)
    }

    /// Snapshot of every activity in seed order.
    pub fn list(&self) -> ActivityListing {
        ActivityListing(self.rows.clone())
    }
}

/// Serializes as a JSON object keyed by activity name, in directory order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityListing(pub Vec<ActivityRow>);

impl ActivityListing {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|row| row.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&ActivityRow> {
        self.0.iter().find(|row| row.name == name)
    }
}

impl Serialize for ActivityListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|row| (row.name.as_str(), row)))
    }
}
