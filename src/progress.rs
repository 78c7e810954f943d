use std::fmt;

use indexmap::IndexMap;

use crate::{Record, Tally};

/// Solved/total tallies by category, by tag and overall.
///
/// Categories and tags keep the order they were first seen in.
#[derive(Clone, Debug, Default)]
pub struct Progress {
    categories: IndexMap<String, Tally>,
    tags: IndexMap<String, Tally>,
    total: Tally,
}

impl Progress {
    pub fn add(&mut self, record: &Record) {
        self.categories
            .entry(record.category.clone())
            .or_default()
            .count(record.solved);

        for tag in record.tags.iter() {
            self.tags.entry(tag.clone()).or_default().count(record.solved);
        }

        self.total.count(record.solved);
    }

    pub fn categories(&self) -> &IndexMap<String, Tally> {
        &self.categories
    }

    pub fn tags(&self) -> &IndexMap<String, Tally> {
        &self.tags
    }

    /// Tally over all records.
    pub fn total(&self) -> Tally {
        self.total
    }
}

impl Extend<Record> for Progress {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        for record in iter {
            self.add(&record);
        }
    }
}

impl FromIterator<Record> for Progress {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut ret = Progress::default();
        ret.extend(iter);
        ret
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (category, tally) in &self.categories {
            writeln!(f, "{category}: {tally}")?;
        }
        // Single blank line between sections, also after the categories.
        writeln!(f)?;

        for (tag, tally) in &self.tags {
            writeln!(f, "{tag}: {tally}")?;
        }
        writeln!(f)?;

        writeln!(f, "Total: {}", self.total)
    }
}
