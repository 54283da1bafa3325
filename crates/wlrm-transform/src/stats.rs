use std::collections::{BTreeMap, BTreeSet};

use wlrm_model::ImportTarget;

/// Counts collected while converting one export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformStats {
    /// Rules in the export.
    pub total: usize,
    /// Rules converted to import targets.
    pub kept: usize,
    /// Targets rendered with at least one missing identifier field.
    pub incomplete: usize,
    /// Converted rules per Terraform resource type.
    pub by_resource_type: BTreeMap<String, usize>,
    /// Terraform addresses produced more than once, in first-seen order.
    pub duplicate_addresses: Vec<String>,
    seen_addresses: BTreeSet<String>,
}

impl TransformStats {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Rules dropped as unsupported.
    pub fn dropped(&self) -> usize {
        self.total.saturating_sub(self.kept)
    }

    pub fn has_duplicates(&self) -> bool {
        !self.duplicate_addresses.is_empty()
    }

    pub(crate) fn record(&mut self, target: &ImportTarget, incomplete: bool) {
        self.kept += 1;
        if incomplete {
            self.incomplete += 1;
        }
        *self
            .by_resource_type
            .entry(target.resource_type.clone())
            .or_insert(0) += 1;
        let address = target.address();
        if !self.seen_addresses.insert(address.clone())
            && !self.duplicate_addresses.contains(&address)
        {
            self.duplicate_addresses.push(address);
        }
    }
}
