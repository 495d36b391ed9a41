//! System-include aggregation for the hoisted block.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::core::deps::DepEntry;

/// Union the root's system includes with every dependency's, deduplicated
/// and sorted lexicographically by name.
///
/// The sort makes the hoisted block deterministic regardless of the order
/// the includes were discovered in; callers rely on that, it is not a
/// cosmetic choice.
pub fn hoisted_system_includes(
    root_system: &[String],
    map: &IndexMap<String, DepEntry>,
) -> Vec<String> {
    root_system
        .iter()
        .chain(map.values().flat_map(|entry| entry.system.iter()))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect_vec()
}
