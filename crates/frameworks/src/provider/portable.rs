//! Portable profile inference.
//!
//! A portable class library declares the set of frameworks it runs on; the profile number is
//! recovered by comparing that set with the required frameworks of every known profile. Each
//! required framework may be written as any of its equivalents (`win8` as `netcore45`), so every
//! profile is expanded once, at construction, into all the sets it can be spelled as.
use std::collections::{HashMap, HashSet};

use super::NameProvider;
use crate::Framework;
use crate::framework::FrameworkKey;

/// Profiles with more members than this are not expanded; the expansion grows as the product
/// of each member's equivalence set.
const MAX_PROFILE_ARITY: usize = 8;

impl NameProvider {
    pub(super) fn compute_permutations(&mut self) {
        let mut permutations = HashMap::new();

        for (number, frameworks) in &self.portable {
            if frameworks.len() > MAX_PROFILE_ARITY {
                tracing::warn!(
                    profile = number,
                    members = frameworks.len(),
                    max = MAX_PROFILE_ARITY,
                    "skipping portable profile with too many members"
                );
                continue;
            }

            let choices: Vec<Vec<FrameworkKey>> = frameworks
                .iter()
                .map(|fw| {
                    self.all_equivalent_frameworks(fw)
                        .iter()
                        .map(Framework::key)
                        .collect()
                })
                .collect();

            let mut sets = Vec::new();
            permute(&choices, &mut Vec::with_capacity(choices.len()), &mut sets);
            permutations.insert(*number, sets);
        }

        self.permutations = permutations;
    }

    /// Finds the portable profile whose required frameworks match `frameworks`.
    ///
    /// Equivalent inputs count once, and inputs covered by one of a profile's optional
    /// frameworks (same name, equal or higher version) are ignored for that profile. Profiles are
    /// tried in declaration order and the first exact match wins.
    pub fn portable_profile(&self, frameworks: &[Framework]) -> Option<u32> {
        let input = self.distinct_frameworks(frameworks);

        for (number, required) in &self.portable {
            if required.len() > input.len() {
                continue;
            }
            let Some(permutations) = self.permutations.get(number) else {
                continue;
            };

            let optional = self.optional_frameworks(*number);
            let reduced: HashSet<FrameworkKey> = input
                .iter()
                .filter(|fw| {
                    !optional
                        .iter()
                        .any(|opt| opt.same_name(fw) && fw.version() >= opt.version())
                })
                .map(|fw| fw.key())
                .collect();

            if permutations.contains(&reduced) {
                tracing::trace!(profile = number, "matched portable profile");
                return Some(*number);
            }
        }

        tracing::trace!(?frameworks, "no portable profile matches");
        None
    }

    /// Drops frameworks equivalent to one already kept.
    fn distinct_frameworks<'a>(&self, frameworks: &'a [Framework]) -> Vec<&'a Framework> {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();

        for fw in frameworks {
            if seen.contains(&fw.key()) {
                continue;
            }
            seen.extend(
                self.all_equivalent_frameworks(fw)
                    .iter()
                    .map(Framework::key),
            );
            kept.push(fw);
        }

        kept
    }
}

/// Collects every set formed by picking one key from each entry of `choices`.
fn permute(
    choices: &[Vec<FrameworkKey>],
    current: &mut Vec<FrameworkKey>,
    out: &mut Vec<HashSet<FrameworkKey>>,
) {
    match choices.split_first() {
        None => out.push(current.iter().cloned().collect()),
        Some((head, rest)) => {
            for key in head {
                current.push(key.clone());
                permute(rest, current, out);
                current.pop();
            }
        },
    }
}
