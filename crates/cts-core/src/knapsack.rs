//! Exact subset-sum enumeration.
//!
//! Finds every combination of positively weighted items whose weights
//! sum exactly to a target. Worst-case cost is exponential (subset sum
//! is NP-hard); conference-sized inputs keep it cheap in practice.
//!
//! # Algorithm Summary
//!
//! 1. Stable-sort the items descending by weight.
//! 2. For each head position, enumerate combinations that start with
//!    that head: prune the branch when the head outweighs the remaining
//!    goal, emit `{head}` and stop when it matches exactly, otherwise
//!    recurse on the tail with the goal reduced by the head's weight.
//! 3. Concatenate per-head results in head-index order, which makes the
//!    output sequence deterministic.
//!
//! The prune in step 2 is deliberately scoped to the examined head
//! only: heads further down the sorted list are still tried on their
//! own. Tightening it would change which combination is found first,
//! and the morning-session scheduler picks exactly that one.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::error::ValidationError;
use crate::weight::{Weight, Weighable};

/// A non-empty group of items with a known total weight.
///
/// Order within a combination is irrelevant to callers; it reflects
/// the search order (heaviest head first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination<T: Weighable> {
    items: Vec<T>,
    total: T::Weight,
}

impl<T: Weighable + Clone> Combination<T> {
    fn single(item: T) -> Self {
        let total = item.weight();
        Self {
            items: vec![item],
            total,
        }
    }

    /// Concatenates two combinations into a new one.
    fn union(&self, other: &Self) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + other.items.len());
        items.extend(self.items.iter().cloned());
        items.extend(other.items.iter().cloned());
        Self {
            items,
            total: self.total + other.total,
        }
    }

    /// The items making up this combination.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the combination, yielding its items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// The sum of all item weights, computed at construction.
    pub fn total_weight(&self) -> T::Weight {
        self.total
    }
}

/// Enumerates every combination of `items` whose weights sum exactly
/// to `goal`.
///
/// An empty result is a valid answer (no exact subset exists), not a
/// failure. Errors are reserved for malformed input: a non-positive
/// goal, an empty item collection, or any non-positive item weight.
///
/// Independent top-level head branches run in parallel; results are
/// collected in head-index order, so the output sequence is identical
/// to a sequential scan.
pub fn combinations_summing_to<T>(
    items: &[T],
    goal: T::Weight,
) -> Result<Vec<Combination<T>>, ValidationError>
where
    T: Weighable + Clone + Send + Sync,
    T::Weight: Send + Sync,
{
    if !goal.is_positive() {
        return Err(ValidationError::NonPositiveGoal);
    }
    if items.is_empty() {
        return Err(ValidationError::NoItems);
    }
    if items.iter().any(|item| !item.weight().is_positive()) {
        return Err(ValidationError::NonPositiveWeight);
    }

    let mut sorted = items.to_vec();
    // Stable sort: equal weights keep the caller's order.
    sorted.sort_by(|a, b| b.weight().cmp(&a.weight()));

    let per_head: Vec<Vec<Combination<T>>> = (0..sorted.len())
        .into_par_iter()
        .map(|start| combinations_from_head(&sorted[start..], goal))
        .collect();
    Ok(per_head.into_iter().flatten().collect())
}

/// Sequential enumeration over every head position of `items`.
fn all_combinations<T: Weighable + Clone>(items: &[T], goal: T::Weight) -> Vec<Combination<T>> {
    (0..items.len())
        .flat_map(|start| combinations_from_head(&items[start..], goal))
        .collect()
}

/// Combinations that start with the first item of the non-empty slice.
fn combinations_from_head<T: Weighable + Clone>(
    items: &[T],
    goal: T::Weight,
) -> Vec<Combination<T>> {
    let head = &items[0];
    match head.weight().cmp(&goal) {
        // Too heavy for the remaining goal: this head cannot participate.
        Ordering::Greater => Vec::new(),
        // Exact match terminates the branch; no deeper search at this head.
        Ordering::Equal => vec![Combination::single(head.clone())],
        Ordering::Less => {
            let remaining_goal = goal - head.weight();
            let head_combination = Combination::single(head.clone());
            all_combinations(&items[1..], remaining_goal)
                .iter()
                .map(|sub| head_combination.union(sub))
                .collect()
        }
    }
}
