//! Problem instance and objective evaluation.

/// A packing vector. `solution[i] == true` means item `i` is packed.
///
/// Bit positions map to item ids, so the order of a solution is as
/// significant as the order of the items it indexes into.
pub type Solution = Vec<bool>;

/// A single knapsack item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Weight contributed when this item is packed.
    pub weight: u64,
    /// Benefit contributed when this item is packed.
    pub benefit: u64,
}

impl Item {
    /// Creates an item from its weight and benefit.
    pub fn new(weight: u64, benefit: u64) -> Self {
        Self { weight, benefit }
    }
}

/// An immutable 0/1 knapsack instance.
///
/// Item order is fixed at construction: bit `i` of a [`Solution`] refers to
/// item `i` for the lifetime of the instance.
///
/// # Examples
///
/// ```
/// use tabu_knapsack::knapsack::Knapsack;
///
/// let sack = Knapsack::from_pairs(&[(4, 2), (5, 2), (7, 3), (9, 4), (6, 4)], 23);
/// assert_eq!(sack.len(), 5);
/// assert!(sack.validate().is_ok());
/// assert_eq!(sack.evaluate(&[true, false, true, false, true]), 9);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knapsack {
    items: Vec<Item>,
    capacity: u64,
}

impl Knapsack {
    /// Creates an instance from its items and capacity.
    pub fn new(items: Vec<Item>, capacity: u64) -> Self {
        Self { items, capacity }
    }

    /// Creates an instance from `(weight, benefit)` pairs and a capacity.
    pub fn from_pairs(pairs: &[(u64, u64)], capacity: u64) -> Self {
        let items = pairs.iter().map(|&(w, b)| Item::new(w, b)).collect();
        Self::new(items, capacity)
    }

    /// Checks that the instance can be searched.
    pub fn validate(&self) -> Result<(), String> {
        if self.items.is_empty() {
            return Err("knapsack instance has no items".into());
        }
        Ok(())
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the instance has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The capacity.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// All items, in id order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Weight of item `i`.
    pub fn weight(&self, i: usize) -> u64 {
        self.items[i].weight
    }

    /// Benefit of item `i`.
    pub fn benefit(&self, i: usize) -> u64 {
        self.items[i].benefit
    }

    /// Total weight of the packed items.
    pub fn total_weight(&self, solution: &[bool]) -> u64 {
        self.items
            .iter()
            .zip(solution)
            .filter(|&(_, &packed)| packed)
            .map(|(item, _)| item.weight)
            .sum()
    }

    /// Total benefit of the packed items.
    pub fn total_benefit(&self, solution: &[bool]) -> u64 {
        self.items
            .iter()
            .zip(solution)
            .filter(|&(_, &packed)| packed)
            .map(|(item, _)| item.benefit)
            .sum()
    }

    /// Penalized objective value of a packing (higher is better).
    ///
    /// `f(s) = total_benefit(s) * (1 - max(0, total_weight(s) - capacity))`,
    /// in exact integer arithmetic. Every unit of weight over capacity
    /// scales the benefit down by one more whole multiple, so the value of
    /// an overweight packing is zero or negative yet still totally ordered
    /// against feasible ones.
    pub fn evaluate(&self, solution: &[bool]) -> i64 {
        let excess = self.total_weight(solution).saturating_sub(self.capacity) as i64;
        self.total_benefit(solution) as i64 * (1 - excess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// The instance used throughout the crate's unit tests.
    fn reference_instance() -> Knapsack {
        Knapsack::from_pairs(&[(4, 2), (5, 2), (7, 3), (9, 4), (6, 4)], 23)
    }

    #[test]
    fn test_total_weight_counts_packed_items_only() {
        let sack = reference_instance();
        assert_eq!(sack.total_weight(&[true, true, true, true, true]), 31);
        assert_eq!(sack.total_weight(&[true, false, true, false, true]), 17);
        assert_eq!(sack.total_weight(&[false, false, false, false, false]), 0);
    }

    #[test]
    fn test_total_benefit_counts_packed_items_only() {
        let sack = reference_instance();
        assert_eq!(sack.total_benefit(&[true, true, true, true, true]), 15);
        assert_eq!(sack.total_benefit(&[true, false, true, false, true]), 9);
        assert_eq!(sack.total_benefit(&[false, false, false, false, false]), 0);
    }

    #[test]
    fn test_evaluate_overweight_packing_goes_negative() {
        // weight 31 exceeds capacity 23 by 8: 15 * (1 - 8) = -105
        let sack = reference_instance();
        assert_eq!(sack.evaluate(&[true, true, true, true, true]), -105);
    }

    #[test]
    fn test_evaluate_feasible_packing_is_plain_benefit() {
        // weight 17 <= 23, no penalty: value is the benefit sum
        let sack = reference_instance();
        assert_eq!(sack.evaluate(&[true, false, true, false, true]), 9);
    }

    #[test]
    fn test_evaluate_at_exact_capacity_has_no_penalty() {
        let sack = Knapsack::from_pairs(&[(10, 7), (13, 5)], 23);
        assert_eq!(sack.evaluate(&[true, true]), 12);
    }

    #[test]
    fn test_evaluate_one_unit_over_capacity_zeroes_the_value() {
        // excess 1 makes the multiplier (1 - 1) = 0
        let sack = Knapsack::from_pairs(&[(12, 7), (12, 5)], 23);
        assert_eq!(sack.evaluate(&[true, true]), 0);
    }

    #[test]
    fn test_evaluate_empty_packing_is_zero() {
        let sack = reference_instance();
        assert_eq!(sack.evaluate(&[false, false, false, false, false]), 0);
    }

    #[test]
    fn test_validate_rejects_empty_instance() {
        let sack = Knapsack::new(vec![], 10);
        assert!(sack.validate().is_err());
        assert!(sack.is_empty());
    }

    #[test]
    fn test_accessors() {
        let sack = reference_instance();
        assert_eq!(sack.capacity(), 23);
        assert_eq!(sack.weight(3), 9);
        assert_eq!(sack.benefit(4), 4);
        assert_eq!(sack.items().len(), 5);
    }

    proptest! {
        #[test]
        fn prop_evaluate_matches_defining_formula(
            rows in prop::collection::vec((0u64..=100, 0u64..=100, any::<bool>()), 1..16),
            capacity in 0u64..=200,
        ) {
            let items: Vec<Item> = rows.iter().map(|&(w, b, _)| Item::new(w, b)).collect();
            let solution: Vec<bool> = rows.iter().map(|&(_, _, packed)| packed).collect();
            let sack = Knapsack::new(items, capacity);

            let weight: i64 = rows
                .iter()
                .filter(|&&(_, _, packed)| packed)
                .map(|&(w, _, _)| w as i64)
                .sum();
            let benefit: i64 = rows
                .iter()
                .filter(|&&(_, _, packed)| packed)
                .map(|&(_, b, _)| b as i64)
                .sum();
            let expected = benefit * (1 - (weight - capacity as i64).max(0));

            prop_assert_eq!(sack.evaluate(&solution), expected);
        }
    }
}
