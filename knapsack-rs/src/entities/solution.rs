use crate::entities::Item;

/// Optimal selection for the 0/1 knapsack problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZeroOneSolution {
    /// Sum of the values of all included items
    pub value: u64,
    /// `included[i]` is true if the item at position `i` of the input slice was taken
    pub included: Vec<bool>,
}

impl ZeroOneSolution {
    /// Solution which takes none of the `n_items` items.
    pub fn empty(n_items: usize) -> Self {
        Self {
            value: 0,
            included: vec![false; n_items],
        }
    }

    /// Iterates over the taken items, in input order.
    pub fn included_items<'a>(&'a self, items: &'a [Item]) -> impl Iterator<Item = &'a Item> + 'a {
        debug_assert_eq!(items.len(), self.included.len());
        items
            .iter()
            .zip(self.included.iter())
            .filter(|(_, incl)| **incl)
            .map(|(item, _)| item)
    }

    pub fn n_included(&self) -> usize {
        self.included.iter().filter(|incl| **incl).count()
    }

    pub fn total_weight(&self, items: &[Item]) -> u64 {
        self.included_items(items).map(|item| item.weight).sum()
    }
}

/// Portion of a single item taken in a fractional solution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractionalChoice {
    pub item: Item,
    /// In the range (0.0, 1.0]
    pub fraction: f64,
}

impl FractionalChoice {
    pub fn new(item: Item, fraction: f64) -> Self {
        debug_assert!(fraction > 0.0 && fraction <= 1.0, "fraction out of range: {fraction}");
        Self { item, fraction }
    }

    pub fn is_whole(&self) -> bool {
        self.fraction == 1.0
    }

    pub fn value(&self) -> f64 {
        self.item.value as f64 * self.fraction
    }

    pub fn weight(&self) -> f64 {
        self.item.weight as f64 * self.fraction
    }
}

/// Optimal selection for the fractional knapsack problem.
#[derive(Clone, Debug, PartialEq)]
pub struct FractionalSolution {
    pub value: f64,
    /// Choices in the order the items were consumed (descending value/weight ratio)
    pub choices: Vec<FractionalChoice>,
}

impl FractionalSolution {
    pub fn empty() -> Self {
        Self {
            value: 0.0,
            choices: vec![],
        }
    }

    /// The only choice that takes less than the whole item, if any.
    pub fn split_choice(&self) -> Option<&FractionalChoice> {
        self.choices.last().filter(|c| !c.is_whole())
    }

    pub fn total_weight(&self) -> f64 {
        self.choices.iter().map(|c| c.weight()).sum()
    }
}
