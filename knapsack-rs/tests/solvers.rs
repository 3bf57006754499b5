#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use knapsack_rs::entities::{Instance, Item};
    use knapsack_rs::error::KnapsackError;
    use knapsack_rs::solvers::{DpTable, FractionalSolver, ZeroOneSolver};
    use knapsack_rs::util::assertions;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    const N_RANDOM_INSTANCES: usize = 200;

    fn items(pairs: &[(u64, u64)]) -> Vec<Item> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, &(value, weight))| Item::new(i + 1, value, weight))
            .collect()
    }

    /// Best value over all subsets that fit, by enumeration
    fn brute_force(capacity: u64, items: &[Item]) -> u64 {
        (0..1u32 << items.len())
            .filter_map(|mask| {
                let (value, weight) = items
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .fold((0, 0), |(v, w), (_, item)| (v + item.value, w + item.weight));
                (weight <= capacity).then_some(value)
            })
            .max()
            .unwrap_or(0)
    }

    fn random_items(rng: &mut SmallRng, n: usize) -> Vec<Item> {
        (1..=n)
            .map(|i| Item::new(i, rng.random_range(0..=100), rng.random_range(1..=30)))
            .collect()
    }

    #[test_case(&[(60, 10), (100, 20), (120, 30)], 50, 220, &[false, true, true]; "classic")]
    #[test_case(&[], 100, 0, &[]; "no items")]
    #[test_case(&[(50, 30)], 10, 0, &[false]; "single item too heavy")]
    #[test_case(&[(60, 10), (100, 20), (120, 30)], 0, 0, &[false, false, false]; "zero capacity")]
    #[test_case(&[(10, 5), (10, 5)], 5, 10, &[true, false]; "tie keeps the earlier item")]
    #[test_case(&[(5, 4), (4, 3), (3, 2), (2, 1)], 6, 9, &[false, true, true, true]; "many light beat one heavy")]
    #[test_case(&[(0, 1), (7, 7)], 8, 7, &[false, true]; "zero value item is skipped")]
    fn zero_one_scenario(pairs: &[(u64, u64)], capacity: u64, value: u64, included: &[bool]) {
        let items = items(pairs);
        let sol = ZeroOneSolver::solve(capacity, &items).unwrap();
        assert_eq!(sol.value, value);
        assert_eq!(sol.included, included);
    }

    #[test]
    fn classic_fractional() {
        let items = items(&[(60, 10), (100, 20), (120, 30)]);
        let sol = FractionalSolver::solve(50.0, &items).unwrap();

        assert!(approx_eq!(f64, sol.value, 240.0, epsilon = 1e-9));
        let taken = sol
            .choices
            .iter()
            .map(|c| (c.item.index, c.fraction))
            .collect::<Vec<_>>();
        assert_eq!(taken.len(), 3);
        assert_eq!(taken[0], (1, 1.0));
        assert_eq!(taken[1], (2, 1.0));
        assert_eq!(taken[2].0, 3);
        assert!(approx_eq!(f64, taken[2].1, 2.0 / 3.0, epsilon = 1e-12));
        assert_eq!(sol.split_choice().map(|c| c.item.index), Some(3));
    }

    #[test]
    fn single_item_is_split() {
        let items = items(&[(50, 30)]);
        let sol = FractionalSolver::solve(10.0, &items).unwrap();

        assert_eq!(sol.choices.len(), 1);
        assert!(approx_eq!(f64, sol.value, 50.0 / 3.0, epsilon = 1e-9));
        assert_eq!(format!("{:.2}", sol.value), "16.67");
        assert_eq!(format!("{:.4}", sol.choices[0].fraction), "0.3333");
    }

    #[test]
    fn fractional_empty_cases() {
        let some_items = items(&[(60, 10), (100, 20)]);
        let sol = FractionalSolver::solve(0.0, &some_items).unwrap();
        assert!(sol.choices.is_empty());
        assert_eq!(sol.value, 0.0);

        let sol = FractionalSolver::solve(100.0, &[]).unwrap();
        assert!(sol.choices.is_empty());
        assert_eq!(sol.value, 0.0);
    }

    #[test]
    fn fractional_stops_once_full() {
        // exactly fills up with the first two items, the third one is never recorded
        let items = items(&[(30, 10), (40, 20), (10, 10)]);
        let sol = FractionalSolver::solve(30.0, &items).unwrap();
        assert_eq!(sol.choices.len(), 2);
        assert!(sol.choices.iter().all(|c| c.is_whole()));
        assert!(sol.split_choice().is_none());
        assert!(approx_eq!(f64, sol.value, 70.0, epsilon = 1e-9));
    }

    #[test]
    fn subnormal_capacity_records_no_empty_portion() {
        let heavy = items(&[(1, 2)]);
        let sol = FractionalSolver::solve(f64::from_bits(1), &heavy).unwrap();
        assert!(sol.choices.is_empty());
        assert_eq!(sol.value, 0.0);

        // a tiny but representable leftover still yields a portion
        let light_first = items(&[(3, 1), (1, 2)]);
        let sol = FractionalSolver::solve(1.0 + f64::EPSILON, &light_first).unwrap();
        assert_eq!(sol.choices.len(), 2);
        assert!(sol.choices.iter().all(|c| c.fraction > 0.0 && c.fraction <= 1.0));
    }

    #[test]
    fn zero_weight_item_with_huge_value_is_reported_exactly() {
        let items = items(&[(u64::MAX, 0)]);
        assert_eq!(
            ZeroOneSolver::solve(10, &items),
            Err(KnapsackError::InvalidItem {
                index: 1,
                value: u64::MAX as i128,
                weight: 0
            })
        );
    }

    #[test]
    fn equal_ratios_keep_input_order() {
        let items = items(&[(10, 5), (20, 10), (4, 2), (9, 3)]);
        let sol = FractionalSolver::solve(12.0, &items).unwrap();
        let order = sol.choices.iter().map(|c| c.item.index).collect::<Vec<_>>();
        // ratio 3.0 first, then the ratio 2.0 items in input order
        assert_eq!(order, vec![4, 1, 2]);
        assert!(approx_eq!(f64, sol.choices[2].fraction, 0.4, epsilon = 1e-12));
    }

    #[test]
    fn zero_weight_is_rejected() {
        let items = items(&[(60, 10), (5, 0), (120, 30)]);
        let expected = KnapsackError::InvalidItem {
            index: 2,
            value: 5,
            weight: 0,
        };
        assert_eq!(ZeroOneSolver::solve(50, &items), Err(expected.clone()));
        assert_eq!(FractionalSolver::solve(50.0, &items), Err(expected));
    }

    #[test_case(-1.0; "negative")]
    #[test_case(f64::NAN; "nan")]
    #[test_case(f64::INFINITY; "infinite")]
    fn invalid_fractional_capacity(capacity: f64) {
        let items = items(&[(60, 10)]);
        let res = FractionalSolver::solve(capacity, &items);
        assert!(matches!(res, Err(KnapsackError::InvalidCapacity(_))));
    }

    #[test]
    fn capacity_validated_before_items() {
        let items = items(&[(5, 0)]);
        let res = FractionalSolver::solve(-3.0, &items);
        assert!(matches!(res, Err(KnapsackError::InvalidCapacity(c)) if c == -3.0));
    }

    #[test]
    fn oversized_table_is_rejected() {
        let items = items(&[(1, 1)]);
        let res = ZeroOneSolver::solve(u64::MAX, &items);
        assert_eq!(
            res,
            Err(KnapsackError::TableTooLarge {
                n_items: 1,
                capacity: u64::MAX
            })
        );
    }

    #[test]
    fn dp_table_cells() {
        let items = items(&[(60, 10), (100, 20), (120, 30)]);
        let table = DpTable::build(50, &items).unwrap();

        assert_eq!(table.n_items(), 3);
        assert_eq!(table.capacity(), 50);
        assert!((0..=50).all(|w| table.get(0, w) == 0));
        assert_eq!(table.get(1, 9), 0);
        assert_eq!(table.get(1, 10), 60);
        assert_eq!(table.get(2, 30), 160);
        assert_eq!(table.get(3, 40), 180);
        assert_eq!(table.best_value(), 220);
        assert_eq!(table.reconstruct(&items), vec![false, true, true]);
    }

    #[test]
    fn zero_one_matches_brute_force() {
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..N_RANDOM_INSTANCES {
            let n = rng.random_range(0..=15);
            let items = random_items(&mut rng, n);
            let capacity = rng.random_range(0..=150);

            let sol = ZeroOneSolver::solve(capacity, &items).unwrap();
            assert_eq!(sol.value, brute_force(capacity, &items));
            assert!(sol.total_weight(&items) <= capacity);
            assert!(assertions::zero_one_solution_is_consistent(
                capacity, &items, &sol
            ));
        }
    }

    #[test]
    fn fractional_bounds_zero_one() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..N_RANDOM_INSTANCES {
            let n = rng.random_range(0..=15);
            let instance = Instance::new(rng.random_range(0..=200), random_items(&mut rng, n)).unwrap();

            let zo = instance.solve_zero_one().unwrap();
            let fr = instance.solve_fractional().unwrap();

            assert!(fr.value + 1e-9 >= zo.value as f64);
            assert!(fr.total_weight() <= instance.capacity as f64 + 1e-9);
            assert!(fr.choices.iter().rev().skip(1).all(|c| c.is_whole()));
            assert!(fr.choices.iter().filter(|c| !c.is_whole()).count() <= 1);
            assert!(assertions::fractional_solution_is_consistent(
                instance.capacity as f64,
                &fr
            ));
        }
    }

    #[test]
    fn solvers_are_idempotent() {
        let mut rng = SmallRng::seed_from_u64(2);
        let items = random_items(&mut rng, 10);
        let before = items.clone();

        assert_eq!(
            ZeroOneSolver::solve(60, &items),
            ZeroOneSolver::solve(60, &items)
        );
        assert_eq!(
            FractionalSolver::solve(60.0, &items),
            FractionalSolver::solve(60.0, &items)
        );
        assert_eq!(items, before);
    }
}
