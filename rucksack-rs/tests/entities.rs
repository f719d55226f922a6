#[cfg(test)]
mod tests {
    use rucksack_rs::entities::{Item, KSInstance, Knapsack};
    use rucksack_rs::errors::KnapsackError;
    use rucksack_rs::util::assertions;
    use test_case::test_case;

    fn item(name: &str, weight: u64, value: u64) -> Item {
        Item::new(name, weight, value).expect("item data should be valid")
    }

    #[test_case(0, 1; "zero weight")]
    #[test_case(1, 0; "zero value")]
    #[test_case(0, 0; "zero weight and value")]
    fn item_construction_rejects_nonpositive(weight: u64, value: u64) {
        assert_eq!(
            Item::new("x", weight, value),
            Err(KnapsackError::InvalidItem { weight, value })
        );
    }

    #[test]
    fn item_construction_accepts_positive() {
        let item = item("hammer", 3, 7);
        assert_eq!(item.name, "hammer");
        assert_eq!(item.weight, 3);
        assert_eq!(item.value, 7);
    }

    #[test]
    fn empty_knapsack_has_no_items_and_no_value() {
        let knapsack = Knapsack::empty(10).unwrap();
        assert_eq!(knapsack.capacity, 10);
        assert!(knapsack.items.is_empty());
        assert_eq!(knapsack.total_value, 0);
        assert_eq!(knapsack.total_weight(), 0);
    }

    #[test]
    fn zero_capacity_is_rejected_everywhere() {
        assert_eq!(
            Knapsack::empty(0).unwrap_err(),
            KnapsackError::InvalidCapacity { capacity: 0 }
        );
        assert_eq!(
            Knapsack::with_items(0, vec![]).unwrap_err(),
            KnapsackError::InvalidCapacity { capacity: 0 }
        );
        assert_eq!(
            KSInstance::new(0, vec![]).unwrap_err(),
            KnapsackError::InvalidCapacity { capacity: 0 }
        );
    }

    #[test]
    fn overweight_item_set_is_rejected() {
        assert_eq!(
            Knapsack::with_items(5, vec![item("x", 6, 100)]).unwrap_err(),
            KnapsackError::OverCapacity {
                weight: 6,
                capacity: 5
            }
        );
    }

    #[test]
    fn summed_value_is_order_independent() {
        let forward = vec![item("a", 1, 2), item("b", 2, 3), item("c", 3, 4)];
        let backward: Vec<Item> = forward.iter().rev().cloned().collect();

        let k1 = Knapsack::with_items(10, forward).unwrap();
        let k2 = Knapsack::with_items(10, backward).unwrap();

        assert_eq!(k1.total_value, 9);
        assert_eq!(k1.total_value, k2.total_value);
        assert!(assertions::total_value_consistent(&k1));
        assert!(assertions::total_value_consistent(&k2));
    }

    #[test]
    fn exact_capacity_fit_is_accepted() {
        let knapsack = Knapsack::with_items(5, vec![item("x", 5, 10)]).unwrap();
        assert_eq!(knapsack.total_weight(), 5);
        assert_eq!(knapsack.total_value, 10);
        assert!(assertions::within_capacity(&knapsack));
    }

    #[test]
    fn instance_aggregates_match_items() {
        let instance =
            KSInstance::new(10, vec![item("a", 1, 2), item("b", 2, 3), item("c", 3, 4)]).unwrap();
        assert_eq!(instance.item_qty(), 3);
        assert_eq!(instance.total_item_weight(), 6);
        assert_eq!(instance.total_item_value(), 9);
    }
}
