use stock::api::StockError;
use stock::pasturing::PasturingError;
use stock::raising::RaisingError;

use crate::testing::{ScriptedGroup, StockTestScenario};

mod testing;

const PASTURE: [f64; 6] = [500.0, 500.0, 500.0, 0.0, 0.0, 0.0];

fn scenario_with_groups(numbers: &[usize]) -> StockTestScenario<ScriptedGroup> {
    let mut scenario = StockTestScenario::with_groups()
        .given_paddock("north", 1.0)
        .given_pasture("north", "ryegrass", PASTURE, 0.2)
        .given_paddock("south", 2.0);
    for (cohort, number) in numbers.iter().enumerate() {
        let group = ScriptedGroup::new(scenario.genotype("medium merino"), *number, 1.5)
            .with_cohort(cohort as u32);
        scenario = scenario.given_group(group, "north", cohort as i32, 1);
    }
    scenario
}

#[test]
fn test_add_returns_one_based_index_and_stages_forage() {
    let mut scenario = scenario_with_groups(&[]);
    let group = ScriptedGroup::new(scenario.genotype("medium merino"), 20, 1.5);

    let (index, _) = scenario.stock.add(group, "North", 3, 2).unwrap();

    assert_eq!(index, 1);
    assert_eq!(scenario.stock.raising.count(), 1);
    let slot = scenario.stock.raising.get_slot(1).unwrap();
    assert_eq!(slot.paddock, scenario.paddock("north"));
    assert_eq!(slot.init_inputs.len(), 1);
    assert_eq!(slot.step_inputs, slot.init_inputs);
    assert_eq!(slot.init_inputs[0].herbage_biomass(), 1500.0);
    assert_eq!(scenario.stock.raising.get_tag(1).unwrap(), 3);
    assert_eq!(scenario.stock.raising.get_priority(1).unwrap(), 2);
}

#[test]
fn test_add_into_unknown_paddock_falls_back_to_first() {
    let mut scenario = scenario_with_groups(&[]);
    let group = ScriptedGroup::new(scenario.genotype("medium merino"), 20, 1.5);

    scenario.stock.add(group, "nowhere", 0, 0).unwrap();

    assert_eq!(scenario.stock.paddock_name(1).unwrap(), "north");
}

#[test]
fn test_delete_shifts_later_slots_down() {
    let scenario = scenario_with_groups(&[5, 6, 7])
        .when(|stock| stock.delete(2))
        .then_action_should_succeed()
        .then_numbers_should_be(vec![5, 7]);

    assert_eq!(scenario.stock.raising.get_tag(2).unwrap(), 2);
    assert!(scenario.stock.raising.get_slot(3).is_err());
}

#[test]
fn test_invalid_index_is_rejected() {
    scenario_with_groups(&[5, 6])
        .when(|stock| stock.delete(3))
        .then_action_should_fail(|_| StockError::Raising(RaisingError::SlotNotFound { index: 3 }))
        .when(|stock| stock.set_tag(0, 1))
        .then_action_should_fail(|_| StockError::Raising(RaisingError::SlotNotFound { index: 0 }))
        .then_numbers_should_be(vec![5, 6]);
}

#[test]
fn test_set_paddock_requires_known_name() {
    let scenario = scenario_with_groups(&[5])
        .when(|stock| stock.set_paddock(1, "east"))
        .then_action_should_fail(|_| {
            StockError::Pasturing(PasturingError::PaddockNotFound {
                name: "east".into(),
            })
        })
        .when(|stock| stock.set_paddock(1, "SOUTH"))
        .then_action_should_succeed();

    assert_eq!(scenario.stock.paddock_name(1).unwrap(), "south");
}

#[test]
fn test_sort_is_stable_for_equal_tags() {
    let mut scenario = scenario_with_groups(&[1, 2, 3, 4]);
    for (index, tag) in [(1, 2), (2, 1), (3, 2), (4, 1)] {
        scenario.stock.set_tag(index, tag).unwrap();
    }

    scenario.stock.sort();

    assert_eq!(scenario.numbers(), vec![2, 4, 1, 3]);
    assert_eq!(scenario.stock.raising.highest_tag(), 2);
}

#[test]
fn test_highest_tag_of_empty_registry_is_zero() {
    let scenario = scenario_with_groups(&[]);
    assert_eq!(scenario.stock.raising.highest_tag(), 0);
}

#[test]
fn test_sell_all_walks_slots_in_order() {
    let scenario = scenario_with_groups(&[5, 3, 10])
        .when(|stock| stock.sell(0, 7))
        .then_action_should_succeed()
        .then_numbers_should_be(vec![0, 1, 10]);

    assert_eq!(scenario.stock.raising.total_animals(), 11);
}

#[test]
fn test_sell_from_one_slot_is_limited_by_its_count() {
    scenario_with_groups(&[5, 3, 10])
        .when(|stock| stock.sell(2, 8))
        .then_action_should_succeed()
        .then_numbers_should_be(vec![5, 0, 10])
        .when(|stock| stock.sell(3, -4))
        .then_action_should_succeed()
        .then_numbers_should_be(vec![5, 0, 10]);
}

#[test]
fn test_sold_out_group_is_removed_by_next_merge() {
    let mut scenario = scenario_with_groups(&[5, 3])
        .when(|stock| stock.sell(1, 5))
        .then_numbers_should_be(vec![0, 3]);

    scenario.stock.merge();

    assert_eq!(scenario.numbers(), vec![3]);
}

#[test]
fn test_sell_tag_only_touches_tagged_slots() {
    let mut scenario = scenario_with_groups(&[5, 3, 10]);
    scenario.stock.set_tag(1, 9).unwrap();
    scenario.stock.set_tag(3, 9).unwrap();

    scenario.stock.sell_tag(9, 12);

    assert_eq!(scenario.numbers(), vec![0, 3, 3]);
}

#[test]
fn test_restage_totals_every_pasture_of_the_paddock() {
    let mut scenario = scenario_with_groups(&[10]).given_pasture(
        "north",
        "clover",
        [0.0, 200.0, 0.0, 0.0, 0.0, 0.0],
        0.25,
    );
    scenario.stock.stage_initial_inputs(1).unwrap();

    scenario.stock.restage_availability(1).unwrap();

    let slot = scenario.stock.raising.get_slot(1).unwrap();
    assert_eq!(slot.init_inputs.len(), 2);
    assert_eq!(slot.paddock_inputs.herbage_biomass(), 1700.0);
    assert_eq!(slot.group.herbage, slot.paddock_inputs);
}

#[test]
fn test_paddock_lookups() {
    let mut scenario = scenario_with_groups(&[]);
    let (id, _) = scenario.stock.create_paddock("Hollow", 3.0, 10.0, 0.2).unwrap();

    let pasturing = &scenario.stock.pasturing;
    assert_eq!(pasturing.paddock_at(2).unwrap().id, id);
    assert_eq!(pasturing.find_paddock("HOLLOW").unwrap().name, "hollow");
    assert_eq!(pasturing.get_paddock(id).unwrap().area, 3.0);
    assert!(matches!(
        pasturing.paddock_at(3),
        Err(PasturingError::PaddockIndexNotFound { index: 3 })
    ));
    assert!(matches!(
        scenario.stock.create_paddock("north", 1.0, 0.0, 0.0),
        Err(StockError::Pasturing(PasturingError::PaddockAlreadyExists { .. }))
    ));
}
