use stock::animals::{AnimalError, AnimalGroup, AnimalInits, Ruminant};
use stock::api::{Event, StockError};
use stock::raising::Raising;

use crate::testing::{ewes, ScriptedGroup, StockTestScenario};

mod testing;

const PASTURE: [f64; 6] = [800.0, 800.0, 400.0, 0.0, 0.0, 0.0];

fn mass(scenario: &StockTestScenario) -> f64 {
    scenario
        .stock
        .raising
        .slots
        .iter()
        .map(|slot| slot.group.no_animals() as f64 * slot.group.base_weight())
        .sum()
}

fn nursing_ewes(number: usize) -> AnimalInits {
    AnimalInits {
        lactating: 30,
        no_young: 1,
        ..ewes(number, 3.0)
    }
}

fn dry_ewes(number: usize) -> AnimalInits {
    AnimalInits {
        lactating: 30,
        no_young: 0,
        ..ewes(number, 3.0)
    }
}

fn fleece_cuts(events: &[Event]) -> Vec<(f64, f64)> {
    raising_events(events)
        .into_iter()
        .filter_map(|event| match event {
            Raising::FleeceShorn { adults, young, .. } => Some((*adults, *young)),
            _ => None,
        })
        .collect()
}

fn raising_events(events: &[Event]) -> Vec<&Raising> {
    events
        .iter()
        .flat_map(|event| match event {
            Event::Raising(events) => events.iter().collect(),
            _ => vec![],
        })
        .collect()
}

#[test]
fn test_merge_folds_similar_groups_into_the_first() {
    let scenario = StockTestScenario::new()
        .given_paddock("home", 5.0)
        .given_pasture("home", "ryegrass", PASTURE, 0.18)
        .given_flock("home", ewes(30, 3.0), 1, 1)
        .given_flock("home", ewes(20, 3.0), 1, 1)
        .given_flock("home", ewes(10, 3.0), 2, 1);
    let before = scenario.stock.raising.total_animals();

    let mut scenario = scenario.when(|stock| Ok(stock.merge()));

    assert_eq!(scenario.numbers(), vec![50, 10]);
    assert_eq!(scenario.stock.raising.total_animals(), before);
    scenario.stock.merge();
    assert_eq!(scenario.numbers(), vec![50, 10]);
}

#[test]
fn test_merge_keeps_groups_of_different_paddocks_apart() {
    StockTestScenario::new()
        .given_paddock("home", 5.0)
        .given_paddock("back", 5.0)
        .given_flock("home", ewes(30, 3.0), 1, 1)
        .given_flock("back", ewes(20, 3.0), 1, 1)
        .when(|stock| Ok(stock.merge()))
        .then_numbers_should_be(vec![30, 20]);
}

#[test]
fn test_split_keeps_requested_number_in_place() {
    let scenario = StockTestScenario::new()
        .given_paddock("home", 5.0)
        .given_pasture("home", "ryegrass", PASTURE, 0.18)
        .given_flock("home", ewes(30, 3.0), 4, 2)
        .when(|stock| stock.split(1, 12))
        .then_action_should_succeed()
        .then_numbers_should_be(vec![12, 18]);

    let split = scenario.stock.raising.get_slot(2).unwrap();
    assert_eq!(split.tag, 4);
    assert_eq!(split.priority, 2);
    assert_eq!(split.paddock, scenario.paddock("home"));
    assert_eq!(split.init_inputs.len(), 1);
}

#[test]
fn test_split_keeping_everything_changes_nothing() {
    StockTestScenario::new()
        .given_paddock("home", 5.0)
        .given_flock("home", ewes(30, 3.0), 1, 1)
        .when(|stock| stock.split(1, 30))
        .then_action_should_succeed()
        .then_numbers_should_be(vec![30])
        .when(|stock| stock.split(1, 45))
        .then_action_should_succeed()
        .then_numbers_should_be(vec![30]);
}

#[test]
fn test_split_weight_conserves_mass() {
    let mut scenario = StockTestScenario::new()
        .given_paddock("home", 5.0)
        .given_flock("home", ewes(100, 3.0), 1, 1);
    let before = mass(&scenario);
    let live_weight = scenario.stock.raising.get_group(1).unwrap().live_weight();

    scenario.stock.split_weight(1, live_weight).unwrap();

    let numbers = scenario.numbers();
    assert_eq!(numbers.len(), 2);
    assert_eq!(numbers[0] + numbers[1], 100);
    assert!(numbers[1] > 40 && numbers[1] < 60, "{:?}", numbers);
    assert!((mass(&scenario) - before).abs() < 1e-6 * before);
    let heavier = scenario.stock.raising.get_group(1).unwrap().base_weight();
    let lighter = scenario.stock.raising.get_group(2).unwrap().base_weight();
    assert!(lighter < heavier);
}

#[test]
fn test_split_weight_below_the_whole_group_changes_nothing() {
    StockTestScenario::new()
        .given_paddock("home", 5.0)
        .given_flock("home", ewes(100, 3.0), 1, 1)
        .when(|stock| stock.split_weight(1, 1.0))
        .then_action_should_succeed()
        .then_numbers_should_be(vec![100]);
}

#[test]
fn test_split_age_moves_older_animals() {
    let scenario = StockTestScenario::new()
        .given_paddock("home", 5.0)
        .given_flock("home", ewes(10, 3.0), 1, 1)
        .given_flock("home", ewes(20, 1.0), 2, 1)
        .when(|stock| stock.split_age(0, 2.0 * 365.0))
        .then_action_should_succeed()
        .then_numbers_should_be(vec![0, 20, 10]);

    assert_eq!(scenario.stock.raising.get_tag(3).unwrap(), 1);
}

#[test]
fn test_wean_all_young_into_new_groups() {
    let mut scenario = StockTestScenario::new()
        .given_paddock("home", 5.0)
        .given_pasture("home", "ryegrass", PASTURE, 0.18)
        .given_flock("home", nursing_ewes(20), 3, 1);
    assert_eq!(scenario.stock.raising.total_animals(), 40);

    let events = scenario.stock.wean(1, 100, true, true).unwrap();

    assert_eq!(scenario.numbers(), vec![20, 10, 10]);
    assert_eq!(scenario.stock.raising.total_animals(), 40);
    assert!(scenario.stock.raising.get_group(1).unwrap().young().is_none());
    assert!(raising_events(&events)
        .iter()
        .any(|event| matches!(event, Raising::YoungWeaned { index: 1, number: 20 })));
    assert_eq!(scenario.stock.sex_label(2, false), "ram");
    assert_eq!(scenario.stock.sex_label(3, false), "ewe");
}

#[test]
fn test_partial_wean_splits_off_the_other_mothers() {
    let mut scenario = StockTestScenario::new()
        .given_paddock("home", 5.0)
        .given_flock("home", nursing_ewes(20), 3, 1);

    scenario.stock.wean(1, 5, false, true).unwrap();

    assert_eq!(scenario.numbers(), vec![10, 10, 5]);
    assert_eq!(scenario.stock.raising.total_animals(), 40);
    let weaned_mothers = scenario.stock.raising.get_group(1).unwrap();
    assert_eq!(weaned_mothers.young().map(Ruminant::male_no), Some(0));
}

#[test]
fn test_castrate_splits_off_mothers_of_excess_males() {
    let mut scenario = StockTestScenario::new()
        .given_paddock("home", 5.0)
        .given_flock("home", nursing_ewes(20), 3, 1);

    scenario.stock.castrate(1, 4).unwrap();

    assert_eq!(scenario.numbers(), vec![8, 12]);
    assert_eq!(scenario.stock.raising.total_animals(), 40);
    assert_eq!(scenario.stock.sex_label(1, true), "wether");
    assert_eq!(scenario.stock.sex_label(2, true), "ram");
}

#[test]
fn test_plain_split_keeps_mean_weights() {
    let mut scenario = StockTestScenario::<ScriptedGroup>::with_groups().given_paddock("home", 1.0);
    let group = ScriptedGroup::new(scenario.genotype("medium merino"), 10, 1.0);
    scenario = scenario.given_group(group, "home", 0, 0);

    scenario.stock.split(1, 6).unwrap();

    assert_eq!(scenario.numbers(), vec![6, 4]);
    let kept = scenario.stock.raising.get_group(1).unwrap();
    let split = scenario.stock.raising.get_group(2).unwrap();
    assert_eq!(kept.weight, 50.0);
    assert_eq!(split.weight, 50.0);
}

#[test]
fn test_partial_dry_off_splits_off_the_other_mothers() {
    let mut scenario = StockTestScenario::new()
        .given_paddock("home", 5.0)
        .given_flock("home", dry_ewes(20), 3, 1);

    let events = scenario.stock.dry_off(1, 8).unwrap();

    assert_eq!(scenario.numbers(), vec![8, 12]);
    assert_eq!(scenario.stock.raising.total_animals(), 20);
    assert_eq!(scenario.stock.raising.get_group(1).unwrap().lactation(), 0);
    assert_eq!(scenario.stock.raising.get_group(2).unwrap().lactation(), 30);
    assert_eq!(scenario.stock.raising.get_tag(2).unwrap(), 3);
    assert!(raising_events(&events)
        .iter()
        .any(|event| matches!(event, Raising::LactationEnded { index: 1, number: 8 })));
}

#[test]
fn test_dry_off_skips_mothers_with_young_at_foot() {
    let mut scenario = StockTestScenario::new()
        .given_paddock("home", 5.0)
        .given_flock("home", nursing_ewes(20), 3, 1)
        .given_flock("home", dry_ewes(10), 3, 1);

    let events = scenario.stock.dry_off(0, 5).unwrap();

    assert_eq!(scenario.numbers(), vec![20, 5, 5]);
    assert_eq!(scenario.stock.raising.total_animals(), 50);
    assert_eq!(scenario.stock.raising.get_group(1).unwrap().lactation(), 30);
    let ended: Vec<_> = raising_events(&events)
        .into_iter()
        .filter_map(|event| match event {
            Raising::LactationEnded { index, number } => Some((*index, *number)),
            _ => None,
        })
        .collect();
    assert_eq!(ended, vec![(2, 5)]);
}

#[test]
fn test_shear_adults_and_young_separately() {
    let inits = AnimalInits {
        young_fleece_weight: 0.5,
        ..nursing_ewes(10)
    };
    let mut scenario = StockTestScenario::new()
        .given_paddock("shed", 1.0)
        .given_flock("shed", inits, 1, 1);

    let adults = scenario.stock.shear(1, true, false).unwrap();
    let group = scenario.stock.raising.get_group(1).unwrap();
    assert_eq!(group.fleece_weight(), 0.0);
    assert_eq!(group.young().map(Ruminant::fleece_weight), Some(0.5));

    let young = scenario.stock.shear(1, false, true).unwrap();
    let again = scenario.stock.shear(1, true, true).unwrap();

    assert_eq!(fleece_cuts(&adults), vec![(20.0, 0.0)]);
    assert_eq!(fleece_cuts(&young), vec![(0.0, 5.0)]);
    assert!(fleece_cuts(&again).is_empty());
}

#[test]
fn test_join_with_known_and_unknown_mates() {
    let scenario = StockTestScenario::new()
        .given_paddock("home", 5.0)
        .given_flock("home", ewes(20, 3.0), 1, 1)
        .when(|stock| stock.join(1, "large merino", 30))
        .then_action_should_succeed();

    assert!(raising_events(scenario.action_events()).iter().any(|event| {
        matches!(
            event,
            Raising::JoiningStarted { index: 1, mate, days: 30 } if mate == "large merino"
        )
    }));

    scenario
        .when(|stock| stock.join(1, "dorper", 30))
        .then_action_should_fail(|_| {
            StockError::Animal(AnimalError::GenotypeNotFound {
                name: "dorper".into(),
            })
        })
        .then_numbers_should_be(vec![20]);
}

#[test]
fn test_split_young_separates_mothers_by_lamb_sex() {
    let mut scenario = StockTestScenario::new()
        .given_paddock("home", 5.0)
        .given_flock("home", nursing_ewes(20), 5, 2);

    scenario.stock.split_young(1).unwrap();

    assert_eq!(scenario.numbers(), vec![10, 10]);
    assert_eq!(scenario.stock.raising.total_animals(), 40);
    assert_eq!(scenario.stock.sex_label(1, true), "ram");
    assert_eq!(scenario.stock.sex_label(2, true), "ewe");
    let split = scenario.stock.raising.get_slot(2).unwrap();
    assert_eq!(split.tag, 5);
    assert_eq!(split.priority, 2);
}
