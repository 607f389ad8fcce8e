use super::*;
use crate::score::grade::Grade;
use crate::score::record::Nutrient;

fn profiles() -> &'static ProfileSet {
    ProfileSet::canonical().unwrap()
}

fn raw(name: &str, energy: f64, sugar: f64) -> RawNutrientRecord {
    RawNutrientRecord {
        name: Some(name.to_string()),
        energy: Some(energy),
        sugar: Some(sugar),
        saturated_fat: Some(0.0),
        salt: Some(0.0),
        ..Default::default()
    }
}

#[test]
fn empty_batch() {
    let batch = score_batch(&[], Category::General, profiles()).unwrap();
    assert!(batch.outcomes.is_empty());
    assert_eq!(batch.scored(), 0);
    assert_eq!(batch.unscoreable(), 0);
}

#[test]
fn outcomes_keep_input_order() {
    let records: Vec<RawNutrientRecord> = (0..500)
        .map(|i| raw(&format!("p{i}"), f64::from(i) * 10.0, 0.0))
        .collect();
    let batch = score_batch(&records, Category::General, profiles()).unwrap();
    assert_eq!(batch.outcomes.len(), 500);
    for (i, outcome) in batch.outcomes.iter().enumerate() {
        assert_eq!(outcome.index(), i);
        assert_eq!(outcome.name(), Some(format!("p{i}").as_str()));
    }
}

#[test]
fn parallel_results_match_sequential_scoring() {
    let records: Vec<RawNutrientRecord> = (0..200)
        .map(|i| raw("x", f64::from(i) * 17.0, f64::from(i % 40)))
        .collect();
    let batch = score_batch(&records, Category::General, profiles()).unwrap();
    let profile = profiles().get(Category::General);
    for (raw, outcome) in records.iter().zip(&batch.outcomes) {
        let record = NutrientRecord::resolve(raw).unwrap();
        let expected = score_record(&record, profile).unwrap();
        assert_eq!(outcome.result(), Some(&expected));
    }
}

#[test]
fn missing_nutrient_does_not_abort_batch() {
    let mut broken = raw("broken", 100.0, 1.0);
    broken.salt = None;
    let records = vec![raw("a", 100.0, 1.0), broken, raw("c", 3000.0, 40.0)];
    let batch = score_batch(&records, Category::General, profiles()).unwrap();

    assert_eq!(batch.scored(), 2);
    assert_eq!(batch.unscoreable(), 1);
    assert!(matches!(
        &batch.outcomes[1],
        RecordOutcome::Unscoreable {
            index: 1,
            error: RecordError::MissingRequiredNutrient {
                nutrient: Nutrient::Salt
            },
            ..
        }
    ));
    assert_eq!(batch.outcomes[0].result().unwrap().grade, Grade::A);
    assert_eq!(batch.outcomes[2].result().unwrap().grade, Grade::E);
}

#[test]
fn out_of_range_record_is_flagged() {
    let mut odd = raw("odd", 100.0, 1.0);
    odd.fruit_veg_pulse_percent = Some(150.0);
    let batch = score_batch(&[odd], Category::Beverage, profiles()).unwrap();
    assert!(matches!(
        &batch.outcomes[0],
        RecordOutcome::Unscoreable {
            error: RecordError::OutOfRangeValue { .. },
            ..
        }
    ));
}

#[test]
fn category_is_recorded() {
    let batch = score_batch(&[raw("a", 0.0, 0.0)], Category::Fat, profiles()).unwrap();
    assert_eq!(batch.category, Category::Fat);
}

#[test]
fn json_tags_outcomes() {
    let mut broken = raw("broken", 1.0, 1.0);
    broken.energy = None;
    let batch = score_batch(&[raw("ok", 0.0, 0.0), broken], Category::Beverage, profiles())
        .unwrap();
    let json = serde_json::to_value(&batch).unwrap();
    assert_eq!(json["category"], "beverage");
    assert_eq!(json["outcomes"][0]["status"], "scored");
    assert_eq!(json["outcomes"][0]["result"]["grade"], "A");
    assert_eq!(json["outcomes"][1]["status"], "unscoreable");
    assert_eq!(
        json["outcomes"][1]["error"],
        "missing required nutrient: energy"
    );
}

#[test]
fn water_scores_without_resolving_values() {
    let water = |name: &str| RawNutrientRecord {
        name: Some(name.to_string()),
        is_water: Some(true),
        ..Default::default()
    };
    let mut no_salt = water("no salt");
    no_salt.energy = Some(0.0);
    no_salt.sugar = Some(0.0);
    no_salt.saturated_fat = Some(0.0);
    let mut negative = water("negative");
    negative.energy = Some(-5.0);
    negative.salt = Some(f64::NAN);
    let mut too_fruity = water("too fruity");
    too_fruity.fruit_veg_pulse_percent = Some(150.0);

    let records = vec![no_salt, negative, too_fruity, water("blank")];
    let batch = score_batch(&records, Category::Beverage, profiles()).unwrap();
    assert_eq!(batch.scored(), 4);
    for outcome in &batch.outcomes {
        assert_eq!(outcome.result(), Some(&water_result()));
    }
}

#[test]
fn water_flag_outside_beverage_still_resolves() {
    let record = RawNutrientRecord {
        is_water: Some(true),
        energy: Some(0.0),
        ..Default::default()
    };
    let batch = score_batch(&[record], Category::General, profiles()).unwrap();
    assert!(matches!(
        &batch.outcomes[0],
        RecordOutcome::Unscoreable {
            error: RecordError::MissingRequiredNutrient {
                nutrient: Nutrient::Sugar
            },
            ..
        }
    ));
}
