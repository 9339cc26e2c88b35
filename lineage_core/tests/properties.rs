//! Property tests for the inheritance engine

use lineage_core::inheritance::project_stats;
use lineage_core::prelude::*;
use lineage_core::skills::best_class_skill;
use lineage_core::{ClassSkillTable, ModifierTable};
use proptest::prelude::*;

fn stat_vector() -> impl Strategy<Value = StatVector> {
    prop::array::uniform7(-5i32..=5).prop_map(|[s, m, k, p, l, d, r]| {
        StatVector::genetic(s, m, k, p, l, d, r)
    })
}

fn growth_rates() -> impl Strategy<Value = GrowthRates> {
    prop::array::uniform8(0u32..=150).prop_map(|[hp, str, mag, skl, spd, lck, def, res]| {
        GrowthRates {
            hp,
            str,
            mag,
            skl,
            spd,
            lck,
            def,
            res,
        }
    })
}

fn base_stats() -> impl Strategy<Value = StatVector> {
    (10i32..=30, stat_vector()).prop_map(|(hp, v)| StatVector { hp, ..v })
}

proptest! {
    #[test]
    fn child_modifiers_are_additive(p1 in stat_vector(), p2 in stat_vector(), child in stat_vector()) {
        let parents: ModifierTable = [("P1", p1), ("P2", p2)].into_iter().collect();
        let children: ModifierTable = [("C", child)].into_iter().collect();
        let mods = lineage_core::inheritance::compute_child_modifiers(&parents, &children, "P1", "P2", "C", 1);
        for stat in Stat::GENETIC {
            prop_assert_eq!(mods[stat], p1[stat] + p2[stat] + child[stat] + 1);
        }
        prop_assert_eq!(mods.hp, 0);
    }

    #[test]
    fn unknown_names_behave_as_zero(p2 in stat_vector(), child in stat_vector(), name in "[a-z]{1,12}") {
        let parents: ModifierTable = [("Zero", StatVector::ZERO), ("P2", p2)].into_iter().collect();
        let children: ModifierTable = [("C", child)].into_iter().collect();
        prop_assume!(name != "Zero" && name != "P2");
        let unknown = lineage_core::inheritance::compute_child_modifiers(&parents, &children, &name, "P2", "C", 1);
        let zero = lineage_core::inheritance::compute_child_modifiers(&parents, &children, "Zero", "P2", "C", 1);
        prop_assert_eq!(unknown, zero);
    }

    #[test]
    fn projection_is_deterministic(base in base_stats(), growth in growth_rates(), mods in stat_vector(), level in 1u32..=60) {
        let a = project_stats(&base, &growth, &mods, level);
        let b = project_stats(&base, &growth, &mods, level);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn projection_is_monotonic_in_level(
        base in base_stats(),
        growth in growth_rates(),
        mods in stat_vector(),
        l1 in 1u32..=60,
        delta in 1u32..=40,
    ) {
        let low = project_stats(&base, &growth, &mods, l1);
        let high = project_stats(&base, &growth, &mods, l1 + delta);
        for stat in Stat::ALL {
            prop_assert!(high[stat] >= low[stat]);
        }
    }

    #[test]
    fn projection_floors_the_total(base in base_stats(), growth in growth_rates(), mods in stat_vector(), level in 1u32..=60) {
        let stats = project_stats(&base, &growth, &mods, level);
        for stat in Stat::ALL {
            let exact = f64::from(base[stat])
                + f64::from(growth.get(stat)) * f64::from(level - 1) / 100.0
                + f64::from(mods[stat]);
            let value = f64::from(stats[stat]);
            prop_assert!(value <= exact + 1e-9);
            prop_assert!(exact - value < 1.0);
        }
    }

    #[test]
    fn predicted_skill_has_max_unlock_level(levels in prop::collection::vec(1u32..=20, 1..8)) {
        let skills: Vec<Skill> = levels
            .iter()
            .enumerate()
            .map(|(i, lv)| Skill::new(format!("S{}", i), *lv))
            .collect();
        let max = *levels.iter().max().unwrap();
        let table: ClassSkillTable = [("Test", skills)].into_iter().collect();
        let predicted = best_class_skill(&table, "Test").unwrap();
        prop_assert_eq!(predicted.unlock_level, max);
    }
}

#[test]
fn unknown_class_simulates_full_vector() {
    let data = default_game_data();
    let constants = default_constants();
    let calc = InheritanceCalculator::new(&data, &constants);
    let mods = calc.compute_child_modifiers("Chrom", "Sumia", "Cynthia");

    let sim = calc.simulate_stats_at_level("NotARealClass", &mods, 10);
    for stat in Stat::ALL {
        assert!(sim.get(stat) > 0, "{} should be positive", stat);
    }
    assert!(predict_inherited_skill(&data.class_skills, &Parent::new("X", "NotARealClass")).is_none());
}

#[test]
fn every_class_with_skills_predicts_its_last_unlock() {
    let data = default_game_data();
    for class in &data.classes {
        let parent = Parent::new("Tester", class.name.clone());
        let predicted = predict_inherited_skill(&data.class_skills, &parent);
        let expected = class.skills.iter().map(|s| s.unlock_level).max();
        assert_eq!(predicted.map(|s| s.unlock_level), expected, "class {}", class.name);
    }
}
