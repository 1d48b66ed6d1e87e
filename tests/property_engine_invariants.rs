use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use mathfight::progression::{
    resolve_level_progress, update_ability_model_with, update_adaptive_difficulty, AdaptiveConfig,
    AdaptiveInput, LevelProgressInput,
};
use mathfight::questions::{gcd, gen_q, scale_range, simplify_fraction, GenOptions, MoveConfig, Op};

fn any_op() -> impl Strategy<Value = Op> {
    (0..Op::ALL.len()).prop_map(|i| Op::ALL[i])
}

proptest! {
    #[test]
    fn pt_generated_questions_hold_their_answer_once(
        seed in any::<u64>(),
        op in any_op(),
        lo in 1_i64..30,
        width in 0_i64..30,
        diff_mod in 0.5_f64..2.0,
    ) {
        let mv = MoveConfig::new((lo, lo + width), &[op.code()]);
        let mut rng = StdRng::seed_from_u64(seed);
        let q = gen_q(&mv, diff_mod, &GenOptions::default(), &mut rng);

        prop_assert_eq!(q.op, op);
        prop_assert_eq!(q.choices.len(), op.choice_count());
        prop_assert_eq!(q.choices.iter().filter(|&&c| c == q.answer).count(), 1);
        let mut unique = q.choices.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), q.choices.len());
        if !op.is_fraction() {
            prop_assert!(q.choices.iter().all(|&c| c >= 0));
        }
    }

    #[test]
    fn pt_scaled_range_is_well_ordered(lo in -50_i64..200, hi in -50_i64..200, diff_mod in -3.0_f64..5.0) {
        let span = scale_range((lo, hi), diff_mod);
        prop_assert!(span.min >= 1);
        prop_assert!(span.max >= 2);
        prop_assert!(span.min <= span.max);
    }

    #[test]
    fn pt_simplified_fractions_are_reduced(n in 0_i64..500, d in 1_i64..500) {
        let f = simplify_fraction(n, d);
        prop_assert!(f.d >= 1);
        prop_assert_eq!(f.n * d, n * f.d);
        prop_assert_eq!(gcd(f.n, f.d), 1);
    }

    #[test]
    fn pt_adaptive_level_moves_at_most_one_step(
        level in 0_u8..=4,
        recent in proptest::collection::vec(any::<bool>(), 0..12),
        correct in any::<bool>(),
    ) {
        let out = update_adaptive_difficulty(AdaptiveInput::new(level, &recent, correct));
        prop_assert!(out.next_level <= 4);
        prop_assert!((out.next_level as i32 - level as i32).abs() <= 1);
        prop_assert!(out.next_recent.len() <= 6);
        prop_assert_eq!(out.next_recent.last().copied(), Some(correct));
    }

    #[test]
    fn pt_ability_update_touches_one_group(
        answers in proptest::collection::vec((any_op(), any::<bool>()), 1..30),
    ) {
        let config = AdaptiveConfig::default();
        let mut model = None;
        for (op, correct) in answers {
            let before = model.clone();
            let out = update_ability_model_with(model.as_ref(), op.code(), correct, &config);
            if let Some(before) = before {
                for (group, bucket) in before.groups() {
                    if *group != out.group {
                        prop_assert_eq!(out.next_model.bucket(*group), Some(bucket));
                    }
                }
            }
            model = Some(out.next_model);
        }
    }

    #[test]
    fn pt_level_progress_conserves_experience(
        exp in 0_u32..200,
        level in 1_u32..20,
        stage in 0_u32..=2,
        gain in 0_u32..2000,
    ) {
        let out = resolve_level_progress(LevelProgressInput::new(exp, level, stage, gain));
        prop_assert!(out.next_level >= level);
        prop_assert!(out.next_stage >= stage && out.next_stage <= 2);
        prop_assert!(out.next_exp < out.next_level * 30);
        prop_assert_eq!(out.next_stage - stage, out.evolve_count);

        let spent: u32 = (level..out.next_level).map(|l| l * 30).sum();
        prop_assert_eq!(spent + out.next_exp, exp + gain);
    }
}
