//! Mathfight - Preview Entry Point
//!
//! Generates one question per move in the catalog and plays them with a
//! simulated student, printing how the skill levels and experience move.
//!
//! Usage: `mathfight [seed]` or `mathfight export`

use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use mathfight::data::{export_default_data, DataManager, DATA_DIR};
use mathfight::dice::chance;
use mathfight::progression::{
    create_ability_model, resolve_level_progress, stage_title, tier_for_move,
    update_ability_model_with, AbilityGroup, LevelProgress,
};
use mathfight::questions::{gen_q, GenOptions};

/// Experience granted per correct answer
const EXP_PER_CORRECT: u32 = 25;
/// How often the simulated student answers correctly
const STUDENT_ACCURACY: f64 = 0.75;
/// Rounds through the move catalog
const ROUNDS: usize = 3;

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .init();

    log::info!("Starting Mathfight preview v{}", env!("CARGO_PKG_VERSION"));

    let arg = std::env::args().nth(1);
    if arg.as_deref() == Some("export") {
        export_default_data(Path::new(DATA_DIR))
            .with_context(|| format!("Failed to export default data to {}", DATA_DIR))?;
        log::info!("Exported default data to {}", DATA_DIR);
        return Ok(());
    }

    let mut rng = match arg {
        Some(seed) => {
            let seed: u64 = seed.parse().with_context(|| format!("Invalid seed {:?}", seed))?;
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let data = DataManager::new();
    let config = data.engine_config();
    let fallback_level = config.adaptive.initial_level;
    let mut model = create_ability_model(fallback_level);
    let mut progress = LevelProgress { next_level: 1, ..LevelProgress::default() };
    let options = GenOptions::default();

    for round in 1..=ROUNDS {
        println!("== Round {} ==", round);
        for mv in &data.move_catalog().moves {
            let move_config = mv.config();
            let tier = tier_for_move(Some(&model), &move_config, fallback_level);
            let question = gen_q(&move_config, tier.range_mult(), &options, &mut rng);

            println!("[{}] {}   ({}, {} x{:.2})", mv.name, question.display, question.op, tier.name(), tier.range_mult());
            println!("    options: {}", question.option_texts().join(" | "));
            println!("    answer:  {}", question.correct_label());
            for step in &question.steps {
                println!("      {}", step);
            }

            let correct = chance(&mut rng, STUDENT_ACCURACY);
            let outcome = update_ability_model_with(Some(&model), question.op.code(), correct, &config.adaptive);
            if correct {
                let input = config.levels.input(progress.next_exp, progress.next_level, progress.next_stage, EXP_PER_CORRECT);
                let next = resolve_level_progress(input);
                if next.next_level > progress.next_level {
                    println!("    level up! now level {} (+{} HP, {} evolutions)", next.next_level, next.hp_bonus, next.evolve_count);
                }
                progress = next;
            }
            println!("    {} -> {} level {}", if correct { "correct" } else { "wrong" }, outcome.group.key(), outcome.next_level);
            model = outcome.next_model;
        }
    }

    println!("== Summary ==");
    for group in AbilityGroup::ALL {
        if let Some(bucket) = model.bucket(group) {
            let accuracy = bucket
                .accuracy()
                .map(|a| format!("{:.0}%", a * 100.0))
                .unwrap_or_else(|| "-".to_string());
            println!("{:>9}: level {} accuracy {} {:?}", group.key(), bucket.level, accuracy, bucket.recent);
        }
    }
    println!(
        "Player level {} ({}), {} exp toward next",
        progress.next_level,
        stage_title(progress.next_stage),
        progress.next_exp
    );

    log::info!("Mathfight preview finished");
    Ok(())
}
