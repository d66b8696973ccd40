//! Pirate vs. Barbarian Duel
//!
//! This demo runs a scripted duel through the `Arena`:
//! - Roster and tunables loaded from JSON
//! - Each fighter fills its speed budget from a fixed move rotation
//! - Outcomes printed per move, with damage breakdowns
//! - Effects ticking at the end of every turn
//!
//! Run with `RUST_LOG=colosseum=debug` to see the engine's own tracing.

use colosseum::catalog::{barbarian, pirate, ATTACK};
use colosseum::*;

const ROSTER: &str = r#"{
    "combat": { "speed_absorption_ratio": 1.5 },
    "fighters": [
        { "id": "jack", "archetype": "pirate",
          "stats": { "health": 500, "mana": 300, "speed": 400, "strength": 20 },
          "seed": 7 },
        { "id": "conan", "archetype": "barbarian",
          "stats": { "health": 700, "mana": 250, "speed": 300, "strength": 15 },
          "seed": 11 }
    ]
}"#;

const MAX_TURNS: u32 = 8;

// ============================================================================
// Move Selection
// ============================================================================

/// Queue moves from `rotation` in order, skipping any that no longer
/// fit the speed budget.
fn plan(
    arena: &Arena,
    user: &FighterId,
    target: &FighterId,
    rotation: &[&str],
) -> Result<Moveset, CombatError> {
    let fighter = arena
        .fighter(user)
        .ok_or_else(|| CombatError::UnknownFighter(user.clone()))?;
    let mut moveset = fighter.new_moveset();
    for mv in rotation.iter().filter_map(|name| fighter.move_named(name)) {
        if mv.flat_speed_cost() <= moveset.remaining() {
            moveset.push(mv.clone(), target.clone())?;
        }
    }
    Ok(moveset)
}

fn print_outcome(outcome: &MoveOutcome) {
    let verdict = if outcome.succeeded { "hits" } else { "misses" };
    println!(
        "  {} uses {} on {}: {} (chance {:.3}, roll {:.3})",
        outcome.user, outcome.move_name, outcome.target, verdict, outcome.success_chance, outcome.roll
    );
    if let Some(report) = &outcome.damage {
        println!(
            "    raw {:.2} → adjusted {:.2}, speed -{:.2}, health -{:.2}",
            report.raw, report.adjusted, report.speed_loss, report.health_loss
        );
        for (step, value) in &report.steps {
            println!("      {step} = {value:.2}");
        }
    }
}

fn print_status(arena: &Arena) {
    for fighter in arena.fighters() {
        let effects: Vec<String> = fighter
            .effects()
            .iter()
            .map(|e| format!("{}({})", e.name(), e.lifespan()))
            .collect();
        println!(
            "  {:<6} HP {:>7.2}/{:<4} MP {:>7.2} SPD {:>6.2}  [{}]",
            fighter.id(),
            fighter.health(),
            fighter.max_health(),
            fighter.mana(),
            fighter.speed(),
            effects.join(", ")
        );
    }
}

fn main() -> Result<(), CombatError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("=== Colosseum: Pirate vs. Barbarian ===\n");

    let mut arena = Arena::from_config(ArenaConfig::from_json(ROSTER)?)?;
    let jack = FighterId::from_str("jack");
    let conan = FighterId::from_str("conan");

    // Pushed last resolves first: setup moves go at the end.
    let jack_rotation = [ATTACK, pirate::FLINTLOCK_SHOT, pirate::BLINDING_PARROT];
    let conan_rotation = [ATTACK, ATTACK, barbarian::BERSERK, barbarian::STUN];

    print_status(&arena);

    while arena.turn() < MAX_TURNS {
        println!("\n--- Turn {} ---", arena.turn() + 1);

        let moveset = plan(&arena, &jack, &conan, &jack_rotation)?;
        for outcome in arena.process_moveset(&jack, moveset)? {
            print_outcome(&outcome);
        }

        let moveset = plan(&arena, &conan, &jack, &conan_rotation)?;
        for outcome in arena.process_moveset(&conan, moveset)? {
            print_outcome(&outcome);
        }

        arena.end_turn();
        print_status(&arena);

        if let Some(fallen) = arena.fighters().iter().find(|f| f.health() <= 0.0) {
            println!("\n{} has fallen after {} turns.", fallen.id(), arena.turn());
            return Ok(());
        }
    }

    println!("\nBoth fighters are still standing after {MAX_TURNS} turns.");
    Ok(())
}
