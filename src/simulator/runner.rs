//! Main simulation runner driving a real [`GameSession`] with a scripted bot.
//!
//! The bot only uses the public session surface (movement intent, clicks,
//! pet purchases), so results reflect actual game rules. Statistics are
//! tracked externally from the events each tick and click produce.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::combat::encounter::within_reach;
use crate::core::clock::FixedStepClock;
use crate::core::events::GameEvent;
use crate::core::geometry::{distance, normalize, Rect};
use crate::core::session::GameSession;
use crate::pets::catalog::available_pets_for_level;
use glam::Vec2;
use log::debug;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = config.seed.map(|seed| seed.wrapping_add(run_idx as u64));
        let run_stats = simulate_single_run(config, seed);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Level {} ({}), Kills {}, Bosses {}, Pets {}, {:.0}s{}",
                run_idx + 1,
                config.num_runs,
                run_stats.final_level,
                run_stats.final_evolution,
                run_stats.total_kills,
                run_stats.boss_kills,
                run_stats.pets_owned,
                run_stats.survival_seconds(),
                if run_stats.died { ", died" } else { "" }
            );
        }
        all_runs.push(run_stats);
    }

    SimReport::from_runs(all_runs)
}

/// Simulate one play-through until death, the target level or the tick limit.
fn simulate_single_run(config: &SimConfig, seed: Option<u64>) -> RunStats {
    let mut session = GameSession::new(seed);
    let mut clock = FixedStepClock::per_tick();
    let mut level_up_ticks = vec![0u64; config.target_level.max(2) as usize + 1];
    let mut ticks: u64 = 0;
    let mut last_wins = 0;

    loop {
        if session.is_game_over()
            || session.player().level() >= config.target_level
            || ticks >= config.max_ticks_per_run
        {
            break;
        }

        let target = choose_target(&session);
        steer(&mut session, target);

        let events = session.tick(clock.advance());
        ticks += 1;
        record_level_ups(&events, ticks, &mut level_up_ticks);

        // Targets moved during the tick, so pick again before clicking
        if ticks % config.click_interval_ticks.max(1) as u64 == 0 {
            if let Some(target) = choose_target(&session) {
                if within_reach(session.player(), &target) {
                    let result = session.click(target.center());
                    record_level_ups(&result.events, ticks, &mut level_up_ticks);
                }
            }
        }

        if config.buy_pets && session.player().wins() != last_wins {
            shop_for_pets(&mut session);
            last_wins = session.player().wins();
        }
    }

    let player = session.player();
    let stats = session.stats();
    debug!(
        "run finished at level {} after {} ticks",
        player.level(),
        ticks
    );

    RunStats {
        final_level: player.level(),
        final_evolution: player.evolution().name.clone(),
        final_wins: player.wins(),
        total_kills: stats.kills,
        boss_kills: stats.boss_kills,
        apples_collected: stats.apples_collected,
        shields_collected: stats.shields_collected,
        pets_owned: player.pets().owned_count() as u32,
        total_ticks: ticks,
        died: session.is_game_over() || !player.is_alive(),
        reached_target: player.level() >= config.target_level,
        level_up_ticks,
    }
}

fn record_level_ups(events: &[GameEvent], tick: u64, level_up_ticks: &mut [u64]) {
    for event in events {
        if let GameEvent::LeveledUp { new_level } = event {
            if let Some(slot) = level_up_ticks.get_mut(*new_level as usize) {
                *slot = tick;
            }
        }
    }
}

/// Nearest clickable thing. Shield fruits win whenever an enemy is close.
fn choose_target(session: &GameSession) -> Option<Rect> {
    let origin = session.player().center();
    let nearest = |rects: &mut dyn Iterator<Item = Rect>| {
        rects.min_by(|a, b| {
            distance(origin, a.center()).total_cmp(&distance(origin, b.center()))
        })
    };

    let threatened = session
        .enemies()
        .iter()
        .any(|e| distance(origin, e.center()) < 150.0);
    if threatened {
        if let Some(fruit) = nearest(&mut session.fruits().iter().map(|f| f.rect)) {
            return Some(fruit);
        }
    }

    let mut candidates = session
        .enemies()
        .iter()
        .map(|e| *e.rect())
        .chain(session.apples().iter().map(|a| a.rect))
        .chain(session.fruits().iter().map(|f| f.rect));
    nearest(&mut candidates)
}

fn steer(session: &mut GameSession, target: Option<Rect>) {
    let direction = match target {
        Some(rect) if !within_reach(session.player(), &rect) => {
            normalize(rect.center() - session.player().center())
        }
        _ => Vec2::ZERO,
    };
    session.set_movement_intent(direction);
}

/// Buys the priciest affordable unlocked pet and equips it over the weakest slot.
fn shop_for_pets(session: &mut GameSession) {
    let player = session.player();
    let choice = available_pets_for_level(player.level())
        .into_iter()
        .filter(|p| !player.pets().owns(p.name) && p.cost <= player.wins())
        .max_by_key(|p| p.cost);
    let pet = match choice {
        Some(pet) => pet,
        None => return,
    };

    let slot = match player.pets().first_empty_slot() {
        Some(slot) => Some(slot),
        None => player
            .pets()
            .equipped()
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|p| (i, p.cost)))
            .filter(|&(_, cost)| cost < pet.cost)
            .min_by_key(|&(_, cost)| cost)
            .map(|(i, _)| i),
    };

    if session.buy_pet(pet.name).is_err() {
        return;
    }
    if let Some(slot) = slot {
        if let Err(err) = session.equip_pet(slot, Some(pet.name)) {
            debug!("could not equip {}: {}", pet.name, err);
        }
    }
}
