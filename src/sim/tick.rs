//! Per-frame simulation step
//!
//! The order of the phases matters: enemies move before they are tested,
//! dead entities are pruned after collisions, and the spawn timer runs last.

use rand::Rng;

use super::collision::{Bounds, collides};
use super::state::GameState;
use crate::consts::*;

/// Advance the game by one frame of `dt` milliseconds
pub fn tick<R: Rng + ?Sized>(state: &mut GameState, dt: f32, rng: &mut R) {
    state.time_ticks += 1;

    if !state.game_over {
        state.game_time += dt;
    }
    if state.game_time > TIME_LIMIT_MS {
        state.end_game();
    }

    state.background.update();
    state.player.update(dt, state.keys, &mut state.ammo);
    state.ammo.regenerate(dt);

    for explosion in &mut state.explosions {
        explosion.update(dt);
    }
    state.explosions.retain(|e| !e.marked_for_deletion);

    resolve_enemies(state, rng);
    state.enemies.retain(|e| !e.marked_for_deletion);

    if state.enemy_timer > ENEMY_INTERVAL_MS && !state.game_over {
        state.spawn_enemy(rng);
        state.enemy_timer = 0.0;
    } else {
        state.enemy_timer += dt;
    }
}

/// Move each enemy, then test it against the player's body and every projectile
fn resolve_enemies<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    let mut enemies = std::mem::take(&mut state.enemies);

    for enemy in &mut enemies {
        enemy.update();

        if collides(&state.player, &*enemy) {
            enemy.marked_for_deletion = true;
            state.add_explosion(enemy.bounds().center(), rng);
            if enemy.is_lucky() {
                state.player.enter_power_up(&mut state.ammo);
            } else if !state.game_over {
                state.score -= 1;
            }
            log::trace!("Player rammed {:?}, score {}", enemy.kind, state.score);
        }

        // Projectiles already marked this tick still count; they are pruned
        // on the player's next update
        for p_idx in 0..state.player.projectiles.len() {
            if !collides(&state.player.projectiles[p_idx], &*enemy) {
                continue;
            }
            enemy.lives -= 1;
            state.player.projectiles[p_idx].marked_for_deletion = true;
            log::trace!("Hit {:?}, {} lives left", enemy.kind, enemy.lives);

            if enemy.lives <= 0 {
                enemy.marked_for_deletion = true;
                state.add_explosion(enemy.bounds().center(), rng);
                if !state.game_over {
                    state.score += enemy.score();
                }
                if state.score > WINNING_SCORE {
                    state.end_game();
                }
            }
        }
    }

    state.enemies = enemies;
}
