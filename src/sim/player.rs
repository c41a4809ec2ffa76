//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Bounds, Rect};
use super::projectile::Projectile;
use super::state::Ammo;
use crate::consts::*;
use crate::input::{HeldKeys, Key};

/// The player's ship: moves vertically and owns its projectiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub speed_y: f32,
    /// Current sprite frame (0..=PLAYER_MAX_FRAME)
    pub frame: u32,
    /// Projectiles in flight, owned exclusively by the player
    pub projectiles: Vec<Projectile>,
    pub power_up: bool,
    /// Milliseconds spent in the current power-up
    pub power_up_timer: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            speed_y: 0.0,
            frame: 0,
            projectiles: Vec::new(),
            power_up: false,
            power_up_timer: 0.0,
        }
    }
}

impl Player {
    /// Advance one tick: movement, projectiles, animation and power-up decay
    pub fn update(&mut self, dt: f32, keys: HeldKeys, ammo: &mut Ammo) {
        // Up is checked before down, so holding both moves up
        self.speed_y = if keys.contains(Key::Up) {
            -PLAYER_MAX_SPEED
        } else if keys.contains(Key::Down) {
            PLAYER_MAX_SPEED
        } else {
            0.0
        };
        self.pos.y += self.speed_y;

        // Half the sprite may leave the screen at either edge
        let max_y = GAME_HEIGHT - PLAYER_HEIGHT * 0.5;
        let min_y = -PLAYER_HEIGHT * 0.5;
        if self.pos.y > max_y {
            self.pos.y = max_y;
        } else if self.pos.y < min_y {
            self.pos.y = min_y;
        }

        for projectile in &mut self.projectiles {
            projectile.update();
        }
        self.projectiles.retain(|p| !p.marked_for_deletion);

        self.frame = if self.frame < PLAYER_MAX_FRAME {
            self.frame + 1
        } else {
            0
        };

        if self.power_up {
            if self.power_up_timer > POWER_UP_LIMIT_MS {
                self.power_up_timer = 0.0;
                self.power_up = false;
                log::debug!("Power-up expired with {:.1} ammo", ammo.count);
            } else {
                self.power_up_timer += dt;
                ammo.count += POWER_UP_AMMO_PER_TICK;
            }
        }
    }

    /// Fire from the top muzzle, plus the lower muzzle while powered up.
    ///
    /// Costs one round; the second shot is free but still needs ammo left
    /// over. Does nothing on an empty magazine.
    pub fn shoot_top(&mut self, ammo: &mut Ammo) {
        if ammo.count > 0.0 {
            self.projectiles.push(Projectile::new(
                self.pos.x + MUZZLE_X,
                self.pos.y + MUZZLE_TOP_Y,
            ));
            ammo.spend_one();
        }
        if self.power_up {
            self.shoot_low(ammo);
        }
    }

    fn shoot_low(&mut self, ammo: &Ammo) {
        if ammo.count > 0.0 {
            self.projectiles.push(Projectile::new(
                self.pos.x + MUZZLE_X,
                self.pos.y + MUZZLE_LOW_Y,
            ));
        }
    }

    /// Start (or restart) a power-up and fill the magazine
    pub fn enter_power_up(&mut self, ammo: &mut Ammo) {
        self.power_up_timer = 0.0;
        self.power_up = true;
        ammo.top_up();
        log::debug!("Power-up entered");
    }
}

impl Bounds for Player {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(keys: &[Key]) -> HeldKeys {
        let mut held = HeldKeys::default();
        for &key in keys {
            held.press(key);
        }
        held
    }

    #[test]
    fn test_vertical_movement() {
        let mut player = Player::default();
        let mut ammo = Ammo::default();

        player.update(16.0, held(&[Key::Up]), &mut ammo);
        assert_eq!(player.speed_y, -PLAYER_MAX_SPEED);
        assert_eq!(player.pos.y, PLAYER_START_Y - PLAYER_MAX_SPEED);

        player.update(16.0, held(&[Key::Down]), &mut ammo);
        assert_eq!(player.pos.y, PLAYER_START_Y);

        player.update(16.0, HeldKeys::default(), &mut ammo);
        assert_eq!(player.speed_y, 0.0);
        assert_eq!(player.pos.x, PLAYER_START_X);
    }

    #[test]
    fn test_up_wins_when_both_held() {
        let mut player = Player::default();
        let mut ammo = Ammo::default();
        player.update(16.0, held(&[Key::Down, Key::Up]), &mut ammo);
        assert_eq!(player.speed_y, -PLAYER_MAX_SPEED);
    }

    #[test]
    fn test_clamped_half_off_screen() {
        let mut player = Player::default();
        let mut ammo = Ammo::default();
        for _ in 0..200 {
            player.update(16.0, held(&[Key::Up]), &mut ammo);
        }
        assert_eq!(player.pos.y, -PLAYER_HEIGHT * 0.5);
        for _ in 0..300 {
            player.update(16.0, held(&[Key::Down]), &mut ammo);
        }
        assert_eq!(player.pos.y, GAME_HEIGHT - PLAYER_HEIGHT * 0.5);
    }

    #[test]
    fn test_animation_wraps() {
        let mut player = Player::default();
        let mut ammo = Ammo::default();
        player.frame = PLAYER_MAX_FRAME - 1;
        player.update(16.0, HeldKeys::default(), &mut ammo);
        assert_eq!(player.frame, PLAYER_MAX_FRAME);
        player.update(16.0, HeldKeys::default(), &mut ammo);
        assert_eq!(player.frame, 0);
    }

    #[test]
    fn test_shoot_spends_one_round() {
        let mut player = Player::default();
        let mut ammo = Ammo::default();
        player.shoot_top(&mut ammo);
        assert_eq!(player.projectiles.len(), 1);
        assert_eq!(ammo.count, START_AMMO - 1.0);
        let shot = &player.projectiles[0];
        assert_eq!(shot.pos, Vec2::new(PLAYER_START_X + 80.0, PLAYER_START_Y + 30.0));
    }

    #[test]
    fn test_shoot_with_empty_magazine_is_noop() {
        let mut player = Player::default();
        let mut ammo = Ammo {
            count: 0.0,
            ..Ammo::default()
        };
        player.shoot_top(&mut ammo);
        assert!(player.projectiles.is_empty());
        assert_eq!(ammo.count, 0.0);

        // Same while powered up: the free second shot needs ammo too
        player.power_up = true;
        player.shoot_top(&mut ammo);
        assert!(player.projectiles.is_empty());
        assert_eq!(ammo.count, 0.0);
    }

    #[test]
    fn test_fractional_ammo_never_goes_negative() {
        let mut player = Player::default();
        let mut ammo = Ammo {
            count: 0.3,
            ..Ammo::default()
        };
        player.shoot_top(&mut ammo);
        assert_eq!(player.projectiles.len(), 1);
        assert_eq!(ammo.count, 0.0);

        let mut ammo = Ammo {
            count: 2.5,
            ..Ammo::default()
        };
        player.shoot_top(&mut ammo);
        assert_eq!(ammo.count, 1.5);
    }

    #[test]
    fn test_power_up_double_shot() {
        let mut player = Player::default();
        let mut ammo = Ammo::default();
        player.enter_power_up(&mut ammo);
        assert_eq!(ammo.count, MAX_AMMO);

        player.shoot_top(&mut ammo);
        assert_eq!(player.projectiles.len(), 2);
        assert_eq!(ammo.count, MAX_AMMO - 1.0);
        assert_eq!(player.projectiles[1].pos.y, PLAYER_START_Y + 60.0);
    }

    #[test]
    fn test_enter_power_up_keeps_larger_ammo() {
        let mut player = Player::default();
        let mut ammo = Ammo {
            count: MAX_AMMO + 7.0,
            ..Ammo::default()
        };
        player.enter_power_up(&mut ammo);
        assert_eq!(ammo.count, MAX_AMMO + 7.0);
        assert!(player.power_up);
    }

    #[test]
    fn test_power_up_regenerates_then_expires() {
        let mut player = Player::default();
        let mut ammo = Ammo {
            count: 0.0,
            ..Ammo::default()
        };
        player.power_up = true;
        player.update(100.0, HeldKeys::default(), &mut ammo);
        assert!((ammo.count - POWER_UP_AMMO_PER_TICK).abs() < 1e-6);

        // Timer must exceed the limit before the power-up clears
        let mut ticks = 1;
        while player.power_up {
            player.update(100.0, HeldKeys::default(), &mut ammo);
            ticks += 1;
            assert!(ticks < 1000);
        }
        // 101 ticks to pass 10000ms, one more to clear
        assert_eq!(ticks, 102);
        assert_eq!(player.power_up_timer, 0.0);
    }

    #[test]
    fn test_projectiles_pruned_off_screen() {
        let mut player = Player::default();
        let mut ammo = Ammo::default();
        player.shoot_top(&mut ammo);
        for _ in 0..200 {
            player.update(16.0, HeldKeys::default(), &mut ammo);
        }
        assert!(player.projectiles.is_empty());
    }
}
