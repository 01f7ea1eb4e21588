//! Kill detection and experience award.

use crate::action::ActionError;
use crate::message::{MessageColor, MessageSink, capitalize};
use crate::state::{EntityId, GameState};

/// What happened when a strike or effect dropped its target to zero hp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KillReport {
    pub victim: EntityId,
    pub killer: EntityId,
    /// Experience credited to the killer.
    pub xp_awarded: u32,
    /// Levels the killer advanced as a result.
    pub levels_gained: u32,
}

/// Experience a killer earns from a victim worth `xp_given`.
///
/// The player always receives the full amount. Everyone else receives it
/// divided by their current level (integer division, divisor at least 1).
pub fn experience_award(killer_is_player: bool, killer_level: u32, xp_given: u32) -> u32 {
    if killer_is_player {
        xp_given
    } else {
        xp_given / killer_level.max(1)
    }
}

/// Subtracts `amount` hp from `target` and runs the kill check.
///
/// Health is allowed to go negative.
pub fn apply_damage(
    state: &mut GameState,
    log: &mut dyn MessageSink,
    attacker: EntityId,
    target: EntityId,
    amount: i32,
) -> Result<Option<KillReport>, ActionError> {
    let victim = state
        .entities
        .actor_mut(target)
        .ok_or(ActionError::ActorNotFound(target))?;
    victim.fighter.hp = victim.fighter.hp.saturating_sub(amount);

    resolve_kill(state, log, attacker, target)
}

/// Post-damage check. Does nothing while the target still has hp.
pub fn resolve_kill(
    state: &mut GameState,
    log: &mut dyn MessageSink,
    attacker: EntityId,
    target: EntityId,
) -> Result<Option<KillReport>, ActionError> {
    let victim = state
        .entities
        .actor(target)
        .ok_or(ActionError::ActorNotFound(target))?;
    if victim.fighter.hp > 0 {
        return Ok(None);
    }
    let victim_name = victim.name.clone();
    let victim_is_player = victim.is_player();
    let xp_given = victim.level.xp_given;

    let killer = state
        .entities
        .actor_mut(attacker)
        .ok_or(ActionError::ActorNotFound(attacker))?;

    let color = if victim_is_player {
        MessageColor::PlayerDie
    } else {
        MessageColor::EnemyDie
    };
    log.add_message(
        format!("{} has killed {victim_name}.", capitalize(&killer.name)),
        color,
    );

    let xp_awarded = experience_award(
        killer.is_player(),
        killer.level.current_level(),
        xp_given,
    );
    let levels_gained = killer.level.add_xp(xp_awarded);

    if killer.is_player() {
        if xp_awarded > 0 {
            log.add_message(
                format!("You gain {xp_awarded} experience points."),
                MessageColor::Default,
            );
        }
        if levels_gained > 0 {
            log.add_message(
                format!("You advance to level {}!", killer.level.current_level()),
                MessageColor::Default,
            );
        }
    }

    tracing::info!(
        killer = %attacker,
        victim = %target,
        xp = xp_awarded,
        levels = levels_gained,
        "actor killed"
    );

    Ok(Some(KillReport {
        victim: target,
        killer: attacker,
        xp_awarded,
        levels_gained,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageLog;
    use crate::state::{
        ActorState, Faction, Fighter, Level, MapDimensions, Position, TerrainKind, TileMap,
        WorldState,
    };

    fn arena() -> GameState {
        let player = ActorState::new(
            EntityId::PLAYER,
            "Player",
            Position::new(1, 1),
            Faction::Holy,
            Fighter::new(30, 2, 5),
        )
        .with_level(Level::new(200, 150, 0));
        let tiles = TileMap::filled(
            MapDimensions::new(8, 8),
            TerrainKind::Floor,
            Position::new(7, 7),
        );
        GameState::new(player, WorldState::new(1, tiles))
    }

    fn spawn(state: &mut GameState, name: &str, faction: Faction, level: Level) -> EntityId {
        state.spawn_npc(
            ActorState::new(
                EntityId(0),
                name,
                Position::new(2, 2),
                faction,
                Fighter::new(10, 0, 4),
            )
            .with_level(level),
        )
    }

    #[test]
    fn player_gets_full_award() {
        assert_eq!(experience_award(true, 5, 100), 100);
    }

    #[test]
    fn npc_award_is_divided_by_level() {
        assert_eq!(experience_award(false, 1, 100), 100);
        assert_eq!(experience_award(false, 3, 100), 33);
        assert_eq!(experience_award(false, 0, 100), 100);
    }

    #[test]
    fn survivor_is_not_a_kill() {
        let mut state = arena();
        let mut log = MessageLog::new();
        let orc = spawn(&mut state, "Orc", Faction::Dark, Level::new(0, 0, 35));

        let report = apply_damage(&mut state, &mut log, EntityId::PLAYER, orc, 3).unwrap();

        assert_eq!(report, None);
        assert!(log.is_empty());
        assert_eq!(state.entities.actor(orc).unwrap().fighter.hp, 7);
    }

    #[test]
    fn player_kill_awards_full_xp_and_narrates() {
        let mut state = arena();
        let mut log = MessageLog::new();
        let orc = spawn(&mut state, "Orc", Faction::Dark, Level::new(0, 0, 35));

        let report = apply_damage(&mut state, &mut log, EntityId::PLAYER, orc, 12)
            .unwrap()
            .unwrap();

        assert_eq!(report.xp_awarded, 35);
        assert_eq!(report.levels_gained, 0);
        assert_eq!(state.entities.player.level.current_xp, 35);
        let texts: Vec<_> = log.texts().collect();
        assert_eq!(
            texts,
            vec!["Player has killed Orc.", "You gain 35 experience points."]
        );
        assert_eq!(log.messages()[0].color, MessageColor::EnemyDie);
    }

    #[test]
    fn npc_killing_player_uses_player_die_color() {
        let mut state = arena();
        let mut log = MessageLog::new();
        state.entities.player.level.xp_given = 100;
        let shaman = spawn(
            &mut state,
            "shaman",
            Faction::Dark,
            Level::new(0, 10, 0).with_current_level(3),
        );

        let report = apply_damage(&mut state, &mut log, shaman, EntityId::PLAYER, 40)
            .unwrap()
            .unwrap();

        assert_eq!(report.xp_awarded, 33);
        assert_eq!(log.messages()[0].text, "Shaman has killed Player.");
        assert_eq!(log.messages()[0].color, MessageColor::PlayerDie);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn enough_xp_advances_the_player() {
        let mut state = arena();
        let mut log = MessageLog::new();
        let ogre = spawn(&mut state, "Ogre", Faction::Dark, Level::new(0, 0, 400));

        let report = apply_damage(&mut state, &mut log, EntityId::PLAYER, ogre, 99)
            .unwrap()
            .unwrap();

        // 400 xp pays for the 350 threshold of level 1.
        assert_eq!(report.levels_gained, 1);
        assert_eq!(state.entities.player.level.current_level(), 2);
        assert_eq!(state.entities.player.level.current_xp, 50);
        assert_eq!(log.last().unwrap().text, "You advance to level 2!");
    }
}
