use descent_core::{
    Action, ActionResult, ActorState, ActorTemplate, CombatTrait, Direction, EntityId, Faction,
    GameConfig, GameEngine, GameEnv, GameState, HealingAction, Level, MapDimensions,
    MeleeAction, MessageColor, MessageLog, Position, RangedAction, StrikeOutcome, TerrainKind,
    TileMap, WorldState,
};

fn arena() -> GameState {
    let config = GameConfig::default();
    let player = ActorTemplate::builder("Player")
        .faction(Faction::Holy)
        .stats(100, 30, 50)
        .build()
        .to_actor(EntityId::PLAYER, Position::new(4, 4), &config);
    let tiles = TileMap::filled(
        MapDimensions::new(10, 10),
        TerrainKind::Floor,
        Position::new(9, 9),
    );
    GameState::new(player, WorldState::new(1, tiles))
}

fn spawn(state: &mut GameState, template: ActorTemplate, position: Position) -> EntityId {
    let actor = template.to_actor(EntityId(0), position, &GameConfig::default());
    state.spawn_npc(actor)
}

fn run(state: &mut GameState, action: Action, log: &mut MessageLog) -> ActionResult {
    GameEngine::new(state)
        .execute(GameEnv::empty(), &action, log)
        .expect("action should succeed")
}

#[test]
fn player_power_fifty_against_defense_thirty_deals_twenty() {
    let mut state = arena();
    let mut log = MessageLog::new();
    let shadow = spawn(
        &mut state,
        ActorTemplate::builder("Shadow")
            .faction(Faction::Dark)
            .stats(100, 30, 10)
            .build(),
        Position::new(5, 4),
    );

    let result = run(
        &mut state,
        MeleeAction::toward(EntityId::PLAYER, Direction::East).into(),
        &mut log,
    );

    assert_eq!(
        result,
        ActionResult::Strike(StrikeOutcome::Applied {
            target: shadow,
            magnitude: 20,
            kill: None,
        })
    );
    assert_eq!(state.entities.actor(shadow).unwrap().fighter.hp, 80);
}

#[test]
fn double_strike_assassin_deals_seventy() {
    let mut state = arena();
    let mut log = MessageLog::new();
    let assassin = spawn(
        &mut state,
        ActorTemplate::builder("Assassin")
            .faction(Faction::Dark)
            .stats(30, 0, 50)
            .combat_trait(CombatTrait::DoubleStrike)
            .build(),
        Position::new(3, 3),
    );

    run(
        &mut state,
        MeleeAction::new(assassin, 1, 1).into(),
        &mut log,
    );

    assert_eq!(state.entities.player.fighter.hp, 30);
    let last = log.last().unwrap();
    assert_eq!(last.text, "Assassin stabs Player, twice, for 70 hit points.");
    assert_eq!(last.color, MessageColor::EnemyAttack);
}

#[test]
fn same_faction_damage_changes_nothing() {
    let mut state = arena();
    let mut log = MessageLog::new();
    spawn(
        &mut state,
        ActorTemplate::builder("Templar")
            .faction(Faction::Holy)
            .stats(40, 1, 6)
            .build(),
        Position::new(4, 3),
    );
    let before = state.clone();

    let melee = run(
        &mut state,
        MeleeAction::toward(EntityId::PLAYER, Direction::North).into(),
        &mut log,
    );
    let ranged = run(
        &mut state,
        RangedAction::new(EntityId::PLAYER, Position::new(4, 3)).into(),
        &mut log,
    );

    for result in [melee, ranged] {
        assert!(matches!(
            result,
            ActionResult::Strike(StrikeOutcome::Ignored { .. })
        ));
    }
    assert_eq!(state, before);
    assert!(log.is_empty());
}

#[test]
fn cleric_heals_ally_by_power_and_ignores_enemy() {
    let mut state = arena();
    let mut log = MessageLog::new();
    let cleric = spawn(
        &mut state,
        ActorTemplate::builder("Cleric")
            .faction(Faction::Holy)
            .stats(20, 0, 7)
            .build(),
        Position::new(0, 0),
    );
    let shadow = spawn(
        &mut state,
        ActorTemplate::builder("Shadow")
            .faction(Faction::Dark)
            .stats(20, 0, 7)
            .build(),
        Position::new(9, 0),
    );
    state.entities.player.fighter.hp = 95;
    state.entities.actor_mut(shadow).unwrap().fighter.hp = 5;

    run(
        &mut state,
        HealingAction::new(cleric, Position::new(4, 4)).into(),
        &mut log,
    );
    run(
        &mut state,
        HealingAction::new(cleric, Position::new(9, 0)).into(),
        &mut log,
    );

    // Healing is not capped at max hp.
    assert_eq!(state.entities.player.fighter.hp, 102);
    assert_eq!(state.entities.actor(shadow).unwrap().fighter.hp, 5);
    assert_eq!(log.len(), 1);
    assert_eq!(log.last().unwrap().text, "Cleric healed Player for 7 hit points.");
}

#[test]
fn npc_killer_of_level_three_gets_a_third_of_the_xp() {
    let mut state = arena();
    let mut log = MessageLog::new();
    let archer = spawn(
        &mut state,
        ActorTemplate::builder("Archer")
            .faction(Faction::Dark)
            .stats(30, 0, 60)
            .build(),
        Position::new(0, 9),
    );
    let templar = spawn(
        &mut state,
        ActorTemplate::builder("Templar")
            .faction(Faction::Holy)
            .stats(10, 0, 1)
            .xp_given(100)
            .build(),
        Position::new(1, 9),
    );
    state.entities.actor_mut(archer).unwrap().level =
        Level::new(1_000, 0, 0).with_current_level(3);

    let result = run(
        &mut state,
        RangedAction::new(archer, Position::new(1, 9)).into(),
        &mut log,
    );

    let ActionResult::Strike(outcome) = result else {
        panic!("expected strike");
    };
    let kill = outcome.kill().copied().unwrap();
    assert_eq!(kill.victim, templar);
    assert_eq!(kill.xp_awarded, 33);
    assert_eq!(state.entities.actor(archer).unwrap().level.current_xp, 33);
    assert!(!state.entities.actor(templar).unwrap().is_alive());
    assert_eq!(log.last().unwrap().text, "Archer has killed Templar.");
}

#[test]
fn player_kill_awards_full_xp() {
    let mut state = arena();
    let mut log = MessageLog::new();
    state.entities.player.level = Level::new(200, 150, 0).with_current_level(3);
    let shadow = spawn(
        &mut state,
        ActorTemplate::builder("Shadow")
            .faction(Faction::Dark)
            .stats(5, 0, 1)
            .xp_given(100)
            .build(),
        Position::new(5, 5),
    );

    run(
        &mut state,
        MeleeAction::toward(EntityId::PLAYER, Direction::SouthEast).into(),
        &mut log,
    );

    assert!(!state.entities.actor(shadow).unwrap().is_alive());
    assert_eq!(state.entities.player.level.current_xp, 100);
    let texts: Vec<_> = log.texts().collect();
    assert_eq!(
        texts,
        vec![
            "Player attacks Shadow for 50 hit points.",
            "Player has killed Shadow.",
            "You gain 100 experience points.",
        ]
    );
}

#[test]
fn dead_actors_are_not_targets() {
    let mut state = arena();
    let mut log = MessageLog::new();
    let corpse = spawn(
        &mut state,
        ActorTemplate::builder("Shadow")
            .faction(Faction::Dark)
            .stats(5, 0, 1)
            .build(),
        Position::new(5, 4),
    );
    state.entities.actor_mut(corpse).unwrap().fighter.hp = 0;

    let handled = GameEngine::new(&mut state)
        .try_turn(
            GameEnv::empty(),
            &MeleeAction::toward(EntityId::PLAYER, Direction::East).into(),
            &mut log,
        )
        .unwrap();

    assert_eq!(handled, None);
    assert_eq!(log.last().unwrap().text, "Nothing to attack.");
}

#[test]
fn npc_level_defaults_to_one() {
    let actor: ActorState = ActorTemplate::builder("Shaman")
        .faction(Faction::Dark)
        .stats(10, 0, 2)
        .build()
        .to_actor(EntityId(3), Position::ORIGIN, &GameConfig::default());
    assert_eq!(actor.level.current_level(), 1);
}
