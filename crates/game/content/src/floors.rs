//! Floor catalog: the data-driven [`FloorOracle`].

use std::collections::HashMap;

use descent_core::{ActorTemplate, EntityId, FloorOracle, GameConfig, GameState, ItemTemplate};

use crate::loaders::{FloorLayout, LoadResult};

/// Id of the player template in the actor catalog.
pub const PLAYER_TEMPLATE: &str = "player";

/// Loaded templates and layouts. Floors cycle through the layouts by depth.
#[derive(Clone, Debug)]
pub struct FloorCatalog {
    config: GameConfig,
    actors: HashMap<String, ActorTemplate>,
    items: HashMap<String, ItemTemplate>,
    floors: Vec<FloorLayout>,
}

impl FloorCatalog {
    /// Builds a catalog, rejecting layouts that reference unknown ids.
    pub fn new(
        config: GameConfig,
        actors: Vec<(String, ActorTemplate)>,
        items: Vec<(String, ItemTemplate)>,
        floors: Vec<FloorLayout>,
    ) -> LoadResult<Self> {
        if floors.is_empty() {
            anyhow::bail!("Floor catalog needs at least one layout");
        }
        let actors: HashMap<_, _> = actors.into_iter().collect();
        let items: HashMap<_, _> = items.into_iter().collect();

        for floor in &floors {
            if let Some((_, id)) = floor.actors.iter().find(|(_, id)| !actors.contains_key(id)) {
                anyhow::bail!("Floor '{}' references unknown actor '{}'", floor.name, id);
            }
            if let Some((_, id)) = floor.items.iter().find(|(_, id)| !items.contains_key(id)) {
                anyhow::bail!("Floor '{}' references unknown item '{}'", floor.name, id);
            }
        }

        Ok(Self {
            config,
            actors,
            items,
            floors,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn actor_template(&self, id: &str) -> Option<&ActorTemplate> {
        self.actors.get(id)
    }

    pub fn item_template(&self, id: &str) -> Option<&ItemTemplate> {
        self.items.get(id)
    }

    /// Layout used for `depth` (1-based, wrapping).
    pub fn layout_for(&self, depth: u32) -> &FloorLayout {
        let index = depth.saturating_sub(1) as usize % self.floors.len();
        &self.floors[index]
    }

    /// Creates the first floor with a fresh player from the `player` template.
    pub fn new_game(&self) -> LoadResult<GameState> {
        let template = self
            .actor_template(PLAYER_TEMPLATE)
            .ok_or_else(|| anyhow::anyhow!("Actor catalog has no '{}' entry", PLAYER_TEMPLATE))?;
        let layout = self.layout_for(1);
        let player = template.to_actor(EntityId::PLAYER, layout.player_start, &self.config);

        let mut state = GameState::new(player, Default::default());
        self.generate_floor(1, &mut state);
        Ok(state)
    }
}

impl FloorOracle for FloorCatalog {
    fn generate_floor(&self, depth: u32, state: &mut GameState) {
        let layout = self.layout_for(depth);
        state.reset_floor(depth, layout.tile_map.clone());
        state.entities.player.position = layout.player_start;

        for (position, id) in &layout.actors {
            if let Some(template) = self.actors.get(id) {
                let actor = template.to_actor(EntityId::default(), *position, &self.config);
                state.spawn_npc(actor);
            }
        }
        for (position, id) in &layout.items {
            if let Some(template) = self.items.get(id) {
                let item = template.to_item(state.allocate_entity_id());
                state.place_item(*position, item);
            }
        }

        tracing::debug!(
            depth,
            layout = %layout.name,
            npcs = state.entities.npcs.len(),
            items = state.items_on_map().len(),
            "floor generated"
        );
    }
}
