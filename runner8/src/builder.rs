use crate::context::GameContext;
use crate::game::{Game, GameConfig};
use crate::map::ObstacleMap;

pub struct Builder<'a, C: GameContext> {
    context: Option<C>,
    map: Option<&'a [u8]>,
    config: GameConfig,
    lead_in: usize,
}

impl<'a, C: GameContext> Builder<'a, C> {
    pub fn new() -> Self {
        Self {
            context: None,
            map: None,
            config: GameConfig::default(),
            lead_in: 0,
        }
    }

    pub fn with_context(mut self, ctx: C) -> Self {
        self.context = Some(ctx);
        self
    }

    pub fn with_map(mut self, columns: &'a [u8]) -> Self {
        self.map = Some(columns);
        self
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Reject maps starting with fewer than `columns` obstacle-free columns
    pub fn require_lead_in(mut self, columns: usize) -> Self {
        self.lead_in = columns;
        self
    }

    pub fn build(self) -> Result<Game<'a, C>, &'static str> {
        let context = self.context.ok_or("Context not provided")?;
        let map = ObstacleMap::new(self.map.ok_or("Map not provided")?)?;
        if map.lead_in() < self.lead_in {
            return Err("Map lead-in is too short");
        }
        Ok(Game::new(context, map, self.config))
    }
}

impl<'a, C: GameContext> Default for Builder<'a, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::GameTestingContext;
    use crate::map::{LEVEL, LEVEL_LEAD_IN};

    #[test]
    fn with_context_and_map() {
        let result = Builder::new()
            .with_context(GameTestingContext::new())
            .with_map(&LEVEL)
            .require_lead_in(LEVEL_LEAD_IN)
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn with_context_only() {
        let result = Builder::new()
            .with_context(GameTestingContext::new())
            .build();
        assert_eq!(result.err(), Some("Map not provided"));
    }

    #[test]
    fn with_map_only() {
        let result = Builder::<'_, GameTestingContext>::new()
            .with_map(&LEVEL)
            .build();
        assert_eq!(result.err(), Some("Context not provided"));
    }

    #[test]
    fn short_lead_in() {
        let result = Builder::new()
            .with_context(GameTestingContext::new())
            .with_map(&LEVEL)
            .require_lead_in(LEVEL_LEAD_IN + 1)
            .build();
        assert_eq!(result.err(), Some("Map lead-in is too short"));
    }

    #[test]
    fn map_without_scroll() {
        let result = Builder::new()
            .with_context(GameTestingContext::new())
            .with_map(&[0; 8])
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn config_is_passed_through() {
        let config = GameConfig {
            frame_pause_ms: 1,
            ..GameConfig::default()
        };
        let game = Builder::new()
            .with_context(GameTestingContext::new())
            .with_map(&LEVEL)
            .with_config(config)
            .build()
            .unwrap();
        assert_eq!(game.config(), &config);
    }
}
