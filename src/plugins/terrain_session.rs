use crate::config::{RegionSettings, load_settings};
use crate::map::Region;
use crate::resources::TerrainSession;
use bevy::prelude::*;

/// Builds a [`TerrainSession`] at startup from [`RegionSettings`].
///
/// Settings come from the plugin itself or, when none are given, from the
/// user's config directory.
#[derive(Default)]
pub struct TerrainSessionPlugin {
    settings: Option<RegionSettings>,
}

impl TerrainSessionPlugin {
    pub fn with_settings(settings: RegionSettings) -> Self {
        Self {
            settings: Some(settings),
        }
    }
}

impl Plugin for TerrainSessionPlugin {
    fn build(&self, app: &mut App) {
        let settings = self.settings.clone().unwrap_or_else(load_settings);
        app.insert_resource(settings)
            .add_systems(Startup, start_session);
    }
}

pub fn start_session(mut commands: Commands, settings: Res<RegionSettings>) {
    match TerrainSession::new(settings.clone()) {
        Ok(session) => {
            info!(
                "Terrain session started (seed {seed}, {tiles} tiles)",
                seed = session.seed(),
                tiles = session.region().stats().tile_count
            );
            commands.insert_resource(session);
        }
        Err(err) => {
            warn!("Failed to start terrain session: {err}");
        }
    }
}
