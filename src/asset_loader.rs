use bevy::asset::LoadState;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

pub struct AssetLoaderPlugin;

impl Plugin for AssetLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AssetsState>() // necessary to tell if they've finished loading
            .init_resource::<ShowcaseAssets>()
            .init_resource::<FailedTextures>()
            // the scene reads the handles in Startup
            .add_systems(PreStartup, load_assets)
            .add_systems(
                Update,
                check_asset_loading.run_if(in_state(AssetsState::Loading)),
            )
            .add_systems(OnEnter(AssetsState::Loaded), apply_texture_fallbacks);
    }
}

/// `Loaded` once every texture has either loaded or failed for good.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AssetsState {
    #[default]
    Loading,
    Loaded,
}

#[derive(Resource, Clone, Debug, Default)]
pub struct ShowcaseAssets {
    pub mars_texture:  Handle<Image>,
    pub earth_texture: Handle<Image>,
}

impl ShowcaseAssets {
    fn textures(&self) -> [(&'static str, &Handle<Image>); 2] {
        [
            ("mars", &self.mars_texture),
            ("earth", &self.earth_texture),
        ]
    }
}

/// A mesh whose material samples `texture`. If the texture fails to load, the material
/// is swapped for a flat `fallback` colour so the mesh still renders.
#[derive(Component, Debug, Clone)]
pub struct TexturedSurface {
    pub texture:  Handle<Image>,
    pub fallback: Color,
}

/// Textures that failed to load; each one is reported once.
#[derive(Resource, Debug, Default)]
pub struct FailedTextures(HashSet<AssetId<Image>>);

impl FailedTextures {
    /// `true` the first time `id` is recorded.
    pub fn record(&mut self, id: AssetId<Image>) -> bool { self.0.insert(id) }

    pub fn contains(&self, id: AssetId<Image>) -> bool { self.0.contains(&id) }
}

pub fn load_assets(mut showcase_assets: ResMut<ShowcaseAssets>, asset_server: Res<AssetServer>) {
    *showcase_assets = ShowcaseAssets {
        mars_texture:  asset_server.load("img/8k_mars.jpg"),
        earth_texture: asset_server.load("img/8k_earth_daymap.jpg"),
    };
}

/// Where one texture stands, reduced to what decides whether loading is over.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TextureStatus {
    Pending,
    Loaded,
    Failed(String),
}

impl From<Option<LoadState>> for TextureStatus {
    fn from(state: Option<LoadState>) -> Self {
        match state {
            Some(LoadState::Loaded) => Self::Loaded,
            Some(LoadState::Failed(error)) => Self::Failed(error.to_string()),
            _ => Self::Pending,
        }
    }
}

/// `true` once the texture will not change again. A failure counts as settled.
fn settle(
    failed: &mut FailedTextures,
    name: &str,
    id: AssetId<Image>,
    status: TextureStatus,
) -> bool {
    match status {
        TextureStatus::Pending => false,
        TextureStatus::Loaded => true,
        TextureStatus::Failed(error) => {
            if failed.record(id) {
                warn!("{name} texture failed to load, falling back to a flat colour: {error}");
            }
            true
        },
    }
}

pub fn check_asset_loading(
    mut next_state: ResMut<NextState<AssetsState>>,
    mut failed: ResMut<FailedTextures>,
    asset_server: Res<AssetServer>,
    showcase_assets: Res<ShowcaseAssets>,
) {
    let mut settled = true;
    for (name, texture) in showcase_assets.textures() {
        let status = TextureStatus::from(asset_server.get_load_state(texture.id()));
        settled &= settle(&mut failed, name, texture.id(), status);
    }

    if settled {
        info!("All assets settled!");
        next_state.set(AssetsState::Loaded);
    }
}

fn apply_texture_fallbacks(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    failed: Res<FailedTextures>,
    surfaces: Query<(Entity, &TexturedSurface, &MeshMaterial3d<StandardMaterial>)>,
) {
    for (entity, surface, material) in &surfaces {
        if !failed.contains(surface.texture.id()) {
            continue;
        }
        let Some(mut flat) = materials.get(&material.0).cloned() else {
            continue;
        };
        flat.base_color_texture = None;
        flat.base_color = surface.fallback;
        commands.entity(entity).insert(MeshMaterial3d(materials.add(flat)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_are_reported_once() {
        let mut failed = FailedTextures::default();
        let id = Handle::<Image>::default().id();

        assert!(failed.record(id));
        assert!(!failed.record(id));
        assert!(failed.contains(id));
    }

    #[test]
    fn failed_texture_counts_as_settled_and_is_recorded() {
        let mut failed = FailedTextures::default();
        let id = Handle::<Image>::default().id();
        let status = TextureStatus::Failed("missing file".to_string());

        assert!(settle(&mut failed, "mars", id, status.clone()));
        assert!(failed.contains(id));
        // a second frame with the same failure is still settled, but not reported again
        assert!(settle(&mut failed, "mars", id, status));
        assert!(!failed.record(id));
    }

    #[test]
    fn only_pending_textures_hold_loading_back() {
        let mut failed = FailedTextures::default();
        let id = Handle::<Image>::default().id();

        assert!(!settle(&mut failed, "earth", id, TextureStatus::Pending));
        assert!(settle(&mut failed, "earth", id, TextureStatus::Loaded));
        assert!(!failed.contains(id));
        assert_eq!(TextureStatus::from(None), TextureStatus::Pending);
        assert_eq!(TextureStatus::from(Some(LoadState::Loading)), TextureStatus::Pending);
        assert_eq!(TextureStatus::from(Some(LoadState::Loaded)), TextureStatus::Loaded);
    }
}
