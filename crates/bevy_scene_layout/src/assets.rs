use core::result::Result;

use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use bevy::tasks::ConditionalSendFuture;
use scene_layout::prelude::*;
use serde::{Deserialize, Serialize};

/// Asset describing a complete [`LayoutPlan`] for `scene_layout`.
#[derive(Asset, TypePath, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutPlanAsset {
    pub rules: Vec<PlacementRule>,
    pub fixed: Vec<Placement>,
}

impl From<&LayoutPlanAsset> for LayoutPlan {
    fn from(asset: &LayoutPlanAsset) -> Self {
        LayoutPlan::new()
            .with_rules(asset.rules.clone())
            .with_fixed_many(asset.fixed.iter().copied())
    }
}

impl From<LayoutPlanAsset> for LayoutPlan {
    fn from(asset: LayoutPlanAsset) -> Self {
        LayoutPlan::new()
            .with_rules(asset.rules)
            .with_fixed_many(asset.fixed)
    }
}

/// Parses a RON layout plan.
pub fn parse_layout_plan(bytes: &[u8]) -> anyhow::Result<LayoutPlanAsset> {
    ron::de::from_bytes(bytes).map_err(|e| anyhow::anyhow!(e))
}

/// Asset loader for [`LayoutPlanAsset`] using RON files with `.layout` extension.
#[derive(TypePath)]
pub struct LayoutPlanAssetLoader;

impl AssetLoader for LayoutPlanAssetLoader {
    type Asset = LayoutPlanAsset;
    type Settings = ();
    type Error = anyhow::Error;

    fn extensions(&self) -> &[&str] {
        &["layout"]
    }

    fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _context: &mut LoadContext,
    ) -> impl ConditionalSendFuture<Output = Result<Self::Asset, Self::Error>> {
        Box::pin(async move {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).await?;
            parse_layout_plan(&bytes)
        })
    }
}

impl FromWorld for LayoutPlanAssetLoader {
    fn from_world(_: &mut World) -> Self {
        LayoutPlanAssetLoader
    }
}
