use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// One complete texture set for the sphere material. Paths are relative to
/// the asset root; every map except `depth` is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialSet {
    pub name: String,
    pub base_color: String,
    pub normal: String,
    pub metallic_roughness: String,
    pub occlusion: String,
    /// Height map driving parallax relief. Optional: the slate set reuses
    /// its normal map here, only the forest set ships a real height map.
    #[serde(default)]
    pub depth: Option<String>,
}

/// Manifest of the material sets available to the viewer, loaded as a JSON
/// asset at startup.
#[derive(Debug, Clone, Serialize, Deserialize, Asset, TypePath)]
pub struct MaterialManifest {
    pub sets: Vec<MaterialSet>,
}

impl MaterialManifest {
    pub fn set(&self, index: usize) -> Option<&MaterialSet> {
        self.sets.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_parses_with_and_without_depth_map() {
        let json = r#"{
            "sets": [
                {
                    "name": "slate_rock",
                    "base_color": "materials/slate_rock/color.jpg",
                    "normal": "materials/slate_rock/normal.jpg",
                    "metallic_roughness": "materials/slate_rock/rough.jpg",
                    "occlusion": "materials/slate_rock/occ.jpg"
                },
                {
                    "name": "forest_ground",
                    "base_color": "materials/forest_ground/color.jpg",
                    "normal": "materials/forest_ground/normal.jpg",
                    "metallic_roughness": "materials/forest_ground/rough.jpg",
                    "occlusion": "materials/forest_ground/occ.jpg",
                    "depth": "materials/forest_ground/height.png"
                }
            ]
        }"#;

        let manifest: MaterialManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.sets.len(), 2);
        assert!(manifest.set(0).unwrap().depth.is_none());
        assert_eq!(
            manifest.set(1).unwrap().depth.as_deref(),
            Some("materials/forest_ground/height.png")
        );
        assert!(manifest.set(2).is_none());
    }
}
