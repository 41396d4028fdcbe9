//! Media bundle supplied at session start
//!
//! Decoding images from disk is left to the embedding application; it hands
//! over rasters through an [`AssetProvider`]. The bundle is validated once,
//! so a session never starts with incomplete media.

use crate::consts::{SCENE_HEIGHT, SCENE_WIDTH};
use crate::error::AssetError;
use crate::sprite::{FrameSet, MaskedSprite, Raster};

/// Appearance of a level: parallax layers plus the ground drawn over the actors
#[derive(Debug, Clone)]
pub struct Level {
    pub sky: Raster,
    pub middle_decor: Raster,
    pub bg_decor: Raster,
    pub foreground: Raster,
    pub ground: Raster,
}

impl Level {
    /// Layers in drawing order; the ground occludes the actors
    pub fn layers(&self) -> [(&'static str, &Raster); 5] {
        [
            ("sky", &self.sky),
            ("middle_decor", &self.middle_decor),
            ("bg_decor", &self.bg_decor),
            ("foreground", &self.foreground),
            ("ground", &self.ground),
        ]
    }
}

/// A selectable character and its run cycle
#[derive(Debug, Clone)]
pub struct Character {
    pub name: String,
    pub run: FrameSet,
}

impl Character {
    /// Build the run cycle from rasters, failing on the first invisible frame
    pub fn from_rasters(
        name: impl Into<String>,
        rasters: impl IntoIterator<Item = Raster>,
    ) -> Result<Self, AssetError> {
        let name = name.into();
        let mut frames = Vec::new();
        for (i, raster) in rasters.into_iter().enumerate() {
            let sprite = MaskedSprite::new(raster).map_err(|source| AssetError::Sprite {
                what: format!("{name} run frame {i}"),
                source,
            })?;
            frames.push(sprite);
        }
        let run = FrameSet::new(frames).map_err(|source| AssetError::Sprite {
            what: format!("{name} run cycle"),
            source,
        })?;
        Ok(Self { name, run })
    }
}

/// Run cycles of the two actors of a session
#[derive(Debug, Clone, PartialEq)]
pub struct Cast {
    pub runaway: FrameSet,
    pub chaser: FrameSet,
}

/// Everything loaded before the first session
#[derive(Debug, Clone)]
pub struct Media {
    levels: Vec<Level>,
    characters: Vec<Character>,
}

impl Media {
    pub fn new(levels: Vec<Level>, characters: Vec<Character>) -> Result<Self, AssetError> {
        if levels.is_empty() {
            return Err(AssetError::NoLevels);
        }

        for (index, level) in levels.iter().enumerate() {
            for (layer, raster) in level.layers() {
                if raster.width() != SCENE_WIDTH || raster.height() != SCENE_HEIGHT {
                    return Err(AssetError::LayerSize {
                        level: index,
                        layer,
                        width: raster.width(),
                        height: raster.height(),
                        expected_width: SCENE_WIDTH,
                        expected_height: SCENE_HEIGHT,
                    });
                }
            }
        }

        log::debug!(
            "Media ready: {} levels, characters: {}",
            levels.len(),
            characters
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Self { levels, characters })
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn character(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name == name)
    }

    /// Pair two characters by name
    pub fn cast(&self, runaway: &str, chaser: &str) -> Option<Cast> {
        Some(Cast {
            runaway: self.character(runaway)?.run.clone(),
            chaser: self.character(chaser)?.run.clone(),
        })
    }
}

/// Source of the media bundle
pub trait AssetProvider {
    fn load(&self) -> Result<Media, AssetError>;
}

/// Name of the default runaway character
pub const PIRATE: &str = "pirate";
/// Name of the default chaser character
pub const TROLL: &str = "troll";

/// Generates simple shaded shapes in place of artwork, for headless runs and tests
#[derive(Debug, Clone)]
pub struct ProceduralAssets {
    pub level_count: usize,
    pub run_frames: usize,
}

impl Default for ProceduralAssets {
    fn default() -> Self {
        Self {
            level_count: 3,
            run_frames: 6,
        }
    }
}

impl ProceduralAssets {
    fn level(&self, index: usize) -> Level {
        let tint = (index * 40 % 256) as u8;
        let sky = Raster::from_fn(SCENE_WIDTH, SCENE_HEIGHT, |_, y| {
            let shade = (y * 255 / SCENE_HEIGHT) as u8;
            [tint, 255 - shade / 2, 255, 255]
        });
        // Rolling hills in the middle, a tree line behind the path, grass over the feet
        let middle_decor = Raster::from_fn(SCENE_WIDTH, SCENE_HEIGHT, |x, y| {
            let crest = 260.0 + (x as f32 / 50.0).sin() * 20.0;
            if y as f32 > crest { [60, 120 + tint / 4, 60, 255] } else { [0; 4] }
        });
        let bg_decor = Raster::from_fn(SCENE_WIDTH, SCENE_HEIGHT, |x, y| {
            if (x / 20) % 5 == 0 && (300..380).contains(&y) { [40, 80, 40, 255] } else { [0; 4] }
        });
        let foreground = Raster::from_fn(SCENE_WIDTH, SCENE_HEIGHT, |_, y| {
            if (380..400).contains(&y) { [120, 90, 50, 255] } else { [0; 4] }
        });
        let ground = Raster::from_fn(SCENE_WIDTH, SCENE_HEIGHT, |_, y| {
            if y >= 395 { [30, 160, 30, 255] } else { [0; 4] }
        });

        Level {
            sky,
            middle_decor,
            bg_decor,
            foreground,
            ground,
        }
    }

    /// Ellipse body with two legs swinging through the run cycle
    fn runner(&self, width: u32, height: u32, color: [u8; 4], frame: usize) -> Raster {
        let phase = frame as f32 / self.run_frames.max(1) as f32 * std::f32::consts::TAU;
        let swing = (phase.sin() * width as f32 / 6.0) as i32;
        let (cx, cy) = (width as f32 / 2.0, height as f32 * 0.4);
        let (rx, ry) = (width as f32 * 0.3, height as f32 * 0.35);
        let hip = (height as f32 * 0.7) as u32;

        Raster::from_fn(width, height, |x, y| {
            let (dx, dy) = ((x as f32 - cx) / rx, (y as f32 - cy) / ry);
            let body = dx * dx + dy * dy <= 1.0;

            let leg = |offset: i32| {
                let foot_x = cx as i32 + offset;
                y >= hip && (x as i32 - foot_x).abs() <= 2
            };
            let legs = leg(swing) || leg(-swing);

            if body || legs { color } else { [0; 4] }
        })
    }

    fn character(
        &self,
        name: &str,
        width: u32,
        height: u32,
        color: [u8; 4],
    ) -> Result<Character, AssetError> {
        let rasters = (0..self.run_frames).map(|frame| self.runner(width, height, color, frame));
        Character::from_rasters(name, rasters)
    }
}

impl AssetProvider for ProceduralAssets {
    fn load(&self) -> Result<Media, AssetError> {
        let levels = (0..self.level_count).map(|i| self.level(i)).collect();
        let characters = vec![
            self.character(PIRATE, 48, 64, [200, 40, 40, 255])?,
            self.character(TROLL, 64, 72, [90, 110, 60, 255])?,
        ];
        Media::new(levels, characters)
    }
}
