//! Rasters, opacity masks and masked sprites
//!
//! A [`MaskedSprite`] pairs a raster with the bitmask of its opaque pixels.
//! The mask drives pixel-accurate collisions; the opaque column span drives
//! the check whether an actor has left the scene.

use std::fmt;
use std::sync::Arc;

use glam::IVec2;

use crate::consts::ALPHA_THRESHOLD;
use crate::error::SpriteError;

/// An RGBA8 image, row-major, read-only after construction
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl fmt::Debug for Raster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Raster {
    /// Wrap an RGBA8 buffer of `width * height * 4` bytes
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, SpriteError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(SpriteError::BufferSize {
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Build a raster by evaluating `pixel(x, y)` for every pixel
    pub fn from_fn(width: u32, height: u32, mut pixel: impl FnMut(u32, u32) -> [u8; 4]) -> Self {
        let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                rgba.extend_from_slice(&pixel(x, y));
            }
        }
        Self {
            width,
            height,
            rgba,
        }
    }

    /// A raster of a single color
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self::from_fn(width, height, |_, _| color)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major
    pub fn as_rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Alpha channel at (x, y)
    #[inline]
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.rgba[idx + 3]
    }
}

/// Per-pixel occupancy, packed 64 columns per word, least significant bit first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmask {
    width: u32,
    height: u32,
    /// Words per row
    stride: usize,
    bits: Vec<u64>,
}

impl Bitmask {
    /// An empty mask
    pub fn new(width: u32, height: u32) -> Self {
        let stride = (width as usize).div_ceil(64);
        Self {
            width,
            height,
            stride,
            bits: vec![0; stride * height as usize],
        }
    }

    /// Set the bits of all pixels whose alpha exceeds `threshold`
    pub fn from_raster(raster: &Raster, threshold: u8) -> Self {
        let mut mask = Self::new(raster.width(), raster.height());
        for y in 0..raster.height() {
            for x in 0..raster.width() {
                if raster.alpha(x, y) > threshold {
                    mask.set(x, y);
                }
            }
        }
        mask
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set(&mut self, x: u32, y: u32) {
        debug_assert!(x < self.width && y < self.height);
        let idx = y as usize * self.stride + x as usize / 64;
        self.bits[idx] |= 1u64 << (x % 64);
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = y as usize * self.stride + x as usize / 64;
        self.bits[idx] & (1u64 << (x % 64)) != 0
    }

    /// Number of set bits
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|w| w.count_ones()).sum()
    }

    /// Leftmost and rightmost columns (inclusive) holding any set bit
    pub fn column_span(&self) -> Option<(u32, u32)> {
        let mut union = vec![0u64; self.stride];
        for row in self.bits.chunks_exact(self.stride.max(1)) {
            for (acc, word) in union.iter_mut().zip(row) {
                *acc |= word;
            }
        }

        let first = union
            .iter()
            .enumerate()
            .find(|(_, w)| **w != 0)
            .map(|(i, w)| i as u32 * 64 + w.trailing_zeros())?;
        let last = union
            .iter()
            .enumerate()
            .rev()
            .find(|(_, w)| **w != 0)
            .map(|(i, w)| i as u32 * 64 + 63 - w.leading_zeros())?;
        Some((first, last))
    }

    #[inline]
    fn row(&self, y: usize) -> &[u64] {
        &self.bits[y * self.stride..(y + 1) * self.stride]
    }

    /// 64 bits of row `y` starting at column `start`; columns outside the mask read as clear
    fn window(&self, y: usize, start: i64) -> u64 {
        if start <= -64 || start >= self.width as i64 {
            return 0;
        }
        if start < 0 {
            return self.window(y, 0) << (-start) as u32;
        }
        let row = self.row(y);
        let word = (start / 64) as usize;
        let bit = (start % 64) as u32;
        let lo = row[word] >> bit;
        let hi = if bit != 0 && word + 1 < row.len() {
            row[word + 1] << (64 - bit)
        } else {
            0
        };
        lo | hi
    }

    /// First pixel (in this mask's coordinates) set in both masks, with
    /// `other` placed at `offset` relative to this mask's origin
    pub fn overlap(&self, other: &Bitmask, offset: IVec2) -> Option<IVec2> {
        let (ox, oy) = (offset.x as i64, offset.y as i64);
        let y_start = oy.max(0);
        let y_end = (self.height as i64).min(other.height as i64 + oy);

        for y in y_start..y_end {
            let other_y = (y - oy) as usize;
            for (i, &word) in self.row(y as usize).iter().enumerate() {
                if word == 0 {
                    continue;
                }
                let hits = word & other.window(other_y, i as i64 * 64 - ox);
                if hits != 0 {
                    let x = i as i32 * 64 + hits.trailing_zeros() as i32;
                    return Some(IVec2::new(x, y as i32));
                }
            }
        }
        None
    }
}

/// A raster with its opacity mask and opaque column span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedSprite {
    raster: Raster,
    mask: Bitmask,
    first_opaque_column: u32,
    last_opaque_column: u32,
}

impl MaskedSprite {
    /// Derive the mask from the alpha channel; fully transparent rasters are rejected
    pub fn new(raster: Raster) -> Result<Self, SpriteError> {
        let mask = Bitmask::from_raster(&raster, ALPHA_THRESHOLD);
        let (first_opaque_column, last_opaque_column) =
            mask.column_span().ok_or(SpriteError::Invisible {
                width: raster.width(),
                height: raster.height(),
            })?;

        Ok(Self {
            raster,
            mask,
            first_opaque_column,
            last_opaque_column,
        })
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn mask(&self) -> &Bitmask {
        &self.mask
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    /// Leftmost column holding an opaque pixel
    #[inline]
    pub fn first_opaque_column(&self) -> u32 {
        self.first_opaque_column
    }

    /// Rightmost column holding an opaque pixel (inclusive)
    #[inline]
    pub fn last_opaque_column(&self) -> u32 {
        self.last_opaque_column
    }
}

/// Shared, non-empty run-cycle animation
///
/// Cloning is cheap; all actors using the same character share the frames.
#[derive(Clone)]
pub struct FrameSet(Arc<[MaskedSprite]>);

impl FrameSet {
    pub fn new(frames: Vec<MaskedSprite>) -> Result<Self, SpriteError> {
        if frames.is_empty() {
            return Err(SpriteError::EmptyFrameSet);
        }
        Ok(Self(frames.into()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Frame at `index`; panics on an out-of-range index since actors keep it valid
    #[inline]
    pub fn frame(&self, index: usize) -> &MaskedSprite {
        &self.0[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaskedSprite> {
        self.0.iter()
    }
}

impl PartialEq for FrameSet {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0[..] == other.0[..]
    }
}

impl fmt::Debug for FrameSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FrameSet").field(&self.0.len()).finish()
    }
}
