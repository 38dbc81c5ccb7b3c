//! Star icons and the asset catalog
//!
//! A star can be drawn from raw RGB565 pixel data ([`Bitmap`]) or as a vector
//! five-point glyph ([`StarGlyph`]) built from `embedded-graphics` triangles.
//! Icons that the host does not supply are looked up by name in an
//! [`AssetCatalog`]; the default catalog, [`BundledAssets`], ships glyphs for
//! all three star states.

use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Polyline, PrimitiveStyle, Rectangle, Triangle};
use log::trace;

use super::error::{ConfigError, ConfigResult};
use super::layout::round_to_i32;
use super::render::StarState;
use crate::ui::styling::StarPalette;

/// Asset name of the unlit star
pub const ASSET_OFF: &str = "off";
/// Asset name of the fully lit star
pub const ASSET_ON: &str = "on";
/// Asset name of the half-lit star
pub const ASSET_HALF: &str = "half";

/// Default glyph diameter in pixels
pub const DEFAULT_GLYPH_DIAMETER_PX: u32 = 24;

/// Ratio between the inner and outer radius of a regular five-point star
const INNER_RADIUS_RATIO: f32 = 0.382;

/// Unit-circle outer vertices, starting at the top and going clockwise
/// (screen coordinates, y grows downwards).
const OUTER_VERTICES: [(f32, f32); 5] = [
    (0.0, -1.0),
    (0.951, -0.309),
    (0.588, 0.809),
    (-0.588, 0.809),
    (-0.951, -0.309),
];

/// Unit-circle inner vertices, each between two outer ones
const INNER_VERTICES: [(f32, f32); 5] = [
    (0.588, -0.809),
    (0.951, 0.309),
    (0.0, 1.0),
    (-0.951, 0.309),
    (-0.588, -0.809),
];

/// Raw big-endian RGB565 image data.
///
/// Height is derived from the data length; trailing bytes that do not form a
/// full row are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bitmap {
    data: &'static [u8],
    width: u32,
}

impl Bitmap {
    pub const fn new(data: &'static [u8], width: u32) -> Self {
        Self { data, width }
    }

    pub fn size(&self) -> Size {
        if self.width == 0 {
            return Size::zero();
        }
        let row_bytes = self.width as usize * 2;
        Size::new(self.width, (self.data.len() / row_bytes) as u32)
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        top_left: Point,
        target: &mut D,
    ) -> Result<(), D::Error> {
        if self.size().height == 0 {
            return Ok(());
        }
        let raw = ImageRaw::<Rgb565>::new(self.data, self.width);
        Image::new(&raw, top_left).draw(target)
    }
}

/// How much of a vector star is lit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    Empty,
    Half,
    Full,
}

/// Vector five-point star drawn with filled triangles and an outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarGlyph {
    diameter: u32,
    coverage: Coverage,
    palette: StarPalette,
}

impl StarGlyph {
    pub fn new(diameter: u32, coverage: Coverage) -> Self {
        Self {
            diameter,
            coverage,
            palette: StarPalette::default(),
        }
    }

    pub fn with_palette(mut self, palette: StarPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn coverage(&self) -> Coverage {
        self.coverage
    }

    pub fn size(&self) -> Size {
        Size::new(self.diameter, self.diameter)
    }

    /// Outline vertices alternating outer and inner points
    fn vertices(&self, top_left: Point) -> [Point; 10] {
        let radius = (self.diameter as f32 - 1.0) / 2.0;
        let cx = top_left.x as f32 + radius;
        let cy = top_left.y as f32 + radius;
        let inner = radius * INNER_RADIUS_RATIO;

        let mut points = [Point::zero(); 10];
        for i in 0..5 {
            let (ox, oy) = OUTER_VERTICES[i];
            let (ix, iy) = INNER_VERTICES[i];
            points[2 * i] =
                Point::new(round_to_i32(cx + ox * radius), round_to_i32(cy + oy * radius));
            points[2 * i + 1] =
                Point::new(round_to_i32(cx + ix * inner), round_to_i32(cy + iy * inner));
        }
        points
    }

    fn fill<D: DrawTarget<Color = Rgb565>>(
        center: Point,
        vertices: &[Point; 10],
        color: Rgb565,
        target: &mut D,
    ) -> Result<(), D::Error> {
        let style = PrimitiveStyle::with_fill(color);
        for i in 0..vertices.len() {
            let next = vertices[(i + 1) % vertices.len()];
            Triangle::new(center, vertices[i], next)
                .into_styled(style)
                .draw(target)?;
        }
        Ok(())
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        top_left: Point,
        target: &mut D,
    ) -> Result<(), D::Error> {
        if self.diameter < 3 {
            return Ok(());
        }

        let vertices = self.vertices(top_left);
        let center = top_left + Point::new(self.diameter as i32 / 2, self.diameter as i32 / 2);

        match self.coverage {
            Coverage::Empty => Self::fill(center, &vertices, self.palette.unlit, target)?,
            Coverage::Full => Self::fill(center, &vertices, self.palette.lit, target)?,
            Coverage::Half => {
                Self::fill(center, &vertices, self.palette.unlit, target)?;
                let left_half = Rectangle::new(
                    top_left,
                    Size::new(self.diameter.div_ceil(2), self.diameter),
                );
                Self::fill(center, &vertices, self.palette.lit, &mut target.clipped(&left_half))?;
            }
        }

        let mut outline = [Point::zero(); 11];
        outline[..10].copy_from_slice(&vertices);
        outline[10] = vertices[0];
        Polyline::new(&outline)
            .into_styled(PrimitiveStyle::with_stroke(self.palette.outline, 1))
            .draw(target)
    }
}

/// Image used for one star state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StarIcon {
    Bitmap(Bitmap),
    Glyph(StarGlyph),
}

impl StarIcon {
    /// Intrinsic size of the icon
    pub fn size(&self) -> Size {
        match self {
            StarIcon::Bitmap(bitmap) => bitmap.size(),
            StarIcon::Glyph(glyph) => glyph.size(),
        }
    }

    /// Draw the icon with its top-left corner at `top_left`
    pub fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        top_left: Point,
        target: &mut D,
    ) -> Result<(), D::Error> {
        match self {
            StarIcon::Bitmap(bitmap) => bitmap.draw(top_left, target),
            StarIcon::Glyph(glyph) => glyph.draw(top_left, target),
        }
    }
}

/// Source of named fallback icons
pub trait AssetCatalog {
    /// Look up an icon by asset name (`off`, `on` or `half`)
    fn lookup(&self, name: &str) -> Option<StarIcon>;
}

/// Default catalog of vector star glyphs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BundledAssets {
    diameter: u32,
    palette: StarPalette,
}

impl Default for BundledAssets {
    fn default() -> Self {
        Self {
            diameter: DEFAULT_GLYPH_DIAMETER_PX,
            palette: StarPalette::default(),
        }
    }
}

impl BundledAssets {
    pub fn with_diameter(mut self, diameter: u32) -> Self {
        self.diameter = diameter;
        self
    }

    pub fn with_palette(mut self, palette: StarPalette) -> Self {
        self.palette = palette;
        self
    }

    fn glyph(&self, coverage: Coverage) -> StarIcon {
        StarIcon::Glyph(StarGlyph::new(self.diameter, coverage).with_palette(self.palette))
    }
}

impl AssetCatalog for BundledAssets {
    fn lookup(&self, name: &str) -> Option<StarIcon> {
        match name {
            ASSET_OFF => Some(self.glyph(Coverage::Empty)),
            ASSET_ON => Some(self.glyph(Coverage::Full)),
            ASSET_HALF => Some(self.glyph(Coverage::Half)),
            _ => None,
        }
    }
}

/// The three icons a widget draws with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSet {
    pub off: StarIcon,
    pub on: StarIcon,
    pub half: StarIcon,
}

impl IconSet {
    /// Fill in missing icons from `catalog`.
    ///
    /// Fails with [`ConfigError::MissingIcon`] naming the first icon that is
    /// neither supplied nor available in the catalog.
    pub fn resolve(
        off: Option<StarIcon>,
        on: Option<StarIcon>,
        half: Option<StarIcon>,
        catalog: &dyn AssetCatalog,
    ) -> ConfigResult<Self> {
        let fetch = |icon: Option<StarIcon>, name: &'static str| -> ConfigResult<StarIcon> {
            match icon {
                Some(icon) => Ok(icon),
                None => {
                    trace!("Falling back to catalog asset '{}'", name);
                    catalog.lookup(name).ok_or(ConfigError::MissingIcon { name })
                }
            }
        };

        Ok(Self {
            off: fetch(off, ASSET_OFF)?,
            on: fetch(on, ASSET_ON)?,
            half: fetch(half, ASSET_HALF)?,
        })
    }

    /// Icon for a star visual state
    pub fn for_state(&self, state: StarState) -> &StarIcon {
        match state {
            StarState::Off => &self.off,
            StarState::On => &self.on,
            StarState::Half => &self.half,
        }
    }

    /// Size every star frame takes, which is the off icon's size
    pub fn frame_size(&self) -> Size {
        self.off.size()
    }
}

impl Default for IconSet {
    fn default() -> Self {
        let assets = BundledAssets::default();
        Self {
            off: assets.glyph(Coverage::Empty),
            on: assets.glyph(Coverage::Full),
            half: assets.glyph(Coverage::Half),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::PixelRecorder;

    struct EmptyCatalog;

    impl AssetCatalog for EmptyCatalog {
        fn lookup(&self, _name: &str) -> Option<StarIcon> {
            None
        }
    }

    /// Catalog that only knows the unlit star
    struct OffOnlyCatalog;

    impl AssetCatalog for OffOnlyCatalog {
        fn lookup(&self, name: &str) -> Option<StarIcon> {
            (name == ASSET_OFF).then(|| StarIcon::Glyph(StarGlyph::new(10, Coverage::Empty)))
        }
    }

    static RED_2X2: [u8; 8] = [0xF8, 0x00, 0xF8, 0x00, 0xF8, 0x00, 0xF8, 0x00];

    #[test]
    fn test_bitmap_size_from_data() {
        let bitmap = Bitmap::new(&RED_2X2, 2);
        assert_eq!(bitmap.size(), Size::new(2, 2));
        assert_eq!(Bitmap::new(&RED_2X2, 0).size(), Size::zero());
    }

    #[test]
    fn test_bitmap_draws_pixels() {
        let mut recorder = PixelRecorder::new();
        StarIcon::Bitmap(Bitmap::new(&RED_2X2, 2))
            .draw(Point::new(5, 5), &mut recorder)
            .unwrap();

        assert_eq!(recorder.count(Rgb565::RED), 4);
        assert_eq!(recorder.color_at(Point::new(6, 6)), Some(Rgb565::RED));
    }

    #[test]
    fn test_bundled_assets_cover_all_states() {
        let assets = BundledAssets::default();
        for name in [ASSET_OFF, ASSET_ON, ASSET_HALF] {
            assert!(assets.lookup(name).is_some(), "missing bundled asset {}", name);
        }
        assert!(assets.lookup("sparkle").is_none());
    }

    #[test]
    fn test_resolve_prefers_supplied_icons() {
        let custom = StarIcon::Bitmap(Bitmap::new(&RED_2X2, 2));
        let icons = IconSet::resolve(Some(custom), None, None, &BundledAssets::default()).unwrap();

        assert_eq!(icons.off, custom);
        assert_eq!(icons.frame_size(), Size::new(2, 2));
        assert!(matches!(icons.on, StarIcon::Glyph(g) if g.coverage() == Coverage::Full));
        assert!(matches!(icons.half, StarIcon::Glyph(g) if g.coverage() == Coverage::Half));
    }

    #[test]
    fn test_resolve_reports_missing_asset() {
        assert_eq!(
            IconSet::resolve(None, None, None, &EmptyCatalog),
            Err(ConfigError::MissingIcon { name: ASSET_OFF })
        );
        assert_eq!(
            IconSet::resolve(None, None, None, &OffOnlyCatalog),
            Err(ConfigError::MissingIcon { name: ASSET_ON })
        );
    }

    #[test]
    fn test_glyph_coverage_fills() {
        let palette = StarPalette::default();
        let mut full = PixelRecorder::new();
        let mut empty = PixelRecorder::new();
        StarIcon::Glyph(StarGlyph::new(24, Coverage::Full))
            .draw(Point::zero(), &mut full)
            .unwrap();
        StarIcon::Glyph(StarGlyph::new(24, Coverage::Empty))
            .draw(Point::zero(), &mut empty)
            .unwrap();

        assert!(full.count(palette.lit) > 0);
        assert_eq!(full.count(palette.unlit), 0);
        assert!(empty.count(palette.unlit) > 0);
        assert_eq!(empty.count(palette.lit), 0);
    }

    #[test]
    fn test_half_glyph_lights_left_side_only() {
        let palette = StarPalette::default();
        let mut recorder = PixelRecorder::new();
        StarIcon::Glyph(StarGlyph::new(24, Coverage::Half))
            .draw(Point::zero(), &mut recorder)
            .unwrap();

        assert!(recorder.count_in_columns(palette.lit, 0, 12) > 0);
        assert_eq!(recorder.count_in_columns(palette.lit, 12, 24), 0);
        assert!(recorder.count_in_columns(palette.unlit, 12, 24) > 0);
    }

    #[test]
    fn test_glyph_stays_inside_frame() {
        let mut recorder = PixelRecorder::new();
        let top_left = Point::new(40, 10);
        StarIcon::Glyph(StarGlyph::new(20, Coverage::Full))
            .draw(top_left, &mut recorder)
            .unwrap();

        let frame = Rectangle::new(top_left, Size::new(20, 20));
        let palette = StarPalette::default();
        let total = recorder.count(palette.lit) + recorder.count(palette.outline);
        let inside = (0..20)
            .flat_map(|dy| (0..20).map(move |dx| top_left + Point::new(dx, dy)))
            .filter(|p| frame.contains(*p) && recorder.color_at(*p).is_some())
            .count();
        assert_eq!(total, inside);
    }
}
