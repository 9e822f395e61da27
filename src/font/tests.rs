//! Atlas packing tests against a synthetic rasterizer.

use std::collections::HashSet;
use std::path::PathBuf;

use super::*;

/// Deterministic rasterizer: every pixel of row `r` of glyph `c` holds
/// `c.wrapping_add(r)`, so both placement and row order are observable.
struct FakeRasterizer {
    missing: HashSet<u8>,
    width_of: fn(u8) -> u32,
    height_of: fn(u8, u32) -> u32,
}

impl FakeRasterizer {
    fn uniform() -> Self {
        Self {
            missing: HashSet::new(),
            width_of: |code| u32::from(code % 5) + 3,
            height_of: |_, px| px / 2 + 1,
        }
    }

    fn with_missing(codes: &[u8]) -> Self {
        Self {
            missing: codes.iter().copied().collect(),
            ..Self::uniform()
        }
    }
}

impl GlyphRasterizer for FakeRasterizer {
    fn rasterize(&self, code: u8, pixel_height: u32) -> Option<RasterGlyph> {
        if self.missing.contains(&code) {
            return None;
        }
        let width = (self.width_of)(code);
        let height = (self.height_of)(code, pixel_height);
        let mut bitmap = Vec::with_capacity((width * height) as usize);
        for row in 0..height {
            bitmap.extend(std::iter::repeat_n(code.wrapping_add(row as u8), width as usize));
        }
        Some(RasterGlyph {
            width,
            height,
            bearing: [1, height as i32 - 2],
            advance: (width + 1) * 64,
            bitmap,
        })
    }
}

fn in_bounds(atlas: &FontAtlas, g: &Glyph) -> bool {
    g.position[0] + g.size[0] <= atlas.width() && g.position[1] + g.size[1] <= atlas.height()
}

#[test]
fn atlas_width_is_sixteen_pixel_heights() {
    let atlas = pack_atlas(&FakeRasterizer::uniform(), 12).expect("pack");
    assert_eq!(atlas.width(), 16 * 12);
    assert_eq!(atlas.pixel_height(), 12);
}

#[test]
fn atlas_height_is_positive_multiple_of_pixel_height() {
    for px in [4, 7, 12, 20, 33] {
        let atlas = pack_atlas(&FakeRasterizer::uniform(), px).expect("pack");
        assert!(atlas.height() >= px);
        assert_eq!(atlas.height() % px, 0, "px = {px}");
        let bmp = atlas.bitmap().expect("bitmap present");
        assert_eq!(bmp.as_bytes().len(), (atlas.width() * atlas.height()) as usize);
    }
}

#[test]
fn every_glyph_stays_inside_atlas() {
    for px in [4, 9, 16, 40] {
        let atlas = pack_atlas(&FakeRasterizer::uniform(), px).expect("pack");
        for code in 0..GLYPH_COUNT as u8 {
            let g = atlas.get(code).expect("all present");
            assert!(in_bounds(&atlas, g), "code {code} at px {px}: {g:?}");
        }
    }
}

#[test]
fn cursor_advances_and_wraps_rows() {
    // Width 10 glyphs in a 16 * 5 = 80 px wide atlas: 8 per row.
    let fake = FakeRasterizer {
        missing: HashSet::new(),
        width_of: |_| 10,
        height_of: |_, px| px,
    };
    let atlas = pack_atlas(&fake, 5).expect("pack");
    assert_eq!(atlas.get(0).map(|g| g.position), Some([0, 0]));
    assert_eq!(atlas.get(1).map(|g| g.position), Some([10, 0]));
    assert_eq!(atlas.get(7).map(|g| g.position), Some([70, 0]));
    assert_eq!(atlas.get(8).map(|g| g.position), Some([0, 5]));
    assert_eq!(atlas.get(127).map(|g| g.position), Some([70, 75]));
    assert_eq!(atlas.height(), 80);
}

#[test]
fn glyph_exactly_filling_row_does_not_wrap() {
    let fake = FakeRasterizer {
        missing: HashSet::new(),
        width_of: |_| 16,
        height_of: |_, _| 1,
    };
    // 16 px wide atlas at px = 1; each glyph fills a whole row.
    let atlas = pack_atlas(&fake, 1).expect("pack");
    assert_eq!(atlas.get(0).map(|g| g.position), Some([0, 0]));
    assert_eq!(atlas.get(1).map(|g| g.position), Some([0, 1]));
    assert_eq!(atlas.height(), 128);
}

#[test]
fn pixels_are_copied_top_down() {
    let atlas = pack_atlas(&FakeRasterizer::uniform(), 10).expect("pack");
    let bmp = atlas.bitmap().expect("bitmap present");
    let code = b'A';
    let g = *atlas.get(code).expect("present");
    for row in 0..g.size[1] {
        for col in 0..g.size[0] {
            assert_eq!(
                bmp.pixel(g.position[0] + col, g.position[1] + row),
                code.wrapping_add(row as u8),
                "row {row} col {col}"
            );
        }
    }
}

#[test]
fn metrics_are_carried_over() {
    let atlas = pack_atlas(&FakeRasterizer::uniform(), 10).expect("pack");
    let g = atlas.get(b'B').expect("present");
    let width = u32::from(b'B' % 5) + 3;
    assert_eq!(g.size, [width, 6]);
    assert_eq!(g.bearing, [1, 4]);
    assert_eq!(g.advance, (width + 1) * 64);
    assert_eq!(g.advance_px(), width + 1);
}

#[test]
fn missing_characters_are_absent_and_reported() {
    let atlas = pack_atlas(&FakeRasterizer::with_missing(&[0, 65, 127]), 8).expect("pack");
    assert_eq!(atlas.status(), AtlasStatus::SomeCharactersMissing);
    assert_eq!(atlas.missing(), &[0, 65, 127]);
    assert!(atlas.get(65).is_none());
    assert_eq!(atlas.glyph('A'), &Glyph::EMPTY);
    assert_eq!(atlas.glyph_count(), GLYPH_COUNT - 3);
    assert!(atlas.get(66).is_some());
}

#[test]
fn complete_font_reports_ok() {
    let atlas = pack_atlas(&FakeRasterizer::uniform(), 8).expect("pack");
    assert_eq!(atlas.status(), AtlasStatus::Ok);
    assert!(atlas.missing().is_empty());
    for code in b' '..=b'~' {
        assert!(atlas.get(code).is_some(), "printable {code} missing");
    }
}

#[test]
fn non_ascii_lookup_is_blank() {
    let atlas = pack_atlas(&FakeRasterizer::uniform(), 8).expect("pack");
    assert_eq!(atlas.glyph('é'), &Glyph::EMPTY);
    assert_eq!(atlas.glyph('\u{1F600}'), &Glyph::EMPTY);
    assert!(Glyph::EMPTY.is_blank());
}

#[test]
fn tall_glyphs_are_clipped_to_row_pitch() {
    let fake = FakeRasterizer {
        missing: HashSet::new(),
        width_of: |_| 4,
        height_of: |code, px| if code == b'(' { px + 3 } else { px },
    };
    let atlas = pack_atlas(&fake, 6).expect("pack");
    let g = atlas.get(b'(').expect("present");
    assert_eq!(g.size, [4, 6]);
    assert!(in_bounds(&atlas, g));
    assert_eq!(atlas.clipped(), [b'(']);
}

#[test]
fn short_glyphs_are_not_reported_clipped() {
    let atlas = pack_atlas(&FakeRasterizer::uniform(), 10).expect("pack");
    assert!(atlas.clipped().is_empty());
}

#[test]
fn glyph_wider_than_atlas_is_missing() {
    let fake = FakeRasterizer {
        missing: HashSet::new(),
        width_of: |code| if code == b'W' { 1000 } else { 2 },
        height_of: |_, _| 2,
    };
    let atlas = pack_atlas(&fake, 4).expect("pack");
    assert!(atlas.get(b'W').is_none());
    assert_eq!(atlas.status(), AtlasStatus::SomeCharactersMissing);
}

#[test]
fn zero_size_glyphs_take_no_space() {
    let fake = FakeRasterizer {
        missing: HashSet::new(),
        width_of: |code| if code == b' ' { 0 } else { 3 },
        height_of: |code, _| if code == b' ' { 0 } else { 3 },
    };
    let atlas = pack_atlas(&fake, 4).expect("pack");
    let space = atlas.get(b' ').expect("space present");
    let bang = atlas.get(b'!').expect("present");
    assert!(space.is_blank());
    assert_eq!(space.position, bang.position);
}

#[test]
fn packing_is_deterministic() {
    let a = pack_atlas(&FakeRasterizer::uniform(), 14).expect("pack");
    let b = pack_atlas(&FakeRasterizer::uniform(), 14).expect("pack");
    assert_eq!((a.width(), a.height()), (b.width(), b.height()));
    for code in 0..GLYPH_COUNT as u8 {
        assert_eq!(a.get(code), b.get(code));
    }
    assert_eq!(a.bitmap(), b.bitmap());
}

#[test]
fn take_bitmap_keeps_glyph_records() {
    let mut atlas = pack_atlas(&FakeRasterizer::uniform(), 8).expect("pack");
    let bmp = atlas.take_bitmap().expect("first take");
    assert_eq!(bmp.width(), atlas.width());
    assert_eq!(bmp.height(), atlas.height());
    assert!(atlas.bitmap().is_none());
    assert!(atlas.take_bitmap().is_none());
    assert!(atlas.get(b'x').is_some());
}

#[test]
fn uv_rect_is_normalized() {
    let atlas = pack_atlas(&FakeRasterizer::uniform(), 8).expect("pack");
    let g = atlas.get(b'Z').expect("present");
    let [u, v, du, dv] = atlas.uv_rect(g);
    assert!((u - g.position[0] as f32 / atlas.width() as f32).abs() < f32::EPSILON);
    assert!((v - g.position[1] as f32 / atlas.height() as f32).abs() < f32::EPSILON);
    assert!(u + du <= 1.0 && v + dv <= 1.0);
}

#[test]
fn zero_pixel_height_is_rejected() {
    assert!(matches!(
        pack_atlas(&FakeRasterizer::uniform(), 0),
        Err(FontError::InvalidPixelHeight(0))
    ));
    assert!(matches!(
        build_atlas(&PathBuf::from("unused.ttf"), 0),
        Err(FontError::InvalidPixelHeight(0))
    ));
}

#[test]
fn oversized_pixel_height_is_rejected() {
    for px in [MAX_PIXEL_HEIGHT + 1, u32::MAX / 8, u32::MAX] {
        assert!(matches!(
            pack_atlas(&FakeRasterizer::uniform(), px),
            Err(FontError::InvalidPixelHeight(h)) if h == px
        ));
    }
    // Rejected before the file is opened.
    let path = std::env::temp_dir().join("fractview_no_such_font.ttf");
    assert!(matches!(
        build_atlas(&path, u32::MAX),
        Err(FontError::InvalidPixelHeight(u32::MAX))
    ));
}

#[test]
fn largest_pixel_height_is_accepted() {
    let fake = FakeRasterizer {
        missing: HashSet::new(),
        width_of: |code| u32::from(code == b'M') * 3,
        height_of: |code, _| u32::from(code == b'M') * 2,
    };
    let atlas = pack_atlas(&fake, MAX_PIXEL_HEIGHT).expect("pack");
    assert_eq!(atlas.width(), ATLAS_COLUMNS * MAX_PIXEL_HEIGHT);
    assert_eq!(atlas.height(), MAX_PIXEL_HEIGHT);
}

#[test]
fn missing_font_file_is_font_not_loaded() {
    let path = std::env::temp_dir().join("fractview_no_such_font.ttf");
    let err = build_atlas(&path, 16).expect_err("must fail");
    assert!(matches!(err, FontError::FontNotLoaded { .. }), "{err}");
}

#[test]
fn garbage_font_data_is_backend_init_failure() {
    let path = std::env::temp_dir().join(format!("fractview_garbage_{}.ttf", std::process::id()));
    std::fs::write(&path, b"definitely not a font").expect("write temp file");
    let result = build_atlas(&path, 16);
    let _ = std::fs::remove_file(&path);
    assert!(matches!(result, Err(FontError::BackendInit { .. })));
}

/// A TrueType font commonly installed on the host, if any.
fn system_font() -> Option<PathBuf> {
    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
        "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
        "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
        "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
        "/usr/share/fonts/truetype/ubuntu/UbuntuMono-R.ttf",
        "/Library/Fonts/Arial.ttf",
        "/System/Library/Fonts/Supplemental/Courier New.ttf",
        "C:\\Windows\\Fonts\\consola.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];
    CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
        .or_else(|| find_ttf(&PathBuf::from("/usr/share/fonts"), 3))
}

fn find_ttf(dir: &std::path::Path, depth: u32) -> Option<PathBuf> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .collect();
    entries.sort();
    for path in &entries {
        if path.extension().is_some_and(|e| e.eq_ignore_ascii_case("ttf")) {
            return Some(path.clone());
        }
    }
    if depth == 0 {
        return None;
    }
    entries
        .iter()
        .filter(|p| p.is_dir())
        .find_map(|p| find_ttf(p, depth - 1))
}

#[test]
fn system_font_packs_printable_ascii() {
    let Some(path) = system_font() else {
        eprintln!("skipping: no TrueType font found on this host");
        return;
    };

    for px in [8, 20, 40] {
        let atlas = build_atlas(&path, px).unwrap_or_else(|e| panic!("{}: {e}", path.display()));
        assert_eq!(atlas.width(), ATLAS_COLUMNS * px);
        assert_eq!(atlas.height() % px, 0);

        for code in 32..=126u8 {
            let g = atlas
                .get(code)
                .unwrap_or_else(|| panic!("{}: {code:#04x} missing at {px}px", path.display()));
            assert!(in_bounds(&atlas, g), "{code:#04x} out of bounds at {px}px");
            assert!(g.advance_px() > 0, "{code:#04x} has no advance at {px}px");
        }

        let a = atlas.get(b'A').expect("present");
        assert!(a.bearing[1] > 0, "'A' sits below the baseline at {px}px");
        assert!(a.size[0] > 0 && a.size[1] > 0);

        let again = build_atlas(&path, px).expect("second build");
        assert_eq!(
            atlas.bitmap().map(AtlasBitmap::as_bytes),
            again.bitmap().map(AtlasBitmap::as_bytes)
        );
    }
}
