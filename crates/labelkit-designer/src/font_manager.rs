//! System font lookup and text measurement.
//!
//! Fonts are resolved once per (family, bold, italic) through `fontdb` and
//! kept for the life of the process. Generic families (`Sans`, `Serif`,
//! `Monospace`) are bound to faces that are actually installed, and any
//! unknown family ends on the first usable face. Only a host with no fonts at
//! all yields `None`, where callers fall back to an average advance.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use labelkit_core::constants::{BOX_PADDING_PX, FALLBACK_ADVANCE_FACTOR, LINE_HEIGHT_FACTOR};
use rusttype::{Font, Scale};
use std::{
    collections::{HashMap, HashSet},
    fs,
    sync::{Mutex, OnceLock},
};
use tracing::{debug, warn};

use crate::text_box::TextStyle;
use crate::types::CanvasSize;

#[derive(Clone, Eq, PartialEq, Hash)]
struct FontKey {
    family: String,
    bold: bool,
    italic: bool,
}

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        bind_generic_families(&mut db);
        db
    })
}

/// Points the generic families at installed faces. fontdb defaults them to
/// "Arial" / "Times New Roman" / "Courier New", which many Linux hosts lack.
fn bind_generic_families(db: &mut Database) {
    let names: Vec<String> = db
        .faces()
        .filter_map(|face| face.families.first().map(|(name, _)| name.clone()))
        .collect();
    let Some(first) = names.first().cloned() else {
        return;
    };

    let pick = |preferred: &[&str], accept: &dyn Fn(&str) -> bool| -> String {
        preferred
            .iter()
            .find(|want| names.iter().any(|n| n == *want))
            .map(|s| s.to_string())
            .or_else(|| names.iter().find(|n| accept(n.as_str())).cloned())
            .unwrap_or_else(|| first.clone())
    };

    let sans = pick(
        &["Arial", "DejaVu Sans", "Liberation Sans", "Noto Sans", "Helvetica"],
        &|n: &str| n.contains("Sans") && !n.contains("Mono"),
    );
    let serif = pick(
        &["Times New Roman", "DejaVu Serif", "Liberation Serif", "Noto Serif"],
        &|n: &str| n.contains("Serif"),
    );
    let mono = pick(
        &["Courier New", "DejaVu Sans Mono", "Liberation Mono", "Noto Sans Mono"],
        &|n: &str| n.contains("Mono"),
    );
    debug!(%sans, %serif, %mono, "Bound generic font families");
    db.set_sans_serif_family(sans);
    db.set_serif_family(serif);
    db.set_monospace_family(mono);
}

/// Sorted list of installed font families.
pub fn list_font_families() -> Vec<String> {
    let mut set = HashSet::new();
    for face in db().faces() {
        for (name, _) in &face.families {
            set.insert(name.clone());
        }
    }
    let mut out: Vec<_> = set.into_iter().collect();
    out.sort();
    out
}

/// Resolves a font for the given style, falling back to the generic sans
/// family and then to any installed face.
pub fn get_font_for(family: &str, bold: bool, italic: bool) -> Option<&'static Font<'static>> {
    static CACHE: OnceLock<Mutex<HashMap<FontKey, Option<&'static Font<'static>>>>> =
        OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    let key = FontKey {
        family: family.to_string(),
        bold,
        italic,
    };

    if let Some(font) = cache.lock().unwrap_or_else(|p| p.into_inner()).get(&key) {
        return *font;
    }

    let loaded = load_font_from_system(family, bold, italic)
        .or_else(|| load_font_from_system("Sans", bold, italic))
        .or_else(|| load_font_from_system("Sans", false, false))
        .or_else(load_any_face);
    let font_ref: Option<&'static Font<'static>> = match loaded {
        Some(font) => Some(Box::leak(Box::new(font))),
        None => {
            warn!("No usable font for family '{}', text will not be drawn", family);
            None
        }
    };

    cache
        .lock()
        .unwrap_or_else(|p| p.into_inner())
        .insert(key, font_ref);
    font_ref
}

/// Font for the document style.
pub fn font_for_style(style: &TextStyle) -> Option<&'static Font<'static>> {
    get_font_for(&style.font_family, style.is_bold(), style.is_italic())
}

fn load_font_from_system(family: &str, bold: bool, italic: bool) -> Option<Font<'static>> {
    let families: Vec<Family<'_>> = match family.trim() {
        "" | "Sans" | "sans-serif" => vec![Family::SansSerif],
        "Serif" | "serif" => vec![Family::Serif],
        "Monospace" | "monospace" => vec![Family::Monospace],
        other => vec![Family::Name(other)],
    };

    let query = Query {
        families: &families,
        weight: if bold { Weight::BOLD } else { Weight::NORMAL },
        stretch: Stretch::Normal,
        style: if italic { Style::Italic } else { Style::Normal },
    };

    let id = db().query(&query)?;
    load_face(id)
}

fn load_any_face() -> Option<Font<'static>> {
    db().faces().find_map(|face| load_face(face.id))
}

fn load_face(id: fontdb::ID) -> Option<Font<'static>> {
    let face = db().face(id)?;

    match &face.source {
        fontdb::Source::File(path) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec_and_index(bytes, face.index)
        }
        fontdb::Source::SharedFile(path, _) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec_and_index(bytes, face.index)
        }
        fontdb::Source::Binary(bytes) => {
            Font::try_from_vec_and_index(bytes.as_ref().as_ref().to_vec(), face.index)
        }
    }
}

/// Horizontal advance of one line of text in pixels at `font_size`.
pub fn line_advance(font: Option<&Font<'_>>, text: &str, font_size: f64) -> f64 {
    match font {
        Some(font) => {
            let scale = Scale::uniform(font_size as f32);
            let mut width = 0.0f32;
            let mut previous = None;
            for glyph in font.glyphs_for(text.chars()) {
                let glyph = glyph.scaled(scale);
                if let Some(prev) = previous {
                    width += font.pair_kerning(scale, prev, glyph.id());
                }
                width += glyph.h_metrics().advance_width;
                previous = Some(glyph.id());
            }
            f64::from(width)
        }
        None => text.chars().count() as f64 * font_size * FALLBACK_ADVANCE_FACTOR,
    }
}

/// Footprint of a text box: widest line plus padding by line count times
/// line height plus padding. Empty text still occupies one line.
pub fn measure_with(font: Option<&Font<'_>>, style: &TextStyle, text: &str) -> CanvasSize {
    let lines: Vec<&str> = if text.is_empty() {
        vec![""]
    } else {
        text.lines().collect()
    };
    let widest = lines
        .iter()
        .map(|line| line_advance(font, line, style.font_size))
        .fold(0.0, f64::max);
    let height = lines.len().max(1) as f64 * style.font_size * LINE_HEIGHT_FACTOR;
    CanvasSize::new(
        widest.ceil() + 2.0 * BOX_PADDING_PX,
        height.ceil() + 2.0 * BOX_PADDING_PX,
    )
}

/// Measures `text` with the font resolved for `style`.
pub fn measure_text(style: &TextStyle, text: &str) -> CanvasSize {
    measure_with(font_for_style(style), style, text)
}
