use std::fmt;
use std::path::{Path, PathBuf};

use ab_glyph::FontVec;
use embedded_graphics::mono_font::iso_8859_1::FONT_10X20 as FONT_10X20_LATIN1;
use embedded_graphics::mono_font::MonoFont;
use log::{info, warn};

use crate::config::{FontSource, FontSpec};

/// Last-resort font. It has one fixed size and covers Latin-1 only.
pub const BUILTIN_FONT: &MonoFont<'static> = &FONT_10X20_LATIN1;

#[derive(Debug, thiserror::Error)]
pub enum FontLoadError {
    #[error("cannot read font file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse face {index} of font file {}", .path.display())]
    Parse { path: PathBuf, index: u32 },
}

pub enum FontFace {
    /// Scalable font loaded from disk
    Outline { font: FontVec, path: PathBuf, index: u32 },
    /// Compiled-in bitmap font, drawn at its native size
    Builtin(&'static MonoFont<'static>),
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontFace::Outline { path, index, .. } => f
                .debug_struct("Outline")
                .field("path", path)
                .field("index", index)
                .finish(),
            FontFace::Builtin(_) => f.write_str("Builtin"),
        }
    }
}

impl fmt::Display for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontFace::Outline { path, index, .. } => write!(f, "{} (face {})", path.display(), index),
            FontFace::Builtin(_) => f.write_str("builtin 10x20 bitmap font"),
        }
    }
}

/// The face picked by the fallback chain plus the two label sizes
#[derive(Debug)]
pub struct ResolvedFonts {
    pub face: FontFace,
    pub main_size: f32,
    pub sub_size: f32,
}

impl ResolvedFonts {
    pub fn is_builtin(&self) -> bool {
        matches!(self.face, FontFace::Builtin(_))
    }
}

/// Walk the fallback chain once and keep the first face that loads.
/// Never fails: the builtin font ends every chain.
pub fn resolve(spec: &FontSpec) -> ResolvedFonts {
    let face = spec
        .chain
        .iter()
        .find_map(|source| match load(source) {
            Ok(face) => Some(face),
            Err(e) => {
                warn!("Font loading failed: {}", e);
                None
            }
        })
        .unwrap_or(FontFace::Builtin(BUILTIN_FONT));

    info!("Loaded {} successfully", face);

    ResolvedFonts {
        face,
        main_size: spec.main_size,
        sub_size: spec.sub_size,
    }
}

fn load(source: &FontSource) -> Result<FontFace, FontLoadError> {
    match source {
        FontSource::File { path, index } => load_file(path, *index),
        FontSource::Builtin => Ok(FontFace::Builtin(BUILTIN_FONT)),
    }
}

fn load_file(path: &Path, index: u32) -> Result<FontFace, FontLoadError> {
    let data = std::fs::read(path).map_err(|source| FontLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let font = FontVec::try_from_vec_and_index(data, index).map_err(|_| FontLoadError::Parse {
        path: path.to_path_buf(),
        index,
    })?;

    Ok(FontFace::Outline {
        font,
        path: path.to_path_buf(),
        index,
    })
}

/// A scalable font present on common Linux installs, for tests that need real outlines
#[cfg(test)]
pub(crate) fn system_test_font() -> Option<PathBuf> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/gnu-free/FreeSans.otf",
    ]
    .iter()
    .map(PathBuf::from)
    .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(chain: Vec<FontSource>) -> FontSpec {
        FontSpec {
            chain,
            main_size: 50.0,
            sub_size: 24.0,
        }
    }

    #[test]
    fn missing_files_fall_through_to_builtin() {
        let fonts = resolve(&spec(vec![
            FontSource::File { path: "/nonexistent/first.ttc".into(), index: 0 },
            FontSource::File { path: "/nonexistent/second.ttc".into(), index: 0 },
        ]));

        assert!(fonts.is_builtin());
        assert_eq!(fonts.main_size, 50.0);
        assert_eq!(fonts.sub_size, 24.0);
    }

    #[test]
    fn empty_chain_still_resolves() {
        assert!(resolve(&spec(Vec::new())).is_builtin());
    }

    #[test]
    fn builtin_entry_stops_the_walk() {
        let dir = tempfile::tempdir().unwrap();
        let later = dir.path().join("later.ttf");
        std::fs::write(&later, b"never read").unwrap();

        let fonts = resolve(&spec(vec![
            FontSource::File { path: "/nonexistent/first.ttc".into(), index: 0 },
            FontSource::Builtin,
            FontSource::File { path: later, index: 0 },
        ]));
        assert!(fonts.is_builtin());
        assert_eq!(fonts.face.to_string(), "builtin 10x20 bitmap font");
    }

    #[test]
    fn unparsable_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        std::fs::write(&bogus, b"definitely not a font").unwrap();

        let err = load(&FontSource::File { path: bogus.clone(), index: 0 }).unwrap_err();
        assert!(matches!(err, FontLoadError::Parse { index: 0, .. }));

        let fonts = resolve(&spec(vec![FontSource::File { path: bogus, index: 0 }]));
        assert!(fonts.is_builtin());
    }

    #[test]
    #[ignore = "needs a system TrueType font (DejaVu, Liberation or FreeSans)"]
    fn first_loadable_source_wins() {
        let path = system_test_font().expect("no DejaVu, Liberation or FreeSans font installed");

        let fonts = resolve(&spec(vec![
            FontSource::File { path: "/nonexistent/first.ttc".into(), index: 0 },
            FontSource::File { path: path.clone(), index: 0 },
            FontSource::Builtin,
        ]));

        match fonts.face {
            FontFace::Outline { path: loaded, index, .. } => {
                assert_eq!(loaded, path);
                assert_eq!(index, 0);
            }
            FontFace::Builtin(_) => panic!("expected {} to load", path.display()),
        }
    }
}
