//! Font location and registration, at most once per face name.

use crate::error::CompileError;
use log::warn;
use sheaf_traits::{FontSource, ResourceError, ResourceProvider, TypesetEngine};
use std::collections::HashSet;

/// Locates embeddable font assets and registers them with the
/// typesetting engine. A face name is registered at most once per
/// compilation; later `<font>` elements with the same name are no-ops
/// that touch neither the asset provider nor the engine.
#[derive(Debug, Default)]
pub struct FontResolver {
    registered: HashSet<String>,
}

impl FontResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `face_name` from the asset `base_name` (a path
    /// without extension): a metrics+outline pair (`.afm`/`.pfb`)
    /// takes precedence, else a single `.ttf` container. Neither
    /// existing is an error. A backend failure on a found pair is
    /// logged and tolerated so one bad font file does not abort the
    /// whole compilation; text set in that face falls back to the
    /// engine's default resolution.
    pub fn register(
        &mut self,
        assets: &dyn ResourceProvider,
        engine: &mut dyn TypesetEngine,
        base_name: &str,
        face_name: &str,
    ) -> Result<(), CompileError> {
        if self.registered.contains(face_name) {
            return Ok(());
        }

        let metrics_path = format!("{base_name}.afm");
        if assets.exists(&metrics_path) {
            match load_pair(assets, &metrics_path, &format!("{base_name}.pfb")) {
                Ok(source) => {
                    if let Err(e) = engine.register_font(face_name, source) {
                        warn!("skipping malformed font '{face_name}' ({base_name}): {e}");
                    }
                }
                Err(e) => {
                    warn!("skipping unreadable font pair '{face_name}' ({base_name}): {e}");
                }
            }
        } else {
            let truetype_path = format!("{base_name}.ttf");
            if !assets.exists(&truetype_path) {
                return Err(CompileError::FontNotFound {
                    base_name: base_name.to_string(),
                });
            }
            let data = assets.load(&truetype_path)?;
            engine.register_font(face_name, FontSource::TrueType(data))?;
        }

        self.registered.insert(face_name.to_string());
        Ok(())
    }

    pub fn is_registered(&self, face_name: &str) -> bool {
        self.registered.contains(face_name)
    }
}

fn load_pair(
    assets: &dyn ResourceProvider,
    metrics_path: &str,
    outline_path: &str,
) -> Result<FontSource, ResourceError> {
    Ok(FontSource::Type1 {
        metrics: assets.load(metrics_path)?,
        outline: assets.load(outline_path)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheaf_idf::{LayoutElement, PageDecoration, RenderedGraphic};
    use sheaf_traits::{InMemoryResourceProvider, RenderError, SharedResourceData};
    use sheaf_types::PageGeometry;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct RecordingEngine {
        fonts: Vec<(String, &'static str)>,
        reject_all: bool,
    }

    impl TypesetEngine for RecordingEngine {
        fn register_font(
            &mut self,
            face_name: &str,
            source: FontSource,
        ) -> Result<(), RenderError> {
            if self.reject_all {
                return Err(RenderError::Font("bad glyph table".to_string()));
            }
            let kind = match source {
                FontSource::Type1 { .. } => "type1",
                FontSource::TrueType(_) => "truetype",
            };
            self.fonts.push((face_name.to_string(), kind));
            Ok(())
        }

        fn render_vector(&mut self, data: &[u8]) -> Result<RenderedGraphic, RenderError> {
            Ok(RenderedGraphic(Arc::new(data.to_vec())))
        }

        fn assemble(
            &mut self,
            _geometry: &PageGeometry,
            _title: Option<&str>,
            _elements: Vec<LayoutElement>,
            _decorations: &PageDecoration,
        ) -> Result<Vec<u8>, RenderError> {
            Ok(Vec::new())
        }
    }

    /// Counts lookups so idempotence can be observed from the outside.
    #[derive(Debug)]
    struct CountingProvider {
        inner: InMemoryResourceProvider,
        lookups: AtomicUsize,
    }

    impl ResourceProvider for CountingProvider {
        fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
            self.lookups.fetch_add(1, Ordering::Relaxed);
            self.inner.load(path)
        }

        fn exists(&self, path: &str) -> bool {
            self.lookups.fetch_add(1, Ordering::Relaxed);
            self.inner.exists(path)
        }

        fn name(&self) -> &'static str {
            "CountingProvider"
        }
    }

    #[test]
    fn pair_takes_precedence_over_truetype() {
        let assets = InMemoryResourceProvider::new();
        assets.add("fonts/body.afm", b"metrics".to_vec()).unwrap();
        assets.add("fonts/body.pfb", b"outline".to_vec()).unwrap();
        assets.add("fonts/body.ttf", b"container".to_vec()).unwrap();

        let mut engine = RecordingEngine::default();
        let mut resolver = FontResolver::new();
        resolver
            .register(&assets, &mut engine, "fonts/body", "Body")
            .unwrap();

        assert_eq!(engine.fonts, vec![("Body".to_string(), "type1")]);
    }

    #[test]
    fn truetype_fallback() {
        let assets = InMemoryResourceProvider::new();
        assets.add("fonts/head.ttf", b"container".to_vec()).unwrap();

        let mut engine = RecordingEngine::default();
        let mut resolver = FontResolver::new();
        resolver
            .register(&assets, &mut engine, "fonts/head", "Heading")
            .unwrap();

        assert_eq!(engine.fonts, vec![("Heading".to_string(), "truetype")]);
        assert!(resolver.is_registered("Heading"));
    }

    #[test]
    fn missing_font_is_an_error() {
        let assets = InMemoryResourceProvider::new();
        let mut engine = RecordingEngine::default();
        let mut resolver = FontResolver::new();

        assert!(matches!(
            resolver.register(&assets, &mut engine, "fonts/ghost", "Ghost"),
            Err(CompileError::FontNotFound { .. })
        ));
        assert!(!resolver.is_registered("Ghost"));
    }

    #[test]
    fn second_registration_skips_all_lookups() {
        let inner = InMemoryResourceProvider::new();
        inner.add("fonts/body.ttf", b"container".to_vec()).unwrap();
        let assets = CountingProvider {
            inner,
            lookups: AtomicUsize::new(0),
        };

        let mut engine = RecordingEngine::default();
        let mut resolver = FontResolver::new();
        resolver
            .register(&assets, &mut engine, "fonts/body", "Body")
            .unwrap();
        let after_first = assets.lookups.load(Ordering::Relaxed);

        resolver
            .register(&assets, &mut engine, "fonts/body", "Body")
            .unwrap();
        assert_eq!(assets.lookups.load(Ordering::Relaxed), after_first);
        assert_eq!(engine.fonts.len(), 1);
    }

    #[test]
    fn malformed_pair_is_tolerated() {
        let assets = InMemoryResourceProvider::new();
        assets.add("fonts/bad.afm", b"metrics".to_vec()).unwrap();
        assets.add("fonts/bad.pfb", b"outline".to_vec()).unwrap();

        let mut engine = RecordingEngine {
            reject_all: true,
            ..RecordingEngine::default()
        };
        let mut resolver = FontResolver::new();

        resolver
            .register(&assets, &mut engine, "fonts/bad", "Bad")
            .unwrap();
        // The face counts as handled; retries will not hammer the
        // provider again.
        assert!(resolver.is_registered("Bad"));
    }
}
