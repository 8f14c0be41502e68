//! Tests wiring the compiler to real asset providers.

mod common;

use common::{RecordingEngine, TestResult, init_logging};
use sheaf::idf::LayoutElement;
use sheaf::{
    FilesystemResourceProvider, PrefixStripProvider, compile_to_bytes, compile_to_elements,
};
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

#[test]
fn images_load_from_the_filesystem() -> TestResult {
    init_logging();
    let dir = tempdir()?;
    fs::write(dir.path().join("logo.png"), b"png-bytes")?;

    let mut engine = RecordingEngine::default();
    let assets = FilesystemResourceProvider::new(dir.path());

    let elements = compile_to_elements(
        &mut engine,
        &assets,
        r#"<doc><img src="logo.png" width="64" height="64"/></doc>"#,
    )?;

    let LayoutElement::Image { source, data, .. } = &elements[0] else {
        panic!("expected an image, got {}", elements[0].kind());
    };
    assert_eq!(source, "logo.png");
    assert_eq!(&**data, b"png-bytes");
    Ok(())
}

#[test]
fn url_prefixes_are_stripped_before_lookup() -> TestResult {
    init_logging();
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("img"))?;
    fs::write(dir.path().join("img/bg.png"), b"bg")?;

    let mut engine = RecordingEngine::default();
    let assets = PrefixStripProvider::new(Arc::new(FilesystemResourceProvider::new(dir.path())))
        .strip("/media/")
        .strip("/static/");

    compile_to_bytes(
        &mut engine,
        &assets,
        r#"<doc>
            <img src="/media/img/bg.png" width="595" height="842" background="True"/>
            <p>content</p>
        </doc>"#,
    )?;

    let assembled = engine.assembled.unwrap();
    assert_eq!(assembled.elements.len(), 1);
    let Some(LayoutElement::BackgroundImage { data, .. }) = &assembled.decorations.background
    else {
        panic!("expected a background binding");
    };
    assert_eq!(&***data, b"bg");
    Ok(())
}

#[test]
fn type1_font_pairs_load_from_disk() -> TestResult {
    init_logging();
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("fonts"))?;
    fs::write(dir.path().join("fonts/serif.afm"), b"metrics")?;
    fs::write(dir.path().join("fonts/serif.pfb"), b"outline")?;

    let mut engine = RecordingEngine::default();
    let assets = FilesystemResourceProvider::new(dir.path());

    compile_to_bytes(
        &mut engine,
        &assets,
        r#"<doc><font name="Serif" src="fonts/serif"/><p>x</p></doc>"#,
    )?;

    assert_eq!(engine.fonts, vec!["Serif".to_string()]);
    Ok(())
}

#[test]
fn missing_asset_aborts_compilation() {
    init_logging();
    let dir = tempdir().unwrap();
    let mut engine = RecordingEngine::default();
    let assets = FilesystemResourceProvider::new(dir.path());

    let err = compile_to_bytes(
        &mut engine,
        &assets,
        r#"<doc><img src="ghost.png" width="10" height="10"/></doc>"#,
    )
    .unwrap_err();
    assert!(matches!(err, sheaf::CompileError::AssetNotFound(_)));
    assert!(engine.assembled.is_none());
}
