// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use chrono::NaiveDate;

use super::{Author, BannerContext, DEFAULT_TEMPLATE, License, PackageManifest};
use crate::error::BannerError;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
}

fn manifest() -> PackageManifest {
    serde_json::from_str(
        r#"{
            "name": "magnific-popup",
            "title": "Magnific Popup",
            "version": "0.9.9",
            "homepage": "http://dimsemenov.com/plugins/magnific-popup/",
            "author": { "name": "Dmitry Semenov", "url": "http://dimsemenov.com" },
            "licenses": [ { "type": "MIT", "url": "http://example.com/MIT" } ],
            "keywords": ["lightbox"]
        }"#,
    )
    .unwrap()
}

#[test]
fn test_default_template_full_manifest() {
    let ctx = BannerContext::new(Some(manifest()), date());
    let banner = ctx.render(DEFAULT_TEMPLATE).unwrap();

    assert_eq!(
        banner,
        "/*! Magnific Popup - v0.9.9 - 2026-03-07\n\
         * http://dimsemenov.com/plugins/magnific-popup/\n\
         * Copyright (c) 2026 Dmitry Semenov; Licensed MIT */\n"
    );
}

#[test]
fn test_default_template_minimal_manifest() {
    let pkg = PackageManifest {
        name: "widget".to_string(),
        version: "1.2.0".to_string(),
        author: Some(Author::Plain("Jane Doe".to_string())),
        licenses: vec![
            License {
                kind: "MIT".to_string(),
                url: None,
            },
            License {
                kind: "GPL".to_string(),
                url: None,
            },
        ],
        ..PackageManifest::default()
    };
    let ctx = BannerContext::new(Some(pkg), date());

    assert_eq!(
        ctx.render(DEFAULT_TEMPLATE).unwrap(),
        "/*! widget - v1.2.0 - 2026-03-07\n* Copyright (c) 2026 Jane Doe; Licensed MIT, GPL */\n"
    );
}

#[test]
fn test_empty_title_falls_back_to_name() {
    let mut pkg = manifest();
    pkg.title = Some(String::new());
    assert_eq!(pkg.display_title(), "magnific-popup");
}

#[test]
fn test_literal_template_needs_no_manifest() {
    let ctx = BannerContext::new(None, date());
    assert_eq!(ctx.render("/* built {date} */\n").unwrap(), "/* built 2026-03-07 */\n");
    assert_eq!(ctx.render("/*BANNER*/\n").unwrap(), "/*BANNER*/\n");
}

#[test]
fn test_escaped_and_stray_braces() {
    let ctx = BannerContext::new(None, date());
    assert_eq!(ctx.render("{{year}} {year}").unwrap(), "{year} 2026");
    assert_eq!(ctx.render("if (a) { b(); }").unwrap(), "if (a) { b(); }");
    assert_eq!(ctx.render("{ unterminated").unwrap(), "{ unterminated");
}

#[test]
fn test_unknown_placeholder_is_error() {
    let ctx = BannerContext::new(Some(manifest()), date());
    let err = ctx.render("{nope}").unwrap_err();
    assert!(matches!(err, BannerError::UnknownPlaceholder(ref k) if k == "nope"));
}

#[test]
fn test_manifest_placeholder_without_manifest() {
    let ctx = BannerContext::new(None, date());
    let err = ctx.render("v{version}").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"banner placeholder '{version}' requires package.manifest to be set"
    );
}

#[test]
fn test_load_manifest_errors() {
    let temp = tempfile::tempdir().unwrap();

    let missing = PackageManifest::load(&temp.path().join("nope.json")).unwrap_err();
    assert!(matches!(missing, BannerError::ManifestRead { .. }));

    let bad = temp.path().join("bad.json");
    std::fs::write(&bad, "{ not json").unwrap();
    let parse = PackageManifest::load(&bad).unwrap_err();
    assert!(matches!(parse, BannerError::ManifestParse { .. }));
}

#[test]
fn test_load_manifest_ok() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("pkg.json");
    std::fs::write(&path, serde_json::to_string(&manifest()).unwrap()).unwrap();

    assert_eq!(PackageManifest::load(&path).unwrap(), manifest());
}
