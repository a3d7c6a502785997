// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::TextEncoding;

#[test]
fn test_utf8_passthrough() {
    let input = "Hello, 世界!";
    let result = TextEncoding::UTF8.decode(input.as_bytes());
    assert_eq!(result, input);
}

#[test]
fn test_utf8_bom_removed() {
    let result = TextEncoding::UTF8.decode(b"\xEF\xBB\xBFvar a;");
    assert_eq!(result, "var a;");
}

#[test]
fn test_windows_1252_round_trip() {
    let encoding = TextEncoding::for_label("latin1").unwrap();
    assert_eq!(encoding.name(), "windows-1252");

    let text = encoding.decode(b"caf\xe9");
    assert_eq!(text, "café");
    assert_eq!(encoding.encode(&text).as_ref(), b"caf\xe9");
}

#[test]
fn test_unknown_label_rejected() {
    let err = TextEncoding::for_label("klingon").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'encoding' in section '[target]': unknown encoding label 'klingon'"
    );
}

#[test]
fn test_deserialize_from_label() {
    let encoding: TextEncoding = serde_json::from_str("\"UTF8\"").unwrap();
    assert_eq!(encoding, TextEncoding::UTF8);
    assert_eq!(serde_json::to_string(&encoding).unwrap(), "\"UTF-8\"");
}
