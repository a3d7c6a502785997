// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   TextEncoding   label lookup, decode/encode via encoding_rs
//! fs
//!   write_atomic() temp file + rename into place
//! ```

pub mod encoding;
pub mod fs;
