//! Identifier normalization
//!
//! Every country-code encoding a map shape or score record may carry is
//! folded into the canonical 2-letter form. Absence is `None`, never an error.

use crate::constants::{ALPHA2_KEYS, ALPHA3_KEYS, NAME_KEYS};
use crate::data::{alpha3_table, numeric_table};
use crate::types::GeographicFeature;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Alpha2,
    Alpha3,
    Numeric,
}

/// Canonical 2-letter form of `code` read as `kind`.
pub fn normalize(code: &str, kind: CodeKind) -> Option<String> {
    let code = code.trim();
    match kind {
        CodeKind::Alpha2 => {
            if code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
                Some(code.to_ascii_uppercase())
            } else {
                None
            }
        }
        CodeKind::Alpha3 => {
            if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
                return None;
            }
            let upper = code.to_ascii_uppercase();
            alpha3_table()
                .get(upper.as_str())
                .map(|alpha2| alpha2.to_string())
        }
        CodeKind::Numeric => {
            if code.is_empty() || code.len() > 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let padded = format!("{:0>3}", code);
            numeric_table()
                .get(padded.as_str())
                .map(|alpha2| alpha2.to_string())
        }
    }
}

/// Infers the encoding from the shape of `code`.
pub fn classify(code: &str) -> Option<CodeKind> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }
    if code.len() <= 3 && code.bytes().all(|b| b.is_ascii_digit()) {
        return Some(CodeKind::Numeric);
    }
    if !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    match code.len() {
        2 => Some(CodeKind::Alpha2),
        3 => Some(CodeKind::Alpha3),
        _ => None,
    }
}

pub fn normalize_any(code: &str) -> Option<String> {
    classify(code).and_then(|kind| normalize(code, kind))
}

/// Canonical identifier of a map shape.
///
/// Probes the 2-letter properties, then the 3-letter properties, then the
/// feature id as numeric, 2-letter and 3-letter code. The first hit wins even
/// if a later candidate would name a different country.
pub fn feature_identifier(feature: &GeographicFeature) -> Option<String> {
    if let Some(code) = feature
        .first_property(ALPHA2_KEYS)
        .and_then(|code| normalize(&code, CodeKind::Alpha2))
    {
        return Some(code);
    }

    if let Some(code) = feature
        .first_property(ALPHA3_KEYS)
        .and_then(|code| normalize(&code, CodeKind::Alpha3))
    {
        return Some(code);
    }

    let raw_id = feature.id_text()?;
    [CodeKind::Numeric, CodeKind::Alpha2, CodeKind::Alpha3]
        .into_iter()
        .find_map(|kind| normalize(&raw_id, kind))
}

/// Free-text name of a map shape, if it carries one.
pub fn feature_name(feature: &GeographicFeature) -> Option<String> {
    feature.first_text_property(NAME_KEYS)
}
