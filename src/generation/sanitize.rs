// ABOUTME: Response sanitizer stripping markdown code fences from model output
// ABOUTME: Idempotent removal of ```json / ``` wrapper markers before parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Fitness

//! # Response Sanitizer
//!
//! Some model outputs wrap structured data in markdown code fences even when
//! asked for plain JSON. [`strip_code_fences`] removes every occurrence of
//! the language-tagged opening fence and the closing fence, then trims
//! surrounding whitespace. The result should be valid JSON but is not
//! guaranteed to be; the normalizer owns that check.

/// Language-tagged opening fence emitted around JSON payloads
const OPEN_FENCE: &str = "```json";

/// Closing fence
const CLOSE_FENCE: &str = "```";

/// Strip markdown code fences from raw model output
///
/// Removes all occurrences of the fence markers and trims the result.
/// Idempotent: sanitizing an already-sanitized string is a no-op.
#[must_use]
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace(OPEN_FENCE, "")
        .replace(CLOSE_FENCE, "")
        .trim()
        .to_owned()
}
