//! Move type tag normalization.

use std::sync::OnceLock;

use regex::{Captures, Regex};

fn address_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b0[xX]([0-9a-fA-F]{1,64})::").expect("static pattern"))
}

/// Rewrite every address in `tag` to `0x` + 64 lowercase hex digits.
pub fn normalize_type_tag(tag: &str) -> String {
    address_re()
        .replace_all(tag.trim(), |caps: &Captures<'_>| {
            format!("0x{:0>64}::", caps[1].to_ascii_lowercase())
        })
        .into_owned()
}
