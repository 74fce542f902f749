//! Struct tag helpers.
//!
//! Tags arrive with addresses in whatever form the builder used (`0x2`, upper case hex, ...). All
//! comparisons and lookups are done on the normalized form.

use std::sync::OnceLock;

use regex::Regex;

pub use ptb_intent_types::normalize_type_tag;

fn struct_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"0x[0-9a-f]{64}::\w+::\w+").expect("static pattern"))
}

/// First struct in a normalized tag that carries no type parameters of its own.
///
/// `0x..::reserve::MarketCoin<0x..2::sui::SUI>` yields `0x..2::sui::SUI`.
pub fn leaf_struct_tag(tag: &str) -> Option<&str> {
    struct_re()
        .find_iter(tag)
        .find(|m| !tag[m.end()..].starts_with('<'))
        .map(|m| m.as_str())
}

/// Struct name of a `address::module::Name` tag.
pub fn struct_name(tag: &str) -> &str {
    tag.rsplit("::").next().unwrap_or(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUI: &str = "0x0000000000000000000000000000000000000000000000000000000000000002::sui::SUI";

    #[test]
    fn leaf_skips_generic_wrappers() {
        let tag = normalize_type_tag("0xabc::reserve::MarketCoin<0x2::sui::SUI>");
        assert_eq!(leaf_struct_tag(&tag), Some(SUI));
        assert_eq!(leaf_struct_tag(SUI), Some(SUI));
        assert_eq!(leaf_struct_tag("u64"), None);
    }

    #[test]
    fn struct_name_is_last_segment() {
        assert_eq!(struct_name(SUI), "SUI");
        assert_eq!(struct_name("plain"), "plain");
    }
}
