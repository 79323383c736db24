use crate::location::SearchParamsSource;

/// The query parameter used to store the active page when no other name is given.
pub const DEFAULT_PAGING_SEARCH_PARAM: &str = "page";

/// The page every missing or malformed paging parameter resolves to.
pub const FIRST_PAGE: u64 = 1;

// 2^53 - 1, the largest integer a float can hold without losing precision.
const MAX_EXACT_PAGE: f64 = 9_007_199_254_740_991.0;

// Unsigned `0x`/`0o`/`0b` literals, as `Number()` accepts them.
fn radix_page(raw: &str) -> Option<Option<u64>> {
    let prefix = raw.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &raw[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(None);
    }
    Some(
        u64::from_str_radix(digits, radix)
            .ok()
            .filter(|page| *page > 0 && *page as f64 <= MAX_EXACT_PAGE),
    )
}

fn numeric_page(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if let Some(page) = radix_page(raw) {
        return page;
    }
    let number = raw.parse::<f64>().ok()?;
    if !number.is_finite() || number.fract() != 0.0 || number <= 0.0 || number > MAX_EXACT_PAGE {
        return None;
    }
    Some(number as u64)
}

/// Whether a raw paging parameter value encodes a usable page.
///
/// Valid values are non-empty, numeric, integral and strictly positive.
/// Decimal notation is read the same way a browser's `Number()` would,
/// so `"3"`, `" 3 "`, `"3.0"`, `"3e0"` and `"0x3"` are all page 3.
pub fn is_valid_paging_search_param(raw: Option<&str>) -> bool {
    match raw {
        Some(raw) if !raw.is_empty() => numeric_page(raw).is_some(),
        _ => false,
    }
}

/// Resolve a raw paging parameter value to a page, anything invalid becomes [`FIRST_PAGE`].
///
/// This never fails: a malformed url should reset the page, not break it.
pub fn parse_page(raw: Option<&str>) -> u64 {
    match raw.filter(|raw| !raw.is_empty()).and_then(numeric_page) {
        Some(page) => page,
        None => {
            if raw.is_some() {
                tracing::trace!(?raw, "invalid paging search param, falling back to first page");
            }
            FIRST_PAGE
        }
    }
}

/// Read the active page from a query parameter source.
///
/// `param` is the name of the paging parameter, usually [`DEFAULT_PAGING_SEARCH_PARAM`].
pub fn read_page(source: &(impl SearchParamsSource + ?Sized), param: &str) -> u64 {
    parse_page(source.get(param).as_deref())
}
