// ============================================================================
// Numeric String Parsing
// Tokenizing helpers shared by the bounded and layered grammars
// ============================================================================

use super::errors::{NumericError, NumericResult};
use smallvec::SmallVec;

/// Pieces of an `e`-separated chain; five `e`s in a row is the longest
/// canonical rendering, so eight slots keep every well-formed input on the stack.
pub(crate) type EChain<'a> = SmallVec<[&'a str; 8]>;

/// Outcome of tokenizing a bounded-exponent literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Scientific {
    /// A plain float (`"123.5"`, `"NaN"`, `"-Infinity"`)
    Plain(f64),
    /// `mantissa e exponent`, exponent possibly beyond the `f64` range
    Split { mantissa: f64, exponent: f64 },
}

/// Lowercases, trims and strips thousands separators.
pub(crate) fn canonical_input(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| *c != ',')
        .flat_map(char::to_lowercase)
        .collect()
}

/// `nan`, `infinity`/`inf` with an optional sign.
pub(crate) fn special_value(canonical: &str) -> Option<f64> {
    match canonical {
        "nan" => Some(f64::NAN),
        "infinity" | "+infinity" | "inf" | "+inf" => Some(f64::INFINITY),
        "-infinity" | "-inf" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

/// Strict float component: the whole (trimmed) text must be a number.
#[inline]
pub(crate) fn parse_component(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Like [`parse_component`], but only accepts finite values.
#[inline]
pub(crate) fn parse_finite(text: &str) -> Option<f64> {
    parse_component(text).filter(|value| value.is_finite())
}

/// Tokenizes `[-]M[.F][e[+|-]EXP]`, the bounded engine's literal grammar.
pub(crate) fn parse_scientific(input: &str) -> NumericResult<Scientific> {
    let canonical = canonical_input(input);
    if canonical.is_empty() {
        return Err(NumericError::InvalidInput);
    }
    if let Some(value) = special_value(&canonical) {
        return Ok(Scientific::Plain(value));
    }
    match canonical.split_once('e') {
        Some((_, exponent)) if exponent.contains('e') => Err(NumericError::InvalidInput),
        Some((mantissa, exponent)) => {
            let mantissa = parse_finite(mantissa).ok_or(NumericError::InvalidInput)?;
            let exponent = parse_finite(exponent).ok_or(NumericError::InvalidInput)?;
            Ok(Scientific::Split { mantissa, exponent })
        },
        None => parse_finite(&canonical)
            .map(Scientific::Plain)
            .ok_or(NumericError::InvalidInput),
    }
}

/// Splits on every `e`.
#[inline]
pub(crate) fn split_e_chain(canonical: &str) -> EChain<'_> {
    canonical.split('e').collect()
}

/// `height[;payload]` as used by the `^^` and `^^^` operator forms.
pub(crate) fn parse_height_payload(text: &str) -> Option<(f64, Option<f64>)> {
    let mut parts = text.split(';');
    let height = parse_finite(parts.next()?)?;
    let payload = match parts.next() {
        Some(payload) => Some(parse_finite(payload)?),
        None => None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((height, payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_input() {
        assert_eq!(canonical_input("  1,234,567E5 "), "1234567e5");
        assert_eq!(canonical_input("NaN"), "nan");
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(parse_scientific("123.5"), Ok(Scientific::Plain(123.5)));
        assert_eq!(
            parse_scientific("1.5e+400"),
            Ok(Scientific::Split {
                mantissa: 1.5,
                exponent: 400.0
            })
        );
        assert_eq!(
            parse_scientific("-2E-5000"),
            Ok(Scientific::Split {
                mantissa: -2.0,
                exponent: -5000.0
            })
        );
        assert_eq!(
            parse_scientific("-Infinity"),
            Ok(Scientific::Plain(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn test_parse_scientific_rejects_garbage() {
        assert_eq!(parse_scientific(""), Err(NumericError::InvalidInput));
        assert_eq!(parse_scientific("abc"), Err(NumericError::InvalidInput));
        assert_eq!(parse_scientific("1e"), Err(NumericError::InvalidInput));
        assert_eq!(parse_scientific("1e5e5"), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_split_e_chain() {
        assert_eq!(split_e_chain("ee-20.5").as_slice(), &["", "", "-20.5"]);
        assert_eq!(split_e_chain("1e2e3").as_slice(), &["1", "2", "3"]);
    }

    #[test]
    fn test_height_payload() {
        assert_eq!(parse_height_payload("3"), Some((3.0, None)));
        assert_eq!(parse_height_payload("2.5;4"), Some((2.5, Some(4.0))));
        assert_eq!(parse_height_payload("x"), None);
        assert_eq!(parse_height_payload("1;2;3"), None);
    }
}
