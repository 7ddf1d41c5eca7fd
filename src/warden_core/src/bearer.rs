//! Parsing of the `Authorization` request header.

/// The only scheme the guard accepts, matched case-sensitively.
pub const BEARER_SCHEME: &str = "Bearer";

/// A missing token stringified by a buggy upstream serializer arrives as the
/// literal text `undefined`; treat it the same as no token at all.
const STRINGIFIED_MISSING_TOKEN: &str = "undefined";

/// Extract the bearer credential from a raw `Authorization` header value.
///
/// Splits on the first space into `(scheme, credential)` and returns the
/// credential only when the scheme is exactly `Bearer` and the credential is
/// non-empty and not the stringified-missing marker. Pure function; all
/// malformed inputs collapse to `None`.
pub fn extract_bearer_token(header: Option<&str>) -> Option<&str> {
    let (scheme, credential) = header?.split_once(' ')?;

    if scheme != BEARER_SCHEME
        || credential.is_empty()
        || credential == STRINGIFIED_MISSING_TOKEN
    {
        return None;
    }

    Some(credential)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn well_formed_bearer_header_extracts_the_credential() {
        assert_eq!(extract_bearer_token(Some("Bearer abc123")), Some("abc123"));
    }

    #[test]
    fn absent_header_extracts_nothing() {
        assert_eq!(extract_bearer_token(None), None);
    }

    #[test]
    fn other_schemes_are_rejected() {
        assert_eq!(extract_bearer_token(Some("Basic abc123")), None);
        // Scheme match is case-sensitive.
        assert_eq!(extract_bearer_token(Some("bearer abc123")), None);
        assert_eq!(extract_bearer_token(Some("BEARER abc123")), None);
    }

    #[test]
    fn scheme_without_credential_is_rejected() {
        assert_eq!(extract_bearer_token(Some("Bearer")), None);
        assert_eq!(extract_bearer_token(Some("Bearer ")), None);
    }

    #[test]
    fn stringified_missing_token_is_treated_as_absent() {
        assert_eq!(extract_bearer_token(Some("Bearer undefined")), None);
        // Only the exact marker is filtered.
        assert_eq!(
            extract_bearer_token(Some("Bearer undefined-but-real")),
            Some("undefined-but-real")
        );
    }

    #[quickcheck]
    fn any_real_credential_extracts_unchanged(token: String) -> TestResult {
        if token.is_empty() || token == STRINGIFIED_MISSING_TOKEN {
            return TestResult::discard();
        }

        let header = format!("{BEARER_SCHEME} {token}");
        TestResult::from_bool(extract_bearer_token(Some(&header)) == Some(token.as_str()))
    }

    #[quickcheck]
    fn non_bearer_schemes_never_extract(scheme: String, token: String) -> TestResult {
        if scheme == BEARER_SCHEME || scheme.contains(' ') {
            return TestResult::discard();
        }

        let header = format!("{scheme} {token}");
        TestResult::from_bool(extract_bearer_token(Some(&header)).is_none())
    }
}
