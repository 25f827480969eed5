//! Authorization header serialization.

use crate::params::OAuthParams;

/// Build the `Authorization` header value from OAuth params.
///
/// Values are written verbatim; `oauth_signature` is expected to be
/// form-encoded already (see [`OAuthParams::set_signature`]).
pub fn build_authorization_header(oauth_params: &OAuthParams) -> String {
    let header_parts: Vec<String> = oauth_params
        .iter()
        .map(|(k, v)| format!("{k}=\"{v}\""))
        .collect();
    format!("OAuth {}", header_parts.join(","))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_build_authorization_header() {
        let params: OAuthParams = [
            ("oauth_version", "1.0"),
            ("oauth_body_hash", "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="),
            ("oauth_timestamp", "oauth_timestamp"),
            ("oauth_consumer_key", "aaa!aaa"),
            ("oauth_nonce", "oauth_nonce"),
            ("oauth_signature_method", "RSA-SHA256"),
            ("oauth_signature", "Q%2FAnafnIfOC67BsVkQl9dQlRJeOzfSFUi6YugxLhAXasNyyAmZiXPkU5r8zZnuCg2NE8sqG9Jj0zMTY%2FvFbxhSQOaZs0ogpcJUE0CvWuMVzmgY%2FDxv5XfjdZMfXVItkFkoaAs2GRryNd4fb26UekyX3JTHZpY%2BHJdUFjwrDM3q0%3D"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            build_authorization_header(&params),
            r#"OAuth oauth_body_hash="47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=",oauth_consumer_key="aaa!aaa",oauth_nonce="oauth_nonce",oauth_signature="Q%2FAnafnIfOC67BsVkQl9dQlRJeOzfSFUi6YugxLhAXasNyyAmZiXPkU5r8zZnuCg2NE8sqG9Jj0zMTY%2FvFbxhSQOaZs0ogpcJUE0CvWuMVzmgY%2FDxv5XfjdZMfXVItkFkoaAs2GRryNd4fb26UekyX3JTHZpY%2BHJdUFjwrDM3q0%3D",oauth_signature_method="RSA-SHA256",oauth_timestamp="oauth_timestamp",oauth_version="1.0""#
        );
    }

    #[test]
    fn test_non_signature_values_not_escaped() {
        let params: OAuthParams = [("oauth_consumer_key", "a\"b c")].into_iter().collect();
        assert_eq!(
            build_authorization_header(&params),
            "OAuth oauth_consumer_key=\"a\"b c\""
        );
    }

    #[test]
    fn test_signature_escaped_via_set_signature() {
        let mut params = OAuthParams::default();
        params.set_signature("ab+/=");
        assert_eq!(
            build_authorization_header(&params),
            "OAuth oauth_signature=\"ab%2B%2F%3D\""
        );
    }
}
