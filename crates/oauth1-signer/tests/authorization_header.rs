//! End-to-end Authorization header tests against fixed keys and fixtures.

use oauth1_signer::{
    OAuthSigner, SignerError, compute_authorization_header, compute_signature_base_string,
};
use pretty_assertions::assert_eq;

const PKCS1_KEY: &str = include_str!("fixtures/test_key_pkcs1.pem");
const PKCS8_KEY: &str = include_str!("fixtures/test_key_pkcs8.pem");
const CONSUMER_KEY: &str = "aaa!aaa";

const SANDBOX_URI: &str = "https://sandbox.api.example.com/merchantid/v1/merchantid?MerchantId=GOOGLE%20LTD&Type=ExactMatch&Format=JSON";
const MASTERCARD_URI: &str = "HTTPS://SANDBOX.api.mastercard.com/merchantid/v1/merchantid?MerchantId=GOOGLE%20LTD%20ADWORDS%20%28CC%40GOOGLE.COM%29&Type=ExactMatch&Format=JSON";

fn fixed_header(
    signer: &OAuthSigner,
    uri: &str,
    method: &str,
    payload: &str,
    nonce: &str,
    timestamp: u64,
) -> String {
    signer
        .authorization_header_with(uri, method, payload, || Ok(nonce.to_owned()), || timestamp)
        .unwrap()
}

#[test]
fn test_empty_body_header_fields() {
    let header =
        compute_authorization_header(SANDBOX_URI, "GET", "", CONSUMER_KEY, PKCS1_KEY).unwrap();

    assert!(header.starts_with("OAuth "));
    for expected in [
        r#"oauth_body_hash="47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=""#,
        r#"oauth_consumer_key="aaa!aaa""#,
        r#"oauth_signature_method="RSA-SHA256""#,
        r#"oauth_version="1.0""#,
    ] {
        assert!(header.contains(expected), "{header} should contain {expected}");
    }
    for field in ["oauth_signature", "oauth_nonce", "oauth_timestamp"] {
        assert!(header.contains(&format!("{field}=\"")));
        assert!(!header.contains(&format!("{field}=\"\"")));
    }
}

#[test]
fn test_json_body_hash() {
    let header =
        compute_authorization_header(MASTERCARD_URI, "GET", "{}", CONSUMER_KEY, PKCS1_KEY).unwrap();
    assert!(header.contains(r#"oauth_body_hash="RBNvo1WzZ4oRRq0W9+hknpT7T8If536DEMBg9hyq/4o=""#));
}

#[test]
fn test_golden_get_header() {
    let signer = OAuthSigner::from_pem(CONSUMER_KEY, PKCS1_KEY).unwrap();
    let header = fixed_header(&signer, SANDBOX_URI, "GET", "", "uTeLPs6K", 1_524_771_555);

    assert_eq!(
        header,
        r#"OAuth oauth_body_hash="47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=",oauth_consumer_key="aaa!aaa",oauth_nonce="uTeLPs6K",oauth_signature="t1eef5hOViwETI0LEWf4uimKLQDraCXHX0ZKpsFMhGTPAaeqmYTgMZG4y2yFeWUeKPs1Bmhy9aSCEGWK7c0JF1o3%2FCIi%2F7Vi1mRg9J1k6IO1pD%2BA%2FrNRVUPWzDodr04mZSztZWoe%2Ft9T9Oo0483V4WIjZd9UXpIgzqN6Xh3k5NI%3D",oauth_signature_method="RSA-SHA256",oauth_timestamp="1524771555",oauth_version="1.0""#
    );
}

#[test]
fn test_golden_post_with_body_and_port() {
    let signer = OAuthSigner::from_pem(CONSUMER_KEY, PKCS1_KEY).unwrap();
    let uri = "HTTPS://SANDBOX.api.mastercard.com:8443/merchantid/v1/merchantid?MerchantId=GOOGLE%20LTD%20ADWORDS%20%28CC%40GOOGLE.COM%29&Format=XML&Type=ExactMatch&Format=JSON&EmptyVal=";

    let base = signer
        .signature_base_string(uri, "POST", r#"{"amount":"10.00"}"#, "7d8f3e4a", 137_131_201)
        .unwrap();
    assert_eq!(
        base,
        "POST&https%3A%2F%2Fsandbox.api.mastercard.com%3A8443%2Fmerchantid%2Fv1%2Fmerchantid&EmptyVal%3D%26Format%3DJSON%26Format%3DXML%26MerchantId%3DGOOGLE%2520LTD%2520ADWORDS%2520%2528CC%2540GOOGLE.COM%2529%26Type%3DExactMatch%26oauth_body_hash%3D6etJWsy84qDpW74Hm5%2BeQsyuIDccFRbj7TA20qeHz1M%3D%26oauth_consumer_key%3Daaa%21aaa%26oauth_nonce%3D7d8f3e4a%26oauth_signature_method%3DRSA-SHA256%26oauth_timestamp%3D137131201%26oauth_version%3D1.0"
    );

    let header = fixed_header(
        &signer,
        uri,
        "POST",
        r#"{"amount":"10.00"}"#,
        "7d8f3e4a",
        137_131_201,
    );
    assert!(header.contains(
        r#"oauth_signature="d0KmJQVZq4%2Bi1b%2FXDGnTkCpw3QHzsDb8EB4otQA9HOn52iKdEvdbrxPwsMLu6cSO5eQxCTzVdlFUmMi%2F74Ag34pH4LDzOohu46QqHhkDTNhP4oKNjg907%2FxQwmSGm8MDpeVWrHKYsGpgmGRS9yXZXqsWRzzGksEll709agG%2BX4M%3D""#
    ));
    assert!(header.contains(r#"oauth_body_hash="6etJWsy84qDpW74Hm5+eQsyuIDccFRbj7TA20qeHz1M=""#));
}

#[test]
fn test_pkcs8_key_signs_identically() {
    let pkcs1 = OAuthSigner::from_pem(CONSUMER_KEY, PKCS1_KEY).unwrap();
    let pkcs8 = OAuthSigner::from_pem(CONSUMER_KEY, PKCS8_KEY).unwrap();

    assert_eq!(
        fixed_header(&pkcs1, SANDBOX_URI, "GET", "", "uTeLPs6K", 1_524_771_555),
        fixed_header(&pkcs8, SANDBOX_URI, "GET", "", "uTeLPs6K", 1_524_771_555)
    );
}

#[test]
fn test_header_names_sorted_without_trailing_comma() {
    let signer = OAuthSigner::from_pem(CONSUMER_KEY, PKCS1_KEY).unwrap();
    let header = fixed_header(&signer, SANDBOX_URI, "GET", "", "nonce123", 1);

    let body = header.strip_prefix("OAuth ").unwrap();
    assert!(!body.ends_with(','));
    assert!(!body.contains(", "));

    let names: Vec<&str> = body
        .split(',')
        .map(|pair| pair.split_once('=').unwrap().0)
        .collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
    assert_eq!(names.len(), 7);
}

#[test]
fn test_concurrent_signing() {
    let signer = OAuthSigner::from_pem(CONSUMER_KEY, PKCS1_KEY).unwrap();
    let expected = fixed_header(&signer, SANDBOX_URI, "GET", "", "uTeLPs6K", 1_524_771_555);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    fixed_header(&signer, SANDBOX_URI, "GET", "", "uTeLPs6K", 1_524_771_555)
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_malformed_uri_error() {
    let result =
        compute_authorization_header("::not-a-uri::", "GET", "", CONSUMER_KEY, PKCS1_KEY);
    assert!(matches!(result, Err(SignerError::MalformedUri(_))));
}

#[test]
fn test_invalid_key_error() {
    let result = compute_authorization_header(SANDBOX_URI, "GET", "", CONSUMER_KEY, "garbage");
    assert!(matches!(result, Err(SignerError::InvalidKeyFormat(_))));
}

#[test]
fn test_base_string_without_private_key() {
    let signer = OAuthSigner::from_pem(CONSUMER_KEY, PKCS1_KEY).unwrap();

    assert_eq!(
        compute_signature_base_string(SANDBOX_URI, "GET", "", CONSUMER_KEY, "uTeLPs6K", 1_524_771_555)
            .unwrap(),
        signer
            .signature_base_string(SANDBOX_URI, "GET", "", "uTeLPs6K", 1_524_771_555)
            .unwrap()
    );
}
