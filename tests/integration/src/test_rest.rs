//! REST request signing scenarios.

#[cfg(test)]
mod tests {
    use pushstack_auth::rest::AUTH_SIGNATURE;
    use pushstack_auth::{Credentials, build_auth_params, verify_auth_params};

    use crate::{TEST_APP_SECRET, test_credentials};

    #[test]
    fn test_should_sign_post_with_empty_body() {
        let credentials = test_credentials();
        let params = build_auth_params(&credentials, "POST", "/some/path", &[], b"", 1_000_000_000);

        // 4 reserved parameters plus the prepended signature.
        assert_eq!(params.len(), 5);
        let keys: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "auth_signature",
                "auth_key",
                "auth_timestamp",
                "auth_version",
                "body_md5"
            ]
        );

        let values: Vec<&str> = params.iter().map(|(_, v)| v.as_str()).collect();
        assert_eq!(
            values,
            vec![
                "1bdd7f39f3830ebe9ff13d1a8834473400d66bc7c264ab0beef3357e2099f260",
                "278d425bdf160c739803",
                "1000000000",
                "1.0",
                "d41d8cd98f00b204e9800998ecf8427e"
            ]
        );
    }

    #[test]
    fn test_should_sign_event_publish_with_body_and_extra_params() {
        let credentials = test_credentials();
        let extra = vec![
            ("name".to_owned(), "joe".to_owned()),
            ("age".to_owned(), "30".to_owned()),
        ];
        let params = build_auth_params(
            &credentials,
            "POST",
            "/apps/3/events",
            &extra,
            br#"{"name":"joe"}"#,
            1_000_000_000,
        );

        let keys: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "auth_signature",
                "age",
                "auth_key",
                "auth_timestamp",
                "auth_version",
                "body_md5",
                "name"
            ]
        );
        assert_eq!(
            params[0].1,
            "7fc7e02a658ffc0b42c5f6b962078d2ec020e4dacabb841bd25a6f86ca92b0f8"
        );
    }

    #[test]
    fn test_should_keep_output_sorted_after_signature_prepend() {
        let credentials = test_credentials();
        let extra = vec![
            ("zebra".to_owned(), "z".to_owned()),
            ("Alpha".to_owned(), "a".to_owned()),
        ];
        let params = build_auth_params(&credentials, "GET", "/channels", &extra, b"", 7);

        let signed = &params[1..];
        let mut resorted = signed.to_vec();
        resorted.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
        assert_eq!(signed, resorted.as_slice(), "signed params must be key-sorted");
    }

    #[test]
    fn test_should_round_trip_through_verification() {
        let credentials = test_credentials();
        let extra = vec![("info".to_owned(), "user_count,subscription_count".to_owned())];
        let params = build_auth_params(
            &credentials,
            "GET",
            "/apps/3/channels/presence-foobar",
            &extra,
            b"",
            1_000_000_000,
        );

        let result =
            verify_auth_params(&credentials, "GET", "/apps/3/channels/presence-foobar", &params);
        assert!(result.is_ok(), "verification failed: {result:?}");
    }

    #[test]
    fn test_should_reject_replay_against_different_path() {
        let credentials = test_credentials();
        let params =
            build_auth_params(&credentials, "GET", "/apps/3/channels", &[], b"", 1_000_000_000);

        let result = verify_auth_params(&credentials, "GET", "/apps/4/channels", &params);
        assert!(result.is_err(), "signature must be bound to the path");
    }

    #[test]
    fn test_should_reject_body_swap() {
        let credentials = test_credentials();
        let mut params = build_auth_params(
            &credentials,
            "POST",
            "/apps/3/events",
            &[],
            br#"{"channel":"a"}"#,
            1_000_000_000,
        );

        // Swap in the checksum of a different body.
        let md5 = params
            .iter_mut()
            .find(|(k, _)| k == "body_md5")
            .expect("body_md5");
        md5.1 = pushstack_auth::body_md5(br#"{"channel":"b"}"#);

        let result = verify_auth_params(&credentials, "POST", "/apps/3/events", &params);
        assert!(result.is_err(), "body checksum is part of the signed input");
    }

    #[test]
    fn test_should_never_emit_secret_in_param_list() {
        let credentials = test_credentials();
        let params = build_auth_params(&credentials, "POST", "/some/path", &[], b"", 1_000_000_000);

        for (key, value) in &params {
            assert!(!key.contains(TEST_APP_SECRET), "secret leaked in key {key}");
            assert!(!value.contains(TEST_APP_SECRET), "secret leaked in value {value}");
        }
        assert!(
            params.iter().any(|(k, _)| k == AUTH_SIGNATURE),
            "signature param present"
        );
    }

    #[test]
    fn test_should_sign_method_case_verbatim() {
        let credentials = test_credentials();
        let upper = build_auth_params(&credentials, "POST", "/some/path", &[], b"", 1);
        let lower = build_auth_params(&credentials, "post", "/some/path", &[], b"", 1);
        assert_ne!(upper[0].1, lower[0].1, "method case is not normalized");
    }

    #[test]
    fn test_should_produce_distinct_signatures_per_app() {
        let first = build_auth_params(&test_credentials(), "GET", "/channels", &[], b"", 1);
        let other = Credentials::new("otherkey", "othersecret");
        let second = build_auth_params(&other, "GET", "/channels", &[], b"", 1);
        assert_ne!(first[0].1, second[0].1);
    }
}
