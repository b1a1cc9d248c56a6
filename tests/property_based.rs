use helius_rpc_proxy::{AllowedOrigins, ApiKey, OriginDecision, build_upstream_url};
use proptest::prelude::*;

const KEY: &str = "prop-key";

proptest! {
    #[test]
    fn literal_pattern_matches_only_itself(
        host in "[a-z0-9]{1,16}",
        tld in "[a-z]{2,6}",
        other in "[a-z0-9]{1,16}",
    ) {
        let origin = format!("https://{host}.{tld}");
        let origins = AllowedOrigins::list([origin.as_str()]).unwrap();

        prop_assert_eq!(origins.resolve(Some(origin.as_str())), OriginDecision::Mirror(origin.clone()));

        let different = format!("https://{other}.{tld}");
        prop_assume!(different != origin);
        prop_assert_eq!(origins.resolve(Some(different.as_str())), OriginDecision::Disallow);
    }

    #[test]
    fn subdomain_glob_matches_any_label(label in "[a-z0-9][a-z0-9.-]{0,30}") {
        let origins = AllowedOrigins::list(["https://*.b.com"]).unwrap();
        let origin = format!("https://{label}.b.com");

        prop_assert_eq!(origins.resolve(Some(origin.as_str())), OriginDecision::Mirror(origin.clone()));
    }

    #[test]
    fn glob_never_matches_with_trailing_port(
        label in "[a-z0-9]{1,12}",
        port in 1u16..,
    ) {
        let origins = AllowedOrigins::list(["https://*.b.com"]).unwrap();
        let origin = format!("https://{label}.b.com:{port}");

        prop_assert_eq!(origins.resolve(Some(origin.as_str())), OriginDecision::Disallow);
    }

    #[test]
    fn regex_metacharacters_in_patterns_stay_literal(host in "[a-z]{1,10}") {
        let origins = AllowedOrigins::list(["https://a.com"]).unwrap();
        let origin = format!("https://aXcom{host}");

        prop_assert_eq!(origins.resolve(Some(origin.as_str())), OriginDecision::Disallow);
    }

    #[test]
    fn wildcard_policy_ignores_origin(origin in "\\PC{0,64}") {
        prop_assert_eq!(AllowedOrigins::any().resolve(Some(origin.as_str())), OriginDecision::Any);
    }

    #[test]
    fn credential_always_precedes_caller_query(
        path in "(/[a-z0-9]{1,8}){0,4}",
        query in "[a-z]{1,6}=[a-z0-9]{0,6}(&[a-z]{1,6}=[a-z0-9]{0,6}){0,3}",
    ) {
        let path = if path.is_empty() { "/".to_string() } else { path };
        let url = build_upstream_url("https://api.helius.xyz", &ApiKey::new(KEY), &path, Some(query.as_str()));

        let prefix = format!("https://api.helius.xyz{path}?api-key={KEY}&");
        prop_assert!(url.starts_with(&prefix));
        prop_assert_eq!(&url[prefix.len()..], query.as_str());
    }

    #[test]
    fn missing_or_empty_query_adds_no_separator(path in "(/[a-z0-9]{1,8}){1,4}", empty in any::<bool>()) {
        let query = if empty { Some("") } else { None };
        let url = build_upstream_url("https://api.helius.xyz", &ApiKey::new(KEY), &path, query);

        prop_assert_eq!(url, format!("https://api.helius.xyz{path}?api-key={KEY}"));
    }
}
