//! Builtin detector patterns.
//!
//! Categories covered: AWS credentials, generic API key/token/auth/secret
//! assignments, usernames and passwords, private keys, database connection
//! strings, S3 bucket hostnames and JWTs. Only the per-category regex
//! decides a match; rules carry no state.

/// The fixed ordered list of (id, description, pattern) triples.
///
/// Order is stable for reproducible reports but has no semantic effect;
/// every rule is always applied.
pub fn builtin_rules() -> &'static [(&'static str, &'static str, &'static str)] {
    &[
        (
            "aws-secret-context",
            "AWS secret key near aws identifier",
            r#"(?i)aws(.{0,20})?(?-i)['"][0-9a-zA-Z/+]{40}['"]"#,
        ),
        (
            "aws-access-key-id",
            "AWS access key ID",
            r"AKIA[0-9A-Z]{16}",
        ),
        (
            "api-key-assignment",
            "API key assignment",
            r#"(?i)api[_-]?key['"][:\s]+['"]([^'"]+)['"]"#,
        ),
        (
            "token-assignment",
            "Token assignment",
            r#"(?i)token['"][:\s]+['"]([^'"]+)['"]"#,
        ),
        (
            "auth-assignment",
            "Auth value assignment",
            r#"(?i)auth['"][:\s]+['"]([^'"]+)['"]"#,
        ),
        (
            "secret-assignment",
            "Secret assignment",
            r#"(?i)secret['"][:\s]+['"]([^'"]+)['"]"#,
        ),
        (
            "password-assignment",
            "Password assignment",
            r#"(?i)password['"][:\s]+['"]([^'"]+)['"]"#,
        ),
        (
            "username-assignment",
            "Username assignment",
            r#"(?i)username['"][:\s]+['"]([^'"]+)['"]"#,
        ),
        (
            "pem-private-key",
            "PEM private key header",
            r"-----BEGIN [A-Z ]+ PRIVATE KEY-----",
        ),
        (
            "private-key-assignment",
            "Private key assignment",
            r#"(?i)private.?key['"][:\s]+['"]([^'"]+)['"]"#,
        ),
        (
            "mongodb-uri",
            "MongoDB connection string",
            r#"(?i)mongodb(\+srv)?://[^\s<>"']+"#,
        ),
        (
            "mysql-uri",
            "MySQL connection string",
            r#"(?i)mysql://[^\s<>"']+"#,
        ),
        (
            "s3-bucket-host",
            "S3 bucket hostname",
            r"(?i)[\w\-\.]+\.s3\.[\w\-\.]+\.amazonaws\.com",
        ),
        (
            "jwt",
            "JWT token",
            r"eyJ[A-Za-z0-9-_=]+\.[A-Za-z0-9-_=]+\.?[A-Za-z0-9-_.+/=]*",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::RuleSet;

    #[test]
    fn test_all_builtin_patterns_compile() {
        let rules = RuleSet::builtin().unwrap();
        assert_eq!(rules.len(), builtin_rules().len());
        assert!(!rules.is_empty());
    }

    #[test]
    fn test_rule_ids_are_unique() {
        let specs = builtin_rules();
        let mut ids: Vec<_> = specs.iter().map(|(id, _, _)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), specs.len());
    }
}
