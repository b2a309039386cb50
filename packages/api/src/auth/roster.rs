//! # Demo credential roster
//!
//! Exhibit ships a fixed set of demo accounts so the app is explorable
//! without sign-up. Login matches the identifier against this roster by
//! case-insensitive email and the secret by exact comparison; the matching
//! database rows are seeded by the migrations with `onboarding_complete`
//! left false so the demo walks through onboarding once.

/// One demo account.
#[derive(Debug, Clone, Copy)]
pub struct DemoCredential {
    /// Stored lowercase; compared case-insensitively.
    pub email: &'static str,
    /// Compared exactly.
    pub secret: &'static str,
}

pub const DEMO_ROSTER: &[DemoCredential] = &[
    DemoCredential {
        email: "ava.lindqvist@exhibit.app",
        secret: "exhibit-demo-1",
    },
    DemoCredential {
        email: "kai.moreno@exhibit.app",
        secret: "exhibit-demo-2",
    },
    DemoCredential {
        email: "northlight.agency@exhibit.app",
        secret: "exhibit-demo-3",
    },
    DemoCredential {
        email: "halcyon.studio@exhibit.app",
        secret: "exhibit-demo-4",
    },
];

/// Match an identifier/secret pair against the roster.
pub fn match_credentials(identifier: &str, secret: &str) -> Option<&'static DemoCredential> {
    let identifier = identifier.trim().to_lowercase();
    DEMO_ROSTER
        .iter()
        .find(|c| c.email == identifier && c.secret == secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_case_insensitive() {
        let hit = match_credentials("  Ava.Lindqvist@Exhibit.App ", "exhibit-demo-1");
        assert_eq!(hit.unwrap().email, "ava.lindqvist@exhibit.app");
    }

    #[test]
    fn test_secret_is_exact() {
        assert!(match_credentials("ava.lindqvist@exhibit.app", "EXHIBIT-DEMO-1").is_none());
        assert!(match_credentials("ava.lindqvist@exhibit.app", "").is_none());
    }

    #[test]
    fn test_unknown_identifier() {
        assert!(match_credentials("nobody@exhibit.app", "exhibit-demo-1").is_none());
    }
}
