//! # Affiliation reconciliation
//!
//! A profile's `agency_affiliation` / `company_affiliation` fields are free
//! text. At save time each value is resolved against the accounts holding the
//! matching role; when it resolves, the two accounts get reciprocally linked —
//! the model records the agency in `linked_agencies`, the agency records the
//! model in `linked_models`. Clearing or retyping the text is the only way a
//! link changes; there is no separate unlink action.
//!
//! Matching is by case-insensitive, whitespace-trimmed equality against the
//! candidate's display name, then full name, then email. A rename on the
//! other account silently breaks the link on the next save — that is the
//! current behavior, not a defect to fix here.
//!
//! Everything in this module is pure; the gateway layer performs the actual
//! writes and owns the ordering guarantee (primary profile save first, then
//! the reciprocal side-effect writes).

use crate::models::UserInfo;

/// Resolve a free-text affiliation to an account holding `role`.
///
/// Returns `None` for empty or unmatched text — a valid outcome; the
/// affiliation then stays free-text only.
pub fn resolve_affiliation<'a>(
    value: Option<&str>,
    role: &str,
    pool: &'a [UserInfo],
) -> Option<&'a UserInfo> {
    let needle = value?.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let candidates: Vec<&UserInfo> = pool.iter().filter(|u| u.has_role(role)).collect();

    let matches = |field: Option<&str>| {
        field.map_or(false, |s| s.trim().to_lowercase() == needle)
    };

    candidates
        .iter()
        .find(|u| matches(u.display_name.as_deref()))
        .or_else(|| candidates.iter().find(|u| matches(u.full_name.as_deref())))
        .or_else(|| candidates.iter().find(|u| matches(Some(u.email.as_str()))))
        .copied()
}

/// One reciprocal write against an affiliated account's `linked_models`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkUpdate {
    /// Email of the agency/company account to update.
    pub target: String,
    /// `true` adds the editing user, `false` removes them.
    pub linked: bool,
}

/// Diff the previous and new resolved matches into reciprocal writes.
///
/// Re-saving an unchanged affiliation produces no writes, which is what makes
/// the whole edit idempotent.
pub fn plan_link_updates(previous: Option<&str>, next: Option<&str>) -> Vec<LinkUpdate> {
    if previous == next {
        return Vec::new();
    }
    let mut updates = Vec::new();
    if let Some(target) = previous {
        updates.push(LinkUpdate {
            target: target.to_string(),
            linked: false,
        });
    }
    if let Some(target) = next {
        updates.push(LinkUpdate {
            target: target.to_string(),
            linked: true,
        });
    }
    updates
}

/// Rewrite one of the editing user's own linked-account sets.
///
/// Drops the previous match, adds the new one, and never introduces a
/// duplicate.
pub fn relink(current: &[String], previous: Option<&str>, next: Option<&str>) -> Vec<String> {
    let mut linked: Vec<String> = current
        .iter()
        .filter(|email| Some(email.as_str()) != previous)
        .cloned()
        .collect();
    if let Some(next) = next {
        if !linked.iter().any(|email| email == next) {
            linked.push(next.to_string());
        }
    }
    linked
}

/// Apply one [`LinkUpdate`] to a `linked_models` set, duplicate-free.
pub fn apply_link(current: &[String], model_email: &str, linked: bool) -> Vec<String> {
    let mut models: Vec<String> = current
        .iter()
        .filter(|email| email.as_str() != model_email)
        .cloned()
        .collect();
    if linked {
        models.push(model_email.to_string());
    }
    models
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ROLE_AGENCY, ROLE_MODEL};

    fn account(email: &str, display_name: Option<&str>, full_name: Option<&str>, roles: &[&str]) -> UserInfo {
        UserInfo {
            id: email.to_string(),
            email: email.to_string(),
            full_name: full_name.map(|s| s.to_string()),
            display_name: display_name.map(|s| s.to_string()),
            avatar_url: None,
            bio: None,
            roles: roles.iter().map(|s| s.to_string()).collect(),
            primary_role: None,
            styles: Vec::new(),
            agency_affiliation: None,
            company_affiliation: None,
            linked_agencies: Vec::new(),
            linked_companies: Vec::new(),
            linked_models: Vec::new(),
            show_sensitive_content: false,
            onboarding_complete: true,
        }
    }

    fn pool() -> Vec<UserInfo> {
        vec![
            account("studio-x@exhibit.app", Some("Studio X"), Some("Studio X Ltd"), &[ROLE_AGENCY]),
            account("studio-y@exhibit.app", Some("Studio Y"), None, &[ROLE_AGENCY]),
            account("imposter@exhibit.app", Some("Studio X"), None, &[ROLE_MODEL]),
        ]
    }

    #[test]
    fn test_resolution_is_case_insensitive_and_trimmed() {
        let pool = pool();
        let hit = resolve_affiliation(Some("  studio x "), ROLE_AGENCY, &pool).unwrap();
        assert_eq!(hit.email, "studio-x@exhibit.app");
    }

    #[test]
    fn test_resolution_restricted_to_role() {
        let pool = pool();
        // "Studio X" also names a model account; only the agency matches.
        let hit = resolve_affiliation(Some("Studio X"), ROLE_AGENCY, &pool).unwrap();
        assert!(hit.has_role(ROLE_AGENCY));

        assert!(resolve_affiliation(Some("Studio Y"), ROLE_MODEL, &pool).is_none());
    }

    #[test]
    fn test_resolution_precedence_and_fallbacks() {
        let pool = pool();
        // Full name only matches when no display name does.
        let hit = resolve_affiliation(Some("Studio X Ltd"), ROLE_AGENCY, &pool).unwrap();
        assert_eq!(hit.email, "studio-x@exhibit.app");

        // Email is the last resort.
        let hit = resolve_affiliation(Some("STUDIO-Y@exhibit.app"), ROLE_AGENCY, &pool).unwrap();
        assert_eq!(hit.email, "studio-y@exhibit.app");
    }

    #[test]
    fn test_unmatched_and_empty_are_valid_outcomes() {
        let pool = pool();
        assert!(resolve_affiliation(Some("Nobody"), ROLE_AGENCY, &pool).is_none());
        assert!(resolve_affiliation(Some("   "), ROLE_AGENCY, &pool).is_none());
        assert!(resolve_affiliation(None, ROLE_AGENCY, &pool).is_none());
    }

    #[test]
    fn test_plan_is_empty_for_unchanged_match() {
        assert!(plan_link_updates(Some("s@x"), Some("s@x")).is_empty());
        assert!(plan_link_updates(None, None).is_empty());
    }

    #[test]
    fn test_plan_moves_link_between_accounts() {
        let updates = plan_link_updates(Some("studio-x@exhibit.app"), Some("studio-y@exhibit.app"));
        assert_eq!(
            updates,
            vec![
                LinkUpdate {
                    target: "studio-x@exhibit.app".to_string(),
                    linked: false,
                },
                LinkUpdate {
                    target: "studio-y@exhibit.app".to_string(),
                    linked: true,
                },
            ]
        );

        // Either side may be absent.
        assert_eq!(plan_link_updates(None, Some("s@y")).len(), 1);
        assert_eq!(plan_link_updates(Some("s@x"), None).len(), 1);
    }

    #[test]
    fn test_relink_replaces_without_duplicates() {
        let current = vec!["studio-x@exhibit.app".to_string()];
        let linked = relink(&current, Some("studio-x@exhibit.app"), Some("studio-y@exhibit.app"));
        assert_eq!(linked, vec!["studio-y@exhibit.app".to_string()]);

        // Re-applying the same edit changes nothing.
        let again = relink(&linked, Some("studio-x@exhibit.app"), Some("studio-y@exhibit.app"));
        assert_eq!(again, linked);

        // Clearing drops the entry.
        assert!(relink(&linked, Some("studio-y@exhibit.app"), None).is_empty());
    }

    #[test]
    fn test_link_moves_exactly_once_regardless_of_resaves() {
        // Scenario: user A moves from Studio X to Studio Y and mashes save.
        let mut x_models = vec!["a@exhibit.app".to_string(), "b@exhibit.app".to_string()];
        let mut y_models: Vec<String> = Vec::new();

        for _ in 0..3 {
            for update in plan_link_updates(Some("studio-x@exhibit.app"), Some("studio-y@exhibit.app"))
            {
                let set = if update.target == "studio-x@exhibit.app" {
                    &mut x_models
                } else {
                    &mut y_models
                };
                *set = apply_link(set, "a@exhibit.app", update.linked);
            }
        }

        assert_eq!(x_models, vec!["b@exhibit.app".to_string()]);
        assert_eq!(y_models, vec!["a@exhibit.app".to_string()]);
    }
}
