//! Static reference data used when the sample-data flag is on and the remote
//! community list is unavailable or empty. Keeps disconnected demo
//! environments populated; never consulted when the flag is off.

use crate::models::Community;

pub fn sample_communities() -> Vec<Community> {
    fn community(id: &str, name: &str, category: &str, description: &str, member_count: i32) -> Community {
        Community {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            description: Some(description.to_string()),
            member_count,
        }
    }

    vec![
        community(
            "c-portrait",
            "Portrait Collective",
            "style",
            "Natural-light and studio portrait work, critiques welcome.",
            4821,
        ),
        community(
            "c-editorial",
            "Editorial & Fashion",
            "style",
            "Campaign, lookbook and runway collaborations.",
            3210,
        ),
        community(
            "c-fineart",
            "Fine Art",
            "style",
            "Conceptual and gallery-oriented imagery.",
            1976,
        ),
        community(
            "c-street",
            "Street & Documentary",
            "style",
            "Candid city life, zines and photo walks.",
            2654,
        ),
        community(
            "c-cosplay",
            "Cosplay Creators",
            "interest",
            "Character shoots, prop makers and convention meetups.",
            1488,
        ),
        community(
            "c-nordic",
            "Nordic Shooters",
            "location",
            "Photographers and models around Scandinavia.",
            742,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::COMMUNITY_CATEGORIES;

    #[test]
    fn test_sample_communities_are_well_formed() {
        let communities = sample_communities();
        assert!(!communities.is_empty());
        for c in &communities {
            assert!(COMMUNITY_CATEGORIES.contains(&c.category.as_str()));
            assert!(c.member_count > 0);
        }
    }
}
