use std::collections::HashSet;

use serde::{Deserialize, Serialize};

const AVATAR_BASE: &str = "https://github.com";

/// One entry of the contributor list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub id: u64,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub username: String,
}

impl Contributor {
    /// Avatar image derived from the account name.
    #[must_use]
    pub fn avatar_url(&self) -> String {
        format!("{}/{}.png", AVATAR_BASE, self.username)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DataError {
    #[error("duplicate contributor id {0}")]
    DuplicateId(u64),
}

/// Reject lists where two contributors share an id.
///
/// # Errors
///
/// Returns [`DataError::DuplicateId`] for the first repeated id.
pub fn validate_contributors(contributors: &[Contributor]) -> Result<(), DataError> {
    let mut seen = HashSet::with_capacity(contributors.len());
    for contributor in contributors {
        if !seen.insert(contributor.id) {
            return Err(DataError::DuplicateId(contributor.id));
        }
    }
    Ok(())
}

/// Case-insensitive substring match on `fullname`.
///
/// A blank query returns the whole list in its original order.
#[must_use]
pub fn filter_users(query: &str, contributors: &[Contributor]) -> Vec<Contributor> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return contributors.to_vec();
    }

    contributors
        .iter()
        .filter(|c| c.fullname.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contributor(id: u64, fullname: &str) -> Contributor {
        Contributor {
            id,
            fullname: fullname.to_string(),
            username: fullname.to_lowercase(),
        }
    }

    fn names(list: &[Contributor]) -> Vec<&str> {
        list.iter().map(|c| c.fullname.as_str()).collect()
    }

    #[test]
    fn filter_keeps_matches_in_order() {
        let list = vec![
            contributor(1, "Anmol"),
            contributor(2, "Bob"),
            contributor(3, "Anna"),
        ];

        let result = filter_users("an", &list);

        assert_eq!(names(&result), vec!["Anmol", "Anna"]);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let list = vec![contributor(1, "Anmol"), contributor(2, "JOHANNA")];

        assert_eq!(names(&filter_users("ANN", &list)), vec!["JOHANNA"]);
        assert_eq!(names(&filter_users("aNm", &list)), vec!["Anmol"]);
    }

    #[test]
    fn blank_query_returns_everything() {
        let list = vec![contributor(2, "Bob"), contributor(1, "Anna")];

        assert_eq!(filter_users("", &list), list);
        assert_eq!(filter_users("   ", &list), list);
    }

    #[test]
    fn query_is_trimmed() {
        let list = vec![contributor(1, "Bob"), contributor(2, "Anna")];

        assert_eq!(names(&filter_users("  bo ", &list)), vec!["Bob"]);
    }

    #[test]
    fn no_match_yields_empty() {
        let list = vec![contributor(1, "Bob")];

        assert!(filter_users("zz", &list).is_empty());
    }

    #[test]
    fn missing_fullname_never_matches_a_term() {
        let list: Vec<Contributor> =
            serde_json::from_str(r#"[{"id": 1, "username": "ghost"}]"#).unwrap();

        assert_eq!(list[0].fullname, "");
        assert!(filter_users("ghost", &list).is_empty());
        assert_eq!(filter_users("", &list).len(), 1);
    }

    #[test]
    fn avatar_url_uses_username() {
        let c = Contributor {
            id: 7,
            fullname: "Anmol Agarwal".to_string(),
            username: "fineanmol".to_string(),
        };

        assert_eq!(c.avatar_url(), "https://github.com/fineanmol.png");
    }

    #[test]
    fn validate_accepts_unique_ids() {
        let list = vec![contributor(1, "a"), contributor(2, "b")];
        assert!(validate_contributors(&list).is_ok());
        assert!(validate_contributors(&[]).is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let list = vec![contributor(1, "a"), contributor(2, "b"), contributor(1, "c")];

        assert_eq!(
            validate_contributors(&list),
            Err(DataError::DuplicateId(1))
        );
    }
}
