//! Display-name derivation.
//!
//! Record entries carry zero or more name variants, each with an optional
//! family name and an optional list of given names. Everything that shows a
//! name to a user goes through [`DisplayName::from_names`], which applies one
//! fallback policy so a malformed or absent name renders as a sentinel string
//! instead of failing.

use crate::bundle::HumanName;

/// Sentinel shown when a record has no name variants at all.
pub const NO_NAME_PROVIDED: &str = "No name provided";

/// Sentinel shown when the chosen name variant has no family name.
pub const NO_FAMILY_NAME: &str = "No family name";

/// Sentinel shown when the chosen name variant has no given names.
pub const NO_GIVEN_NAME: &str = "No given name";

/// The human-presented family/given pair derived from a record's raw name data.
///
/// Derived, never stored: recompute it from the record whenever it is needed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayName {
    /// Family name (surname), or a sentinel.
    pub family: String,
    /// Given names joined with single spaces, or a sentinel.
    pub given: String,
}

impl DisplayName {
    /// Derive a display name from a record's name variants.
    ///
    /// Policy, in order:
    /// 1. prefer the first variant with a non-empty family name;
    /// 2. else fall back to the first variant;
    /// 3. else (no variants at all) return the [`NO_NAME_PROVIDED`] pair.
    ///
    /// For the chosen variant, an empty family becomes [`NO_FAMILY_NAME`] and
    /// empty given names become [`NO_GIVEN_NAME`].
    ///
    /// Pure and total: every malformed shape has a defined fallback.
    pub fn from_names(names: &[HumanName]) -> Self {
        let chosen = names
            .iter()
            .find(|n| n.family.as_deref().is_some_and(|f| !f.is_empty()))
            .or_else(|| names.first());

        let Some(name) = chosen else {
            return Self {
                family: NO_NAME_PROVIDED.to_string(),
                given: NO_NAME_PROVIDED.to_string(),
            };
        };

        let family = match name.family.as_deref() {
            Some(f) if !f.is_empty() => f.to_string(),
            _ => NO_FAMILY_NAME.to_string(),
        };

        let given = if name.given.is_empty() {
            NO_GIVEN_NAME.to_string()
        } else {
            name.given.join(" ")
        };

        Self { family, given }
    }

    /// True when the family field holds a real family name rather than one of
    /// the sentinels. Filter options are built only from real family names.
    pub fn has_real_family(&self) -> bool {
        self.family != NO_FAMILY_NAME && self.family != NO_NAME_PROVIDED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn human_name(family: Option<&str>, given: &[&str]) -> HumanName {
        HumanName {
            family: family.map(str::to_string),
            given: given.iter().map(|g| g.to_string()).collect(),
        }
    }

    #[test]
    fn empty_name_list_yields_sentinel_pair() {
        let name = DisplayName::from_names(&[]);
        assert_eq!(name.family, NO_NAME_PROVIDED);
        assert_eq!(name.given, NO_NAME_PROVIDED);
        assert!(!name.has_real_family());
    }

    #[test]
    fn joins_given_names_with_spaces() {
        let name = DisplayName::from_names(&[human_name(Some("Smith"), &["Ann", "May"])]);
        assert_eq!(name.family, "Smith");
        assert_eq!(name.given, "Ann May");
        assert!(name.has_real_family());
    }

    #[test]
    fn missing_family_yields_family_sentinel() {
        let name = DisplayName::from_names(&[human_name(None, &["Ann"])]);
        assert_eq!(name.family, NO_FAMILY_NAME);
        assert_eq!(name.given, "Ann");
        assert!(!name.has_real_family());
    }

    #[test]
    fn empty_family_string_counts_as_missing() {
        let name = DisplayName::from_names(&[human_name(Some(""), &["Ann"])]);
        assert_eq!(name.family, NO_FAMILY_NAME);
    }

    #[test]
    fn missing_given_yields_given_sentinel() {
        let name = DisplayName::from_names(&[human_name(Some("Smith"), &[])]);
        assert_eq!(name.given, NO_GIVEN_NAME);
    }

    #[test]
    fn prefers_first_variant_with_family_name() {
        let names = [
            human_name(None, &["Sally"]),
            human_name(Some("Williams"), &["Sarah", "Jane"]),
        ];
        let name = DisplayName::from_names(&names);
        assert_eq!(name.family, "Williams");
        assert_eq!(name.given, "Sarah Jane");
    }

    #[test]
    fn falls_back_to_first_variant_when_none_has_family() {
        let names = [human_name(None, &["Sally"]), human_name(None, &["Sue"])];
        let name = DisplayName::from_names(&names);
        assert_eq!(name.family, NO_FAMILY_NAME);
        assert_eq!(name.given, "Sally");
    }
}
