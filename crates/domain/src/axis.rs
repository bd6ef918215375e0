//! Axis name — the textual identifier of a virtual input axis.
//!
//! Names are compared case-insensitively everywhere a lookup or a change
//! notification is matched. The derived equality stays exact so a name is
//! reported back exactly as the owner wrote it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of an input axis (e.g. `"Horizontal"`, `"Mouse X"`).
///
/// Any string is accepted, including the empty string: a binding created
/// without a name simply matches nothing but the empty name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxisName(String);

impl AxisName {
    /// Wrap a string as an axis name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name exactly as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name is empty (an unnamed binding).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive comparison against another axis identifier.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        fold(&self.0).eq(fold(other))
    }

    /// Case-folded form, used as a map key wherever names are looked up.
    ///
    /// Two names produce the same key if and only if [`matches`](Self::matches)
    /// returns `true` for them.
    #[must_use]
    pub fn key(&self) -> String {
        fold(&self.0).collect()
    }
}

/// Folds each character through lowercase, uppercase, then lowercase again, so
/// every letter sharing an uppercase form (`σ`/`ς`, `s`/`ſ`, `ß`/`ẞ`) ends up
/// on the same sequence.
fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .flat_map(char::to_lowercase)
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
}

impl fmt::Display for AxisName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AxisName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AxisName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_match_when_names_differ_only_in_case() {
        let name = AxisName::from("Horizontal");
        assert!(name.matches("horizontal"));
        assert!(name.matches("HORIZONTAL"));
        assert!(name.matches("hOrIzOnTaL"));
    }

    #[test]
    fn should_not_match_different_names() {
        let name = AxisName::from("Horizontal");
        assert!(!name.matches("Vertical"));
        assert!(!name.matches("Horizontal "));
        assert!(!name.matches(""));
    }

    #[test]
    fn should_match_non_ascii_names_case_insensitively() {
        let name = AxisName::from("Ümlaut Achse");
        assert!(name.matches("ümlaut achse"));
        assert!(name.matches("ÜMLAUT ACHSE"));
    }

    #[test]
    fn should_match_final_sigma_against_capital_sigma() {
        let name = AxisName::from("ΟΔΟΣ");
        assert!(name.matches("οδος"));
        assert!(name.matches("οδοσ"));
        assert!(AxisName::from("οδος").matches("ΟΔΟΣ"));
    }

    #[test]
    fn should_match_long_s_against_plain_s() {
        let name = AxisName::from("Steer");
        assert!(name.matches("ſteer"));
        assert!(name.matches("STEER"));
        assert!(AxisName::from("ſteer").matches("steer"));
    }

    #[test]
    fn should_match_sharp_s_variants() {
        let name = AxisName::from("Straße");
        assert!(name.matches("STRASSE"));
        assert!(name.matches("STRAẞE"));
    }

    #[test]
    fn should_produce_same_key_for_every_case_variant() {
        let keys: Vec<String> = ["ΟΔΟΣ", "οδος", "οδοσ", "Οδος"]
            .into_iter()
            .map(|name| AxisName::from(name).key())
            .collect();
        assert!(keys.iter().all(|key| key == &keys[0]));
        assert_eq!(AxisName::from("ſteer").key(), AxisName::from("STEER").key());
    }

    #[test]
    fn should_only_match_empty_when_unnamed() {
        let name = AxisName::default();
        assert!(name.is_empty());
        assert!(name.matches(""));
        assert!(!name.matches("Fire"));
    }

    #[test]
    fn should_produce_same_key_for_matching_names() {
        let a = AxisName::from("Mouse X");
        let b = AxisName::from("MOUSE x");
        assert!(a.matches(b.as_str()));
        assert_eq!(a.key(), b.key());
        assert_eq!(a.key(), "mouse x");
    }

    #[test]
    fn should_keep_exact_equality_case_sensitive() {
        assert_ne!(AxisName::from("Jump"), AxisName::from("jump"));
        assert_eq!(AxisName::from("Jump"), AxisName::new("Jump"));
    }

    #[test]
    fn should_display_name_as_written() {
        assert_eq!(AxisName::from("Mouse ScrollWheel").to_string(), "Mouse ScrollWheel");
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let name = AxisName::from("Vertical");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Vertical\"");
        let parsed: AxisName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, name);
    }
}
