//! Guest record and the submission shape used by both `POST /rsvp` and admin edits.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One RSVP row. Absent values stay `None` and serialize as `null`.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Guest {
    pub id: i32,
    pub name: String,
    /// Dietary preference.
    pub essenswunsch: Option<String>,
    /// Attending (`true`), not attending (`false`) or undecided (`null`).
    pub dabei: Option<bool>,
    pub email: Option<String>,
    /// Arrival info.
    pub anreise: Option<String>,
    pub essen_fr: Option<bool>,
    pub essen_sa: Option<bool>,
    pub essen_so: Option<bool>,
    /// Potluck contribution.
    pub essen_mitbringsel: Option<String>,
    /// Accommodation need.
    pub unterkunft: Option<String>,
}

/// Request body for creating or overwriting a guest. Only `name` is required.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, ToSchema)]
pub struct GuestInput {
    pub name: String,
    #[serde(default)]
    pub essenswunsch: Option<String>,
    #[serde(default)]
    pub dabei: Option<bool>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub anreise: Option<String>,
    #[serde(default)]
    pub essen_fr: Option<bool>,
    #[serde(default)]
    pub essen_sa: Option<bool>,
    #[serde(default)]
    pub essen_so: Option<bool>,
    #[serde(default)]
    pub essen_mitbringsel: Option<String>,
    #[serde(default)]
    pub unterkunft: Option<String>,
}

impl GuestInput {
    pub fn named(name: impl Into<String>) -> Self {
        GuestInput {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Overwrite every mutable field of `guest`; fields missing from the input become `None`.
    /// The id is left untouched.
    pub fn apply_to(self, guest: &mut Guest) {
        guest.name = self.name;
        guest.essenswunsch = self.essenswunsch;
        guest.dabei = self.dabei;
        guest.email = self.email;
        guest.anreise = self.anreise;
        guest.essen_fr = self.essen_fr;
        guest.essen_sa = self.essen_sa;
        guest.essen_so = self.essen_so;
        guest.essen_mitbringsel = self.essen_mitbringsel;
        guest.unterkunft = self.unterkunft;
    }

    pub fn into_guest(self, id: i32) -> Guest {
        let mut guest = Guest {
            id,
            name: String::new(),
            essenswunsch: None,
            dabei: None,
            email: None,
            anreise: None,
            essen_fr: None,
            essen_sa: None,
            essen_so: None,
            essen_mitbringsel: None,
            unterkunft: None,
        };
        self.apply_to(&mut guest);
        guest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_only_body_leaves_everything_else_null() {
        let input: GuestInput = serde_json::from_value(json!({ "name": "Anna" })).unwrap();
        let guest = input.into_guest(1);
        let value = serde_json::to_value(&guest).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Anna",
                "essenswunsch": null,
                "dabei": null,
                "email": null,
                "anreise": null,
                "essen_fr": null,
                "essen_sa": null,
                "essen_so": null,
                "essen_mitbringsel": null,
                "unterkunft": null
            })
        );
    }

    #[test]
    fn missing_name_is_rejected() {
        let err = serde_json::from_value::<GuestInput>(json!({ "email": "a@b.de" }));
        assert!(err.is_err());
    }

    #[test]
    fn explicit_false_is_kept_apart_from_null() {
        let input: GuestInput =
            serde_json::from_value(json!({ "name": "Ben", "dabei": false, "essen_sa": null })).unwrap();
        assert_eq!(input.dabei, Some(false));
        assert_eq!(input.essen_sa, None);
    }

    #[test]
    fn apply_overwrites_all_fields_but_keeps_id() {
        let mut guest = GuestInput {
            name: "Carla".into(),
            dabei: Some(true),
            email: Some("carla@example.org".into()),
            essen_fr: Some(true),
            unterkunft: Some("Hotel".into()),
            ..Default::default()
        }
        .into_guest(7);

        GuestInput {
            name: "Carla M.".into(),
            dabei: Some(false),
            ..Default::default()
        }
        .apply_to(&mut guest);

        assert_eq!(guest.id, 7);
        assert_eq!(guest.name, "Carla M.");
        assert_eq!(guest.dabei, Some(false));
        assert_eq!(guest.email, None);
        assert_eq!(guest.essen_fr, None);
        assert_eq!(guest.unterkunft, None);
    }
}
