use serde::Deserialize;

/// Wire envelope for `GET /profile`.
#[derive(Debug, Deserialize)]
pub struct ProfileEnvelope {
    pub profile_details: ProfileSummary,
}

/// The signed-in user's profile card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileSummary {
    pub name: String,
    pub profile_image_url: String,
    pub short_bio: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_envelope_decodes_nested_details() {
        let body = r#"{
            "profile_details": {
                "name": "Rahul Attuluri",
                "profile_image_url": "https://assets.ccbp.in/frontend/react-js/male-avatar-img.png",
                "short_bio": "Lead Software Developer and AI-ML expert"
            }
        }"#;

        let envelope: ProfileEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.profile_details.name, "Rahul Attuluri");
        assert_eq!(
            envelope.profile_details.short_bio,
            "Lead Software Developer and AI-ML expert"
        );
    }

    #[test]
    fn test_profile_envelope_rejects_missing_details() {
        let body = r#"{"name": "Rahul"}"#;
        assert!(serde_json::from_str::<ProfileEnvelope>(body).is_err());
    }
}
