use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub about: String,
    pub avatar: String,
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub link: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub likes: Vec<Like>,
    pub owner: Owner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCard {
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub name: String,
    pub about: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarPatch {
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_decodes_service_shape() {
        let body = r#"{
            "name": "Alps",
            "link": "http://x/y.jpg",
            "_id": "42",
            "likes": [{"_id": "u1", "name": "Ann"}, {"_id": "u2"}],
            "owner": {"_id": "u1", "about": "explorer"}
        }"#;
        let card: Card = serde_json::from_str(body).unwrap();
        assert_eq!(card.id, "42");
        assert_eq!(card.name, "Alps");
        assert_eq!(card.likes.len(), 2);
        assert_eq!(card.likes[1].id, "u2");
        assert_eq!(card.owner.id, "u1");
    }

    #[test]
    fn card_decodes_without_likes() {
        let body = r#"{"name": "a", "link": "b", "_id": "1", "owner": {"_id": "u"}}"#;
        let card: Card = serde_json::from_str(body).unwrap();
        assert!(card.likes.is_empty());
    }

    #[test]
    fn profile_round_trips_underscore_id() {
        let profile = Profile {
            name: "Jacques".to_string(),
            about: "Explorer".to_string(),
            avatar: "http://x/a.png".to_string(),
            id: "u1".to_string(),
        };
        let encoded = serde_json::to_string(&profile).unwrap();
        assert!(encoded.contains("\"_id\":\"u1\""));
        let decoded: Profile = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, profile);
    }

    #[test]
    fn new_card_encodes_exact_payload() {
        let payload = NewCard {
            name: "Alps".to_string(),
            link: "http://x/y.jpg".to_string(),
        };
        let encoded = serde_json::to_string(&payload).unwrap();
        assert_eq!(encoded, r#"{"name":"Alps","link":"http://x/y.jpg"}"#);
    }
}
