use crate::model::{Card, Like};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEntry {
    pub card: Card,
    pub liked_by_me: bool,
}

impl CardEntry {
    pub fn like_count(&self) -> usize {
        self.card.likes.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    user_id: String,
    cards: Vec<CardEntry>,
}

impl GalleryState {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            cards: Vec::new(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn cards(&self) -> &[CardEntry] {
        &self.cards
    }

    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards
            .into_iter()
            .map(|card| self.entry_for(card))
            .collect();
    }

    pub fn insert_front(&mut self, card: Card) {
        let entry = self.entry_for(card);
        self.cards.insert(0, entry);
    }

    pub fn remove(&mut self, card_id: &str) -> bool {
        let before = self.cards.len();
        self.cards.retain(|entry| entry.card.id != card_id);
        self.cards.len() != before
    }

    pub fn card(&self, card_id: &str) -> Option<&CardEntry> {
        self.cards.iter().find(|entry| entry.card.id == card_id)
    }

    pub fn is_liked(&self, card_id: &str) -> bool {
        self.card(card_id).map(|entry| entry.liked_by_me).unwrap_or(false)
    }

    pub fn is_owned(&self, card_id: &str) -> bool {
        self.card(card_id)
            .map(|entry| entry.card.owner.id == self.user_id)
            .unwrap_or(false)
    }

    pub fn apply_likes(&mut self, card_id: &str, likes: Vec<Like>) -> Option<(usize, bool)> {
        let user_id = self.user_id.clone();
        let entry = self
            .cards
            .iter_mut()
            .find(|entry| entry.card.id == card_id)?;
        entry.card.likes = likes;
        entry.liked_by_me = entry.card.likes.iter().any(|like| like.id == user_id);
        Some((entry.card.likes.len(), entry.liked_by_me))
    }

    fn entry_for(&self, card: Card) -> CardEntry {
        let liked_by_me = card.likes.iter().any(|like| like.id == self.user_id);
        CardEntry { card, liked_by_me }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Owner;

    fn card(id: &str, owner: &str, likes: &[&str]) -> Card {
        Card {
            name: format!("card {id}"),
            link: format!("http://x/{id}.jpg"),
            id: id.to_string(),
            likes: likes
                .iter()
                .map(|id| Like { id: id.to_string() })
                .collect(),
            owner: Owner {
                id: owner.to_string(),
            },
        }
    }

    #[test]
    fn liked_state_tracked_per_card_id() {
        let mut state = GalleryState::new("me");
        state.set_cards(vec![card("1", "me", &["me", "u2"]), card("2", "u2", &["u2"])]);
        assert!(state.is_liked("1"));
        assert!(!state.is_liked("2"));
        assert!(!state.is_liked("missing"));
    }

    #[test]
    fn apply_likes_recomputes_liked_and_count() {
        let mut state = GalleryState::new("me");
        state.set_cards(vec![card("1", "u2", &[])]);
        let applied = state.apply_likes("1", vec![Like { id: "me".into() }]);
        assert_eq!(applied, Some((1, true)));
        let applied = state.apply_likes("1", Vec::new());
        assert_eq!(applied, Some((0, false)));
        assert_eq!(state.apply_likes("missing", Vec::new()), None);
    }

    #[test]
    fn ownership_gates_on_current_user() {
        let mut state = GalleryState::new("me");
        state.set_cards(vec![card("1", "me", &[]), card("2", "u2", &[])]);
        assert!(state.is_owned("1"));
        assert!(!state.is_owned("2"));
    }

    #[test]
    fn insert_front_prepends() {
        let mut state = GalleryState::new("me");
        state.set_cards(vec![card("1", "me", &[])]);
        state.insert_front(card("2", "me", &["me"]));
        assert_eq!(state.cards()[0].card.id, "2");
        assert!(state.cards()[0].liked_by_me);
    }

    #[test]
    fn remove_reports_whether_present() {
        let mut state = GalleryState::new("me");
        state.set_cards(vec![card("1", "me", &[])]);
        assert!(state.remove("1"));
        assert!(!state.remove("1"));
        assert!(state.cards().is_empty());
    }
}
