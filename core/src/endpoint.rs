pub const PROFILE_PATH: &str = "users/me";
pub const AVATAR_PATH: &str = "users/me/avatar";
pub const CARDS_PATH: &str = "cards";

pub fn card_path(card_id: &str) -> String {
    format!("cards/{card_id}")
}

pub fn like_path(card_id: &str) -> String {
    format!("cards/likes/{card_id}")
}

pub fn join_url(base_url: &str, group_id: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let group = group_id.trim_matches('/');
    let path = path.trim_start_matches('/');
    if group.is_empty() {
        format!("{base}/{path}")
    } else {
        format!("{base}/{group}/{path}")
    }
}
