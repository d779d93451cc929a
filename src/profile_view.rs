use basho_core::model::Profile;
use web_sys::{Element, HtmlImageElement};

use crate::dom;
use crate::settings;

pub(crate) struct ProfileView {
    name: Element,
    about: Element,
    avatar: HtmlImageElement,
}

impl ProfileView {
    pub(crate) fn new(profile_root: &Element) -> Result<Self, String> {
        Ok(Self {
            name: dom::query_in(profile_root, settings::PROFILE_NAME_SELECTOR)?,
            about: dom::query_in(profile_root, settings::PROFILE_ABOUT_SELECTOR)?,
            avatar: dom::query_cast(profile_root, settings::PROFILE_AVATAR_SELECTOR)?,
        })
    }

    pub(crate) fn render(&self, profile: &Profile) {
        self.name.set_text_content(Some(&profile.name));
        self.about.set_text_content(Some(&profile.about));
        self.avatar.set_src(&profile.avatar);
        self.avatar.set_alt(&profile.name);
    }

    pub(crate) fn name(&self) -> String {
        self.name.text_content().unwrap_or_default()
    }

    pub(crate) fn about(&self) -> String {
        self.about.text_content().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn profile_fixture() -> Element {
        let document = dom::document().unwrap();
        let root = document.create_element("section").unwrap();
        root.set_class_name("profile");
        root.set_inner_html(
            "<img class=\"avatar__image\" alt=\"\" />\
             <h1 class=\"profile-info__name\"></h1>\
             <p class=\"profile-info__job\"></p>",
        );
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    #[wasm_bindgen_test]
    fn render_then_read_back() {
        let root = profile_fixture();
        let view = ProfileView::new(&root).unwrap();
        view.render(&Profile {
            name: "Jacques".to_string(),
            about: "Explorer".to_string(),
            avatar: "http://x/a.png".to_string(),
            id: "u1".to_string(),
        });
        assert_eq!(view.name(), "Jacques");
        assert_eq!(view.about(), "Explorer");
        root.remove();
    }
}
