use std::cell::RefCell;
use std::rc::Rc;

use basho_core::CardEntry;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement, HtmlTemplateElement};

use crate::dialog;
use crate::dom;
use crate::settings;

pub(crate) struct CardHandlers {
    pub(crate) on_preview: Rc<dyn Fn(&str, &str)>,
    pub(crate) on_like: Rc<dyn Fn(&str, &Rc<CardView>)>,
    pub(crate) on_delete: Rc<dyn Fn(&str, &Rc<CardView>)>,
}

pub(crate) struct CardView {
    card_id: String,
    root: Element,
    like_button: Element,
    like_counter: Element,
    listeners: RefCell<Vec<EventListener>>,
}

impl CardView {
    pub(crate) fn build(
        entry: &CardEntry,
        owned_by_me: bool,
        handlers: &CardHandlers,
    ) -> Result<Rc<Self>, String> {
        let template: HtmlTemplateElement = dom::cast(
            dom::query_document(settings::CARD_TEMPLATE_SELECTOR)?,
            settings::CARD_TEMPLATE_SELECTOR,
        )?;
        let prototype = template
            .content()
            .query_selector(settings::CARD_SELECTOR)
            .map_err(|_| format!("invalid selector {}", settings::CARD_SELECTOR))?
            .ok_or_else(|| format!("missing element {}", settings::CARD_SELECTOR))?;
        let root: Element = prototype
            .clone_node_with_deep(true)
            .map_err(|_| "card template clone failed".to_string())?
            .dyn_into()
            .map_err(|_| "card template root is not an element".to_string())?;

        let image: HtmlImageElement = dom::query_cast(&root, settings::CARD_IMAGE_SELECTOR)?;
        let title = dom::query_in(&root, settings::CARD_TITLE_SELECTOR)?;
        let like_button = dom::query_in(&root, settings::CARD_LIKE_BUTTON_SELECTOR)?;
        let like_counter = dom::query_in(&root, settings::CARD_LIKE_COUNTER_SELECTOR)?;
        let delete_button = dom::query_in(&root, settings::CARD_DELETE_BUTTON_SELECTOR)?;

        image.set_src(&entry.card.link);
        image.set_alt(&entry.card.name);
        title.set_text_content(Some(&entry.card.name));

        let view = Rc::new(Self {
            card_id: entry.card.id.clone(),
            root: root.clone(),
            like_button,
            like_counter,
            listeners: RefCell::new(Vec::new()),
        });
        view.set_likes(entry.like_count(), entry.liked_by_me);

        let mut listeners = Vec::new();
        listeners.push(dialog::install_image_fallback(&image));

        let name = entry.card.name.clone();
        let link = entry.card.link.clone();
        let on_preview = Rc::clone(&handlers.on_preview);
        listeners.push(EventListener::new(&image, "click", move |_event| {
            on_preview(&name, &link);
        }));

        let on_like = Rc::clone(&handlers.on_like);
        let like_view = Rc::clone(&view);
        listeners.push(EventListener::new(&view.like_button, "click", move |_event| {
            on_like(&like_view.card_id, &like_view);
        }));

        if owned_by_me {
            let on_delete = Rc::clone(&handlers.on_delete);
            let delete_view = Rc::clone(&view);
            listeners.push(EventListener::new(&delete_button, "click", move |_event| {
                on_delete(&delete_view.card_id, &delete_view);
            }));
        } else {
            delete_button.remove();
        }

        *view.listeners.borrow_mut() = listeners;
        Ok(view)
    }

    pub(crate) fn root(&self) -> &Element {
        &self.root
    }

    pub(crate) fn set_likes(&self, count: usize, liked_by_me: bool) {
        self.like_counter.set_text_content(Some(&count.to_string()));
        if liked_by_me {
            let _ = self
                .like_button
                .class_list()
                .add_1(settings::CARD_LIKE_ACTIVE_CLASS);
        } else {
            let _ = self
                .like_button
                .class_list()
                .remove_1(settings::CARD_LIKE_ACTIVE_CLASS);
        }
    }

    pub(crate) fn remove(&self) {
        // Dropping the listeners also breaks the Rc cycle through their
        // captured view, so a removed card can be freed.
        self.listeners.borrow_mut().clear();
        self.root.remove();
    }
}
