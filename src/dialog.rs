use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement, KeyboardEvent, Node};

use crate::dom;
use crate::settings;

pub(crate) struct Dialog {
    root: Element,
    is_open: Cell<bool>,
    key_listener: RefCell<Option<EventListener>>,
    overlay_listener: RefCell<Option<EventListener>>,
}

impl Dialog {
    pub(crate) fn new(root: Element) -> Rc<Self> {
        Rc::new(Self {
            root,
            is_open: Cell::new(false),
            key_listener: RefCell::new(None),
            overlay_listener: RefCell::new(None),
        })
    }

    pub(crate) fn root(&self) -> &Element {
        &self.root
    }

    pub(crate) fn is_open(&self) -> bool {
        self.is_open.get()
    }

    pub(crate) fn open(self: &Rc<Self>) {
        if self.is_open.replace(true) {
            return;
        }
        let _ = self.root.class_list().add_1(settings::OPENED_CLASS);
        let Ok(document) = dom::document() else {
            return;
        };
        let dialog = Rc::clone(self);
        let listener = EventListener::new(&document, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if event.key() == "Escape" {
                dialog.close();
            }
        });
        *self.key_listener.borrow_mut() = Some(listener);
    }

    pub(crate) fn close(&self) {
        if !self.is_open.replace(false) {
            return;
        }
        let _ = self.root.class_list().remove_1(settings::OPENED_CLASS);
        self.key_listener.borrow_mut().take();
    }

    pub(crate) fn set_event_listeners(self: &Rc<Self>) {
        if self.overlay_listener.borrow().is_some() {
            return;
        }
        let dialog = Rc::clone(self);
        let root = self.root.clone();
        let listener = EventListener::new(&self.root, "click", move |event| {
            let Some(target) = event.target() else {
                return;
            };
            let Some(node) = target.dyn_ref::<Node>() else {
                return;
            };
            if root.is_same_node(Some(node)) {
                dialog.close();
            }
        });
        *self.overlay_listener.borrow_mut() = Some(listener);
    }
}

pub(crate) struct ImageDialog {
    dialog: Rc<Dialog>,
    image: HtmlImageElement,
    caption: Element,
    _error_listener: EventListener,
}

impl ImageDialog {
    pub(crate) fn new(root: Element) -> Result<Rc<Self>, String> {
        let image: HtmlImageElement =
            dom::query_cast(&root, settings::POPUP_IMAGE_PICTURE_SELECTOR)?;
        let caption = dom::query_in(&root, settings::POPUP_IMAGE_TITLE_SELECTOR)?;
        let error_listener = install_image_fallback(&image);
        Ok(Rc::new(Self {
            dialog: Dialog::new(root),
            image,
            caption,
            _error_listener: error_listener,
        }))
    }

    pub(crate) fn open(&self, caption: &str, image_url: &str) {
        self.image.set_src(image_url);
        self.image.set_alt(caption);
        self.caption.set_text_content(Some(caption));
        self.dialog.open();
    }

    pub(crate) fn close(&self) {
        self.dialog.close();
    }

    pub(crate) fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    pub(crate) fn set_event_listeners(&self) {
        self.dialog.set_event_listeners();
    }
}

pub(crate) fn install_image_fallback(image: &HtmlImageElement) -> EventListener {
    let target = image.clone();
    EventListener::new(image, "error", move |_event| {
        if target.src() == settings::PLACEHOLDER_IMAGE_SRC {
            return;
        }
        target.set_src(settings::PLACEHOLDER_IMAGE_SRC);
        target.set_alt(settings::PLACEHOLDER_IMAGE_ALT);
    })
}
