use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use basho_core::model::{NewCard, ProfilePatch};
use basho_core::{CardEntry, FormSnapshot, GalleryState};
use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlFormElement};

use crate::api::RemoteClient;
use crate::card_view::{CardHandlers, CardView};
use crate::dialog::ImageDialog;
use crate::dom;
use crate::form_dialog::{BusyGuard, FormDialog};
use crate::profile_view::ProfileView;
use crate::settings;
use crate::validation::FieldValidator;

thread_local! {
    static APP: RefCell<Option<Rc<GalleryApp>>> = RefCell::new(None);
}

pub(crate) struct GalleryApp {
    client: RemoteClient,
    state: RefCell<GalleryState>,
    profile_view: ProfileView,
    image_dialog: Rc<ImageDialog>,
    confirm_dialog: Rc<FormDialog>,
    edit_profile_dialog: Rc<FormDialog>,
    edit_avatar_dialog: Rc<FormDialog>,
    add_card_dialog: Rc<FormDialog>,
    validators: RefCell<HashMap<String, Rc<FieldValidator>>>,
    card_section: Element,
    open_listeners: RefCell<Vec<EventListener>>,
}

pub(crate) fn bootstrap() -> Result<(), String> {
    let profile_root = dom::query_document(settings::PROFILE_SELECTOR)?;
    let card_section = dom::query_document(settings::CARD_SECTION_SELECTOR)?;
    let image_dialog =
        ImageDialog::new(dom::query_document(settings::POPUP_IMAGE_SELECTOR)?)?;
    let confirm_dialog = FormDialog::new(
        dom::query_document(settings::POPUP_CONFIRM_SELECTOR)?,
        settings::CONFIRM_LABELS,
    )?;
    let edit_profile_dialog = FormDialog::new(
        dom::query_document(settings::POPUP_EDIT_PROFILE_SELECTOR)?,
        settings::SAVE_LABELS,
    )?;
    let edit_avatar_dialog = FormDialog::new(
        dom::query_document(settings::POPUP_EDIT_AVATAR_SELECTOR)?,
        settings::SAVE_LABELS,
    )?;
    let add_card_dialog = FormDialog::new(
        dom::query_document(settings::POPUP_ADD_CARD_SELECTOR)?,
        settings::CREATE_LABELS,
    )?;
    let profile_view = ProfileView::new(&profile_root)?;
    let config = settings::api_config();

    let app = Rc::new(GalleryApp {
        client: RemoteClient::new(&config),
        state: RefCell::new(GalleryState::default()),
        profile_view,
        image_dialog,
        confirm_dialog,
        edit_profile_dialog,
        edit_avatar_dialog,
        add_card_dialog,
        validators: RefCell::new(HashMap::new()),
        card_section,
        open_listeners: RefCell::new(Vec::new()),
    });

    app.enable_validation()?;
    app.wire_dialogs();
    app.wire_open_buttons(&profile_root)?;
    app.load_initial_data(&profile_root);

    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}

impl GalleryApp {
    fn enable_validation(&self) -> Result<(), String> {
        let document = dom::document()?;
        let forms = document
            .query_selector_all(settings::FORM_SELECTOR)
            .map_err(|_| format!("invalid selector {}", settings::FORM_SELECTOR))?;
        for index in 0..forms.length() {
            let Some(node) = forms.item(index) else {
                continue;
            };
            let Ok(form) = node.dyn_into::<HtmlFormElement>() else {
                continue;
            };
            let validator = FieldValidator::new(form, settings::VALIDATION)?;
            validator.enable_validation();
            self.validators
                .borrow_mut()
                .insert(validator.form_name(), validator);
        }
        Ok(())
    }

    fn wire_dialogs(self: &Rc<Self>) {
        self.image_dialog.set_event_listeners();
        for dialog in [
            &self.confirm_dialog,
            &self.edit_profile_dialog,
            &self.edit_avatar_dialog,
            &self.add_card_dialog,
        ] {
            dialog.set_event_listeners();
            self.wire_reset_hook(dialog);
        }

        let app = Rc::clone(self);
        self.edit_profile_dialog
            .set_submit_handler(Rc::new(move |snapshot, dialog| {
                app.submit_profile(snapshot, dialog);
            }));

        let app = Rc::clone(self);
        self.edit_avatar_dialog
            .set_submit_handler(Rc::new(move |snapshot, dialog| {
                app.submit_avatar(snapshot, dialog);
            }));

        let app = Rc::clone(self);
        self.add_card_dialog
            .set_submit_handler(Rc::new(move |snapshot, dialog| {
                app.submit_new_card(snapshot, dialog);
            }));
    }

    fn wire_reset_hook(&self, dialog: &Rc<FormDialog>) {
        let name = dialog.form().get_attribute("name").unwrap_or_default();
        let Some(validator) = self.validators.borrow().get(&name).cloned() else {
            return;
        };
        dialog.set_reset_hook(Rc::new(move || validator.reset_input_validation()));
    }

    fn wire_open_buttons(self: &Rc<Self>, profile_root: &Element) -> Result<(), String> {
        let edit_button =
            dom::query_in(profile_root, settings::PROFILE_EDIT_BUTTON_SELECTOR)?;
        let avatar_button =
            dom::query_in(profile_root, settings::PROFILE_AVATAR_BUTTON_SELECTOR)?;

        let app = Rc::clone(self);
        let listener = EventListener::new(&edit_button, "click", move |_event| {
            app.open_edit_profile();
        });
        self.open_listeners.borrow_mut().push(listener);

        let app = Rc::clone(self);
        let listener = EventListener::new(&avatar_button, "click", move |_event| {
            app.open_edit_avatar();
        });
        self.open_listeners.borrow_mut().push(listener);
        Ok(())
    }

    fn wire_add_card_button(self: &Rc<Self>, profile_root: &Element) {
        let Ok(add_button) = dom::query_in(profile_root, settings::PROFILE_ADD_BUTTON_SELECTOR)
        else {
            console::warn!("add-card button missing");
            return;
        };
        let app = Rc::clone(self);
        let listener = EventListener::new(&add_button, "click", move |_event| {
            app.open_add_card();
        });
        self.open_listeners.borrow_mut().push(listener);
    }

    fn load_initial_data(self: &Rc<Self>, profile_root: &Element) {
        let app = Rc::clone(self);
        let profile_root = profile_root.clone();
        spawn_local(async move {
            match app.client.fetch_initial_data().await {
                Ok((profile, cards)) => {
                    app.profile_view.render(&profile);
                    {
                        let mut state = app.state.borrow_mut();
                        *state = GalleryState::new(profile.id.clone());
                        state.set_cards(cards);
                    }
                    let entries: Vec<CardEntry> = app.state.borrow().cards().to_vec();
                    for entry in &entries {
                        app.add_card_view(entry, false);
                    }
                    app.wire_add_card_button(&profile_root);
                }
                Err(err) => console::error!("initial data load failed:", err.to_string()),
            }
        });
    }

    fn open_edit_profile(&self) {
        self.edit_profile_dialog
            .set_value("name", &self.profile_view.name());
        self.edit_profile_dialog
            .set_value("about", &self.profile_view.about());
        self.reset_validation_for(self.edit_profile_dialog.form());
        self.edit_profile_dialog.open();
    }

    fn open_edit_avatar(&self) {
        self.reset_validation_for(self.edit_avatar_dialog.form());
        self.edit_avatar_dialog.open();
    }

    fn open_add_card(&self) {
        self.add_card_dialog.form().reset();
        self.reset_validation_for(self.add_card_dialog.form());
        self.add_card_dialog.open();
    }

    fn reset_validation_for(&self, form: &HtmlFormElement) {
        let name = form.get_attribute("name").unwrap_or_default();
        if let Some(validator) = self.validators.borrow().get(&name) {
            validator.reset_input_validation();
        }
    }

    fn card_handlers(self: &Rc<Self>) -> CardHandlers {
        let image_dialog = Rc::clone(&self.image_dialog);
        let on_preview = Rc::new(move |name: &str, link: &str| {
            image_dialog.open(name, link);
        });

        let app = Rc::clone(self);
        let on_like = Rc::new(move |card_id: &str, view: &Rc<CardView>| {
            app.toggle_like(card_id.to_string(), Rc::clone(view));
        });

        let app = Rc::clone(self);
        let on_delete = Rc::new(move |card_id: &str, view: &Rc<CardView>| {
            app.request_delete(card_id.to_string(), Rc::clone(view));
        });

        CardHandlers {
            on_preview,
            on_like,
            on_delete,
        }
    }

    fn add_card_view(self: &Rc<Self>, entry: &CardEntry, prepend: bool) {
        let handlers = self.card_handlers();
        let owned = self.state.borrow().is_owned(&entry.card.id);
        match CardView::build(entry, owned, &handlers) {
            Ok(view) => {
                if prepend {
                    let _ = self.card_section.prepend_with_node_1(view.root());
                } else {
                    let _ = self.card_section.append_child(view.root());
                }
            }
            Err(err) => console::warn!("card skipped:", err),
        }
    }

    fn toggle_like(self: &Rc<Self>, card_id: String, view: Rc<CardView>) {
        let app = Rc::clone(self);
        spawn_local(async move {
            let liked = app.state.borrow().is_liked(&card_id);
            let outcome = if liked {
                app.client.remove_like(&card_id).await
            } else {
                app.client.add_like(&card_id).await
            };
            match outcome {
                Ok(card) => {
                    let applied = app.state.borrow_mut().apply_likes(&card_id, card.likes);
                    if let Some((count, liked_by_me)) = applied {
                        view.set_likes(count, liked_by_me);
                    }
                }
                Err(err) => console::error!("like update failed:", err.to_string()),
            }
        });
    }

    fn request_delete(self: &Rc<Self>, card_id: String, view: Rc<CardView>) {
        let app = Rc::clone(self);
        self.confirm_dialog
            .set_submit_handler(Rc::new(move |_snapshot, dialog| {
                let app = Rc::clone(&app);
                let dialog = Rc::clone(dialog);
                let view = Rc::clone(&view);
                let card_id = card_id.clone();
                spawn_local(async move {
                    let _busy = BusyGuard::engage(&dialog);
                    match app.client.delete_card(&card_id).await {
                        Ok(()) => {
                            app.state.borrow_mut().remove(&card_id);
                            view.remove();
                            dialog.close();
                        }
                        Err(err) => console::error!("card delete failed:", err.to_string()),
                    }
                });
            }));
        self.confirm_dialog.open();
    }

    fn submit_profile(self: &Rc<Self>, snapshot: FormSnapshot, dialog: &Rc<FormDialog>) {
        let app = Rc::clone(self);
        let dialog = Rc::clone(dialog);
        spawn_local(async move {
            let _busy = BusyGuard::engage(&dialog);
            let patch = ProfilePatch {
                name: snapshot.value_or_empty("name"),
                about: snapshot.value_or_empty("about"),
            };
            match app.client.update_profile(&patch).await {
                Ok(profile) => {
                    app.profile_view.render(&profile);
                    dialog.close();
                }
                Err(err) => console::error!("profile update failed:", err.to_string()),
            }
        });
    }

    fn submit_avatar(self: &Rc<Self>, snapshot: FormSnapshot, dialog: &Rc<FormDialog>) {
        let app = Rc::clone(self);
        let dialog = Rc::clone(dialog);
        spawn_local(async move {
            let _busy = BusyGuard::engage(&dialog);
            let avatar = snapshot.value_or_empty("link");
            match app.client.update_avatar(&avatar).await {
                Ok(profile) => {
                    app.profile_view.render(&profile);
                    dialog.close();
                }
                Err(err) => console::error!("avatar update failed:", err.to_string()),
            }
        });
    }

    fn submit_new_card(self: &Rc<Self>, snapshot: FormSnapshot, dialog: &Rc<FormDialog>) {
        let app = Rc::clone(self);
        let dialog = Rc::clone(dialog);
        spawn_local(async move {
            let _busy = BusyGuard::engage(&dialog);
            let payload = NewCard {
                name: snapshot.value_or_empty("name"),
                link: snapshot.value_or_empty("link"),
            };
            match app.client.create_card(&payload).await {
                Ok(card) => {
                    let entry = {
                        let mut state = app.state.borrow_mut();
                        state.insert_front(card);
                        state.cards().first().cloned()
                    };
                    if let Some(entry) = entry {
                        app.add_card_view(&entry, true);
                    }
                    dialog.close();
                }
                Err(err) => console::error!("card create failed:", err.to_string()),
            }
        });
    }
}
