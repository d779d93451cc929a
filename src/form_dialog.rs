use std::cell::RefCell;
use std::rc::Rc;

use basho_core::{FormSnapshot, SubmitLabels};
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use crate::dialog::Dialog;
use crate::dom;
use crate::settings;

pub(crate) type SubmitHandler = Rc<dyn Fn(FormSnapshot, &Rc<FormDialog>)>;

pub(crate) struct FormDialog {
    dialog: Rc<Dialog>,
    form: HtmlFormElement,
    submit_button: HtmlButtonElement,
    labels: SubmitLabels,
    handler: RefCell<Option<SubmitHandler>>,
    submit_listener: RefCell<Option<EventListener>>,
    reset_hook: RefCell<Option<Rc<dyn Fn()>>>,
}

impl FormDialog {
    pub(crate) fn new(root: Element, labels: SubmitLabels) -> Result<Rc<Self>, String> {
        let form: HtmlFormElement = dom::query_cast(&root, settings::FORM_SELECTOR)?;
        let submit_button: HtmlButtonElement =
            dom::query_cast(&root, settings::VALIDATION.submit_button_selector)?;
        submit_button.set_text_content(Some(labels.idle));
        Ok(Rc::new(Self {
            dialog: Dialog::new(root),
            form,
            submit_button,
            labels,
            handler: RefCell::new(None),
            submit_listener: RefCell::new(None),
            reset_hook: RefCell::new(None),
        }))
    }

    pub(crate) fn with_handler(
        root: Element,
        labels: SubmitLabels,
        handler: SubmitHandler,
    ) -> Result<Rc<Self>, String> {
        let dialog = Self::new(root, labels)?;
        dialog.set_submit_handler(handler);
        Ok(dialog)
    }

    pub(crate) fn set_submit_handler(&self, handler: SubmitHandler) {
        *self.handler.borrow_mut() = Some(handler);
    }

    pub(crate) fn set_reset_hook(&self, hook: Rc<dyn Fn()>) {
        *self.reset_hook.borrow_mut() = Some(hook);
    }

    pub(crate) fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    pub(crate) fn open(self: &Rc<Self>) {
        self.dialog.open();
    }

    pub(crate) fn close(&self) {
        self.dialog.close();
        self.form.reset();
        let hook = self.reset_hook.borrow().clone();
        if let Some(hook) = hook {
            hook();
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    pub(crate) fn set_event_listeners(self: &Rc<Self>) {
        if self.submit_listener.borrow().is_some() {
            return;
        }
        let form_dialog = Rc::clone(self);
        let listener = EventListener::new_with_options(
            &self.form,
            "submit",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event| {
                event.prevent_default();
                let snapshot = form_dialog.collect_snapshot();
                let handler = form_dialog.handler.borrow().clone();
                if let Some(handler) = handler {
                    handler(snapshot, &form_dialog);
                }
            },
        );
        *self.submit_listener.borrow_mut() = Some(listener);
        self.dialog.set_event_listeners();
    }

    pub(crate) fn collect_snapshot(&self) -> FormSnapshot {
        let mut snapshot = FormSnapshot::new();
        let Ok(inputs) = self
            .form
            .query_selector_all(settings::VALIDATION.input_selector)
        else {
            return snapshot;
        };
        for index in 0..inputs.length() {
            let Some(node) = inputs.item(index) else {
                continue;
            };
            let Ok(input) = node.dyn_into::<HtmlInputElement>() else {
                continue;
            };
            snapshot.push(input.name(), input.value());
        }
        snapshot
    }

    pub(crate) fn set_value(&self, name: &str, value: &str) {
        let Ok(inputs) = self
            .form
            .query_selector_all(settings::VALIDATION.input_selector)
        else {
            return;
        };
        for index in 0..inputs.length() {
            let Some(node) = inputs.item(index) else {
                continue;
            };
            let Ok(input) = node.dyn_into::<HtmlInputElement>() else {
                continue;
            };
            if input.name() == name {
                input.set_value(value);
                return;
            }
        }
    }

    pub(crate) fn show_loading(&self) {
        self.submit_button.set_text_content(Some(self.labels.busy));
        self.submit_button.set_disabled(true);
    }

    pub(crate) fn hide_loading(&self) {
        self.submit_button.set_text_content(Some(self.labels.idle));
        self.submit_button.set_disabled(false);
    }

    pub(crate) fn submit_label(&self) -> String {
        self.submit_button.text_content().unwrap_or_default()
    }
}

// Dropping the guard restores the idle submit label, on every exit
// path of the handler that engaged it.
pub(crate) struct BusyGuard {
    dialog: Rc<FormDialog>,
}

impl BusyGuard {
    pub(crate) fn engage(dialog: &Rc<FormDialog>) -> Self {
        dialog.show_loading();
        Self {
            dialog: Rc::clone(dialog),
        }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.dialog.hide_loading();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::{spawn_local, JsFuture};
    use wasm_bindgen_test::*;
    use web_sys::{Document, Event, EventInit, Response, ResponseInit};

    use basho_core::model::Profile;

    use crate::api::decode_response;

    const TEST_LABELS: SubmitLabels = SubmitLabels {
        idle: "Save",
        busy: "Saving...",
    };

    fn form_fixture(document: &Document) -> Element {
        let root = document.create_element("div").unwrap();
        root.set_class_name("popup");
        root.set_inner_html(
            "<div class=\"popup__container\">\
                <form class=\"popup__form\" name=\"test-form\" novalidate>\
                    <input class=\"popup__input\" name=\"name\" />\
                    <input class=\"popup__input\" name=\"link\" />\
                    <button class=\"form__button-submit\" type=\"submit\">x</button>\
                </form>\
             </div>",
        );
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    fn input_named(root: &Element, name: &str) -> HtmlInputElement {
        root.query_selector(&format!("input[name='{name}']"))
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap()
    }

    fn submit(form: &HtmlFormElement) {
        let init = EventInit::new();
        init.set_cancelable(true);
        let event = Event::new_with_event_init_dict("submit", &init).unwrap();
        form.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn snapshot_carries_named_fields_in_dom_order() {
        let document = crate::dom::document().unwrap();
        let root = form_fixture(&document);
        let dialog = FormDialog::new(root.clone(), TEST_LABELS).unwrap();
        input_named(&root, "name").set_value("Alps");
        input_named(&root, "link").set_value("http://x/y.jpg");
        let snapshot = dialog.collect_snapshot();
        assert_eq!(snapshot.get("name"), Some("Alps"));
        assert_eq!(snapshot.get("link"), Some("http://x/y.jpg"));
        let keys: Vec<&str> = snapshot.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["name", "link"]);
        root.remove();
    }

    #[wasm_bindgen_test]
    fn submit_invokes_handler_with_snapshot() {
        let document = crate::dom::document().unwrap();
        let root = form_fixture(&document);
        let seen: Rc<RefCell<Option<FormSnapshot>>> = Rc::new(RefCell::new(None));
        let seen_in_handler = Rc::clone(&seen);
        let dialog = FormDialog::with_handler(
            root.clone(),
            TEST_LABELS,
            Rc::new(move |snapshot, _dialog| {
                *seen_in_handler.borrow_mut() = Some(snapshot);
            }),
        )
        .unwrap();
        dialog.set_event_listeners();
        input_named(&root, "name").set_value("Alps");
        submit(dialog.form());
        let snapshot = seen.borrow().clone().unwrap();
        assert_eq!(snapshot.get("name"), Some("Alps"));
        root.remove();
    }

    #[wasm_bindgen_test]
    fn replaced_handler_takes_over() {
        let document = crate::dom::document().unwrap();
        let root = form_fixture(&document);
        let calls: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
        let first_calls = Rc::clone(&calls);
        let dialog = FormDialog::with_handler(
            root.clone(),
            TEST_LABELS,
            Rc::new(move |_snapshot, _dialog| first_calls.borrow_mut().push("first")),
        )
        .unwrap();
        dialog.set_event_listeners();
        submit(dialog.form());
        let second_calls = Rc::clone(&calls);
        dialog.set_submit_handler(Rc::new(move |_snapshot, _dialog| {
            second_calls.borrow_mut().push("second")
        }));
        submit(dialog.form());
        assert_eq!(*calls.borrow(), vec!["first", "second"]);
        root.remove();
    }

    #[wasm_bindgen_test]
    fn loading_swaps_label_and_disables_submit() {
        let document = crate::dom::document().unwrap();
        let root = form_fixture(&document);
        let dialog = FormDialog::new(root.clone(), TEST_LABELS).unwrap();
        assert_eq!(dialog.submit_label(), "Save");
        dialog.show_loading();
        assert_eq!(dialog.submit_label(), "Saving...");
        let button: HtmlButtonElement = root
            .query_selector(".form__button-submit")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        assert!(button.disabled());
        dialog.hide_loading();
        assert_eq!(dialog.submit_label(), "Save");
        assert!(!button.disabled());
        root.remove();
    }

    #[wasm_bindgen_test]
    fn busy_guard_restores_idle_on_every_path() {
        let document = crate::dom::document().unwrap();
        let root = form_fixture(&document);
        let dialog = FormDialog::new(root.clone(), TEST_LABELS).unwrap();
        {
            let _guard = BusyGuard::engage(&dialog);
            assert_eq!(dialog.submit_label(), "Saving...");
        }
        assert_eq!(dialog.submit_label(), "Save");
        root.remove();
    }

    fn service_response(status: u16, body: Option<&str>) -> Response {
        let init = ResponseInit::new();
        init.set_status(status);
        Response::new_with_opt_str_and_init(body, &init).unwrap()
    }

    // Handler in the shape every submit flow uses: busy guard, one
    // awaited outcome, close only on success.
    fn outcome_handler(status: u16, body: Option<&'static str>, done: Rc<Cell<bool>>) -> SubmitHandler {
        Rc::new(move |_snapshot, dialog| {
            let dialog = Rc::clone(dialog);
            let done = Rc::clone(&done);
            spawn_local(async move {
                {
                    let _busy = BusyGuard::engage(&dialog);
                    let outcome: Result<Profile, _> =
                        decode_response(service_response(status, body)).await;
                    if outcome.is_ok() {
                        dialog.close();
                    }
                }
                done.set(true);
            });
        })
    }

    async fn settled(done: &Rc<Cell<bool>>) {
        for _ in 0..50 {
            if done.get() {
                return;
            }
            JsFuture::from(js_sys::Promise::resolve(&JsValue::NULL))
                .await
                .unwrap();
        }
        panic!("submit handler never settled");
    }

    #[wasm_bindgen_test]
    async fn rejected_submission_leaves_dialog_open_with_idle_label() {
        let document = crate::dom::document().unwrap();
        let root = form_fixture(&document);
        let done = Rc::new(Cell::new(false));
        let dialog = FormDialog::with_handler(
            root.clone(),
            TEST_LABELS,
            outcome_handler(500, None, Rc::clone(&done)),
        )
        .unwrap();
        dialog.set_event_listeners();
        dialog.open();
        submit(dialog.form());
        settled(&done).await;
        assert!(dialog.is_open());
        assert_eq!(dialog.submit_label(), "Save");
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn resolved_submission_closes_the_dialog() {
        let document = crate::dom::document().unwrap();
        let root = form_fixture(&document);
        let done = Rc::new(Cell::new(false));
        let body =
            r#"{"name":"Jacques","about":"Explorer","avatar":"http://x/a.png","_id":"u1"}"#;
        let dialog = FormDialog::with_handler(
            root.clone(),
            TEST_LABELS,
            outcome_handler(200, Some(body), Rc::clone(&done)),
        )
        .unwrap();
        dialog.set_event_listeners();
        dialog.open();
        submit(dialog.form());
        settled(&done).await;
        assert!(!dialog.is_open());
        assert_eq!(dialog.submit_label(), "Save");
        root.remove();
    }

    #[wasm_bindgen_test]
    fn close_clears_fields_and_runs_reset_hook() {
        let document = crate::dom::document().unwrap();
        let root = form_fixture(&document);
        let dialog = FormDialog::new(root.clone(), TEST_LABELS).unwrap();
        let reset_ran = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&reset_ran);
        dialog.set_reset_hook(Rc::new(move || *flag.borrow_mut() = true));
        dialog.open();
        input_named(&root, "name").set_value("stale");
        dialog.close();
        assert!(!dialog.is_open());
        assert_eq!(input_named(&root, "name").value(), "");
        assert!(*reset_ran.borrow());
        root.remove();
    }

    #[wasm_bindgen_test]
    fn set_value_prefills_named_field() {
        let document = crate::dom::document().unwrap();
        let root = form_fixture(&document);
        let dialog = FormDialog::new(root.clone(), TEST_LABELS).unwrap();
        dialog.set_value("name", "Jacques");
        assert_eq!(input_named(&root, "name").value(), "Jacques");
        root.remove();
    }
}
