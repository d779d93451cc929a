use std::cell::RefCell;
use std::rc::Rc;

use basho_core::{form_is_valid, FieldReport};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use crate::dom;
use crate::settings::ValidationConfig;

pub(crate) struct FieldValidator {
    form: HtmlFormElement,
    inputs: Vec<HtmlInputElement>,
    submit_button: HtmlButtonElement,
    config: ValidationConfig,
    listeners: RefCell<Vec<EventListener>>,
}

impl FieldValidator {
    pub(crate) fn new(form: HtmlFormElement, config: ValidationConfig) -> Result<Rc<Self>, String> {
        let form_element: &Element = form.as_ref();
        let submit_button: HtmlButtonElement =
            dom::query_cast(form_element, config.submit_button_selector)?;
        let mut inputs = Vec::new();
        let nodes = form
            .query_selector_all(config.input_selector)
            .map_err(|_| format!("invalid selector {}", config.input_selector))?;
        for index in 0..nodes.length() {
            let Some(node) = nodes.item(index) else {
                continue;
            };
            if let Ok(input) = node.dyn_into::<HtmlInputElement>() {
                inputs.push(input);
            }
        }
        Ok(Rc::new(Self {
            form,
            inputs,
            submit_button,
            config,
            listeners: RefCell::new(Vec::new()),
        }))
    }

    pub(crate) fn form_name(&self) -> String {
        self.form.get_attribute("name").unwrap_or_default()
    }

    pub(crate) fn enable_validation(self: &Rc<Self>) {
        if !self.listeners.borrow().is_empty() {
            return;
        }
        let mut listeners = Vec::with_capacity(self.inputs.len());
        for input in &self.inputs {
            let validator = Rc::clone(self);
            let listener = EventListener::new(input, "input", move |_event| {
                validator.run_validation();
            });
            listeners.push(listener);
        }
        *self.listeners.borrow_mut() = listeners;
        self.update_submit_state(form_is_valid(&self.reports()));
    }

    pub(crate) fn run_validation(&self) {
        let reports = self.reports();
        for (input, report) in self.inputs.iter().zip(&reports) {
            if report.is_valid {
                self.hide_error(input);
            } else {
                self.show_error(input, &report.message);
            }
        }
        self.update_submit_state(form_is_valid(&reports));
    }

    pub(crate) fn reset_input_validation(&self) {
        for input in &self.inputs {
            self.hide_error(input);
        }
        self.update_submit_state(form_is_valid(&self.reports()));
    }

    pub(crate) fn form_is_valid(&self) -> bool {
        form_is_valid(&self.reports())
    }

    fn reports(&self) -> Vec<FieldReport> {
        self.inputs
            .iter()
            .map(|input| {
                if input.check_validity() {
                    FieldReport::valid(input.name())
                } else {
                    FieldReport::invalid(
                        input.name(),
                        input.validation_message().unwrap_or_default(),
                    )
                }
            })
            .collect()
    }

    fn error_element(&self, input: &HtmlInputElement) -> Option<Element> {
        let id = input.id();
        if id.is_empty() {
            return None;
        }
        self.form
            .query_selector(&format!("#{id}-error"))
            .ok()
            .flatten()
    }

    fn show_error(&self, input: &HtmlInputElement, message: &str) {
        let _ = input.class_list().add_1(self.config.input_error_class);
        if let Some(element) = self.error_element(input) {
            element.set_text_content(Some(message));
            let _ = element.class_list().add_1(self.config.error_visible_class);
        }
    }

    fn hide_error(&self, input: &HtmlInputElement) {
        let _ = input.class_list().remove_1(self.config.input_error_class);
        if let Some(element) = self.error_element(input) {
            element.set_text_content(Some(""));
            let _ = element
                .class_list()
                .remove_1(self.config.error_visible_class);
        }
    }

    fn update_submit_state(&self, form_valid: bool) {
        if form_valid {
            let _ = self
                .submit_button
                .class_list()
                .remove_1(self.config.inactive_button_class);
            self.submit_button.set_disabled(false);
        } else {
            let _ = self
                .submit_button
                .class_list()
                .add_1(self.config.inactive_button_class);
            self.submit_button.set_disabled(true);
        }
    }
}
