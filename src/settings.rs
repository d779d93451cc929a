use basho_core::SubmitLabels;

pub(crate) const OPENED_CLASS: &str = "popup_opened";

pub(crate) const POPUP_EDIT_PROFILE_SELECTOR: &str = ".popup_type_edit-profile";
pub(crate) const POPUP_EDIT_AVATAR_SELECTOR: &str = ".popup_type_edit-avatar";
pub(crate) const POPUP_ADD_CARD_SELECTOR: &str = ".popup_type_add-card";
pub(crate) const POPUP_CONFIRM_SELECTOR: &str = ".popup_type_confirm";
pub(crate) const POPUP_IMAGE_SELECTOR: &str = ".popup_type_image";
pub(crate) const POPUP_IMAGE_PICTURE_SELECTOR: &str = ".popup-image";
pub(crate) const POPUP_IMAGE_TITLE_SELECTOR: &str = ".popup-image__title";

pub(crate) const FORM_SELECTOR: &str = ".popup__form";

pub(crate) const PROFILE_SELECTOR: &str = ".profile";
pub(crate) const PROFILE_NAME_SELECTOR: &str = ".profile-info__name";
pub(crate) const PROFILE_ABOUT_SELECTOR: &str = ".profile-info__job";
pub(crate) const PROFILE_AVATAR_SELECTOR: &str = ".avatar__image";
pub(crate) const PROFILE_EDIT_BUTTON_SELECTOR: &str = ".profile-info__button-edit";
pub(crate) const PROFILE_ADD_BUTTON_SELECTOR: &str = ".profile__button-add";
pub(crate) const PROFILE_AVATAR_BUTTON_SELECTOR: &str = ".avatar";

pub(crate) const CARD_SECTION_SELECTOR: &str = ".elements";
pub(crate) const CARD_TEMPLATE_SELECTOR: &str = "#template-element";
pub(crate) const CARD_SELECTOR: &str = ".element";
pub(crate) const CARD_IMAGE_SELECTOR: &str = ".element__image";
pub(crate) const CARD_TITLE_SELECTOR: &str = ".element__title";
pub(crate) const CARD_LIKE_BUTTON_SELECTOR: &str = ".element__button_action_like";
pub(crate) const CARD_LIKE_COUNTER_SELECTOR: &str = ".element__like-counter";
pub(crate) const CARD_DELETE_BUTTON_SELECTOR: &str = ".element__button_action_delete";
pub(crate) const CARD_LIKE_ACTIVE_CLASS: &str = "element__button_action_like_active";

pub(crate) const PLACEHOLDER_IMAGE_SRC: &str =
    "https://www.freeiconspng.com/uploads/no-image-icon-4.png";
pub(crate) const PLACEHOLDER_IMAGE_ALT: &str = "no image available";

pub(crate) const SAVE_LABELS: SubmitLabels = SubmitLabels {
    idle: "Save",
    busy: "Saving...",
};
pub(crate) const CREATE_LABELS: SubmitLabels = SubmitLabels {
    idle: "Create",
    busy: "Creating...",
};
pub(crate) const CONFIRM_LABELS: SubmitLabels = SubmitLabels {
    idle: "Yes",
    busy: "Deleting...",
};

#[derive(Clone, Copy, Debug)]
pub(crate) struct ValidationConfig {
    pub(crate) input_selector: &'static str,
    pub(crate) submit_button_selector: &'static str,
    pub(crate) inactive_button_class: &'static str,
    pub(crate) input_error_class: &'static str,
    pub(crate) error_visible_class: &'static str,
}

pub(crate) const VALIDATION: ValidationConfig = ValidationConfig {
    input_selector: ".popup__input",
    submit_button_selector: ".form__button-submit",
    inactive_button_class: "form__button-submit_inactive",
    input_error_class: "popup__input_type_error",
    error_visible_class: "popup__input-error_active",
};

#[derive(Clone, Debug)]
pub(crate) struct ApiConfig {
    pub(crate) base_url: String,
    pub(crate) group_id: String,
    pub(crate) token: String,
}

pub(crate) fn api_config() -> ApiConfig {
    ApiConfig {
        base_url: "https://around.nomoreparties.co/v1".to_string(),
        group_id: "group-12".to_string(),
        token: "5db69218-8a8c-4a9d-b049-57e1c1f360e5".to_string(),
    }
}
