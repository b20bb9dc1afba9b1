//! UI Components
//!
//! Leptos views over the state machines in `crate::state`.

mod choice_input;
mod component_edit_modal;
mod components_page;
mod confirm_button;
mod dataset_select;
mod list_editor;
mod meals_page;
mod modal_frame;
mod new_component_modal;
mod new_meal_modal;
mod site_header;
mod toasts;

pub use choice_input::ChoiceInput;
pub use component_edit_modal::ComponentEditModal;
pub use components_page::ComponentsPage;
pub use confirm_button::ConfirmButton;
pub use dataset_select::DatasetSelect;
pub use list_editor::ListEditor;
pub use meals_page::MealsPage;
pub use modal_frame::ModalFrame;
pub use new_component_modal::NewComponentModal;
pub use new_meal_modal::NewMealModal;
pub use site_header::SiteHeader;
pub use toasts::{ToastSink, ToastStack};
