mod delete_dialog;
mod prompt_box;
mod toast;

pub use delete_dialog::DeleteDialog;
pub use prompt_box::PromptBox;
pub use toast::{ToastHost, ToastKind, Toasts, use_toast_provider, use_toasts};
