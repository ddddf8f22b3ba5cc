mod canvas;
mod components;
mod home;
mod session;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use canvas::CanvasView;
pub use components::{ToastHost, ToastKind, Toasts, use_toast_provider, use_toasts};
pub use home::HomeView;
pub use session::SessionView;
pub use state::ViewError;
