mod analysis_panel;
mod scripts;
mod view;

pub use view::SessionView;
