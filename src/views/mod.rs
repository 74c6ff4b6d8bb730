pub mod app;
pub mod books;
pub mod login;
pub mod toast;

pub use app::render_app;
pub use books::render_books;
pub use login::render_login;
pub use toast::{refresh_toasts, render_toast_root};
