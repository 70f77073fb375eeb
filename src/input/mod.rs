mod event_loop;
mod keyboard;
mod mouse;

pub use event_loop::run_app;
pub use keyboard::handle_key;
pub use mouse::handle_mouse_event;
