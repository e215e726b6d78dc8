//! Job detail modal and the application modal stacked on top of it

mod application_modal;
mod view;

pub use application_modal::ApplicationModal;
pub use view::JobDetailModal;
