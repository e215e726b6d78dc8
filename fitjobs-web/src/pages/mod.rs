mod jobs;
mod layout;

pub use jobs::JobBoard;
pub use layout::AppLayout;
