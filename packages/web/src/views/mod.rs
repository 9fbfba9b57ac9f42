mod layout;
pub use layout::AppLayout;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod pages;
pub use pages::{Analytics, Dashboard, Mentions, NotFound, Settings};
