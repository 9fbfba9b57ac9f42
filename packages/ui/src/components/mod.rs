//! Bootstrap-styled building blocks shared by every view.
//!
//! The markup follows Bootstrap 5 class names; the stylesheet itself is loaded by the
//! web package, so these components only decide structure and class lists.

mod alert;
pub use alert::{Alert, Feedback};

mod badge;
pub use badge::{Badge, Tone};

mod button;
pub use button::{Button, ButtonVariant};

mod card;
pub use card::{Card, StatCard};

mod form;
pub use form::{Field, Input, Select, Switch};

mod modal;
pub use modal::Modal;

mod progress;
pub use progress::ProgressBar;

mod spinner;
pub use spinner::{LoadingState, Spinner};
