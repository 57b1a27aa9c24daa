#![doc = include_str!("../README.md")]
#![doc(html_logo_url = "https://avatars.githubusercontent.com/u/79236386")]
#![doc(html_favicon_url = "https://avatars.githubusercontent.com/u/79236386")]
#![warn(missing_docs)]

mod binding;
pub use binding::*;

mod error;
pub use error::*;

mod event;
pub use event::*;

mod use_input;
pub use use_input::*;
