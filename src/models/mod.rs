pub mod button;
pub mod layout;

pub use button::WindowButton;
pub use layout::WindowButtonLayout;
