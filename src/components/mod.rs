mod marker_button;

pub use marker_button::MarkerButton;
