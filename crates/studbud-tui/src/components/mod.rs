pub mod hours_slider;
pub mod multi_select;

pub use hours_slider::HoursSlider;
pub use multi_select::MultiSelect;
