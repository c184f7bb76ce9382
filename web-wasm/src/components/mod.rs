pub mod compare_panel;
pub mod header;
pub mod selector_controls;
pub mod spec_cards;
pub mod spec_panel;
pub mod tab_bar;
