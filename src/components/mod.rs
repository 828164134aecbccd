pub mod entry_card;
pub mod ui;
