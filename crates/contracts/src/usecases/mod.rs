pub mod u501_menu_data;
pub mod u502_edit_submission;
pub mod u503_menu_controller;

#[cfg(test)]
pub(crate) mod test_support;
