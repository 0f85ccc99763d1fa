pub mod logout_dialog;
pub mod sidebar;
