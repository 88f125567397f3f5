pub mod header;
pub mod style;
pub mod test_form;
pub mod test_list;
pub mod toolbar;
