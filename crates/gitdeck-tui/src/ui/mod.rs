pub(crate) mod list_view;
