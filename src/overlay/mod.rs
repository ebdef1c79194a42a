pub(crate) mod draw;
