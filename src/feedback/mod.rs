pub(crate) mod debounce;
pub(crate) mod messages;
pub(crate) mod stability;
pub(crate) mod status;
