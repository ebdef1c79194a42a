pub(crate) mod quad;
pub(crate) mod transform;
pub(crate) mod viewport;
