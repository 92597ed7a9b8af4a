pub(crate) mod character_ram;
pub(crate) mod frame;
pub(crate) mod source;
