pub(crate) mod edwards;
pub(crate) mod montgomery;
