pub(crate) mod continuous;
