pub(crate) mod exceptions;
#[cfg(test)]
pub(crate) mod test_util;
