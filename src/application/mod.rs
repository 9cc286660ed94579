pub mod campus_app;
pub mod services;

#[cfg(test)]
pub(crate) mod test_fixtures;
