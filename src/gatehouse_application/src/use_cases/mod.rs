pub mod login;
pub mod logout;
pub mod register;

#[cfg(test)]
mod test_support;
