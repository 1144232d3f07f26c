pub mod contact;
pub mod host;
pub mod visibility;

#[cfg(feature = "csr")]
pub mod browser;
