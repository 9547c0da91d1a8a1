pub mod normalization;
pub mod punycode;
