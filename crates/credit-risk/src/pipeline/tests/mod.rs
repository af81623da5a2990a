mod common;

mod service;
mod validation;
