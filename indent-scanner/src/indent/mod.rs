//! Main module for indentation scanning functionality

pub mod lexing;
pub mod scanning;
pub mod testing;
pub mod token;
