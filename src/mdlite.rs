//! Main module for mdlite library functionality

pub mod config;
pub mod formats;
pub mod lexing;
pub mod processor;
pub mod rendering;
pub mod testing;
pub mod token;
pub mod transforms;
