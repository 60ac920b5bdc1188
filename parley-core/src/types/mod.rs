//! Core types used throughout parley

pub mod message;
pub mod request;
pub mod response;
pub mod tool;
