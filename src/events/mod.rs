pub mod listener;
pub mod pointer;

pub use listener::EventListener;
pub use pointer::{client_point, input_name_value};
