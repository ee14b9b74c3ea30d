// Path Planning algorithms module

pub mod simple_dubins;

pub use simple_dubins::*;
