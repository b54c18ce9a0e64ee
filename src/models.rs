pub mod action;
pub mod error;
pub mod game;
pub mod installation;
pub mod page;
pub mod paths;
pub mod remote;
