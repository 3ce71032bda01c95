// Sokoban puzzle core with a terminal front-end.
// Level alphabet: 'X' wall, '@' player, '*' box, '.' target, '$' box on target, '+' player on target, ' ' floor.

pub mod config;
pub mod console_interface;
pub mod core;
pub mod error;
pub mod json_export;
pub mod level_loader;
pub mod session;

#[cfg(test)]
mod test;
