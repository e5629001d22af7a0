// artspace - A terminal art gallery viewer
// Displays one artwork at a time from a fixed collection with cyclic
// next/previous navigation

pub mod assets;
pub mod cli;
pub mod gallery;
pub mod screen;
