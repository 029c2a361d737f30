pub mod build_info;
pub mod cli;
pub mod domain;
pub mod input;
pub mod output;
pub mod solver;
pub mod stencil;
pub mod util;
