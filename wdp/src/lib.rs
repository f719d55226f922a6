use std::time::Instant;

use once_cell::sync::Lazy;

pub mod io;
pub mod opt;

pub static EPOCH: Lazy<Instant> = Lazy::new(Instant::now);
