pub mod id;
pub mod seed;
pub mod stats;
pub mod track;
