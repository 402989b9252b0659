pub mod crop;
pub mod detect;
pub mod fertilizer;
pub mod results;
