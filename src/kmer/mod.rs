mod types;
mod alphabet;
mod hamming;
mod neighbors;
mod frequent;
mod scan;
mod fasta;

pub use types::*;
pub use alphabet::*;
pub use hamming::*;
pub use neighbors::*;
pub use frequent::*;
pub use scan::*;
pub use fasta::*;
