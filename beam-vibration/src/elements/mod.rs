//! Beam description: boundary conditions, section and material

mod beam;
mod material;
mod section;

pub use beam::{BeamProperties, BeamType};
pub use material::Material;
pub use section::Section;
