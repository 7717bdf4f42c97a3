//! Section properties for a uniform beam

use serde::{Deserialize, Serialize};

/// Solid rectangular cross-section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Width of section in m
    pub width: f64,
    /// Depth of section (in the bending plane) in m
    pub depth: f64,
}

impl Section {
    /// Create a rectangular section
    pub fn rectangular(width: f64, depth: f64) -> Self {
        Self { width, depth }
    }

    /// Cross-sectional area in m²
    pub fn area(&self) -> f64 {
        self.width * self.depth
    }

    /// Second moment of area about the bending axis in m⁴
    pub fn second_moment(&self) -> f64 {
        self.width * self.depth.powi(3) / 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangular_properties() {
        let section = Section::rectangular(0.1, 0.3);
        assert_relative_eq!(section.area(), 0.03, epsilon = 1e-15);
        assert_relative_eq!(section.second_moment(), 2.25e-4, epsilon = 1e-15);
    }

    #[test]
    fn test_depth_dominates_stiffness() {
        // Doubling depth gives 8x the second moment, doubling width only 2x
        let base = Section::rectangular(0.1, 0.2).second_moment();
        assert_relative_eq!(
            Section::rectangular(0.1, 0.4).second_moment(),
            8.0 * base,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            Section::rectangular(0.2, 0.2).second_moment(),
            2.0 * base,
            max_relative = 1e-12
        );
    }
}
