//! Color ramp sub-object owned by ShaderNodeValToRGB

use crate::constants::ramp::{COLOR_MODES, INTERPOLATIONS, MAX_ELEMENTS, MIN_ELEMENTS};
use crate::error::{GraphError, GraphResult};

/// A single color stop
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRampElement {
    pub position: f32,
    pub color: [f32; 4],
}

/// Gradient with an ordered list of color stops
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    pub color_mode: String,
    pub interpolation: String,
    elements: Vec<ColorRampElement>,
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self {
            color_mode: "RGB".to_string(),
            interpolation: "LINEAR".to_string(),
            elements: vec![
                ColorRampElement { position: 0.0, color: [0.0, 0.0, 0.0, 1.0] },
                ColorRampElement { position: 1.0, color: [1.0, 1.0, 1.0, 1.0] },
            ],
        }
    }
}

impl ColorRamp {
    pub fn set_color_mode(&mut self, mode: &str) -> GraphResult<()> {
        if !COLOR_MODES.contains(&mode) {
            return Err(GraphError::SubObject(format!("Unknown color ramp mode '{}'", mode)));
        }
        self.color_mode = mode.to_string();
        Ok(())
    }

    pub fn set_interpolation(&mut self, interpolation: &str) -> GraphResult<()> {
        if !INTERPOLATIONS.contains(&interpolation) {
            return Err(GraphError::SubObject(format!(
                "Unknown color ramp interpolation '{}'",
                interpolation
            )));
        }
        self.interpolation = interpolation.to_string();
        Ok(())
    }

    pub fn elements(&self) -> &[ColorRampElement] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut [ColorRampElement] {
        &mut self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Add a stop at `position`, keeping stops ordered by position.
    /// The new stop takes the ramp's color at that position.
    pub fn new_element(&mut self, position: f32) -> GraphResult<usize> {
        if self.elements.len() >= MAX_ELEMENTS {
            return Err(GraphError::SubObject(format!(
                "Color ramp cannot hold more than {} elements",
                MAX_ELEMENTS
            )));
        }
        let color = self.evaluate(position);
        let index = self
            .elements
            .iter()
            .position(|e| e.position > position)
            .unwrap_or(self.elements.len());
        self.elements.insert(index, ColorRampElement { position, color });
        Ok(index)
    }

    /// Remove the stop at `index`; a ramp always keeps at least one stop
    pub fn remove_element(&mut self, index: usize) -> GraphResult<()> {
        if self.elements.len() <= MIN_ELEMENTS {
            return Err(GraphError::SubObject(
                "Color ramp must keep at least one element".to_string(),
            ));
        }
        if index >= self.elements.len() {
            return Err(GraphError::SubObject(format!(
                "Color ramp element {} does not exist",
                index
            )));
        }
        self.elements.remove(index);
        Ok(())
    }

    /// Sample the ramp (linear blend between neighbouring stops, constant past the ends)
    pub fn evaluate(&self, position: f32) -> [f32; 4] {
        let Some(first) = self.elements.first() else {
            return [0.0; 4];
        };
        if position <= first.position || self.elements.len() == 1 {
            return first.color;
        }
        for pair in self.elements.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if position <= b.position {
                if self.interpolation == "CONSTANT" {
                    return a.color;
                }
                let span = b.position - a.position;
                let t = if span > 0.0 { (position - a.position) / span } else { 1.0 };
                let mut color = [0.0; 4];
                for (channel, out) in color.iter_mut().enumerate() {
                    *out = a.color[channel] + (b.color[channel] - a.color[channel]) * t;
                }
                return color;
            }
        }
        self.elements[self.elements.len() - 1].color
    }
}
