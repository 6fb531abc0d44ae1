use crate::{Color, SensorSample};

/// The four status labels of the demo screen as a plain value.
///
/// Each incoming sample rewrites the matching label; the color label follows
/// the folded color. Rendering is the caller's job, the board only formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBoard {
    acceleration: String,
    light: String,
    proximity: String,
    color: String,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrites the label belonging to this sample's sensor.
    pub fn observe(&mut self, sample: &SensorSample) {
        match sample {
            SensorSample::Acceleration(acceleration) => {
                self.acceleration = format!(
                    "Acceleration X: {:.2} Y: {:.2} Z: {:.2}",
                    acceleration.x, acceleration.y, acceleration.z
                );
            }
            SensorSample::Light(light) => {
                self.light = format!("Light: {:.2} lx", light.lux);
            }
            SensorSample::Proximity(proximity) => {
                self.proximity = format!("Proximity: {:.2} cm", proximity.distance_cm);
            }
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = format!("Background {color}");
    }

    pub fn acceleration(&self) -> &str {
        &self.acceleration
    }

    pub fn light(&self) -> &str {
        &self.light
    }

    pub fn proximity(&self) -> &str {
        &self.proximity
    }

    pub fn color_label(&self) -> &str {
        &self.color
    }

    /// Labels in the fixed display order of the original screen.
    pub fn lines(&self) -> [&str; 4] {
        [
            self.acceleration.as_str(),
            self.light.as_str(),
            self.proximity.as_str(),
            self.color.as_str(),
        ]
    }
}

impl Default for StatusBoard {
    fn default() -> Self {
        let mut board = Self {
            acceleration: "Acceleration X: -- Y: -- Z: --".to_string(),
            light: "Light: -- lx".to_string(),
            proximity: "Proximity: -- cm".to_string(),
            color: String::new(),
        };
        board.set_color(Color::opaque_black());
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observing_a_sample_rewrites_only_its_label() {
        let mut board = StatusBoard::new();
        board.observe(&SensorSample::light(42.5));

        assert_eq!(board.light(), "Light: 42.50 lx");
        assert_eq!(board.proximity(), "Proximity: -- cm");
        assert_eq!(board.acceleration(), "Acceleration X: -- Y: -- Z: --");
    }

    #[test]
    fn formats_acceleration_with_two_decimals() {
        let mut board = StatusBoard::new();
        board.observe(&SensorSample::acceleration(0.1, -0.25, 9.81));

        assert_eq!(
            board.acceleration(),
            "Acceleration X: 0.10 Y: -0.25 Z: 9.81"
        );
    }

    #[test]
    fn color_label_follows_the_folded_color() {
        let mut board = StatusBoard::new();
        assert_eq!(board.color_label(), "Background A: 255 R: 0 G: 0 B: 0");

        board.set_color(Color::argb(127, 15, 0, 30));
        assert_eq!(board.color_label(), "Background A: 127 R: 15 G: 0 B: 30");
    }

    #[test]
    fn lines_come_out_in_display_order() {
        let mut board = StatusBoard::new();
        board.observe(&SensorSample::proximity(3.0));

        let lines = board.lines();
        assert_eq!(lines[2], "Proximity: 3.00 cm");
        assert_eq!(lines.len(), 4);
    }
}
