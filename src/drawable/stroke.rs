use egui::{Color32, Pos2};

use crate::surface::{StrokeStyle, Surface, is_on_surface};

/// Committed freehand stroke. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

/// Stroke still being drawn; points are only ever appended.
#[derive(Debug, Clone, PartialEq)]
pub struct MutableStroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

impl Stroke {
    pub fn new(color: Color32, thickness: f32, points: Vec<Pos2>) -> Self {
        Self {
            points,
            color,
            thickness,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        render_points(surface, &self.points, self.thickness, self.color);
    }
}

impl MutableStroke {
    pub fn new(color: Color32, thickness: f32) -> Self {
        Self {
            points: Vec::new(),
            color,
            thickness,
        }
    }

    /// Append a pointer sample. Samples outside the surface are dropped.
    pub fn add_point(&mut self, point: Pos2) {
        if is_on_surface(point) {
            self.points.push(point);
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Freeze into a committed stroke, handing over the points.
    pub fn into_stroke(self) -> Stroke {
        Stroke::new(self.color, self.thickness, self.points)
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        render_points(surface, &self.points, self.thickness, self.color);
    }
}

/// Stroke a point list as one path per run of on-surface points.
fn render_points(surface: &mut dyn Surface, points: &[Pos2], thickness: f32, color: Color32) {
    let style = StrokeStyle::new(thickness, color);
    for run in points.split(|point| !is_on_surface(*point)) {
        if !run.is_empty() {
            surface.stroke_polyline(run, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};

    #[test]
    fn empty_stroke_renders_nothing() {
        let mut surface = RecordingSurface::new();
        Stroke::new(Color32::BLACK, 5.0, Vec::new()).render(&mut surface);
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn stroke_is_one_polyline() {
        let points = vec![
            Pos2::new(10.0, 10.0),
            Pos2::new(20.0, 20.0),
            Pos2::new(30.0, 10.0),
        ];
        let mut surface = RecordingSurface::new();
        Stroke::new(Color32::RED, 5.0, points.clone()).render(&mut surface);
        assert_eq!(
            surface.ops(),
            &[DrawOp::Polyline {
                points,
                style: StrokeStyle::new(5.0, Color32::RED),
            }]
        );
    }

    #[test]
    fn nan_points_are_never_connected() {
        let stroke = Stroke::new(
            Color32::BLACK,
            1.0,
            vec![
                Pos2::new(1.0, 1.0),
                Pos2::new(2.0, 2.0),
                Pos2::new(f32::NAN, f32::NAN),
                Pos2::new(5.0, 5.0),
            ],
        );
        let mut surface = RecordingSurface::new();
        stroke.render(&mut surface);
        assert_eq!(surface.ops().len(), 2);
        for op in surface.ops() {
            let DrawOp::Polyline { points, .. } = op else {
                panic!("unexpected op {op:?}");
            };
            assert!(points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }

    #[test]
    fn mutable_stroke_drops_off_surface_samples() {
        let mut stroke = MutableStroke::new(Color32::BLACK, 1.0);
        stroke.add_point(Pos2::new(1.0, 2.0));
        stroke.add_point(Pos2::new(f32::NAN, f32::NAN));
        stroke.add_point(Pos2::new(3.0, 4.0));
        assert_eq!(stroke.points(), &[Pos2::new(1.0, 2.0), Pos2::new(3.0, 4.0)]);
    }

    #[test]
    fn freezing_keeps_points_color_and_thickness() {
        let mut live = MutableStroke::new(Color32::BLUE, 5.0);
        live.add_point(Pos2::new(1.0, 1.0));
        live.add_point(Pos2::new(2.0, 3.0));
        let stroke = live.into_stroke();
        assert_eq!(stroke.points(), &[Pos2::new(1.0, 1.0), Pos2::new(2.0, 3.0)]);
        assert_eq!(stroke.color(), Color32::BLUE);
        assert_eq!(stroke.thickness(), 5.0);
    }
}
