#[derive(Clone, Copy, Debug, Default)]
pub struct RenderMetrics {
    pub last_render_duration_ms: f64,
    pub rendered_features: usize,
    pub resolved_features: usize,
}

impl RenderMetrics {
    pub fn update_render(&mut self, duration: f64, rendered: usize, resolved: usize) {
        if duration >= 0.0 {
            self.last_render_duration_ms = duration;
        }
        self.rendered_features = rendered;
        self.resolved_features = resolved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_durations_are_ignored() {
        let mut metrics = RenderMetrics::default();
        metrics.update_render(2.5, 10, 4);
        metrics.update_render(-1.0, 12, 5);
        assert_eq!(metrics.last_render_duration_ms, 2.5);
        assert_eq!(metrics.rendered_features, 12);
        assert_eq!(metrics.resolved_features, 5);
    }
}
