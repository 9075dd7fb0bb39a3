/// Number of mip levels stacked for a `width x height` texture.
///
/// `round(log2(min(width, height)))`; a zero side yields 0 levels.
pub fn level_count(width: usize, height: usize) -> usize {
    let shortest = width.min(height);
    if shortest == 0 {
        return 0;
    }
    (shortest as f64).log2().round() as usize
}

/// One step of the flood stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MipLevel {
    pub level: usize,
    /// Reduction factor `2^level` relative to the base image; level 0 is the
    /// base resolution itself.
    pub factor: usize,
    /// Downsampled width, never below 1.
    pub width: usize,
    /// Downsampled height, never below 1.
    pub height: usize,
}

/// Mip levels of a base texture, ordered from coarsest to finest.
///
/// For a 1024x1024 base there are 10 levels with factors
/// `512, 256, ..., 1` and extents `2x2, 4x4, ..., 1024x1024`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MipPlan {
    base_width: usize,
    base_height: usize,
    levels: Vec<MipLevel>,
}

impl MipPlan {
    pub fn new(base_width: usize, base_height: usize) -> Self {
        let count = level_count(base_width, base_height);
        let levels = (0..count)
            .rev()
            .map(|level| {
                let factor = u32::try_from(level)
                    .ok()
                    .and_then(|shift| 2usize.checked_pow(shift))
                    .unwrap_or(usize::MAX);
                MipLevel {
                    level,
                    factor,
                    width: (base_width / factor).max(1),
                    height: (base_height / factor).max(1),
                }
            })
            .collect();

        Self {
            base_width,
            base_height,
            levels,
        }
    }

    pub fn base_dimensions(&self) -> (usize, usize) {
        (self.base_width, self.base_height)
    }

    pub fn levels(&self) -> &[MipLevel] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::plan::{MipPlan, level_count};

    #[test]
    fn square_power_of_two_counts_exponent() {
        for n in 0..=14 {
            let side = 1usize << n;
            assert_eq!(level_count(side, side), n);
        }
        assert_eq!(level_count(1024, 1024), 10);
    }

    #[test]
    fn shortest_side_drives_the_count() {
        assert_eq!(level_count(1024, 256), 8);
        assert_eq!(level_count(2, 4096), 1);
        assert_eq!(level_count(0, 64), 0);
    }

    #[test]
    fn plan_descends_from_coarsest_level() {
        let plan = MipPlan::new(16, 16);
        let sizes: Vec<(usize, usize, usize)> = plan
            .levels()
            .iter()
            .map(|l| (l.level, l.factor, l.width))
            .collect();
        assert_eq!(
            sizes,
            vec![(3, 8, 2), (2, 4, 4), (1, 2, 8), (0, 1, 16)]
        );
    }

    #[test]
    fn plan_never_yields_zero_extent() {
        let plan = MipPlan::new(64, 4);
        assert_eq!(plan.len(), 2);
        for level in plan.levels() {
            assert!(level.width >= 1 && level.height >= 1);
        }
        assert_eq!((plan.levels()[0].width, plan.levels()[0].height), (32, 2));
        assert_eq!((plan.levels()[1].width, plan.levels()[1].height), (64, 4));
    }

    #[test]
    fn finest_level_is_the_base_resolution() {
        let plan = MipPlan::new(256, 128);
        let finest = plan.levels().last().expect("non-empty plan");
        assert_eq!((finest.level, finest.factor), (0, 1));
        assert_eq!((finest.width, finest.height), (256, 128));

        let coarsest = plan.levels()[0];
        assert_eq!((coarsest.level, coarsest.factor), (6, 64));
        assert_eq!((coarsest.width, coarsest.height), (4, 2));
    }

    #[test]
    fn single_pixel_base_has_no_levels() {
        let plan = MipPlan::new(1, 1);
        assert!(plan.is_empty());
        assert_eq!(plan.base_dimensions(), (1, 1));
    }
}
