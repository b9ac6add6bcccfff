mod tests {
    use status_light_composer::{
        Half, Look, MirroredFrame, MirroredPixel, MirroredStrip, OutputDriver, PaletteColor, Rgb,
        Status, StatusBindings, Third,
        bounds::{half_range, third_range},
        color::BLACK,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    struct CountingDriver {
        writes: usize,
        last_len: usize,
    }

    impl OutputDriver for CountingDriver {
        fn write(&mut self, frame: &[MirroredPixel]) {
            self.writes += 1;
            self.last_len = frame.len();
        }
    }

    #[test]
    fn test_half_ranges() {
        assert_eq!(half_range(10, Half::Bottom), 0..5);
        assert_eq!(half_range(10, Half::Top), 5..10);
        assert_eq!(half_range(7, Half::Top), 3..7);
        assert_eq!(half_range(0, Half::Top), 0..0);
        assert_eq!(Half::of(4, 10), Half::Bottom);
        assert_eq!(Half::of(5, 10), Half::Top);
    }

    #[test]
    fn test_third_ranges() {
        assert_eq!(third_range(18, Third::First), 0..6);
        assert_eq!(third_range(18, Third::Second), 6..12);
        assert_eq!(third_range(18, Third::Last), 12..18);
        assert_eq!(third_range(20, Third::Second), 6..14);
        assert_eq!(third_range(2, Third::First), 0..0);
        assert_eq!(third_range(2, Third::Second), 0..2);
        assert_eq!(third_range(2, Third::Last), 2..2);
    }

    #[test]
    fn test_sides_are_independent() {
        let mut strip = MirroredStrip::<4>::new(4);
        strip.set_left(1, RED);
        strip.set_right(1, BLUE);
        assert_eq!(
            strip.pixel(1),
            Some(MirroredPixel {
                left: RED,
                right: BLUE
            })
        );
        strip.set_color(2, RED);
        assert_eq!(strip.pixel(2), Some(MirroredPixel::uniform(RED)));
    }

    #[test]
    fn test_out_of_range_writes_are_ignored() {
        let mut strip = MirroredStrip::<4>::new(3);
        strip.set_color(3, RED);
        strip.set_left(10, RED);
        strip.frame_mut().fill_range(2..9, BLUE);
        assert_eq!(strip.pixel(3), None);
        assert_eq!(strip.pixel(2), Some(MirroredPixel::uniform(BLUE)));
        assert_eq!(strip.pixel(1), Some(MirroredPixel::default()));
    }

    #[test]
    fn test_clear_all_and_commit() {
        let mut strip = MirroredStrip::<6>::new(5);
        strip.frame_mut().fill_color(RED);
        strip.clear_all();
        assert!(strip.frame().iter().all(|pixel| pixel.left == BLACK && pixel.right == BLACK));

        let mut driver = CountingDriver {
            writes: 0,
            last_len: 0,
        };
        strip.commit(&mut driver);
        assert_eq!(driver.writes, 1);
        assert_eq!(driver.last_len, 5);
    }

    #[test]
    fn test_default_bindings() {
        let bindings = StatusBindings::default();
        assert_eq!(bindings.look(Status::Default), Look::Rainbow);
        assert_eq!(
            bindings.look(Status::BatteryLow),
            Look::Solid(PaletteColor::Orange)
        );
        assert_eq!(
            bindings.look(Status::ConeMid),
            Look::Third {
                color: PaletteColor::Yellow,
                third: Third::Second
            }
        );
        assert!(matches!(
            bindings.look(Status::Floor),
            Look::PieceHalf {
                lit: Half::Bottom,
                ..
            }
        ));
    }

    #[test]
    fn test_status_names() {
        for status in Status::ALL {
            assert_eq!(Status::parse_from_str(status.as_str()), Some(status));
            assert_eq!(Status::from_raw(status as u8), Some(status));
        }
        assert_eq!(Status::parse_from_str("unknown"), None);
        assert_eq!(Status::from_raw(Status::COUNT as u8), None);
    }
}
