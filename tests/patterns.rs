mod tests {
    use embassy_time::Instant;
    use status_light_composer::{
        MirroredPixel, Pattern, Rgb, Third,
        color::{BLACK, hsb_to_rgb},
        pattern::{
            BlinkColors, BlinkPattern, CometColors, CometDirection, CometPattern, HalfColors,
            RainbowPattern, SolidFill, SplitHalves, ThirdsSplit, VICTORY_MIN_AMPLITUDE,
            VICTORY_SWAP_AMPLITUDE, VictoryColors, VictoryFade,
        },
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

    fn at(millis: u64) -> Instant {
        Instant::from_millis(millis)
    }

    fn lefts(frame: &[MirroredPixel]) -> Vec<Rgb> {
        frame.iter().map(|pixel| pixel.left).collect()
    }

    #[test]
    fn test_solid_fill() {
        let mut frame = [MirroredPixel::default(); 5];
        SolidFill.render(&mut frame, RED, at(0));
        assert!(frame.iter().all(|pixel| *pixel == MirroredPixel::uniform(RED)));
    }

    #[test]
    fn test_split_halves() {
        let mut frame = [MirroredPixel::default(); 7];
        SplitHalves.render(&mut frame, HalfColors { top: RED, bottom: BLUE }, at(0));
        assert_eq!(lefts(&frame), vec![BLUE, BLUE, BLUE, RED, RED, RED, RED]);
        assert!(frame.iter().all(|pixel| pixel.left == pixel.right));
    }

    #[test]
    fn test_thirds_split_middle() {
        let mut frame = [MirroredPixel::default(); 18];
        ThirdsSplit.render(&mut frame, (GREEN, Third::Second), at(0));
        for (index, pixel) in frame.iter().enumerate() {
            let expected = if (6..=11).contains(&index) { GREEN } else { BLACK };
            assert_eq!(pixel.left, expected, "index {index}");
            assert_eq!(pixel.right, expected, "index {index}");
        }
    }

    #[test]
    fn test_thirds_split_outer_thirds() {
        let mut frame = [MirroredPixel::default(); 10];
        ThirdsSplit.render(&mut frame, (RED, Third::First), at(0));
        ThirdsSplit.render(&mut frame, (BLUE, Third::Last), at(0));
        assert_eq!(
            lefts(&frame),
            vec![RED, RED, RED, BLACK, BLACK, BLACK, BLACK, BLUE, BLUE, BLUE]
        );
    }

    #[test]
    fn test_thirds_split_degenerate_lengths() {
        for len in 0..3 {
            let mut frame = vec![MirroredPixel::default(); len];
            for third in [Third::First, Third::Second, Third::Last] {
                ThirdsSplit.render(&mut frame, (RED, third), at(0));
            }
            assert!(frame.iter().all(|pixel| pixel.left == RED));
        }
    }

    #[test]
    fn test_blink_phases() {
        let mut blink = BlinkPattern::new();
        let colors = BlinkColors {
            top: RED,
            bottom: BLUE,
            background: WHITE,
        };
        let mut frame = [MirroredPixel::default(); 4];
        blink.start(at(0));

        blink.render(&mut frame, colors, at(100));
        assert_eq!(lefts(&frame), vec![WHITE; 4]);

        blink.render(&mut frame, colors, at(400));
        assert_eq!(lefts(&frame), vec![BLUE, BLUE, RED, RED]);

        // Period wrapped: back to the background
        blink.render(&mut frame, colors, at(650));
        assert_eq!(lefts(&frame), vec![WHITE; 4]);

        blink.render(&mut frame, colors, at(900));
        assert_eq!(lefts(&frame), vec![BLUE, BLUE, RED, RED]);
    }

    #[test]
    fn test_rainbow_hue_steps() {
        let mut rainbow = RainbowPattern::new();
        let mut frame = [MirroredPixel::default(); 12];
        rainbow.start(at(0));

        for step in 1..=25 {
            rainbow.render(&mut frame, (), at(step * 40));
        }
        assert_eq!(rainbow.hue_offset(), 250);

        // Less than one interval later nothing moves
        rainbow.render(&mut frame, (), at(1_020));
        assert_eq!(rainbow.hue_offset(), 250);
    }

    #[test]
    fn test_rainbow_hue_wraps() {
        let mut rainbow = RainbowPattern::new();
        let mut frame = [MirroredPixel::default(); 3];
        rainbow.start(at(0));
        for step in 1..=37 {
            rainbow.render(&mut frame, (), at(step * 40));
        }
        assert_eq!(rainbow.hue_offset(), 10);
    }

    #[test]
    fn test_rainbow_sides_counter_rotate() {
        let mut rainbow = RainbowPattern::new();
        let mut frame = [MirroredPixel::default(); 4];
        rainbow.start(at(0));
        rainbow.render(&mut frame, (), at(40));

        assert_eq!(frame[0].left, hsb_to_rgb(10, 255, 127));
        assert_eq!(frame[0].right, hsb_to_rgb(10, 255, 127));
        assert_eq!(frame[1].left, hsb_to_rgb(100, 255, 127));
        assert_eq!(frame[1].right, hsb_to_rgb(-80, 255, 127));
        assert_eq!(frame[1].right, hsb_to_rgb(280, 255, 127));
    }

    #[test]
    fn test_victory_ping_pong() {
        let mut fade = VictoryFade::new();
        let colors = VictoryColors {
            first: RED,
            second: BLUE,
        };
        let mut frame = [MirroredPixel::default(); 4];

        let mut swaps = 0;
        let mut swapped = fade.is_swapped();
        for _ in 0..200 {
            fade.render(&mut frame, colors, at(0));
            assert!(fade.amplitude() >= VICTORY_MIN_AMPLITUDE);
            assert!(fade.amplitude() <= VICTORY_SWAP_AMPLITUDE);
            if fade.is_swapped() != swapped {
                swaps += 1;
                swapped = fade.is_swapped();
            }
        }
        // One swap per full cycle of 33 renders
        assert_eq!(swaps, 6);
    }

    #[test]
    fn test_victory_swaps_at_peak() {
        let mut fade = VictoryFade::new();
        let colors = VictoryColors {
            first: RED,
            second: BLUE,
        };
        let mut frame = [MirroredPixel::default(); 4];

        for _ in 0..17 {
            fade.render(&mut frame, colors, at(0));
        }
        assert_eq!(fade.amplitude(), VICTORY_SWAP_AMPLITUDE);
        assert!(!fade.is_swapped());
        // Above the bound the white term saturates the lit channel
        assert_eq!(frame[0].left, Rgb::new(255, 45, 45));
        assert_eq!(frame[3].left, Rgb::new(45, 45, 255));

        fade.render(&mut frame, colors, at(0));
        assert!(fade.is_swapped());
        assert_eq!(fade.amplitude(), VICTORY_SWAP_AMPLITUDE - 2);
        assert_eq!(frame[0].left.b, 255);
        assert_eq!(frame[3].left.r, 255);
    }

    #[test]
    fn test_victory_dim_below_bound() {
        let mut fade = VictoryFade::new();
        let colors = VictoryColors {
            first: Rgb::new(30, 60, 90),
            second: BLACK,
        };
        let mut frame = [MirroredPixel::default(); 2];
        fade.render(&mut frame, colors, at(0));
        // Amplitude 7 of 30, no white term
        assert_eq!(frame[0].left, Rgb::new(7, 14, 21));
        assert_eq!(frame[1].left, BLACK);
    }

    #[test]
    fn test_comet_down_sweep() {
        let mut comet = CometPattern::new(CometDirection::Down);
        let colors = CometColors::Single {
            foreground: Rgb::new(10, 0, 0),
            background: BLUE,
        };
        let mut frame = [MirroredPixel::default(); 10];
        comet.start(at(0));

        comet.render(&mut frame, colors, at(150));
        // Fading head, a still saturated index, then background
        assert_eq!(frame[0].left, Rgb::new(127, 0, 0));
        assert_eq!(frame[1].left, Rgb::new(255, 0, 0));
        assert_eq!(frame[2].left, BLUE);
        assert_eq!(frame[9].left, BLUE);
    }

    #[test]
    fn test_comet_up_starts_at_the_end() {
        let mut comet = CometPattern::new(CometDirection::Up);
        let colors = CometColors::Single {
            foreground: WHITE,
            background: BLUE,
        };
        let mut frame = [MirroredPixel::default(); 10];
        comet.start(at(0));

        comet.render(&mut frame, colors, at(0));
        assert_eq!(frame[9].left, WHITE);
        assert_eq!(frame[8].left, BLUE);
        assert_eq!(frame[0].left, BLUE);

        comet.render(&mut frame, colors, at(950));
        assert_eq!(frame[0].left, WHITE);
        assert_eq!(frame[9].left, BLUE);
    }

    #[test]
    fn test_comet_sweep_restarts() {
        let mut comet = CometPattern::new(CometDirection::Down);
        let colors = CometColors::Single {
            foreground: WHITE,
            background: BLUE,
        };
        let mut frame = [MirroredPixel::default(); 10];
        comet.start(at(0));

        comet.render(&mut frame, colors, at(1_150));
        assert!(frame.iter().all(|pixel| pixel.left == BLUE));

        // Sweep length is 12 intervals for 10 indices
        comet.render(&mut frame, colors, at(1_200));
        assert_eq!(frame[0].left, WHITE);
        assert_eq!(frame[1].left, BLUE);
    }

    #[test]
    fn test_split_comet_uses_half_colors() {
        let mut comet = CometPattern::new(CometDirection::Down);
        let colors = CometColors::Split {
            top: RED,
            bottom: BLUE,
        };
        let mut frame = [MirroredPixel::default(); 6];
        comet.start(at(0));

        comet.render(&mut frame, colors, at(0));
        assert_eq!(lefts(&frame), vec![BLUE, BLUE, BLUE, RED, RED, RED]);
    }

    #[test]
    fn test_split_comet_up_glows_in_half_colors() {
        let upper = Rgb { r: 2, g: 0, b: 0 };
        let lower = Rgb { r: 0, g: 0, b: 2 };
        let mut comet = CometPattern::new(CometDirection::Up);
        let colors = CometColors::Split {
            top: upper,
            bottom: lower,
        };
        let mut frame = [MirroredPixel::default(); 6];
        comet.start(at(0));

        // Steps 2 and 3 glow: indices 3 (upper half) and 2 (lower half)
        comet.render(&mut frame, colors, at(350));
        assert_eq!(frame[5].left, upper);
        assert_eq!(frame[4].left, upper);
        assert_eq!(frame[3].left, Rgb { r: 25, g: 0, b: 0 });
        assert_eq!(frame[2].left, Rgb { r: 0, g: 0, b: 76 });
        assert_eq!(frame[1].left, lower);
        assert_eq!(frame[0].left, lower);
        assert!(frame.iter().all(|pixel| pixel.left == pixel.right));
    }

    #[test]
    fn test_victory_white_term_latches_after_peak() {
        let first = Rgb { r: 0, g: 0, b: 204 };
        let second = Rgb { r: 255, g: 194, b: 10 };
        let mut fade = VictoryFade::new();
        let colors = VictoryColors { first, second };
        let mut frame = [MirroredPixel::default(); 4];

        for _ in 0..24 {
            fade.render(&mut frame, colors, at(0));
        }
        assert!(fade.is_swapped());
        assert_eq!(fade.amplitude(), 25);
        // Last amplitude above the bound was 31
        assert_eq!(fade.white(), 5);
        assert_eq!(frame[3].left, Rgb { r: 5, g: 5, b: 175 });
        assert_eq!(frame[0].left, Rgb { r: 217, g: 166, b: 13 });

        // Still latched on the next climb, below the bound
        for _ in 0..20 {
            fade.render(&mut frame, colors, at(0));
        }
        assert!(fade.amplitude() <= 30);
        assert_eq!(fade.white(), 5);
    }
}
