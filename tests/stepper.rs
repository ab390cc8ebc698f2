mod tests {
    use core::cell::Cell;
    use core::convert::Infallible;

    use myrtio_light_patterns::{
        Direction, Duration, FrameBuffer, Instant, OutputDriver, PatternConfig, PatternId,
        PatternStepper, Rgb, StepOutcome,
    };
    use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const DELAY: Duration = Duration::from_millis(10);

    #[derive(Default)]
    struct Recorder {
        frames: usize,
    }

    impl OutputDriver for Recorder {
        type Error = Infallible;

        fn write(&mut self, _colors: &[Rgb]) -> Result<(), Self::Error> {
            self.frames += 1;
            Ok(())
        }
    }

    type Strip = FrameBuffer<Recorder, 8>;

    fn strip() -> Strip {
        FrameBuffer::new(Recorder::default())
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    /// Poll once, far enough after the previous frame to render
    fn tick<C: FnMut()>(
        stepper: &mut PatternStepper<Strip, ChaCha8Rng, C>,
        now: &mut u64,
    ) -> StepOutcome {
        *now += 11;
        stepper.update(Instant::from_millis(*now)).unwrap()
    }

    #[test]
    fn test_nothing_rendered_without_pattern() {
        let mut stepper = PatternStepper::new(strip(), rng());
        assert_eq!(stepper.active_pattern(), None);
        assert_eq!(
            stepper.update(Instant::from_millis(1_000)).unwrap(),
            StepOutcome::Idle
        );
        assert_eq!(stepper.strip().output().frames, 0);
    }

    #[test]
    fn test_selection_does_not_render() {
        let mut stepper = PatternStepper::new(strip(), rng());
        stepper.theater_chase(RED, BLUE, DELAY, Direction::Forward);

        assert_eq!(stepper.active_pattern(), Some(PatternId::TheaterChase));
        assert_eq!(stepper.current_step(), 0);
        assert_eq!(stepper.total_steps(), 8);
        assert_eq!(stepper.delay(), DELAY);
        assert_eq!(stepper.strip().output().frames, 0);
        assert!(stepper.strip().pixels().iter().all(|p| *p == Rgb::default()));
    }

    #[test]
    fn test_update_waits_for_delay() {
        let mut stepper = PatternStepper::new(strip(), rng());
        stepper.theater_chase(RED, BLUE, DELAY, Direction::Forward);

        let outcome = stepper.update(Instant::from_millis(5)).unwrap();
        assert_eq!(outcome, StepOutcome::Idle);
        let outcome = stepper.update(Instant::from_millis(10)).unwrap();
        assert_eq!(outcome, StepOutcome::Idle);
        let outcome = stepper.update(Instant::from_millis(11)).unwrap();
        assert_eq!(outcome, StepOutcome::Rendered);
        assert_eq!(stepper.current_step(), 1);

        let outcome = stepper.update(Instant::from_millis(15)).unwrap();
        assert_eq!(outcome, StepOutcome::Idle);
        let outcome = stepper.update(Instant::from_millis(22)).unwrap();
        assert_eq!(outcome, StepOutcome::Rendered);
        assert_eq!(stepper.current_step(), 2);
        assert_eq!(stepper.strip().output().frames, 2);
    }

    #[test]
    fn test_final_delay_pauses() {
        let mut stepper = PatternStepper::new(strip(), rng());
        stepper.sparkle(RED, DELAY, Direction::Forward);

        let outcome = stepper.update(Instant::from_millis(11)).unwrap();
        assert_eq!(outcome, StepOutcome::Rendered);

        stepper.set_final_delay(Duration::from_millis(100));
        let outcome = stepper.update(Instant::from_millis(50)).unwrap();
        assert_eq!(outcome, StepOutcome::Paused);
        let outcome = stepper.update(Instant::from_millis(110)).unwrap();
        assert_eq!(outcome, StepOutcome::Paused);
        assert_eq!(stepper.final_delay(), Duration::from_millis(100));

        let outcome = stepper.update(Instant::from_millis(111)).unwrap();
        assert_eq!(outcome, StepOutcome::Rendered);
        assert_eq!(stepper.final_delay(), Duration::from_millis(0));
        assert_eq!(stepper.strip().output().frames, 2);
    }

    #[test]
    fn test_selection_clears_final_delay() {
        let mut stepper = PatternStepper::new(strip(), rng());
        stepper.sparkle(RED, DELAY, Direction::Forward);
        stepper.set_final_delay(Duration::from_millis(500));

        stepper.scanner(BLUE, DELAY, Direction::Forward);
        assert_eq!(stepper.final_delay(), Duration::from_millis(0));
        let outcome = stepper.update(Instant::from_millis(11)).unwrap();
        assert_eq!(outcome, StepOutcome::Rendered);
    }

    #[test]
    fn test_every_pattern_loops_once() {
        let expected_frames = [
            (PatternId::RainbowCycle, 255),
            (PatternId::RainbowBloom, 16),
            (PatternId::ColorWipe, 16),
            (PatternId::Scanner, 8),
            (PatternId::Fade, 64),
            (PatternId::RgbFade, 64),
            (PatternId::Sparkle, 8),
            (PatternId::SparkleRandom, 8),
            (PatternId::TheaterChase, 8),
            (PatternId::PoliceSiren, 6),
            (PatternId::ColorStripes, 3),
        ];

        for (id, frames) in expected_frames {
            let loops = Cell::new(0u32);
            let mut stepper =
                PatternStepper::with_on_complete(strip(), rng(), || loops.set(loops.get() + 1));
            stepper.select(&PatternConfig {
                id,
                colors: [RED, BLUE, RED],
                delay: DELAY,
                ..PatternConfig::default()
            });
            assert_eq!(stepper.active_pattern(), Some(id));

            let mut now = 0;
            for _ in 1..frames {
                assert_eq!(tick(&mut stepper, &mut now), StepOutcome::Rendered, "{id:?}");
            }
            assert_eq!(loops.get(), 0, "{id:?}");
            assert_eq!(tick(&mut stepper, &mut now), StepOutcome::Completed, "{id:?}");
            assert_eq!(loops.get(), 1, "{id:?}");
            assert_eq!(stepper.current_step(), 0, "{id:?}");

            for _ in 0..frames {
                tick(&mut stepper, &mut now);
            }
            assert_eq!(loops.get(), 2, "{id:?}");
            assert_eq!(stepper.current_step(), 0, "{id:?}");
        }
    }

    #[test]
    fn test_reverse_loop_returns_to_last_step() {
        let loops = Cell::new(0u32);
        let mut stepper =
            PatternStepper::with_on_complete(strip(), rng(), || loops.set(loops.get() + 1));
        stepper.theater_chase(RED, BLUE, DELAY, Direction::Forward);
        stepper.reverse();
        assert_eq!(stepper.direction(), Direction::Reverse);
        assert_eq!(stepper.current_step(), 7);

        let mut now = 0;
        for expected_step in (0..7).rev() {
            assert_eq!(tick(&mut stepper, &mut now), StepOutcome::Rendered);
            assert_eq!(stepper.current_step(), expected_step);
        }
        assert_eq!(tick(&mut stepper, &mut now), StepOutcome::Completed);
        assert_eq!(stepper.current_step(), 7);
        assert_eq!(loops.get(), 1);
    }

    #[test]
    fn test_reverse_selection_wraps_after_first_frame() {
        let mut stepper = PatternStepper::new(strip(), rng());
        stepper.color_stripes(RED, BLUE, RED, DELAY, Direction::Reverse);
        assert_eq!(stepper.current_step(), 0);

        let mut now = 0;
        assert_eq!(tick(&mut stepper, &mut now), StepOutcome::Completed);
        assert_eq!(stepper.current_step(), 2);
        assert_eq!(tick(&mut stepper, &mut now), StepOutcome::Rendered);
        assert_eq!(stepper.current_step(), 1);
    }

    #[test]
    fn test_reverse_bloom_uses_increment() {
        let mut stepper = PatternStepper::new(strip(), rng());
        stepper.rainbow_bloom(DELAY, Direction::Forward);
        stepper.reverse();
        assert_eq!(stepper.current_step(), 254);

        let mut now = 0;
        for _ in 0..15 {
            assert_eq!(tick(&mut stepper, &mut now), StepOutcome::Rendered);
        }
        assert_eq!(stepper.current_step(), 14);
        assert_eq!(tick(&mut stepper, &mut now), StepOutcome::Completed);
        assert_eq!(stepper.current_step(), 254);
    }

    #[test]
    fn test_reverse_toggles_back_to_forward() {
        let mut stepper = PatternStepper::new(strip(), rng());
        stepper.scanner(RED, DELAY, Direction::Forward);
        let mut now = 0;
        tick(&mut stepper, &mut now);
        tick(&mut stepper, &mut now);

        stepper.reverse();
        assert_eq!(stepper.direction(), Direction::Reverse);
        assert_eq!(stepper.current_step(), 7);

        stepper.reverse();
        assert_eq!(stepper.direction(), Direction::Forward);
        assert_eq!(stepper.current_step(), 0);
    }

    #[test]
    fn test_stop() {
        let mut stepper = PatternStepper::new(strip(), rng());
        stepper.sparkle(RED, DELAY, Direction::Forward);
        let mut now = 0;
        assert_eq!(tick(&mut stepper, &mut now), StepOutcome::Rendered);

        stepper.stop();
        assert_eq!(stepper.active_pattern(), None);
        assert_eq!(tick(&mut stepper, &mut now), StepOutcome::Idle);
        assert_eq!(stepper.strip().output().frames, 1);
        assert_eq!(stepper.strip().pixels()[0], RED);
    }

    #[test]
    fn test_fill() {
        let mut stepper = PatternStepper::new(strip(), rng());
        stepper.fill(BLUE).unwrap();
        assert!(stepper.strip().pixels().iter().all(|p| *p == BLUE));
        assert_eq!(stepper.strip().output().frames, 1);
    }

    #[test]
    fn test_empty_strip_keeps_steps_positive() {
        let mut stepper = PatternStepper::new(
            FrameBuffer::<Recorder, 8>::with_len(Recorder::default(), 0),
            rng(),
        );
        stepper.theater_chase(RED, BLUE, DELAY, Direction::Forward);
        assert_eq!(stepper.total_steps(), 1);
        let outcome = stepper.update(Instant::from_millis(11)).unwrap();
        assert_eq!(outcome, StepOutcome::Completed);
        assert_eq!(stepper.current_step(), 0);
    }
}
