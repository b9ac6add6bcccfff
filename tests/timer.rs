mod tests {
    use embassy_time::{Duration, Instant};
    use status_light_composer::timer::Timer;

    #[test]
    fn test_never_started_timer_has_not_elapsed() {
        let timer = Timer::new();
        assert_eq!(timer.get(Instant::from_millis(5_000)), Duration::from_millis(0));
        assert!(!timer.has_elapsed(Duration::from_millis(0), Instant::from_millis(5_000)));
        assert!(!timer.is_running());
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut timer = Timer::new();
        timer.start(Instant::from_millis(100));
        timer.start(Instant::from_millis(400));
        assert_eq!(timer.get(Instant::from_millis(600)), Duration::from_millis(500));
    }

    #[test]
    fn test_stop_freezes_and_start_accumulates() {
        let mut timer = Timer::new();
        timer.start(Instant::from_millis(0));
        timer.stop(Instant::from_millis(300));
        assert!(!timer.is_running());
        assert_eq!(timer.get(Instant::from_millis(1_000)), Duration::from_millis(300));

        timer.start(Instant::from_millis(1_000));
        assert_eq!(timer.get(Instant::from_millis(1_200)), Duration::from_millis(500));
    }

    #[test]
    fn test_reset_keeps_running_flag() {
        let mut timer = Timer::new();
        timer.start(Instant::from_millis(0));
        timer.reset(Instant::from_millis(700));
        assert!(timer.is_running());
        assert_eq!(timer.get(Instant::from_millis(900)), Duration::from_millis(200));

        timer.stop(Instant::from_millis(900));
        timer.reset(Instant::from_millis(1_000));
        assert!(!timer.is_running());
        assert_eq!(timer.get(Instant::from_millis(2_000)), Duration::from_millis(0));
    }

    #[test]
    fn test_stopped_timer_keeps_reporting_elapsed() {
        let mut timer = Timer::new();
        timer.start(Instant::from_millis(0));
        timer.stop(Instant::from_millis(3_000));
        timer.reset(Instant::from_millis(3_000));
        // Zero elapsed, but the timer was started once
        assert!(timer.has_elapsed(Duration::from_millis(0), Instant::from_millis(4_000)));
        assert!(!timer.has_elapsed(Duration::from_millis(1), Instant::from_millis(4_000)));
    }

    #[test]
    fn test_restart() {
        let mut timer = Timer::new();
        timer.restart(Instant::from_millis(50));
        assert!(timer.is_running());
        assert!(timer.has_elapsed(Duration::from_millis(100), Instant::from_millis(150)));
        assert!(!timer.has_elapsed(Duration::from_millis(100), Instant::from_millis(149)));
    }

    #[test]
    fn test_seconds() {
        let mut timer = Timer::new();
        timer.start(Instant::from_millis(0));
        let seconds = timer.seconds(Instant::from_millis(1_500));
        assert!((seconds - 1.5).abs() < 1e-6);
    }
}
