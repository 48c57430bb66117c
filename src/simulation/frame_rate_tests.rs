use crate::assert_float_eq;
use crate::simulation::FrameRateCounter;

#[test]
fn test_rate_sampled_after_interval() {
    let mut counter = FrameRateCounter::new(0.2);
    for _ in 0..30 {
        counter.record_frame();
    }
    assert_eq!(counter.update(0.2), None);
    let rate = counter.update(0.5).unwrap();
    assert_float_eq(rate, 60.0, 1e-9, None);
    assert_float_eq(counter.frame_rate(), 60.0, 1e-9, None);
    assert_float_eq(counter.frame_time_ms().unwrap(), 1000.0 / 60.0, 1e-9, None);
}

#[test]
fn test_frames_reset_after_sample() {
    let mut counter = FrameRateCounter::new(0.2);
    counter.record_frame();
    counter.update(0.25);
    assert_eq!(counter.update(0.5), Some(0.0));
    assert_eq!(counter.frame_time_ms(), None);
}

#[test]
fn test_reset_restarts_window() {
    let mut counter = FrameRateCounter::new(0.2);
    counter.update(10.0);
    counter.reset(0.0);
    for _ in 0..5 {
        counter.record_frame();
    }
    assert_eq!(counter.update(0.1), None);
    assert_eq!(counter.update(0.25), Some(20.0));
}

#[test]
fn test_overlay_lines() {
    let mut counter = FrameRateCounter::new(0.2);
    let [rate, time] = counter.overlay_lines();
    assert_eq!(rate, "fr (f/s):      0");
    assert_eq!(time, "ft (ms/f):     -");

    for _ in 0..50 {
        counter.record_frame();
    }
    counter.update(0.5);
    let [rate, time] = counter.overlay_lines();
    assert_eq!(rate, "fr (f/s):    100");
    assert_eq!(time, "ft (ms/f):    10");
}
