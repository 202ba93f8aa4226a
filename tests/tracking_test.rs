use centroidtrack_rs::{CentroidTracker, Centroid, TrackerConfig};
use nalgebra::Point2;

fn pt(x: f32, y: f32) -> Centroid {
    Point2::new(x, y)
}

#[test]
fn test_basic_tracking() {
    // Default threshold is 35 pixels.
    let mut tracker = CentroidTracker::with_default_config();

    // Frame 1: one detection, first id is 0.
    let tracks1 = tracker.update(&[pt(100.0, 100.0)]).unwrap();
    assert_eq!(tracks1, vec![(0, pt(100.0, 100.0))]);

    // Frame 2: same object moved ~11.2 pixels, well under threshold.
    let tracks2 = tracker.update(&[pt(110.0, 105.0)]).unwrap();
    assert_eq!(tracks2, vec![(0, pt(110.0, 105.0))]);

    // Frame 3: first object stationary, a second object far away.
    let tracks3 = tracker.update(&[pt(110.0, 105.0), pt(500.0, 500.0)]).unwrap();
    assert_eq!(tracks3, vec![(0, pt(110.0, 105.0)), (1, pt(500.0, 500.0))]);

    // Frame 4: nothing detected. Both tracks persist unchanged.
    let tracks4 = tracker.update(&[]).unwrap();
    assert_eq!(tracks4, tracks3);
}

#[test]
fn test_deterministic_across_instances() {
    let frames: Vec<Vec<Centroid>> = vec![
        vec![pt(10.0, 10.0), pt(200.0, 50.0)],
        vec![pt(15.0, 12.0), pt(205.0, 55.0), pt(400.0, 400.0)],
        vec![],
        vec![pt(20.0, 15.0), pt(410.0, 395.0)],
    ];

    let mut a = CentroidTracker::new(TrackerConfig::default()).unwrap();
    let mut b = CentroidTracker::new(TrackerConfig::default()).unwrap();

    for frame in &frames {
        let ra = a.update(frame).unwrap();
        let rb = b.update(frame).unwrap();
        assert_eq!(ra, rb);
    }
}

#[test]
fn test_independent_trackers_do_not_interfere() {
    // State is per instance: two sessions both start their ids at 0.
    let mut a = CentroidTracker::with_default_config();
    let mut b = CentroidTracker::with_default_config();

    a.update(&[pt(10.0, 10.0), pt(300.0, 300.0)]).unwrap();
    let tracks = b.update(&[pt(50.0, 50.0)]).unwrap();
    assert_eq!(tracks, vec![(0, pt(50.0, 50.0))]);
}
