use playfield_engine::{DragScene, EightWayScene, FourWayScene, PlatformerScene, TurretScene};

#[test]
fn platformer_scene_settles_with_defaults() {
    let mut scene = PlatformerScene::new("").ok().expect("default config");
    scene.enable_perf(true);
    for frame in 0..=300 {
        scene.tick(frame as f64 * 16.0);
    }
    assert!(!scene.falling());
    assert_eq!(scene.y(), 510.0);
    assert!(scene.tick_ms() >= 0.0);
    assert_eq!(scene.ticks(), 301);

    let json = scene.obstacles_json().ok().expect("serializable");
    assert!(json.starts_with("[{\"x\":400.0,\"y\":350.0,\"w\":50.0,\"h\":50.0,\"color\":\"rgb("));
}

#[test]
fn platformer_scene_reads_camel_case_config() {
    let scene = PlatformerScene::new(r#"{"start": [120, 10], "playerSize": [20, 30]}"#)
        .ok()
        .expect("valid config");
    assert_eq!((scene.x(), scene.y()), (120.0, 10.0));
}

#[test]
fn eight_way_scene_handles_keys() {
    let mut scene = EightWayScene::new("{\"speed\": 100}").ok().expect("valid config");
    assert!(scene.key_down(39));
    assert!(!scene.key_down(81));
    for frame in 0..=5 {
        scene.tick(frame as f64 * 100.0);
    }
    assert_eq!(scene.x(), 100.0);
    assert!(!scene.key_down(32));
    assert!(scene.key_up(39));
}

#[test]
fn four_way_scene_exposes_sheet_frame() {
    let mut scene = FourWayScene::new("").ok().expect("default config");
    assert_eq!((scene.sheet_x(), scene.flipped()), (150, false));
    scene.key_down(39);
    scene.tick(0.0);
    assert_eq!((scene.sheet_x(), scene.flipped()), (0, true));
}

#[test]
fn drag_scene_highlights_on_hover() {
    let mut scene = DragScene::new("").ok().expect("default config");
    scene.mouse_move(210.0, 110.0);
    scene.tick(0.0);
    assert!(scene.highlighted());
    scene.mouse_down(0);
    scene.mouse_move(260.0, 110.0);
    scene.tick(16.0);
    assert_eq!(scene.x(), 250.0);
}

#[test]
fn turret_scene_ignores_right_click() {
    let mut scene = TurretScene::new("").ok().expect("default config");
    scene.mouse_move(700.0, 300.0);
    scene.mouse_down(2);
    scene.tick(0.0);
    assert_eq!(scene.projectile_count(), 0);
    scene.mouse_down(0);
    scene.tick(16.0);
    assert_eq!(scene.projectile_count(), 1);
    assert!(scene.projectiles_json().ok().expect("serializable").starts_with("[{\"x\":"));
}
