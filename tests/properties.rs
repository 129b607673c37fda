use playfield_engine::core::{Axis, Rect, Rng, Vec2};
use playfield_engine::domain::Obstacle;
use playfield_engine::input::{Controls, Key};
use playfield_engine::systems::collision::BoxCollider;
use playfield_engine::systems::movement::{direction_vector, move_axis, AxisMove};
use playfield_engine::systems::platformer::PlatformerBody;
use playfield_engine::systems::viewport::Viewport;

fn random_rect(rng: &mut Rng) -> Rect {
    let mut coord = || (rng.next_u32() % 200) as f32 - 50.0;
    let (x, y, w, h) = (coord(), coord(), coord().abs() + 1.0, coord().abs() + 1.0);
    Rect::new(x, y, w, h)
}

#[test]
fn collide_rect_is_symmetric() {
    let mut rng = Rng::new(99);
    for _ in 0..2000 {
        let a = random_rect(&mut rng);
        let b = random_rect(&mut rng);
        assert_eq!(a.collide_rect(&b), b.collide_rect(&a), "{a:?} vs {b:?}");
    }
}

#[test]
fn near_corner_inclusive_far_corner_exclusive() {
    let mut rng = Rng::new(3);
    for _ in 0..500 {
        let a = random_rect(&mut rng);
        assert!(a.collide_point(a.x, a.y));
        assert!(!a.collide_point(a.x + a.w, a.y));
        assert!(!a.collide_point(a.x, a.y + a.h));
    }
}

#[test]
fn sweep_lands_flush_instead_of_tunneling() {
    let obstacles = [Obstacle::new(Rect::new(20.0, 0.0, 50.0, 50.0), 0)];
    let mut mover = Rect::new(0.0, 0.0, 30.0, 30.0);
    let result = move_axis(&mut mover, Axis::X, 40.0, &BoxCollider::new(&obstacles), 1024);
    assert_eq!(result, AxisMove::Resolved);
    assert_eq!(mover.right(), 20.0);
    assert!(!mover.collide_rect(&obstacles[0].rect));
}

#[test]
fn diagonal_speed_matches_orthogonal() {
    let mut controls = Controls::new();
    controls.set(Key::Up, true);
    controls.set(Key::Right, true);
    let step = direction_vector(&controls, true) * 100.0;
    assert!((step.x - 70.71).abs() < 0.01);
    assert!((step.y + 70.71).abs() < 0.01);
    assert!((step.length() - 100.0).abs() < 1e-3);
}

#[test]
fn jump_needs_landing_and_release() {
    const DT: f32 = 1.0 / 60.0;
    let obstacles = [Obstacle::new(Rect::new(0.0, 100.0, 1000.0, 50.0), 0)];
    let collider = BoxCollider::new(&obstacles);
    let controls = Controls::new();
    let mut body = PlatformerBody::new(Rect::new(100.0, 60.0, 40.0, 40.0), 240.0, 600.0, -400.0, 1024);
    for _ in 0..5 {
        body.update(&controls, &collider, DT);
    }

    body.jump.press();
    body.update(&controls, &collider, DT);
    assert!(body.is_falling());

    // Airborne press is swallowed, and the key stays held through landing.
    body.jump.press();
    body.update(&controls, &collider, DT);
    for _ in 0..200 {
        body.update(&controls, &collider, DT);
    }
    assert!(!body.is_falling());

    body.jump.press();
    body.update(&controls, &collider, DT);
    assert!(!body.is_falling());

    body.jump.release();
    body.jump.press();
    body.update(&controls, &collider, DT);
    assert!(body.is_falling());
}

#[test]
fn viewport_stays_inside_bitmap() {
    let bitmap = Rect::new(0.0, 0.0, 1000.0, 1000.0);
    let mut viewport = Viewport::new(800.0, 600.0);

    viewport.follow(Vec2::new(10.0, 20.0), &bitmap);
    assert_eq!((viewport.rect.x, viewport.rect.y), (0.0, 0.0));

    for focus in [Vec2::new(990.0, 995.0), Vec2::new(500.0, 0.0), Vec2::new(-40.0, 1200.0)] {
        viewport.follow(focus, &bitmap);
        assert!(viewport.rect.left() >= 0.0 && viewport.rect.top() >= 0.0);
        assert!(viewport.rect.right() <= 1000.0 && viewport.rect.bottom() <= 1000.0);
    }
}
