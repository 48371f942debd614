// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two windows, one event stream.
//!
//! Demonstrate focus arbitration across overlapping windows, console
//! trapping, and the camera integrating held keys — all against the
//! in-memory demo desktop.
//!
//! Run:
//! - `cargo run -p overlook_demos --example multi_window`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use overlook_demos::{DemoFactory, Desktop};
use overlook_router::{InputEvent, Keycode, PointerButton};
use overlook_view3d::CellPoint;
use overlook_windows::{AppControl, WindowManager};

const DT: f32 = 1.0 / 60.0;

fn main() {
    let desktop = Rc::new(RefCell::new(Desktop::default()));
    let mut manager = WindowManager::new(Box::new(DemoFactory::new(desktop.clone())));

    let main = manager.create_window();
    let second = manager.create_window();
    println!("windows: main={main:?} second={second:?}");

    // Pointer in the overlap: the later-created window is on top and wins.
    desktop.borrow_mut().pointer = Point::new(600.0, 100.0);
    manager.tick(DT);
    println!("pointer at (600, 100) -> focused {:?}", manager.focused());

    // Hold W for a second of frames; only the focused camera pans.
    manager.route_input(&InputEvent::key_down(Keycode::W));
    for _ in 0..60 {
        manager.tick(DT);
    }
    manager.route_input(&InputEvent::key_up(Keycode::W));
    for id in [main, second] {
        let camera = manager.window(id).expect("window").camera();
        println!("camera {id:?}: focus {}", camera.state().focus());
    }

    // Wheel zoom on the focused window.
    for _ in 0..5 {
        manager.route_input(&InputEvent::button_down(PointerButton::WheelUp));
    }
    let camera = manager.window(second).expect("window").camera();
    println!(
        "after 5 wheel steps: zoom_k {:.2}, visible area {:.1}",
        camera.state().zoom_k(),
        camera.visible_area_length(),
    );

    // The console toggle traps further input in the focused window.
    manager.route_input(&InputEvent::key_down(Keycode::Grave));
    manager.route_input(&InputEvent::button_down(PointerButton::WheelUp));
    let window = manager.window(second).expect("window");
    println!(
        "console visible: {}, zoom_k still {:.2}",
        window.console_visible(),
        window.camera().state().zoom_k(),
    );
    manager.route_input(&InputEvent::key_down(Keycode::Grave));

    // Pointer off every window: focus is retained, not reset.
    desktop.borrow_mut().pointer = Point::new(5000.0, 5000.0);
    manager.tick(DT);
    println!("pointer off-desktop -> focused {:?}", manager.focused());

    // Terrain collaborators read the hover ray each frame.
    let ray = manager
        .window(second)
        .expect("window")
        .camera()
        .hover_ray();
    if let Some(hit) = ray.hit_y_plane(0.0) {
        let cell = CellPoint::from_world(hit);
        println!("hover ray hits ground at {hit}, cell {cell:?}");
    }

    // Closing the secondary window keeps the app alive; closing the main
    // window asks the host to quit.
    assert_eq!(manager.close_window(second), AppControl::Continue);
    println!("closed secondary -> focused {:?}", manager.focused());
    assert_eq!(manager.close_window(main), AppControl::Quit);
    println!("closed main -> quit requested");
}
