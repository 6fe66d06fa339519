use ptahhotep::templates::WindowTemplate;
use ptahhotep::window::{
    IconTag, Interaction, InteractionController, Point, Size, WindowId, WindowRegistry,
};

fn setup(position: Point, size: Size) -> (WindowRegistry<()>, InteractionController, WindowId) {
    let mut reg = WindowRegistry::new();
    let id = reg.add(
        &WindowTemplate {
            title: "w1".to_string(),
            icon: IconTag::Bot,
            default_size: size,
            factory: || (),
        },
        position,
    );
    (reg, InteractionController::new(), id)
}

#[test]
fn drag_applies_pointer_delta() {
    let (mut reg, mut ctl, w1) = setup(Point::new(50, 100), Size::new(400, 450));
    assert!(ctl.begin_drag(&mut reg, w1, Point::new(200, 200)));
    assert!(ctl.pointer_moved(&mut reg, Point::new(230, 250)));
    assert_eq!(reg.get(w1).unwrap().position(), Point::new(80, 150));
    assert!(ctl.release());
    assert!(ctl.is_idle());
}

#[test]
fn resize_clamps_to_minimum_width() {
    let (mut reg, mut ctl, w1) = setup(Point::new(0, 0), Size::new(400, 450));
    assert!(ctl.begin_resize(&mut reg, w1, Point::new(450, 550)));
    ctl.pointer_moved(&mut reg, Point::new(200, 560));
    assert_eq!(reg.get(w1).unwrap().size(), Size::new(300, 460));
}

#[test]
fn resize_during_drag_is_ignored() {
    let (mut reg, mut ctl, w1) = setup(Point::new(50, 100), Size::new(400, 450));
    assert!(ctl.begin_drag(&mut reg, w1, Point::new(200, 200)));
    assert!(!ctl.begin_resize(&mut reg, w1, Point::new(200, 200)));
    assert!(matches!(ctl.state(), Interaction::Dragging(_)));

    ctl.pointer_moved(&mut reg, Point::new(260, 300));
    let record = reg.get(w1).unwrap();
    assert_eq!(record.position(), Point::new(110, 200));
    assert_eq!(record.size(), Size::new(400, 450));

    ctl.release();
    assert!(ctl.begin_resize(&mut reg, w1, Point::new(0, 0)));
}

#[test]
fn interaction_start_activates_window() {
    let (mut reg, mut ctl, w1) = setup(Point::new(0, 0), Size::new(400, 450));
    let w2 = reg.add(
        &WindowTemplate {
            title: "w2".to_string(),
            icon: IconTag::Globe,
            default_size: Size::new(400, 450),
            factory: || (),
        },
        Point::new(10, 10),
    );
    assert_eq!(reg.active(), Some(w2));
    ctl.begin_resize(&mut reg, w1, Point::new(0, 0));
    assert_eq!(reg.active(), Some(w1));
}

#[test]
fn drag_to_negative_space_clamps() {
    let (mut reg, mut ctl, w1) = setup(Point::new(50, 100), Size::new(400, 450));
    ctl.begin_drag(&mut reg, w1, Point::new(200, 200));
    ctl.pointer_moved(&mut reg, Point::new(0, 0));
    assert_eq!(reg.get(w1).unwrap().position(), Point::new(0, 0));
    // Coming back from the clamp follows the pointer again.
    ctl.pointer_moved(&mut reg, Point::new(210, 220));
    assert_eq!(reg.get(w1).unwrap().position(), Point::new(60, 120));
}

#[test]
fn removing_target_mid_drag_is_safe() {
    let (mut reg, mut ctl, w1) = setup(Point::new(50, 100), Size::new(400, 450));
    ctl.begin_drag(&mut reg, w1, Point::new(0, 0));
    reg.remove(w1);
    // Late moves for a closed window do nothing.
    assert!(ctl.pointer_moved(&mut reg, Point::new(10, 10)));
    assert!(reg.is_empty());
    assert!(ctl.cancel_for(w1));
    assert!(ctl.is_idle());
    assert!(!ctl.pointer_moved(&mut reg, Point::new(20, 20)));
}
