use egui_emoticon::{Emoticon, Expression};
use egui_kittest::Harness;
use egui_kittest::kittest::Queryable as _;

#[test]
fn clicking_the_face_toggles_the_expression() {
    let mut harness = Harness::new_ui_state(
        |ui, expression| {
            ui.add(Emoticon::new(expression).size(100.0));
        },
        Expression::Happy,
    );

    harness.get_by_label("happy face").click();
    harness.run();
    assert_eq!(*harness.state(), Expression::Sad);

    harness.get_by_label("sad face").click();
    harness.run();
    assert_eq!(*harness.state(), Expression::Happy);
}

#[test]
fn buttons_set_the_expression_explicitly() {
    let mut harness = Harness::new_ui_state(
        |ui, expression: &mut Expression| {
            ui.horizontal(|ui| {
                if ui.button("Happy").clicked() {
                    *expression = Expression::Happy;
                }
                if ui.button("Sad").clicked() {
                    *expression = Expression::Sad;
                }
            });
            ui.add(Emoticon::new(expression).size(100.0));
        },
        Expression::Happy,
    );

    harness.get_by_label("Sad").click();
    harness.run();
    assert_eq!(*harness.state(), Expression::Sad);

    // The buttons set, they don't toggle.
    harness.get_by_label("Sad").click();
    harness.run();
    assert_eq!(*harness.state(), Expression::Sad);

    harness.get_by_label("Happy").click();
    harness.run();
    assert_eq!(*harness.state(), Expression::Happy);
}
