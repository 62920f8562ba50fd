//! Track/sub-step navigation, on its own and through the app.

mod common;

use common::{app_at, press};
use crossterm::event::KeyCode;
use tensorwalk::content::StepKind;
use tensorwalk::nav::SubNavigation;

#[test]
fn test_select_track_resets_sub_step() {
    let mut nav = SubNavigation::new(vec![4, 3, 5, 2]).unwrap();
    nav.select_sub_step(3);
    assert_eq!(nav.position(), (0, 3));
    nav.select_track(1);
    assert_eq!(nav.position(), (1, 0));
}

#[test]
fn test_reset_holds_from_every_position() {
    let counts = vec![4, 3, 5, 2];
    for track in 0..counts.len() {
        for sub_step in 0..counts[track] {
            for target in 0..counts.len() {
                let mut nav = SubNavigation::new(counts.clone()).unwrap();
                nav.select_track(track);
                nav.select_sub_step(sub_step);
                nav.select_track(target);
                assert_eq!(nav.inner(), 0);
                assert_eq!(nav.outer(), target);
            }
        }
    }
}

#[test]
fn test_out_of_range_selections_are_ignored() {
    let mut nav = SubNavigation::new(vec![2, 2]).unwrap();
    nav.select_sub_step(1);
    nav.select_track(9);
    assert_eq!(nav.position(), (0, 1));
    nav.select_sub_step(2);
    assert_eq!(nav.position(), (0, 1));
}

#[test]
fn test_empty_catalogs_are_rejected() {
    assert!(SubNavigation::new(Vec::new()).is_err());
    assert!(SubNavigation::new(vec![3, 0]).is_err());
}

#[test]
fn test_technique_track_switch_through_keys() {
    let mut app = app_at("conversion");
    assert_eq!(app.current_kind(), StepKind::Conversion);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.panels.conversion.nav().position(), (0, 2));

    press(&mut app, KeyCode::Char(']'));
    assert_eq!(app.panels.conversion.nav().position(), (1, 0));

    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.panels.conversion.nav().position(), (3, 0));
}

#[test]
fn test_panel_position_survives_leaving_the_step() {
    let mut app = app_at("realworld");
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Down);
    let position = app.panels.realworld.nav().position();

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.current_kind(), StepKind::RealWorld);
    assert_eq!(app.panels.realworld.nav().position(), position);
}

#[test]
fn test_yolo_rows_and_columns() {
    let mut app = app_at("cv_yolo");
    press(&mut app, KeyCode::Char('4'));
    for _ in 0..4 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.panels.yolo.nav().position(), (3, 4));
    assert_eq!(app.panels.yolo.current_track().row, 3);
    assert_eq!(*app.panels.yolo.current_sub_step(), 4);
}

#[test]
fn test_sub_step_keys_do_nothing_on_other_steps() {
    let mut app = app_at("welcome");
    let before = app.panels.ranks.nav().position();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(']'));
    assert_eq!(app.panels.ranks.nav().position(), before);
}
