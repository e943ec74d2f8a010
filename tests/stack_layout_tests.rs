//! Integration tests for the stacked and expanded layouts
//!
//! Cards are created through the public API and the resulting inline
//! `transform`/`opacity` of each element are compared with the expected
//! geometry.

use snackbars::{
    Element, EventKind, Geometry, Layout, Position, SnackOptions, Snackbar, Snackbars, Transform,
};
use std::time::Duration;
use tokio::task::LocalSet;

fn element(snack: &Snackbar) -> Element {
    snack.element().expect("live snackbar has an element")
}

fn transform(snack: &Snackbar) -> String {
    element(snack).style("transform").unwrap_or_default()
}

fn opacity(snack: &Snackbar) -> String {
    element(snack).style("opacity").unwrap_or_default()
}

#[test]
fn test_two_snackbars_at_left_oldest_first() {
    let snackbars = Snackbars::new();
    let options = || SnackOptions::new().position(Position::Left).timeout(0);
    let saved = snackbars.create_snackbar("Saved", options());
    let again = snackbars.create_snackbar("Saved again", options());

    let left = snackbars.instances(Position::Left);
    assert_eq!(left, vec![saved.clone(), again.clone()]);
    assert_eq!(left[0].message(), "Saved");
    assert_eq!(left[1].message(), "Saved again");

    assert_eq!(transform(&saved), "translate3d(0, -15px, -1px) scale(0.95)");
    assert_eq!(transform(&again), "translate3d(0, -0px, -0px) scale(1)");
    assert_eq!(opacity(&saved), "1");
    assert_eq!(opacity(&again), "1");

    // The older card sits higher and further back
    let geometry = Geometry::default();
    assert!(Transform::stacked(1, geometry).offset_y() > Transform::stacked(0, geometry).offset_y());
}

#[test]
fn test_stack_hides_cards_beyond_max_stack() {
    let snackbars = Snackbars::new();
    let snacks: Vec<Snackbar> = (0..5)
        .map(|i| snackbars.create_snackbar(&format!("message {i}"), SnackOptions::new()))
        .collect();

    let geometry = Geometry::default();
    for (index, snack) in snacks.iter().enumerate() {
        let depth = snacks.len() - 1 - index;
        assert_eq!(transform(snack), Transform::stacked(depth, geometry).to_css());
        let expected = if depth >= 3 { "0" } else { "1" };
        assert_eq!(opacity(snack), expected, "depth {depth}");
    }
    assert_eq!(snackbars.layout(Position::Center), Layout::Stacked);
}

#[test]
fn test_newest_max_stack_governs_visibility() {
    let snackbars = Snackbars::new();
    let older: Vec<Snackbar> = (0..3)
        .map(|_| snackbars.create_snackbar("old", SnackOptions::new().max_stack(3)))
        .collect();
    let newest = snackbars.create_snackbar("new", SnackOptions::new().max_stack(1));

    assert_eq!(opacity(&newest), "1");
    for snack in &older {
        assert_eq!(opacity(snack), "0");
    }
}

#[test]
fn test_positions_are_laid_out_independently() {
    let snackbars = Snackbars::new();
    let left = snackbars.create_snackbar("left", SnackOptions::new().position(Position::Left));
    let right = snackbars.create_snackbar("right", SnackOptions::new().position(Position::Right));
    let right_newer =
        snackbars.create_snackbar("right 2", SnackOptions::new().position(Position::Right));

    assert_eq!(transform(&left), "translate3d(0, -0px, -0px) scale(1)");
    assert_eq!(transform(&right), "translate3d(0, -15px, -1px) scale(0.95)");
    assert_eq!(transform(&right_newer), "translate3d(0, -0px, -0px) scale(1)");

    assert_eq!(snackbars.document().query_selector_all_class("snackbars").len(), 2);
    assert_eq!(left.wrapper().class_name(), "snackbars snackbars-left");
    assert_eq!(right.wrapper(), right_newer.wrapper());
}

#[tokio::test(start_paused = true)]
async fn test_expand_lists_cards_by_height_and_pauses_timers() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let snackbars = Snackbars::new();
            let snacks: Vec<Snackbar> = (0..4)
                .map(|_| snackbars.create_snackbar("x", SnackOptions::new().timeout(1000)))
                .collect();
            for snack in &snacks {
                element(snack).set_client_height(40.0);
                assert!(snack.has_timer());
            }

            let newest = snacks.last().unwrap();
            assert_eq!(element(newest).dispatch(EventKind::MouseEnter), 1);

            assert_eq!(snackbars.layout(Position::Center), Layout::Expanded);
            assert_eq!(transform(&snacks[0]), "translate3d(0, -120px, 0) scale(1)");
            assert_eq!(transform(&snacks[2]), "translate3d(0, -40px, 0) scale(1)");
            assert_eq!(transform(newest), "translate3d(0, -0px, 0) scale(1)");
            assert_eq!(opacity(&snacks[0]), "0");
            assert_eq!(opacity(&snacks[1]), "1");
            for snack in &snacks {
                assert!(!snack.has_timer());
            }

            // Paused well past the timeout
            tokio::time::sleep(Duration::from_millis(5000)).await;
            assert_eq!(snackbars.len(), 4);

            element(newest).dispatch(EventKind::MouseLeave);
            assert_eq!(snackbars.layout(Position::Center), Layout::Stacked);
            assert_eq!(transform(&snacks[0]), "translate3d(0, -45px, -3px) scale(0.85)");
            for snack in &snacks {
                assert!(snack.has_timer());
            }
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_hovering_hidden_card_does_not_expand() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let snackbars = Snackbars::new();
            let snacks: Vec<Snackbar> = (0..4)
                .map(|_| snackbars.create_snackbar("x", SnackOptions::new().timeout(1000)))
                .collect();
            let hidden = &snacks[0];
            assert_eq!(opacity(hidden), "0");
            let before: Vec<String> = snacks.iter().map(transform).collect();

            assert!(!hidden.expand());
            element(hidden).dispatch(EventKind::MouseEnter);

            assert!(snackbars.is_stacked(Position::Center));
            for snack in &snacks {
                assert!(snack.has_timer());
            }
            let after: Vec<String> = snacks.iter().map(transform).collect();
            assert_eq!(before, after);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_destroy_while_expanded_keeps_expanded_layout() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let snackbars = Snackbars::new();
            let snacks: Vec<Snackbar> = (0..3)
                .map(|_| snackbars.create_snackbar("x", SnackOptions::new()))
                .collect();
            for snack in &snacks {
                element(snack).set_client_height(50.0);
            }

            assert!(snacks[1].expand());
            snacks[2].destroy().await;

            assert!(!snackbars.is_stacked(Position::Center));
            assert_eq!(transform(&snacks[0]), "translate3d(0, -50px, 0) scale(1)");
            assert_eq!(transform(&snacks[1]), "translate3d(0, -0px, 0) scale(1)");
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_destroy_while_stacked_restacks() {
    let local = LocalSet::new();
    local
        .run_until(async {
            let snackbars = Snackbars::new();
            let snacks: Vec<Snackbar> = (0..4)
                .map(|_| snackbars.create_snackbar("x", SnackOptions::new()))
                .collect();
            assert_eq!(opacity(&snacks[0]), "0");

            snacks[3].destroy().await;

            assert!(snackbars.is_stacked(Position::Center));
            assert_eq!(opacity(&snacks[0]), "1");
            assert_eq!(transform(&snacks[0]), "translate3d(0, -30px, -2px) scale(0.9)");
            assert_eq!(transform(&snacks[2]), "translate3d(0, -0px, -0px) scale(1)");
        })
        .await;
}
