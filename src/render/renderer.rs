// file: src/render/renderer.rs
// description: applies a decoded status payload to a display surface
// reference: internal rendering pipeline

use crate::models::{StatusPayload, Step};
use crate::render::palette::border_triple;
use crate::render::surface::DisplaySurface;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOutcome {
    pub lanes_updated: usize,
    pub borders_applied: bool,
    pub step: Option<Step>,
}

/// Write one status snapshot onto `surface`.
///
/// Payload lanes beyond the surface's capacity are dropped, and lanes the
/// payload does not mention keep their previous text. Borders only change
/// when the step is recognized.
pub fn render<S>(payload: &StatusPayload, surface: &mut S) -> RenderOutcome
where
    S: DisplaySurface + ?Sized,
{
    surface.set_step_marker(&payload.current_step);

    let mut lanes_updated = 0;
    for (index, status) in payload.lanes.iter().enumerate() {
        let Some(lane) = surface.lane_mut(index) else {
            break;
        };
        lane.count = Some(status.count.to_string());
        lane.flow = Some(status.flow.to_string());
        lane.speed = Some(status.speed.to_string());
        lanes_updated += 1;
    }

    let borders = border_triple(&payload.current_step);
    if let Some(borders) = borders {
        for (index, border) in borders.into_iter().enumerate() {
            if let Some(lane) = surface.lane_mut(index) {
                lane.border = Some(border);
            }
        }
    } else {
        debug!(
            "Unrecognized step {:?}, leaving borders unchanged",
            payload.current_step
        );
    }

    surface.present();

    RenderOutcome {
        lanes_updated,
        borders_applied: borders.is_some(),
        step: Step::parse(&payload.current_step),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Border, LaneStatus, Signal};
    use crate::render::surface::LaneBoard;
    use pretty_assertions::assert_eq;

    fn text(board: &LaneBoard, index: usize) -> (Option<&str>, Option<&str>, Option<&str>) {
        let lane = board.lane(index).unwrap();
        (
            lane.count.as_deref(),
            lane.flow.as_deref(),
            lane.speed.as_deref(),
        )
    }

    #[test]
    fn test_end_to_end_step_two() {
        let payload = StatusPayload::from_json(
            r#"{"currentStep":"2","lanes":[
                {"count":5,"flow":1,"speed":2},
                {"count":9,"flow":0,"speed":1},
                {"count":0,"flow":0,"speed":0}]}"#,
        )
        .unwrap();
        let mut board = LaneBoard::default();

        let outcome = render(&payload, &mut board);

        assert_eq!(outcome.lanes_updated, 3);
        assert!(outcome.borders_applied);
        assert_eq!(outcome.step, Some(Step::BGreen));

        assert_eq!(text(&board, 0), (Some("5"), Some("1"), Some("2")));
        assert_eq!(text(&board, 1), (Some("9"), Some("0"), Some("1")));
        assert_eq!(text(&board, 2), (Some("0"), Some("0"), Some("0")));

        let borders: Vec<String> = board
            .lanes()
            .iter()
            .map(|l| l.border.unwrap().to_string())
            .collect();
        assert_eq!(
            borders,
            vec!["3px solid red", "3px solid green", "3px solid red"]
        );
        assert_eq!(board.step_marker(), Some("2"));
    }

    #[test]
    fn test_short_payload_keeps_remaining_lanes() {
        let mut board = LaneBoard::default();
        render(
            &StatusPayload::new(
                "0",
                vec![
                    LaneStatus::new(1, 1, 1),
                    LaneStatus::new(2, 2, 2),
                    LaneStatus::new(3, 3, 3),
                ],
            ),
            &mut board,
        );

        let outcome = render(
            &StatusPayload::new("1", vec![LaneStatus::new(7, "0.5", 40)]),
            &mut board,
        );

        assert_eq!(outcome.lanes_updated, 1);
        assert_eq!(text(&board, 0), (Some("7"), Some("0.5"), Some("40")));
        assert_eq!(text(&board, 1), (Some("2"), Some("2"), Some("2")));
        assert_eq!(text(&board, 2), (Some("3"), Some("3"), Some("3")));
    }

    #[test]
    fn test_extra_payload_lanes_ignored() {
        let mut board = LaneBoard::new(2);
        let lanes = (0..5).map(|i| LaneStatus::new(i, i, i)).collect();

        let outcome = render(&StatusPayload::new("4", lanes), &mut board);

        assert_eq!(outcome.lanes_updated, 2);
        assert_eq!(board.lane_count(), 2);
        assert_eq!(text(&board, 1), (Some("1"), Some("1"), Some("1")));
        // The third border has nowhere to go on a two-lane board.
        assert_eq!(
            board.lane(1).unwrap().border,
            Some(Border::solid(Signal::Red))
        );
    }

    #[test]
    fn test_unknown_step_preserves_borders() {
        let mut board = LaneBoard::default();
        render(&StatusPayload::new("4", vec![]), &mut board);
        let before: Vec<_> = board.lanes().iter().map(|l| l.border).collect();

        let outcome = render(
            &StatusPayload::new("9", vec![LaneStatus::new(1, 2, 3)]),
            &mut board,
        );

        assert!(!outcome.borders_applied);
        assert_eq!(outcome.step, None);
        let after: Vec<_> = board.lanes().iter().map(|l| l.border).collect();
        assert_eq!(before, after);
        assert_eq!(board.step_marker(), Some("9"));
        assert_eq!(text(&board, 0), (Some("1"), Some("2"), Some("3")));
    }

    #[test]
    fn test_unknown_step_on_fresh_board_leaves_no_border() {
        let mut board = LaneBoard::default();
        render(&StatusPayload::new("", vec![]), &mut board);
        assert!(board.lanes().iter().all(|l| l.border.is_none()));
    }

    #[test]
    fn test_render_through_trait_object() {
        let mut board = LaneBoard::default();
        let surface: &mut dyn DisplaySurface = &mut board;
        let outcome = render(&StatusPayload::new("3", vec![]), surface);
        assert!(outcome.borders_applied);
        assert_eq!(
            board.lane(2).unwrap().border,
            Some(Border::solid(Signal::Yellow))
        );
    }
}
