use network_delay::data_structures::HeapifyStrategy;
use network_delay::problem::{NetworkDelayProblem, Problem, Solution};
use network_delay::{DelayOutcome, Error};

#[test]
fn test_parse_and_solve_network_delay() {
    let problem = Problem::from_json(
        r#"{ "kind": "network_delay", "times": [[2,1,1],[2,3,1],[3,4,1]], "n": 4, "k": 2 }"#,
    )
    .unwrap();
    assert_eq!(
        problem,
        Problem::NetworkDelay(NetworkDelayProblem {
            times: vec![[2, 1, 1], [2, 3, 1], [3, 4, 1]],
            n: 4,
            k: 2,
            heapify: HeapifyStrategy::SiftUpPass,
        })
    );

    let solution = problem.solve().unwrap();
    assert_eq!(
        solution,
        Solution::NetworkDelay {
            answer: 2,
            outcome: DelayOutcome::AllReached { time: 2 },
        }
    );

    let json: serde_json::Value = serde_json::to_value(&solution).unwrap();
    assert_eq!(json["kind"], "network_delay");
    assert_eq!(json["answer"], 2);
    assert_eq!(json["outcome"]["outcome"], "all_reached");
}

#[test]
fn test_heapify_strategy_field() {
    let problem = Problem::from_json(
        r#"{ "kind": "network_delay", "times": [[1,2,1]], "n": 2, "k": 2, "heapify": "bottom_up" }"#,
    )
    .unwrap();
    match &problem {
        Problem::NetworkDelay(p) => assert_eq!(p.heapify, HeapifyStrategy::BottomUp),
        other => panic!("unexpected problem {:?}", other),
    }
    match problem.solve().unwrap() {
        Solution::NetworkDelay { answer, outcome } => {
            assert_eq!(answer, -1);
            assert_eq!(outcome, DelayOutcome::Unreachable { unreached: 1 });
        }
        other => panic!("unexpected solution {:?}", other),
    }
}

#[test]
fn test_parse_and_solve_closest_points() {
    let problem =
        Problem::from_json(r#"{ "kind": "closest_points", "points": [[1,3],[-2,2]], "k": 1 }"#).unwrap();
    assert_eq!(
        problem.solve().unwrap(),
        Solution::ClosestPoints {
            answer: vec![[-2, 2]]
        }
    );
}

#[test]
fn test_invalid_problems() {
    assert!(matches!(
        Problem::from_json(r#"{ "kind": "unknown" }"#),
        Err(Error::Json(_))
    ));

    for text in [
        r#"{ "kind": "network_delay", "times": [], "n": 0, "k": 1 }"#,
        r#"{ "kind": "network_delay", "times": [[1,2,1]], "n": 2, "k": 0 }"#,
        r#"{ "kind": "network_delay", "times": [[1,2,1]], "n": 2, "k": 3 }"#,
    ] {
        let problem = Problem::from_json(text).unwrap();
        assert!(matches!(problem.solve(), Err(Error::InvalidProblem(_))), "{}", text);
    }

    let problem =
        Problem::from_json(r#"{ "kind": "closest_points", "points": [[1,3]], "k": 4 }"#).unwrap();
    assert!(matches!(problem.solve(), Err(Error::InvalidK { k: 4, len: 1 })));
}
